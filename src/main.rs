/// Build greedy Sidon sets in {0,1,2}^n from the command line
///
/// CLI Usage:
///   cargo run --release                              # dimension 4
///   cargo run --release -- --dim 8 --check           # one dimension, verified
///   cargo run --release -- --min-dim 1 --max-dim 10  # sweep, score table
///   cargo run --release -- --dim 6 -o run.json       # JSON report

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use separator::Separatable;

use sidon::config::{DEFAULT_MAX_DIMENSION, SolverConfig};
use sidon::report::RunReport;
use sidon::scorer::{ConstantScorer, Scorer};
use sidon::selector::solve_with;
use sidon::utils::*;
use sidon::verify::verify_solution;

/// CLI arguments structure
#[derive(Parser, Debug)]
#[command(name = "sidon")]
#[command(about = "Greedy Sidon sets in {0,1,2}^n (no equal pair sums, no affine coincidence)", long_about = None)]
struct Args {
    /// Dimension of the grid (ignored when --min-dim/--max-dim are given)
    #[arg(short, long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=40))]
    dim: u8,

    /// First dimension of a sweep
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=40), requires = "max_dim")]
    min_dim: Option<u8>,

    /// Last dimension of a sweep
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=40), requires = "min_dim")]
    max_dim: Option<u8>,

    /// Verify every result independently (sums, lines, affine planes, maximality)
    #[arg(long)]
    check: bool,

    /// Print the accepted points
    #[arg(long)]
    print_points: bool,

    /// Write a JSON report to this file
    #[arg(short, long)]
    output: Option<String>,

    /// Highest dimension allowed
    #[arg(long, default_value_t = DEFAULT_MAX_DIMENSION)]
    max_dim_limit: usize,

    /// Memory budget for the candidate space and priority table, in MiB
    #[arg(long)]
    memory_budget_mb: Option<usize>,

    /// Directory in which to write a timestamped log file
    #[arg(long)]
    log_dir: Option<String>,

    /// Print every pick
    #[arg(long)]
    debug: bool,

    /// Only print the results
    #[arg(short, long)]
    quiet: bool,
}

fn point_string(point: &[u8]) -> String {
    point.iter().map(|s| char::from(b'0' + s)).collect()
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.debug {
        debug_print_on();
    }
    if args.quiet {
        test_print_off();
    }
    if let Some(ref dir) = args.log_dir {
        match init_log_file(Path::new(dir)) {
            Ok(path) => test_print(&format!("Log file created: {}", path.display())),
            Err(e) => warn_print(&format!("could not create a log file in {}: {}", dir, e)),
        }
    }

    let mut config = SolverConfig::default().with_max_dimension(args.max_dim_limit);
    if let Some(mb) = args.memory_budget_mb {
        config = config.with_memory_budget(mb.saturating_mul(1024 * 1024));
    }

    let dims: Vec<usize> = match (args.min_dim, args.max_dim) {
        (Some(lo), Some(hi)) if lo <= hi => (lo as usize..=hi as usize).collect(),
        (Some(lo), Some(hi)) => {
            eprintln!("error: --min-dim {} is above --max-dim {}", lo, hi);
            return ExitCode::FAILURE;
        }
        _ => vec![args.dim as usize],
    };

    let scorer = ConstantScorer::default();
    banner("Sidon sets in {0,1,2}^n - greedy construction");
    test_print(&format!("   - scorer            : {}", scorer.name()));
    test_print(&format!("   - dimensions        : {:?}", dims));
    test_print(&format!("   - max dimension     : {}", config.max_dimension));
    test_print(&format!("   - memory budget     : {} bytes",
        config.memory_budget_bytes.separated_string()));

    let start_time = std::time::Instant::now();
    let mut report = RunReport::new(scorer.name(), config);
    let mut failed = false;

    for &n in &dims {
        let solution = match solve_with(n, &scorer, &config) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: dimension {}: {}", n, e);
                failed = true;
                break;
            }
        };
        test_print(&format!("   ... dimension {:>2}: {:>6} points out of {:>15} candidates",
            n, solution.size(), solution.stats.candidates.separated_string()));

        if args.print_points {
            for (k, p) in solution.points.iter().enumerate() {
                progress_print(&format!("{:>6} {:>12} {}", k, solution.indexes[k], point_string(p)));
            }
        }

        if args.check {
            match verify_solution(&solution) {
                Ok(()) => test_print(&format!("   ... dimension {:>2}: check passed", n)),
                Err(v) => {
                    eprintln!("error: dimension {}: check failed: {}", n, v);
                    failed = true;
                }
            }
        }
        report.push(solution);
    }

    progress_print(&report.to_txt());
    test_print(&format!("   ... done in {}", format_elapsed(start_time.elapsed().as_secs_f64())));

    if let Some(ref output) = args.output {
        match report.save_json(output) {
            Ok(()) => test_print(&format!("   ... report written to {}", output)),
            Err(e) => {
                eprintln!("error: could not write {}: {}", output, e);
                failed = true;
            }
        }
    }

    close_log_file();
    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_print_as_digit_strings() {
        assert_eq!(point_string(&[0, 1, 2, 2]), "0122");
        assert_eq!(point_string(&[]), "");
    }

    #[test]
    fn sweep_arguments_parse() {
        let args = Args::try_parse_from(["sidon", "--min-dim", "2", "--max-dim", "5", "--check"])
            .expect("valid arguments");
        assert_eq!(args.min_dim, Some(2));
        assert_eq!(args.max_dim, Some(5));
        assert!(args.check);
        assert_eq!(args.dim, 4);
    }

    #[test]
    fn dimension_zero_is_rejected_by_the_parser() {
        assert!(Args::try_parse_from(["sidon", "--dim", "0"]).is_err());
        assert!(Args::try_parse_from(["sidon", "--min-dim", "2"]).is_err());
    }
}
