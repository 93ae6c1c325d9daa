/// Greedy construction of a Sidon set in {0,1,2}^n
///
/// Implementation note:
///     - score all 3^n candidates once with the scorer
///     - while some candidate is not blocked:
///         - take the best unblocked candidate (highest score, lowest index)
///         - compute the candidates it rules out together with the points
///           already accepted (see blocking.rs)
///         - block them, block the candidate itself, and accept it
///     - the accepted points, in order of acceptance, are the result
/// Every iteration blocks at least the chosen candidate, so the loop ends
/// after at most 3^n iterations. No randomness is involved: the same
/// (n, scorer) always gives the same set in the same order.

use std::time::Instant;

use separator::Separatable;
use serde::{Deserialize, Serialize};

use crate::blocking::compute_blocking;
use crate::candidate_space::CandidateSpace;
use crate::config::SolverConfig;
use crate::errors::SidonError;
use crate::priority_table::PriorityTable;
use crate::scorer::{ConstantScorer, Scorer};
use crate::utils::*;

/// Counters and timings of one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolveStats {
    pub n: usize,
    pub candidates: usize,
    pub iterations: usize,
    pub blocked_by_lines: usize,   // newly blocked by the three-point rule
    pub blocked_by_affine: usize,  // newly blocked by the four-point rule
    pub redundant_blocks: usize,   // blocking hits on already blocked indexes
    pub non_finite_scores: usize,  // candidates discarded for a NaN/infinite score
    pub scoring_time: f64,
    pub selection_time: f64,
    pub blocking_time: f64,
}

/// Result of a run: the accepted points in selection order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub n: usize,
    pub scorer: String,
    pub points: Vec<Vec<u8>>,
    pub indexes: Vec<usize>,
    pub stats: SolveStats,
}

impl Solution {
    pub fn size(&self) -> usize {
        self.points.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorState {
    Running,
    Done,
}

/// The selection loop, one step at a time.
pub struct GreedySelector<'a> {
    space: &'a CandidateSpace,
    table: PriorityTable,
    accepted: Vec<usize>,
    stats: SolveStats,
}

impl<'a> GreedySelector<'a> {
    pub fn new<S: Scorer + ?Sized>(space: &'a CandidateSpace, scorer: &S) -> Self {
        let start = Instant::now();
        let table = PriorityTable::from_scorer(space, scorer);
        let stats = SolveStats {
            n: space.dimension(),
            candidates: space.len(),
            non_finite_scores: table.non_finite_count(),
            scoring_time: start.elapsed().as_secs_f64(),
            ..SolveStats::default()
        };
        if stats.non_finite_scores > 0 {
            warn_print(&format!("scorer '{}' returned {} non-finite priorities in dimension {}: \
                these candidates are blocked", scorer.name(),
                stats.non_finite_scores.separated_string(), stats.n));
        }
        Self { space, table, accepted: Vec::new(), stats }
    }

    pub fn state(&self) -> SelectorState {
        if self.table.is_done() {
            SelectorState::Done
        } else {
            SelectorState::Running
        }
    }

    pub fn table(&self) -> &PriorityTable {
        &self.table
    }

    /// Indexes accepted so far, in selection order.
    pub fn accepted(&self) -> &[usize] {
        &self.accepted
    }

    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    /// Run one iteration. Returns the accepted index, or None when done.
    pub fn step(&mut self) -> Option<usize> {
        let select_start = Instant::now();
        let chosen = self.table.best()?;
        self.stats.selection_time += select_start.elapsed().as_secs_f64();

        let block_start = Instant::now();
        let blocking = compute_blocking(self.space, &self.accepted, chosen);
        self.table.block(blocking.own);
        let by_lines = self.table.block_all(blocking.lines.iter().copied());
        let by_affine = self.table.block_all(blocking.affine.iter().copied());
        self.stats.blocking_time += block_start.elapsed().as_secs_f64();

        self.stats.iterations += 1;
        self.stats.blocked_by_lines += by_lines;
        self.stats.blocked_by_affine += by_affine;
        self.stats.redundant_blocks += blocking.count() - 1 - by_lines - by_affine;
        self.accepted.push(chosen);

        if debug_enabled() {
            debug_print(&format!("   ... pick {:>4}: index {:>10} {:?} blocks +{:>6} (lines) \
                +{:>6} (affine), {:>12} left", self.accepted.len(), chosen,
                self.space.point(chosen), by_lines, by_affine,
                self.table.remaining().separated_string()));
        }
        Some(chosen)
    }

    /// Run until every candidate is blocked.
    pub fn run(mut self) -> (Vec<usize>, SolveStats) {
        while self.step().is_some() {}
        (self.accepted, self.stats)
    }
}

/// Build the greedy set of dimension `n`, with the constant scorer and
/// default limits. Returns the accepted points in selection order.
pub fn solve(n: usize) -> Result<Vec<Vec<u8>>, SidonError> {
    solve_with(n, &ConstantScorer::default(), &SolverConfig::default()).map(|s| s.points)
}

/// Build the greedy set of dimension `n` ranked by `scorer`.
pub fn solve_with<S: Scorer + ?Sized>(n: usize, scorer: &S, config: &SolverConfig)
    -> Result<Solution, SidonError> {
    let space = CandidateSpace::enumerate(n, config)?;
    debug_print(&format!("solve_with: {} candidates in dimension {}, scorer '{}'",
        space.len().separated_string(), n, scorer.name()));

    let (indexes, stats) = GreedySelector::new(&space, scorer).run();
    let points = indexes.iter().map(|&i| space.point(i).to_vec()).collect();

    debug_print(&format!("solve_with: accepted {} points in {} iterations",
        indexes.len(), stats.iterations));
    Ok(Solution { n, scorer: scorer.name().to_string(), points, indexes, stats })
}

/// Size of the set built by `solve(n)`.
pub fn evaluate(n: usize) -> Result<usize, SidonError> {
    solve(n).map(|points| points.len())
}

/// Size of the set built by `solve_with(n, scorer, config)`.
pub fn evaluate_with<S: Scorer + ?Sized>(n: usize, scorer: &S, config: &SolverConfig)
    -> Result<usize, SidonError> {
    solve_with(n, scorer, config).map(|s| s.size())
}
