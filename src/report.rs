/// Run reports: the text table printed at the end of a run, and the JSON
/// file written with --output
///
/// The JSON file holds, for each dimension, the accepted points and the run
/// statistics. It is written to a temp file first, fsynced, then renamed
/// into place, so that a reader never sees a half-written report.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use separator::Separatable;
use serde::{Deserialize, Serialize};

use crate::config::SolverConfig;
use crate::selector::Solution;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub generated_at: String,
    pub scorer: String,
    pub config: SolverConfig,
    pub solutions: Vec<Solution>,
}

impl RunReport {
    pub fn new(scorer: &str, config: SolverConfig) -> Self {
        Self {
            generated_at: chrono::Local::now().to_rfc3339(),
            scorer: scorer.to_string(),
            config,
            solutions: Vec::new(),
        }
    }

    pub fn push(&mut self, solution: Solution) {
        self.solutions.push(solution);
    }

    /// (dimension, size) of every run, in run order.
    pub fn scores(&self) -> Vec<(usize, usize)> {
        self.solutions.iter().map(|s| (s.n, s.size())).collect()
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let text = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        write_text_atomic(path.as_ref(), &text)
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        serde_json::from_reader(file)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// One line per dimension: size, iterations, blocking counts and time.
    pub fn to_txt(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("scorer: {}\n", self.scorer));
        out.push_str(&format!("{:>4} {:>6} {:>15} {:>15} {:>15} {:>12}\n",
            "n", "size", "candidates", "by lines", "by affine", "seconds"));
        for s in &self.solutions {
            let st = &s.stats;
            let secs = st.scoring_time + st.selection_time + st.blocking_time;
            out.push_str(&format!("{:>4} {:>6} {:>15} {:>15} {:>15} {:>12.3}\n",
                s.n, s.size(),
                st.candidates.separated_string(),
                st.blocked_by_lines.separated_string(),
                st.blocked_by_affine.separated_string(),
                secs));
        }
        out
    }
}

/// Atomically write text to `path` by writing a temp file, fsyncing, then renaming into place.
pub fn write_text_atomic(path: &Path, text: &str) -> io::Result<()> {
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    let mut f = File::create(&tmp)?;
    f.write_all(text.as_bytes())?;
    f.sync_all()?;
    drop(f);
    if path.exists() {
        let _ = std::fs::remove_file(path);
    }
    std::fs::rename(&tmp, path)?;
    Ok(())
}
