//! Greedy construction of large Sidon sets in {0,1,2}^n
//!
//! Points are added one at a time, best score first, and every candidate
//! that would create equal pair sums (or four points on an affine plane,
//! modulo 3) with the accepted points is discarded for good.
//!
//! Entry points: 'solve', 'evaluate' and their '_with' variants taking a
//! custom Scorer and resource limits.

pub mod blocking;
pub mod candidate_space;
pub mod config;
pub mod errors;
pub mod indexer;
pub mod priority_table;
pub mod report;
pub mod scorer;
pub mod selector;
pub mod utils;
pub mod verify;

pub use config::SolverConfig;
pub use errors::{ErrorKind, SidonError};
pub use indexer::{decode, encode, Indexer};
pub use scorer::{ConstantScorer, NamedScorer, Scorer};
pub use selector::{evaluate, evaluate_with, solve, solve_with, Solution, SolveStats};
