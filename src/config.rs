/// Resource limits for a run
///
/// The candidate space holds 3^n points of n symbols each, and the priority
/// table holds one score, one blocked flag and one rank slot per point: the
/// memory needed grows as 3^n and decides how far the method can go. The
/// limits below are checked before anything is allocated.

use serde::{Deserialize, Serialize};

use crate::errors::SidonError;

/// Default highest dimension accepted (3^16 = 43.046.721 candidates).
pub const DEFAULT_MAX_DIMENSION: usize = 16;

/// Default memory budget for the candidate space and priority table: 2 GiB.
pub const DEFAULT_MEMORY_BUDGET: usize = 2 * 1024 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    pub max_dimension: usize,
    pub memory_budget_bytes: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
            memory_budget_bytes: DEFAULT_MEMORY_BUDGET,
        }
    }
}

impl SolverConfig {
    pub fn with_max_dimension(mut self, max_dimension: usize) -> Self {
        self.max_dimension = max_dimension;
        self
    }

    pub fn with_memory_budget(mut self, bytes: usize) -> Self {
        self.memory_budget_bytes = bytes;
        self
    }

    /// Check that a run in dimension `n` is allowed and fits the budget.
    /// Returns the number of candidates (3^n) on success.
    pub fn check_feasible(&self, n: usize) -> Result<usize, SidonError> {
        if n == 0 {
            return Err(SidonError::InvalidDimension { n });
        }
        if n > self.max_dimension {
            return Err(SidonError::DimensionTooLarge { n, max_dimension: self.max_dimension });
        }
        let count = candidate_count(n)?;
        let required_bytes = estimated_bytes(n, count)
            .ok_or(SidonError::CandidateCountOverflow { n })?;
        if required_bytes > self.memory_budget_bytes {
            return Err(SidonError::MemoryBudgetExceeded {
                n,
                required_bytes,
                budget_bytes: self.memory_budget_bytes,
            });
        }
        Ok(count)
    }
}

/// 3^n, or an error when it overflows usize.
pub fn candidate_count(n: usize) -> Result<usize, SidonError> {
    u32::try_from(n)
        .ok()
        .and_then(|e| 3usize.checked_pow(e))
        .ok_or(SidonError::CandidateCountOverflow { n })
}

/// Bytes needed per run: n symbols per point, plus score (f64), blocked flag
/// (bool) and rank slot (usize) per point.
pub fn estimated_bytes(n: usize, count: usize) -> Option<usize> {
    let per_point = n
        .checked_add(std::mem::size_of::<f64>())?
        .checked_add(std::mem::size_of::<bool>())?
        .checked_add(std::mem::size_of::<usize>())?;
    count.checked_mul(per_point)
}
