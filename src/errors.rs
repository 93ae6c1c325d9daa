/// Errors raised by the greedy construction
///
/// Every failure is fatal to the call that raised it: no partially built
/// set is ever returned next to an error.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SidonError {
    /// The dimension must be at least 1.
    #[error("invalid dimension {n}: the dimension must be a positive integer")]
    InvalidDimension { n: usize },

    /// A point does not have exactly n coordinates.
    #[error("invalid point: expected {expected} coordinates, got {actual}")]
    WrongPointLength { expected: usize, actual: usize },

    /// A coordinate is not one of the symbols 0, 1, 2.
    #[error("invalid point: symbol {symbol} at position {position} is not in {{0, 1, 2}}")]
    SymbolOutOfRange { position: usize, symbol: u8 },

    /// An index does not address a point of the 3^n grid.
    #[error("invalid index {index}: the grid of dimension {n} has {size} points")]
    IndexOutOfRange { index: usize, n: usize, size: usize },

    /// The dimension is above the configured maximum.
    #[error("dimension {n} exceeds the configured maximum dimension {max_dimension}")]
    DimensionTooLarge { n: usize, max_dimension: usize },

    /// 3^n does not fit in the address space.
    #[error("3^{n} candidates do not fit in usize")]
    CandidateCountOverflow { n: usize },

    /// The candidate space and priority table would not fit in the memory budget.
    #[error("dimension {n} needs about {required_bytes} bytes, above the budget of {budget_bytes} bytes")]
    MemoryBudgetExceeded { n: usize, required_bytes: usize, budget_bytes: usize },
}

/// Coarse classification of a SidonError.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    ResourceExhausted,
}

impl SidonError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SidonError::InvalidDimension { .. }
            | SidonError::WrongPointLength { .. }
            | SidonError::SymbolOutOfRange { .. }
            | SidonError::IndexOutOfRange { .. } => ErrorKind::InvalidArgument,
            SidonError::DimensionTooLarge { .. }
            | SidonError::CandidateCountOverflow { .. }
            | SidonError::MemoryBudgetExceeded { .. } => ErrorKind::ResourceExhausted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(SidonError::InvalidDimension { n: 0 }.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            SidonError::SymbolOutOfRange { position: 1, symbol: 3 }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            SidonError::DimensionTooLarge { n: 40, max_dimension: 16 }.kind(),
            ErrorKind::ResourceExhausted
        );
        assert_eq!(
            SidonError::CandidateCountOverflow { n: 80 }.kind(),
            ErrorKind::ResourceExhausted
        );
    }

    #[test]
    fn messages_name_the_offending_value() {
        let e = SidonError::SymbolOutOfRange { position: 2, symbol: 7 };
        let msg = e.to_string();
        assert!(msg.contains("symbol 7"));
        assert!(msg.contains("position 2"));
        assert!(msg.contains("{0, 1, 2}"));
    }
}
