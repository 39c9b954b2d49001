use thiserror::Error;

use crate::coverage::CoverageError;
use crate::selector::SelectionError;

/// Rejected budget argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    #[error("budget is empty")]
    Empty,

    #[error("invalid budget '{value}': expected a positive integer or a range like \"1-20\"")]
    InvalidNumber { value: String },

    #[error("invalid budget '{value}': must be at least 1")]
    NonPositive { value: String },

    #[error("invalid budget range {start}-{end}: end must not be below start")]
    InvertedRange { start: usize, end: usize },
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("invalid candidate pool: {reason}")]
    InvalidPool { reason: String },

    #[error("budget {requested} exceeds candidate pool of {available}")]
    PoolTooSmall { requested: usize, available: usize },

    #[error(transparent)]
    Coverage(#[from] CoverageError),

    #[error("selection for k={k} failed: {source}")]
    Selection {
        k: usize,
        #[source]
        source: SelectionError,
    },
}
