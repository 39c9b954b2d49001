use thiserror::Error;

use crate::vector::DimensionError;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode provider response: {reason}")]
    Decode { reason: String },

    #[error("expected {expected} results, got {actual}")]
    CountMismatch { expected: usize, actual: usize },

    #[error("query generation failed: {reason}")]
    Generation { reason: String },

    #[error("query file has no original query")]
    MissingOriginalQuery,

    #[error("inconsistent embeddings: {0}")]
    Dimension(#[from] DimensionError),
}
