use thiserror::Error;

use crate::vector::DimensionError;

#[derive(Debug, Error)]
pub enum CoverageError {
    #[error("invalid embeddings: {0}")]
    Dimension(#[from] DimensionError),

    #[error("invalid alpha {alpha}: must be finite and non-negative")]
    InvalidAlpha { alpha: f32 },
}
