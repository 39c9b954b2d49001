use std::path::PathBuf;

use thiserror::Error;

use crate::batch::BatchError;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("missing field '{field}'")]
    MissingField { field: String },

    #[error("group '{group}' not found (available: {available})")]
    MissingGroup { group: String, available: String },

    #[error("invalid artifact: {reason}")]
    InvalidShape { reason: String },

    #[error(transparent)]
    Pool(#[from] BatchError),
}
