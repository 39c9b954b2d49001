//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Alpha string could not be parsed as a float.
    #[error("failed to parse alpha '{value}': {source}")]
    AlphaParseError {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Alpha is negative, NaN or infinite.
    #[error("invalid alpha {value}: must be finite and non-negative")]
    InvalidAlpha { value: f32 },

    /// Deadline string could not be parsed as whole milliseconds.
    #[error("failed to parse deadline '{value}' (milliseconds): {source}")]
    DeadlineParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Candidate group is not of the form `<n>_queries`.
    #[error("invalid candidate group '{value}': expected '<n>_queries'")]
    InvalidCandidateGroup { value: String },

    /// A required environment variable was not set.
    #[error("missing required environment variable: {name}")]
    MissingEnvVar { name: &'static str },

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a file (when a file was expected).
    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },

    /// Path exists but is not a directory (when a directory was expected).
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}
