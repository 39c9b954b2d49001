//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `PRISM_*` environment variables
//! (the embedding API key is read from `JINA_API_KEY`).

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{DEFAULT_ALPHA, DEFAULT_CANDIDATE_GROUP, parse_group_key};
use crate::provider::embedding::{DEFAULT_EMBEDDING_MODEL, DEFAULT_EMBEDDING_URL};
use crate::provider::generation::DEFAULT_GENERATION_MODEL;

/// Default query artifact read by `select`.
pub const DEFAULT_QUERIES_PATH: &str = "output-prompt-v1.txt.json";
/// Default embedding artifact read by `select`.
pub const DEFAULT_EMBEDDINGS_PATH: &str = "output-prompt-v1.txt.embeddings.json";
/// Default selection artifact written by `select`.
pub const DEFAULT_OUTPUT_PATH: &str = "output-prompt-v1.txt.submodular.embeddings.json";

/// Runtime settings loaded from environment variables.
///
/// Use [`Config::from_env`] to read overrides on top of defaults.
#[derive(Clone)]
pub struct Config {
    /// Relevance floor weight. Default: `0.3`.
    pub alpha: f32,

    /// Group key holding the candidate pool. Default: `20_queries`.
    pub candidate_group: String,

    pub queries_path: PathBuf,
    pub embeddings_path: PathBuf,
    pub output_path: PathBuf,

    /// Wall-clock limit per budget run. Default: none.
    pub deadline: Option<Duration>,

    pub embedding_url: String,
    pub embedding_model: String,

    /// Only the `embed` subcommand needs this.
    pub embedding_api_key: Option<String>,

    pub generation_model: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("alpha", &self.alpha)
            .field("candidate_group", &self.candidate_group)
            .field("queries_path", &self.queries_path)
            .field("embeddings_path", &self.embeddings_path)
            .field("output_path", &self.output_path)
            .field("deadline", &self.deadline)
            .field("embedding_url", &self.embedding_url)
            .field("embedding_model", &self.embedding_model)
            .field(
                "embedding_api_key",
                &self.embedding_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("generation_model", &self.generation_model)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            candidate_group: DEFAULT_CANDIDATE_GROUP.to_string(),
            queries_path: PathBuf::from(DEFAULT_QUERIES_PATH),
            embeddings_path: PathBuf::from(DEFAULT_EMBEDDINGS_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            deadline: None,
            embedding_url: DEFAULT_EMBEDDING_URL.to_string(),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            embedding_api_key: None,
            generation_model: DEFAULT_GENERATION_MODEL.to_string(),
        }
    }
}

impl Config {
    const ENV_ALPHA: &'static str = "PRISM_ALPHA";
    const ENV_CANDIDATE_GROUP: &'static str = "PRISM_CANDIDATE_GROUP";
    const ENV_QUERIES_PATH: &'static str = "PRISM_QUERIES_PATH";
    const ENV_EMBEDDINGS_PATH: &'static str = "PRISM_EMBEDDINGS_PATH";
    const ENV_OUTPUT_PATH: &'static str = "PRISM_OUTPUT_PATH";
    const ENV_DEADLINE_MS: &'static str = "PRISM_DEADLINE_MS";
    const ENV_EMBEDDING_URL: &'static str = "PRISM_EMBEDDING_URL";
    const ENV_EMBEDDING_MODEL: &'static str = "PRISM_EMBEDDING_MODEL";
    const ENV_EMBEDDING_API_KEY: &'static str = "JINA_API_KEY";
    const ENV_GENERATION_MODEL: &'static str = "PRISM_GENERATION_MODEL";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let alpha = Self::parse_alpha_from_env(defaults.alpha)?;
        let candidate_group =
            Self::parse_string_from_env(Self::ENV_CANDIDATE_GROUP, defaults.candidate_group);
        let queries_path = Self::parse_path_from_env(Self::ENV_QUERIES_PATH, defaults.queries_path);
        let embeddings_path =
            Self::parse_path_from_env(Self::ENV_EMBEDDINGS_PATH, defaults.embeddings_path);
        let output_path = Self::parse_path_from_env(Self::ENV_OUTPUT_PATH, defaults.output_path);
        let deadline = Self::parse_deadline_from_env()?;
        let embedding_url = Self::parse_string_from_env(Self::ENV_EMBEDDING_URL, defaults.embedding_url);
        let embedding_model =
            Self::parse_string_from_env(Self::ENV_EMBEDDING_MODEL, defaults.embedding_model);
        let embedding_api_key = Self::parse_optional_string_from_env(Self::ENV_EMBEDDING_API_KEY);
        let generation_model =
            Self::parse_string_from_env(Self::ENV_GENERATION_MODEL, defaults.generation_model);

        Ok(Self {
            alpha,
            candidate_group,
            queries_path,
            embeddings_path,
            output_path,
            deadline,
            embedding_url,
            embedding_model,
            embedding_api_key,
            generation_model,
        })
    }

    /// Validates invariants and path shapes (does not create anything).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(ConfigError::InvalidAlpha { value: self.alpha });
        }

        if parse_group_key(&self.candidate_group).is_none() {
            return Err(ConfigError::InvalidCandidateGroup {
                value: self.candidate_group.clone(),
            });
        }

        for path in [&self.queries_path, &self.embeddings_path, &self.output_path] {
            if path.exists() && !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        if let Some(parent) = self.output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            if !parent.exists() {
                return Err(ConfigError::PathNotFound {
                    path: parent.to_path_buf(),
                });
            }
            if !parent.is_dir() {
                return Err(ConfigError::NotADirectory {
                    path: parent.to_path_buf(),
                });
            }
        }

        Ok(())
    }

    /// Returns the embedding API key or [`ConfigError::MissingEnvVar`].
    pub fn require_embedding_api_key(&self) -> Result<&str, ConfigError> {
        self.embedding_api_key
            .as_deref()
            .ok_or(ConfigError::MissingEnvVar {
                name: Self::ENV_EMBEDDING_API_KEY,
            })
    }

    fn parse_alpha_from_env(default: f32) -> Result<f32, ConfigError> {
        match env::var(Self::ENV_ALPHA) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::AlphaParseError {
                    value: value.clone(),
                    source: e,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_deadline_from_env() -> Result<Option<Duration>, ConfigError> {
        match env::var(Self::ENV_DEADLINE_MS) {
            Ok(value) if value.trim().is_empty() => Ok(None),
            Ok(value) => {
                let ms: u64 =
                    value
                        .trim()
                        .parse()
                        .map_err(|e| ConfigError::DeadlineParseError {
                            value: value.clone(),
                            source: e,
                        })?;
                Ok(Some(Duration::from_millis(ms)))
            }
            Err(_) => Ok(None),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}
