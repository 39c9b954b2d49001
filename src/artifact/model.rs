use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::batch::BatchResult;
use crate::constants::{ORIGINAL_QUERY_FIELD, group_key, parse_group_key};

use super::error::ArtifactError;
use super::io::read_json;

/// Query variants grouped by key, plus the query they were generated from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_query: Option<String>,
    #[serde(flatten)]
    pub groups: BTreeMap<String, Vec<String>>,
}

impl QueryFile {
    /// Single-group file as produced by the generator.
    pub fn from_queries(original_query: impl Into<String>, queries: Vec<String>) -> Self {
        let mut groups = BTreeMap::new();
        groups.insert(group_key(queries.len()), queries);
        Self {
            original_query: Some(original_query.into()),
            groups,
        }
    }

    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        Self::from_value(read_json(path)?)
    }

    /// Accepts either an object of string-array groups or a bare string array.
    ///
    /// A bare array becomes the single group `"<len>_queries"`. Object members that are
    /// neither `original_query` nor arrays are skipped.
    pub fn from_value(value: Value) -> Result<Self, ArtifactError> {
        match value {
            Value::Array(items) => {
                let queries = strings_from(items, "<root>")?;
                let mut groups = BTreeMap::new();
                groups.insert(group_key(queries.len()), queries);
                Ok(Self {
                    original_query: None,
                    groups,
                })
            }
            Value::Object(map) => {
                let mut file = Self::default();
                for (key, value) in map {
                    match value {
                        Value::String(text) if key == ORIGINAL_QUERY_FIELD => {
                            file.original_query = Some(text);
                        }
                        Value::Null if key == ORIGINAL_QUERY_FIELD => {}
                        Value::Array(items) => {
                            let queries = strings_from(items, &key)?;
                            file.groups.insert(key, queries);
                        }
                        _ if key == ORIGINAL_QUERY_FIELD => {
                            return Err(ArtifactError::InvalidShape {
                                reason: format!("'{}' must be a string", ORIGINAL_QUERY_FIELD),
                            });
                        }
                        _ => warn!(key = %key, "Skipping non-array member of query file"),
                    }
                }
                Ok(file)
            }
            _ => Err(ArtifactError::InvalidShape {
                reason: "query file must be a JSON object or array".to_string(),
            }),
        }
    }

    pub fn group(&self, key: &str) -> Result<&[String], ArtifactError> {
        self.groups
            .get(key)
            .map(Vec::as_slice)
            .ok_or_else(|| missing_group(key, self.groups.keys()))
    }
}

/// Embeddings for the original query and for each query group.
///
/// Also the shape of the selection output, where each group is `"<k>_queries"` for a
/// budget `k`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingFile {
    pub original_query: String,
    pub original_query_embedding: Vec<f32>,
    #[serde(flatten)]
    pub groups: BTreeMap<String, Vec<Vec<f32>>>,
}

/// Selection output; see [`EmbeddingFile`].
pub type SelectionFile = EmbeddingFile;

impl EmbeddingFile {
    pub fn new(original_query: impl Into<String>, original_query_embedding: Vec<f32>) -> Self {
        Self {
            original_query: original_query.into(),
            original_query_embedding,
            groups: BTreeMap::new(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        read_json(path)
    }

    pub fn group(&self, key: &str) -> Result<&[Vec<f32>], ArtifactError> {
        self.groups
            .get(key)
            .map(Vec::as_slice)
            .ok_or_else(|| missing_group(key, self.groups.keys()))
    }

    /// `"<n>_queries"` groups ordered by `n`; other keys are ignored.
    pub fn sized_groups(&self) -> Vec<(usize, &[Vec<f32>])> {
        let mut sized: Vec<(usize, &[Vec<f32>])> = self
            .groups
            .iter()
            .filter_map(|(key, group)| parse_group_key(key).map(|n| (n, group.as_slice())))
            .collect();
        sized.sort_by_key(|(n, _)| *n);
        sized
    }
}

impl From<&BatchResult> for EmbeddingFile {
    fn from(result: &BatchResult) -> Self {
        let mut file = Self::new(
            result.original_query.clone(),
            result.original_embedding.clone(),
        );
        for selection in result.iter() {
            file.groups.insert(
                group_key(selection.k),
                selection
                    .queries
                    .iter()
                    .map(|q| q.embedding.clone())
                    .collect(),
            );
        }
        file
    }
}

fn strings_from(items: Vec<Value>, key: &str) -> Result<Vec<String>, ArtifactError> {
    items
        .into_iter()
        .map(|item| match item {
            Value::String(text) => Ok(text),
            other => Err(ArtifactError::InvalidShape {
                reason: format!("group '{}' contains a non-string value: {}", key, other),
            }),
        })
        .collect()
}

fn missing_group<'a>(key: &str, available: impl Iterator<Item = &'a String>) -> ArtifactError {
    let available: Vec<&str> = available.map(String::as_str).collect();
    ArtifactError::MissingGroup {
        group: key.to_string(),
        available: if available.is_empty() {
            "none".to_string()
        } else {
            available.join(", ")
        },
    }
}
