use crate::vector::validate_dimensions;

use super::error::BatchError;

/// In-memory candidate pool for a batch: texts, index-aligned embeddings and the
/// original query they were generated from.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidatePool {
    original_query: String,
    reference: Vec<f32>,
    texts: Vec<String>,
    embeddings: Vec<Vec<f32>>,
}

impl CandidatePool {
    /// Validates alignment and dimensions, then takes ownership of the data.
    pub fn new(
        original_query: impl Into<String>,
        reference: Vec<f32>,
        texts: Vec<String>,
        embeddings: Vec<Vec<f32>>,
    ) -> Result<Self, BatchError> {
        if texts.len() != embeddings.len() {
            return Err(BatchError::InvalidPool {
                reason: format!(
                    "{} candidate texts but {} embeddings",
                    texts.len(),
                    embeddings.len()
                ),
            });
        }

        validate_dimensions(&reference, &embeddings).map_err(|e| BatchError::InvalidPool {
            reason: e.to_string(),
        })?;

        Ok(Self {
            original_query: original_query.into(),
            reference,
            texts,
            embeddings,
        })
    }

    pub fn original_query(&self) -> &str {
        &self.original_query
    }

    pub fn reference(&self) -> &[f32] {
        &self.reference
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn embeddings(&self) -> &[Vec<f32>] {
        &self.embeddings
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Embedding dimension shared by every vector in the pool.
    pub fn dimension(&self) -> usize {
        self.reference.len()
    }
}
