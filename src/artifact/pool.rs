use tracing::{debug, warn};

use crate::batch::CandidatePool;

use super::error::ArtifactError;
use super::model::{EmbeddingFile, QueryFile};

impl CandidatePool {
    /// Builds the pool for `group` from a query file and its embedding file.
    ///
    /// Texts and embeddings must line up one-to-one and share the reference dimension.
    pub fn from_artifacts(
        queries: &QueryFile,
        embeddings: &EmbeddingFile,
        group: &str,
    ) -> Result<Self, ArtifactError> {
        let texts = queries.group(group)?;
        let vectors = embeddings.group(group)?;

        if embeddings.original_query_embedding.is_empty() {
            return Err(ArtifactError::MissingField {
                field: crate::constants::ORIGINAL_EMBEDDING_FIELD.to_string(),
            });
        }

        if let Some(original) = &queries.original_query
            && original != &embeddings.original_query
        {
            warn!(
                query_file = %original,
                embedding_file = %embeddings.original_query,
                "Original query differs between artifacts; using the embedding file's"
            );
        }

        debug!(
            group,
            candidates = texts.len(),
            dim = embeddings.original_query_embedding.len(),
            "Loaded candidate pool"
        );

        Ok(CandidatePool::new(
            embeddings.original_query.clone(),
            embeddings.original_query_embedding.clone(),
            texts.to_vec(),
            vectors.to_vec(),
        )?)
    }
}
