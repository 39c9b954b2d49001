use tracing::info;

use crate::artifact::{EmbeddingFile, QueryFile};
use crate::vector::validate_dimensions;

use super::embedding::EmbeddingProvider;
use super::error::ProviderError;

/// Embeds the original query and every group of `file`, keeping group keys.
///
/// One provider call for the original query, then one per group. All vectors must share
/// the original query's dimension.
pub async fn embed_query_file<P: EmbeddingProvider>(
    provider: &P,
    file: &QueryFile,
) -> Result<EmbeddingFile, ProviderError> {
    let original = file
        .original_query
        .as_ref()
        .ok_or(ProviderError::MissingOriginalQuery)?;

    let mut reference = provider.embed(std::slice::from_ref(original)).await?;
    if reference.len() != 1 {
        return Err(ProviderError::CountMismatch {
            expected: 1,
            actual: reference.len(),
        });
    }
    let reference = reference.remove(0);

    let mut output = EmbeddingFile::new(original.clone(), reference);

    for (key, queries) in &file.groups {
        let embeddings = provider.embed(queries).await?;
        if embeddings.len() != queries.len() {
            return Err(ProviderError::CountMismatch {
                expected: queries.len(),
                actual: embeddings.len(),
            });
        }
        validate_dimensions(&output.original_query_embedding, &embeddings)?;

        info!(group = %key, count = embeddings.len(), "Embedded query group");
        output.groups.insert(key.clone(), embeddings);
    }

    Ok(output)
}
