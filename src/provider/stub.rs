use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::debug;

use crate::hashing::hash_to_u64;

use super::embedding::EmbeddingProvider;
use super::error::ProviderError;
use super::generation::QueryGenerator;

/// Deterministic unit-norm embeddings seeded from the text's BLAKE3 fingerprint.
///
/// Identical texts always map to identical vectors.
#[derive(Debug)]
pub struct StubEmbedder {
    dim: usize,
    calls: AtomicUsize,
    texts: AtomicUsize,
}

impl StubEmbedder {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            calls: AtomicUsize::new(0),
            texts: AtomicUsize::new(0),
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of `embed` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    /// Number of texts embedded so far, across all calls.
    pub fn texts_embedded(&self) -> usize {
        self.texts.load(Ordering::Relaxed)
    }

    pub fn embed_one(&self, text: &str) -> Vec<f32> {
        let mut state = hash_to_u64(text.as_bytes());
        let mut embedding = Vec::with_capacity(self.dim);

        for _ in 0..self.dim {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let value = ((state >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0;
            embedding.push(value);
        }

        let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in &mut embedding {
                *x /= norm;
            }
        }
        embedding
    }
}

impl EmbeddingProvider for StubEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, ProviderError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.texts.fetch_add(texts.len(), Ordering::Relaxed);
        debug!(count = texts.len(), dim = self.dim, "Generating stub embeddings");
        Ok(texts.iter().map(|text| self.embed_one(text)).collect())
    }
}

/// Returns `"<user query> (variant i)"` for `i` in `1..=count`.
#[derive(Debug, Default)]
pub struct StubQueryGenerator;

impl QueryGenerator for StubQueryGenerator {
    async fn generate(
        &self,
        _template: &str,
        user_query: &str,
        count: usize,
    ) -> Result<Vec<String>, ProviderError> {
        Ok((1..=count)
            .map(|i| format!("{} (variant {})", user_query, i))
            .collect())
    }
}
