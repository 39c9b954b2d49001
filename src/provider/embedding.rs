use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::hashing::hash_to_u64;

use super::error::ProviderError;

/// Maps texts to embeddings of one fixed dimension, index-aligned with the input.
pub trait EmbeddingProvider: Send + Sync {
    fn embed(
        &self,
        texts: &[String],
    ) -> impl Future<Output = Result<Vec<Vec<f32>>, ProviderError>> + Send;
}

/// Default Jina embeddings endpoint.
pub const DEFAULT_EMBEDDING_URL: &str = "https://api.jina.ai/v1/embeddings";
/// Default Jina model.
pub const DEFAULT_EMBEDDING_MODEL: &str = "jina-embeddings-v3";
/// Task hint sent with every request.
pub const EMBEDDING_TASK: &str = "text-matching";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    task: &'a str,
    input: &'a [String],
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    data: Vec<EmbedDatum>,
}

#[derive(Debug, Deserialize)]
struct EmbedDatum {
    #[serde(default)]
    index: Option<usize>,
    embedding: Vec<f32>,
}

/// Jina-compatible HTTP embedding client.
#[derive(Clone)]
pub struct JinaEmbedder {
    client: reqwest::Client,
    url: String,
    model: String,
    api_key: String,
}

impl std::fmt::Debug for JinaEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JinaEmbedder")
            .field("url", &self.url)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl JinaEmbedder {
    pub fn new(
        url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
            model: model.into(),
            api_key: api_key.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl EmbeddingProvider for JinaEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, ProviderError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        debug!(count = texts.len(), model = %self.model, "Requesting embeddings");

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&EmbedRequest {
                model: &self.model,
                task: EMBEDDING_TASK,
                input: texts,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let mut parsed: EmbedResponse =
            response.json().await.map_err(|e| ProviderError::Decode {
                reason: e.to_string(),
            })?;

        if parsed.data.len() != texts.len() {
            return Err(ProviderError::CountMismatch {
                expected: texts.len(),
                actual: parsed.data.len(),
            });
        }

        if parsed.data.iter().all(|d| d.index.is_some()) {
            parsed.data.sort_by_key(|d| d.index);
        }

        Ok(parsed.data.into_iter().map(|d| d.embedding).collect())
    }
}

/// Memoizes embeddings by text fingerprint in front of another provider.
///
/// Only texts missing from the cache are forwarded, once each, in first-seen order.
pub struct CachingEmbedder<P> {
    inner: P,
    cache: Cache<u64, Arc<Vec<f32>>>,
}

impl<P> std::fmt::Debug for CachingEmbedder<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachingEmbedder")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

impl<P: EmbeddingProvider> CachingEmbedder<P> {
    pub fn new(inner: P, capacity: u64) -> Self {
        Self {
            inner,
            cache: Cache::new(capacity),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}

impl<P: EmbeddingProvider> EmbeddingProvider for CachingEmbedder<P> {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, ProviderError> {
        let keys: Vec<u64> = texts.iter().map(|t| hash_to_u64(t.as_bytes())).collect();
        let mut resolved: Vec<Option<Arc<Vec<f32>>>> =
            keys.iter().map(|key| self.cache.get(key)).collect();

        let mut missing: Vec<String> = Vec::new();
        let mut missing_keys: Vec<u64> = Vec::new();
        for ((text, &key), slot) in texts.iter().zip(keys.iter()).zip(resolved.iter()) {
            if slot.is_none() && !missing_keys.contains(&key) {
                missing.push(text.clone());
                missing_keys.push(key);
            }
        }

        debug!(
            requested = texts.len(),
            misses = missing.len(),
            "Embedding cache lookup"
        );

        if !missing.is_empty() {
            let embeddings = self.inner.embed(&missing).await?;
            if embeddings.len() != missing.len() {
                return Err(ProviderError::CountMismatch {
                    expected: missing.len(),
                    actual: embeddings.len(),
                });
            }

            for (key, embedding) in missing_keys.into_iter().zip(embeddings) {
                let embedding = Arc::new(embedding);
                self.cache.insert(key, Arc::clone(&embedding));
                for (slot, _) in resolved
                    .iter_mut()
                    .zip(keys.iter())
                    .filter(|(slot, k)| slot.is_none() && **k == key)
                {
                    *slot = Some(Arc::clone(&embedding));
                }
            }
        }

        Ok(resolved
            .into_iter()
            .flatten()
            .map(|embedding| embedding.as_ref().clone())
            .collect())
    }
}
