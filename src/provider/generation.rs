use std::future::Future;

use genai::Client;
use genai::chat::{ChatMessage, ChatRequest};
use serde::Deserialize;
use tracing::{debug, info};

use crate::constants::NUM_QUERIES_PLACEHOLDER;

use super::error::ProviderError;

/// Produces `count` search-query variants for a user query.
pub trait QueryGenerator: Send + Sync {
    fn generate(
        &self,
        template: &str,
        user_query: &str,
        count: usize,
    ) -> impl Future<Output = Result<Vec<String>, ProviderError>> + Send;
}

/// Default model for query generation.
pub const DEFAULT_GENERATION_MODEL: &str = "gemini-2.5-flash";

const RESPONSE_INSTRUCTIONS: &str = "Respond with a JSON object of the form \
{\"queries\": [\"...\"]} and nothing else.";

/// Substitutes every `{num_queries}` placeholder in `template` with `count`.
pub fn render_prompt(template: &str, count: usize) -> String {
    template.replace(NUM_QUERIES_PLACEHOLDER, &count.to_string())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GeneratedQueries {
    Wrapped { queries: Vec<String> },
    Bare(Vec<String>),
}

/// Parses a model reply into exactly `count` queries.
///
/// Accepts `{"queries": [...]}` or a bare string array, optionally inside a
/// Markdown code fence.
pub fn parse_generated_queries(text: &str, count: usize) -> Result<Vec<String>, ProviderError> {
    let body = strip_code_fence(text.trim());

    let parsed: GeneratedQueries =
        serde_json::from_str(body).map_err(|e| ProviderError::Decode {
            reason: format!("model reply is not a query list: {}", e),
        })?;

    let queries = match parsed {
        GeneratedQueries::Wrapped { queries } | GeneratedQueries::Bare(queries) => queries,
    };

    if queries.len() != count {
        return Err(ProviderError::CountMismatch {
            expected: count,
            actual: queries.len(),
        });
    }

    Ok(queries)
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string ("json") up to the first newline.
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

/// Chat-model backed generator.
pub struct GenaiQueryGenerator {
    client: Client,
    model: String,
}

impl std::fmt::Debug for GenaiQueryGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenaiQueryGenerator")
            .field("model", &self.model)
            .finish()
    }
}

impl GenaiQueryGenerator {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            client: Client::default(),
            model: model.into(),
        }
    }

    pub fn with_client(client: Client, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl QueryGenerator for GenaiQueryGenerator {
    async fn generate(
        &self,
        template: &str,
        user_query: &str,
        count: usize,
    ) -> Result<Vec<String>, ProviderError> {
        let system = format!("{}\n\n{}", render_prompt(template, count), RESPONSE_INSTRUCTIONS);
        let request = ChatRequest::new(vec![
            ChatMessage::system(system),
            ChatMessage::user(user_query.to_string()),
        ]);

        debug!(model = %self.model, count, "Requesting query variants");

        let response = self
            .client
            .exec_chat(&self.model, request, None)
            .await
            .map_err(|e| ProviderError::Generation {
                reason: e.to_string(),
            })?;

        let text = response.first_text().ok_or_else(|| ProviderError::Generation {
            reason: "model returned no text".to_string(),
        })?;

        let queries = parse_generated_queries(text, count)?;
        info!(model = %self.model, count = queries.len(), "Generated query variants");
        Ok(queries)
    }
}
