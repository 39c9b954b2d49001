//! Remote collaborators: embedding and query-variant generation.
//!
//! Nothing in the selection core calls into this module. The CLI uses it to produce the
//! query and embedding artifacts that the core consumes.
//!
//! - [`EmbeddingProvider`]: texts to fixed-dimension vectors ([`JinaEmbedder`] over HTTP,
//!   [`CachingEmbedder`] in front of any provider).
//! - [`QueryGenerator`]: prompt template + user query to `count` variants
//!   ([`GenaiQueryGenerator`]).
//!
//! Deterministic stubs for both live behind `#[cfg(any(test, feature = "mock"))]`.

pub mod embedding;
pub mod error;
pub mod generation;
pub mod pipeline;
#[cfg(any(test, feature = "mock"))]
pub mod stub;


pub use embedding::{CachingEmbedder, EmbeddingProvider, JinaEmbedder};
pub use error::ProviderError;
pub use generation::{GenaiQueryGenerator, QueryGenerator, parse_generated_queries, render_prompt};
pub use pipeline::embed_query_file;
#[cfg(any(test, feature = "mock"))]
pub use stub::{StubEmbedder, StubQueryGenerator};
