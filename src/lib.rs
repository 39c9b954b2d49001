//! Prism library crate (used by the `prism` binary and integration tests).
//!
//! Selects a small, diverse, relevance-preserving subset of query variants from a
//! candidate pool by lazy-greedy maximization of a monotone submodular coverage
//! objective.
//!
//! # Public API Surface
//!
//! ## Selection Core
//! - [`cosine_similarity`] - Vector similarity
//! - [`CoverageModel`] - Relevance baseline and marginal gains
//! - [`MinHeap`], [`LazyQueue`], [`QueueEntry`] - Lazy evaluation queue
//! - [`lazy_greedy_select`], [`eager_greedy_select`] - Greedy selectors
//! - [`BudgetSpec`], [`BatchDriver`] - Per-budget batch runs
//!
//! ## Boundary
//! - [`QueryFile`], [`EmbeddingFile`], [`SelectionFile`], [`CandidatePool`] - JSON artifacts
//! - [`EmbeddingProvider`], [`QueryGenerator`] - Remote collaborators
//! - [`analyze_selection`] - Similarity summary of a selection artifact
//! - [`Config`], [`ConfigError`] - Environment configuration
//!
//! The selection core performs no I/O. Everything under [`artifact`] and
//! [`provider`] is plumbing around it.
//!
//! ## Test/Mock Support
//! Stub providers are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod analysis;
pub mod artifact;
pub mod batch;
pub mod config;
pub mod constants;
pub mod coverage;
pub mod hashing;
pub mod provider;
pub mod queue;
pub mod selector;
pub mod vector;

pub use analysis::{GroupSimilarity, SimilarityStats, analyze_selection, render_report};
pub use artifact::{
    ArtifactError, EmbeddingFile, QueryFile, SelectionFile, embeddings_path_for,
    generated_queries_path, read_json, write_json_atomic,
};
pub use batch::{
    BatchDriver, BatchError, BatchResult, BudgetError, BudgetSelection, BudgetSpec,
    CandidatePool, SelectedQuery,
};
pub use config::{Config, ConfigError};
pub use constants::{DEFAULT_ALPHA, DEFAULT_CANDIDATE_GROUP, group_key, parse_group_key};
pub use coverage::{CoverageError, CoverageModel};
pub use hashing::{hash_text, hash_to_u64};
pub use provider::{
    CachingEmbedder, EmbeddingProvider, GenaiQueryGenerator, JinaEmbedder, ProviderError,
    QueryGenerator, embed_query_file, parse_generated_queries, render_prompt,
};
#[cfg(any(test, feature = "mock"))]
pub use provider::{StubEmbedder, StubQueryGenerator};
pub use queue::{LazyQueue, MinHeap, QueueEntry};
pub use selector::{
    SelectionError, SelectionOutcome, SelectorConfig, eager_greedy_select, lazy_greedy_select,
};
pub use vector::{DimensionError, cosine_similarity, validate_dimensions};
