//! JSON artifacts exchanged between the pipeline steps.
//!
//! | File | Shape |
//! |------|-------|
//! | query file | `{"original_query": "...", "20_queries": ["...", ...]}` (a bare array is accepted too) |
//! | embedding file | `{"original_query": "...", "original_query_embedding": [...], "20_queries": [[...], ...]}` |
//! | selection file | same shape as the embedding file, one `"<k>_queries"` group per budget |
//!
//! Writes go to a temp file in the destination directory and are renamed into place, so a
//! failed run never leaves a truncated artifact behind.

pub mod error;
pub mod io;
pub mod model;
pub mod pool;


pub use error::ArtifactError;
pub use io::{embeddings_path_for, generated_queries_path, read_json, write_json_atomic};
pub use model::{EmbeddingFile, QueryFile, SelectionFile};
