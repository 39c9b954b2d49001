//! Cross-cutting, shared constants.
//!
//! # Group Keys
//!
//! Artifacts store query groups under keys of the form `"<n>_queries"`. The candidate pool
//! is one such group (by default [`DEFAULT_CANDIDATE_GROUP`]) and every selection budget `k`
//! is written back under [`group_key`]`(k)`. Use [`parse_group_key`] to go the other way.

/// Default weight applied to a candidate's own relevance when it counts as coverage.
pub const DEFAULT_ALPHA: f32 = 0.3;

/// Group key holding the candidate pool in query/embedding artifacts.
pub const DEFAULT_CANDIDATE_GROUP: &str = "20_queries";

/// Suffix shared by every group key.
pub const GROUP_KEY_SUFFIX: &str = "_queries";

/// Field holding the original query text.
pub const ORIGINAL_QUERY_FIELD: &str = "original_query";

/// Field holding the original query embedding.
pub const ORIGINAL_EMBEDDING_FIELD: &str = "original_query_embedding";

/// Default number of variants requested from the generator.
pub const DEFAULT_NUM_QUERIES: usize = 5;

/// Placeholder replaced with the requested variant count in prompt templates.
pub const NUM_QUERIES_PLACEHOLDER: &str = "{num_queries}";

/// Returns the artifact key for a group of `n` queries (e.g. `"5_queries"`).
pub fn group_key(n: usize) -> String {
    format!("{}{}", n, GROUP_KEY_SUFFIX)
}

/// Parses `"<n>_queries"` back into `n`.
///
/// Returns `None` for any other key shape, including `"0_queries"`.
pub fn parse_group_key(key: &str) -> Option<usize> {
    key.strip_suffix(GROUP_KEY_SUFFIX)?
        .parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
}
