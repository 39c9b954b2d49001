use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("candidate pool exhausted: requested {requested}, only {available} available")]
    PoolExhausted { requested: usize, available: usize },

    #[error("deadline exceeded after {selected} of {requested} selections ({elapsed_ms}ms)")]
    DeadlineExceeded {
        selected: usize,
        requested: usize,
        elapsed_ms: u128,
    },
}
