//! Greedy submodular selection over a [`CoverageModel`](crate::coverage::CoverageModel).
//!
//! [`lazy_greedy_select`] is the production path. It keeps one gain estimate per candidate
//! in a [`LazyQueue`](crate::queue::LazyQueue) and only recomputes an estimate when it
//! reaches the top of the queue while stale. Because marginal gains never grow as the
//! selection grows, an estimate that is both current and on top is the true maximum, so
//! the picks are the same as [`eager_greedy_select`] up to ties.
//!
//! # Ties
//!
//! Equal gain estimates come out of the heap in structural order, which depends on
//! insertion history. Exact ties can therefore resolve differently between the lazy and
//! eager selectors, and this is accepted rather than forced into a total order.
//!
//! # Deadlines
//!
//! [`SelectorConfig::deadline`] is only checked between outer iterations, so an aborted
//! run never observes a half-updated selection.

pub mod error;
pub mod greedy;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::SelectionError;
pub use greedy::{eager_greedy_select, lazy_greedy_select};
pub use types::{SelectionOutcome, SelectorConfig};
