//! Priority structures for lazy greedy evaluation.
//!
//! - [`MinHeap`] is a plain binary min-heap over any `Ord` item.
//! - [`LazyQueue`] holds [`QueueEntry`] records keyed on negated gain estimates, so the
//!   candidate with the largest estimate is extracted first.
//!
//! Entries are immutable once inserted. A stale estimate is refreshed by extracting the
//! entry and inserting a new one with a newer generation.

pub mod entry;
pub mod heap;


pub use entry::{LazyQueue, QueueEntry};
pub use heap::MinHeap;
