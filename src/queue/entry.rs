use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use super::heap::MinHeap;

/// Gain estimate for one candidate, as of a given outer iteration.
///
/// The gain is stored negated so that the min-heap yields the largest gain first.
/// Ordering looks at the key only; `generation` and `candidate` never break ties.
#[derive(Debug, Clone, Copy)]
pub struct QueueEntry {
    neg_gain: OrderedFloat<f32>,
    generation: usize,
    candidate: usize,
}

impl QueueEntry {
    /// Entry for `candidate` whose exact gain was `gain` at iteration `generation`.
    pub fn new(gain: f32, generation: usize, candidate: usize) -> Self {
        Self {
            neg_gain: OrderedFloat(-gain),
            generation,
            candidate,
        }
    }

    /// The (positive) gain estimate.
    pub fn gain(&self) -> f32 {
        -self.neg_gain.into_inner()
    }

    /// The stored heap key, i.e. the negated gain.
    pub fn key(&self) -> f32 {
        self.neg_gain.into_inner()
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn candidate(&self) -> usize {
        self.candidate
    }

    /// `true` if the estimate was computed exactly at `iteration`.
    pub fn is_current(&self, iteration: usize) -> bool {
        self.generation == iteration
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.neg_gain == other.neg_gain
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.neg_gain.cmp(&other.neg_gain)
    }
}

/// Min-priority queue of [`QueueEntry`] records.
#[derive(Debug, Clone, Default)]
pub struct LazyQueue {
    heap: MinHeap<QueueEntry>,
}

impl LazyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: MinHeap::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, entry: QueueEntry) {
        self.heap.push(entry);
    }

    /// Removes the entry with the largest gain estimate.
    pub fn extract_min(&mut self) -> Option<QueueEntry> {
        self.heap.pop()
    }

    pub fn peek(&self) -> Option<&QueueEntry> {
        self.heap.peek()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
