//! Lexicographic frontier queue.
//!
//! `BinaryHeap` is a max-heap, so entries wrap their key in `Reverse` to get
//! min-queue behavior: O(log n) push, amortized O(1) pop of the
//! lexicographically smallest pair. Duplicate keys are allowed — the same
//! state may sit in the queue under several pairs, with dominance sorted out
//! at pop time against the state's front.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use cairn_front::ParetoPair;

/// A queued (pair, state) entry.
///
/// Ordering is lexicographic on the pair, ties broken by state id so queue
/// order is deterministic regardless of insertion order.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    pair: ParetoPair,
    state: usize,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.pair == other.pair && self.state == other.state
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.pair
            .cmp(&other.pair)
            .then(self.state.cmp(&other.state))
    }
}

/// Min-queue over (pair, state) keyed lexicographically.
#[derive(Debug, Default)]
pub struct LexQueue {
    heap: BinaryHeap<Reverse<QueueEntry>>,
}

impl LexQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Enqueue `state` under `pair`. Duplicates are fine.
    pub fn push(&mut self, pair: ParetoPair, state: usize) {
        self.heap.push(Reverse(QueueEntry { pair, state }));
    }

    /// Pop the lexicographically smallest (pair, state), or `None` when
    /// drained.
    #[must_use]
    pub fn pop(&mut self) -> Option<(ParetoPair, usize)> {
        self.heap.pop().map(|Reverse(e)| (e.pair, e.state))
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of queued entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
