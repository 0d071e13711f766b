//! Bounded recent-sentence history shared across all output channels.

use std::collections::{HashSet, VecDeque};

/// Insertion-ordered set of recently emitted sentences with strict FIFO
/// eviction. Used only to avoid immediate repetition, not to guarantee
/// long-term uniqueness.
#[derive(Debug)]
pub struct RecentSentences {
    order: VecDeque<String>,
    seen: HashSet<String>,
    capacity: usize,
}

impl RecentSentences {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            order: VecDeque::with_capacity(capacity),
            seen: HashSet::with_capacity(capacity),
            capacity,
        }
    }

    pub fn contains(&self, sentence: &str) -> bool {
        self.seen.contains(sentence)
    }

    /// Record a sentence, evicting the oldest entry when full. Re-inserting
    /// a sentence already present keeps its original position.
    pub fn insert(&mut self, sentence: String) {
        if !self.seen.insert(sentence.clone()) {
            return;
        }
        self.order.push_back(sentence);
        if self.order.len() > self.capacity
            && let Some(oldest) = self.order.pop_front()
        {
            self.seen.remove(&oldest);
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
