use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd, Reverse};
use std::collections::BinaryHeap;

use super::Weight;

#[derive(Clone, Copy, Debug)]
struct Entry<T> {
    weight: Weight,
    // insertion counter, earlier entries win ties
    sequence: usize,
    item: T,
}

/// Min-weight priority queue with a fixed tie rule: of two entries with the
/// same weight, the one pushed first is popped first.
pub struct MinQueue<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    pushed: usize,
}

impl<T> MinQueue<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        MinQueue {
            heap: BinaryHeap::with_capacity(capacity),
            pushed: 0,
        }
    }

    pub fn push(&mut self, item: T, weight: Weight) {
        let entry = Entry {
            weight,
            sequence: self.pushed,
            item,
        };
        self.pushed += 1;
        self.heap.push(Reverse(entry));
    }

    pub fn pop_min(&mut self) -> Option<(T, Weight)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.item, entry.weight))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}
