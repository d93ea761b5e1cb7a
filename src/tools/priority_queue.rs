//! Max-priority queue used to drive the Huffman merges.
//!
//! The queue sits on top of `std::collections::BinaryHeap`. Each entry carries the priority of its
//! item and the sequence number it was inserted with, so that among equal priorities the item
//! inserted first is extracted first. Insert and extract are both O(log n).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};

/// Anything that can be ordered in the queue by an integer priority.
pub trait Prioritized {
    fn priority(&self) -> u32;
}

impl Prioritized for u32 {
    fn priority(&self) -> u32 {
        *self
    }
}

#[derive(Debug)]
struct Entry<T> {
    priority: u32,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> Ord for Entry<T> {
    /// Sort Entries by increasing priority, then by decreasing age (older entries rank higher)
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T: Prioritized> PriorityQueue<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Add an item to the queue.
    pub fn insert(&mut self, item: T) {
        let entry = Entry {
            priority: item.priority(),
            seq: self.next_seq,
            item,
        };
        self.next_seq += 1;
        self.heap.push(entry);
    }

    /// Remove and return the item with the greatest priority. Ties go to the oldest item.
    pub fn extract_highest(&mut self) -> Result<T> {
        self.heap.pop().map(|entry| entry.item).ok_or(Error::EmptyQueue)
    }

    /// Priority of the item `extract_highest` would return next.
    pub fn peek_priority(&self) -> Option<u32> {
        self.heap.peek().map(|entry| entry.priority)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T: Prioritized> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Prioritized> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.insert(item));
    }
}

impl<T: Prioritized> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
