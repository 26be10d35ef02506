// src/crawl/frontier.rs
// =============================================================================
// The per-domain crawl frontier: a FIFO queue paired with a "seen" set.
//
// A URL is remembered the moment it is queued, so the same page can never
// sit in the queue twice, no matter how many anchors point at it. Popping a
// URL is what "visits" it: once popped it is never handed out again, even if
// the fetch later fails.
//
// Rust concepts:
// - VecDeque: push_back() + pop_front() gives breadth-first order
// - HashSet: O(1) "have we seen this URL?" checks
// =============================================================================

use std::collections::{HashSet, VecDeque};
use url::Url;

#[derive(Debug)]
pub struct Frontier {
    queue: VecDeque<Url>,
    seen: HashSet<Url>,
}

impl Frontier {
    /// Creates a frontier holding exactly one URL.
    pub fn new(seed: Url) -> Self {
        let mut frontier = Self {
            queue: VecDeque::new(),
            seen: HashSet::new(),
        };
        frontier.push(seed);
        frontier
    }

    /// Queues `url` at the tail unless it was queued or visited before.
    ///
    /// Returns true if the URL was actually added.
    pub fn push(&mut self, url: Url) -> bool {
        if self.seen.contains(&url) {
            return false;
        }
        self.seen.insert(url.clone());
        self.queue.push_back(url);
        true
    }

    /// Takes the next URL to visit (oldest first).
    pub fn pop(&mut self) -> Option<Url> {
        self.queue.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of distinct URLs ever queued, visited ones included.
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }
}
