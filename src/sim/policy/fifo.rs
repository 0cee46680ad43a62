//! FIFO (First-In-First-Out) replacement policy.

use std::collections::VecDeque;

use log::trace;

use crate::common::PageId;
use crate::sim::policy::{PolicyKind, ReplacementPolicy};

/// Evicts pages in the order they were faulted in.
///
/// Hits never reorder the queue: a page loaded early is evicted early no
/// matter how often it is used afterwards.
#[derive(Debug, Clone, Default)]
pub struct FifoPolicy {
    /// Resident pages in arrival order (front = oldest).
    queue: VecDeque<PageId>,
}

impl FifoPolicy {
    /// Create an empty FIFO policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty FIFO policy sized for `capacity` frames.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
        }
    }
}

impl ReplacementPolicy for FifoPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    fn record_hit(&mut self, page: PageId) {
        trace!("fifo: hit on {} leaves queue unchanged", page);
    }

    fn record_insert(&mut self, page: PageId) {
        self.queue.push_back(page);
    }

    fn evict(&mut self) -> Option<PageId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn eviction_order(&self) -> Vec<PageId> {
        self.queue.iter().copied().collect()
    }
}
