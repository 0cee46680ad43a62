//! LRU (Least-Recently-Used) replacement policy.
//!
//! Recency is kept in a doubly-linked list threaded through a hash map
//! keyed by page, so moving a page to the most-recent end, unlinking the
//! least-recent page and appending are all O(1).
//!
//! ```text
//!   head (LRU)                               tail (MRU)
//!     [3] <──> [1] <──> [2]
//!   access(1):  [3] <──> [2] <──> [1]
//!   evict():    [2] <──> [1]          returns 3
//! ```

use std::collections::HashMap;

use log::trace;

use crate::common::PageId;
use crate::sim::policy::{PolicyKind, ReplacementPolicy};

/// Neighbours of one page in the recency list.
#[derive(Debug, Clone, Copy, Default)]
struct Link {
    /// Less recently used neighbour.
    prev: Option<PageId>,
    /// More recently used neighbour.
    next: Option<PageId>,
}

/// Evicts the page whose last access is oldest.
///
/// Every access, hit or fault-in, makes a page most recently used.
#[derive(Debug, Clone, Default)]
pub struct LruPolicy {
    /// Per-page links; keys are exactly the tracked pages.
    links: HashMap<PageId, Link>,

    /// Least recently used page (next victim).
    head: Option<PageId>,

    /// Most recently used page.
    tail: Option<PageId>,
}

impl LruPolicy {
    /// Create an empty LRU policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty LRU policy sized for `capacity` frames.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            links: HashMap::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Detach `page` from the list, returning false if it was not tracked.
    fn unlink(&mut self, page: PageId) -> bool {
        let Some(link) = self.links.remove(&page) else {
            return false;
        };

        match link.prev {
            Some(prev) => {
                if let Some(l) = self.links.get_mut(&prev) {
                    l.next = link.next;
                }
            }
            None => self.head = link.next,
        }
        match link.next {
            Some(next) => {
                if let Some(l) = self.links.get_mut(&next) {
                    l.prev = link.prev;
                }
            }
            None => self.tail = link.prev,
        }
        true
    }

    /// Append `page` at the most-recently-used end.
    fn push_back(&mut self, page: PageId) {
        let link = Link {
            prev: self.tail,
            next: None,
        };
        match self.tail {
            Some(tail) => {
                if let Some(l) = self.links.get_mut(&tail) {
                    l.next = Some(page);
                }
            }
            None => self.head = Some(page),
        }
        self.tail = Some(page);
        self.links.insert(page, link);
    }
}

impl ReplacementPolicy for LruPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn record_hit(&mut self, page: PageId) {
        if self.tail == Some(page) {
            return;
        }
        if self.unlink(page) {
            trace!("lru: {} moved to most-recent end", page);
            self.push_back(page);
        }
    }

    fn record_insert(&mut self, page: PageId) {
        // Re-inserting a tracked page just refreshes it.
        self.unlink(page);
        self.push_back(page);
    }

    fn evict(&mut self) -> Option<PageId> {
        let victim = self.head?;
        self.unlink(victim);
        Some(victim)
    }

    fn len(&self) -> usize {
        self.links.len()
    }

    fn eviction_order(&self) -> Vec<PageId> {
        let mut order = Vec::with_capacity(self.links.len());
        let mut cursor = self.head;
        while let Some(page) = cursor {
            order.push(page);
            cursor = self.links.get(&page).and_then(|l| l.next);
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::pages;

    #[test]
    fn test_lru_without_hits_matches_insert_order() {
        let mut policy = LruPolicy::new();

        policy.record_insert(PageId::new(1));
        policy.record_insert(PageId::new(2));
        policy.record_insert(PageId::new(3));

        assert_eq!(policy.evict(), Some(PageId::new(1)));
        assert_eq!(policy.evict(), Some(PageId::new(2)));
        assert_eq!(policy.evict(), Some(PageId::new(3)));
        assert_eq!(policy.evict(), None);
        assert!(policy.is_empty());
    }

    #[test]
    fn test_lru_hit_reorders() {
        let mut policy = LruPolicy::new();

        policy.record_insert(PageId::new(1));
        policy.record_insert(PageId::new(2));
        policy.record_insert(PageId::new(3));
        policy.record_hit(PageId::new(1));

        assert_eq!(policy.eviction_order(), pages(&[2, 3, 1]));
        assert_eq!(policy.evict(), Some(PageId::new(2)));
    }

    #[test]
    fn test_lru_hit_on_middle_and_tail() {
        let mut policy = LruPolicy::with_capacity(3);

        policy.record_insert(PageId::new(1));
        policy.record_insert(PageId::new(2));
        policy.record_insert(PageId::new(3));

        policy.record_hit(PageId::new(2)); // middle
        assert_eq!(policy.eviction_order(), pages(&[1, 3, 2]));

        policy.record_hit(PageId::new(2)); // already tail
        assert_eq!(policy.eviction_order(), pages(&[1, 3, 2]));

        policy.record_hit(PageId::new(1)); // head
        assert_eq!(policy.eviction_order(), pages(&[3, 2, 1]));
        assert_eq!(policy.len(), 3);
    }

    #[test]
    fn test_lru_hit_untracked_is_ignored() {
        let mut policy = LruPolicy::new();
        policy.record_insert(PageId::new(1));
        policy.record_hit(PageId::new(99));

        assert_eq!(policy.eviction_order(), pages(&[1]));
    }

    #[test]
    fn test_lru_single_entry() {
        let mut policy = LruPolicy::new();
        policy.record_insert(PageId::new(5));
        policy.record_hit(PageId::new(5));

        assert_eq!(policy.evict(), Some(PageId::new(5)));
        assert_eq!(policy.eviction_order(), Vec::<PageId>::new());

        // List is reusable after draining
        policy.record_insert(PageId::new(6));
        assert_eq!(policy.eviction_order(), pages(&[6]));
    }

    #[test]
    fn test_lru_reinsert_refreshes() {
        let mut policy = LruPolicy::new();
        policy.record_insert(PageId::new(1));
        policy.record_insert(PageId::new(2));
        policy.record_insert(PageId::new(1));

        assert_eq!(policy.len(), 2);
        assert_eq!(policy.eviction_order(), pages(&[2, 1]));
    }
}
