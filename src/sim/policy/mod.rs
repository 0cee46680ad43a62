//! Replacement policy implementations.
//!
//! Currently implements:
//! - [`FifoPolicy`] - evicts the longest-resident page
//! - [`LruPolicy`] - evicts the least-recently-used page
//!
//! Both plug into the same [`Simulator`](crate::sim::Simulator) loop via
//! the [`ReplacementPolicy`] trait. The simulator owns the frame set; a
//! policy only tracks the order in which resident pages should go.

mod fifo;
mod lru;

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, PageId};

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;

/// Eviction ordering over the currently resident pages.
///
/// The simulator calls exactly one of `record_hit` / `record_insert` per
/// request, and `evict` only when the frame set is full. After every call
/// the policy must track exactly the resident pages.
pub trait ReplacementPolicy: Send {
    /// Which policy this is.
    fn kind(&self) -> PolicyKind;

    /// A resident page was accessed again.
    fn record_hit(&mut self, page: PageId);

    /// A page was faulted in and is now resident.
    fn record_insert(&mut self, page: PageId);

    /// Remove and return the next victim, or None if nothing is tracked.
    fn evict(&mut self) -> Option<PageId>;

    /// Number of tracked pages.
    fn len(&self) -> usize;

    /// True if no pages are tracked.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tracked pages in eviction order (next victim first).
    fn eviction_order(&self) -> Vec<PageId>;
}

impl<P: ReplacementPolicy + ?Sized> ReplacementPolicy for Box<P> {
    fn kind(&self) -> PolicyKind {
        (**self).kind()
    }

    fn record_hit(&mut self, page: PageId) {
        (**self).record_hit(page)
    }

    fn record_insert(&mut self, page: PageId) {
        (**self).record_insert(page)
    }

    fn evict(&mut self) -> Option<PageId> {
        (**self).evict()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn eviction_order(&self) -> Vec<PageId> {
        (**self).eviction_order()
    }
}

/// Selects a replacement policy at runtime.
///
/// # Example
/// ```
/// use pagesim::PolicyKind;
///
/// let kind: PolicyKind = "lru".parse().unwrap();
/// assert_eq!(kind, PolicyKind::Lru);
/// assert_eq!(kind.to_string(), "LRU");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    /// First-in, first-out.
    Fifo,
    /// Least recently used.
    Lru,
}

impl PolicyKind {
    /// Every supported policy, in display order.
    pub const ALL: [PolicyKind; 2] = [PolicyKind::Fifo, PolicyKind::Lru];

    /// Construct a fresh, empty policy of this kind.
    pub fn build(self, capacity: usize) -> Box<dyn ReplacementPolicy> {
        match self {
            PolicyKind::Fifo => Box::new(FifoPolicy::with_capacity(capacity)),
            PolicyKind::Lru => Box::new(LruPolicy::with_capacity(capacity)),
        }
    }

    /// Short uppercase name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            other => Err(Error::UnknownPolicy(other.to_string())),
        }
    }
}
