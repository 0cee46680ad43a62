//! Per-step history and the finished simulation result.

use std::fmt;

use crate::common::{FrameId, PageId};
use crate::sim::{PolicyKind, SimulationStats};

/// Whether a request found its page resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Hit,
    Fault,
}

impl Outcome {
    /// Single-letter tag used in reports (`H` or `F`).
    pub fn tag(self) -> char {
        match self {
            Outcome::Hit => 'H',
            Outcome::Fault => 'F',
        }
    }

    #[inline]
    pub fn is_fault(self) -> bool {
        self == Outcome::Fault
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width flags work in table cells.
        f.pad(match self {
            Outcome::Hit => "H",
            Outcome::Fault => "F",
        })
    }
}

/// Frame state after processing one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// The requested page.
    pub page: PageId,

    /// Contents of every frame after the request, in slot order.
    pub frames: Vec<Option<PageId>>,

    /// Hit or fault.
    pub outcome: Outcome,

    /// Page displaced by this request, if any.
    pub evicted: Option<PageId>,

    /// Slot written by this request. `None` on a hit.
    pub loaded_into: Option<FrameId>,
}

impl StepRecord {
    /// Number of occupied frames in this snapshot.
    pub fn occupied(&self) -> usize {
        self.frames.iter().filter(|f| f.is_some()).count()
    }
}

/// Everything one run produced.
///
/// Built by [`Simulator`](crate::sim::Simulator); read by the report layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    pub(crate) policy: PolicyKind,
    pub(crate) frames: usize,
    pub(crate) reference: Vec<PageId>,
    pub(crate) steps: Vec<StepRecord>,
    pub(crate) stats: SimulationStats,
}

impl SimulationResult {
    /// Policy that produced this result.
    pub fn policy(&self) -> PolicyKind {
        self.policy
    }

    /// Frame count of the run.
    pub fn frame_count(&self) -> usize {
        self.frames
    }

    /// The reference string that was replayed.
    pub fn reference(&self) -> &[PageId] {
        &self.reference
    }

    /// One record per request, in request order.
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// Aggregate counters.
    pub fn stats(&self) -> SimulationStats {
        self.stats
    }

    pub fn requests(&self) -> u64 {
        self.stats.requests
    }

    pub fn faults(&self) -> u64 {
        self.stats.faults
    }

    pub fn hits(&self) -> u64 {
        self.stats.hits
    }

    /// Hit/fault tags in request order.
    pub fn outcomes(&self) -> Vec<Outcome> {
        self.steps.iter().map(|s| s.outcome).collect()
    }

    /// Contents of one frame across every step (a table row).
    ///
    /// Returns None if `frame_id` is out of range.
    pub fn frame_row(&self, frame_id: FrameId) -> Option<Vec<Option<PageId>>> {
        if frame_id.0 >= self.frames {
            return None;
        }
        Some(self.steps.iter().map(|s| s.frames[frame_id.0]).collect())
    }

    /// Pages resident after the last request, sorted ascending.
    pub fn resident_pages(&self) -> Vec<PageId> {
        let mut pages: Vec<PageId> = self
            .steps
            .last()
            .map(|s| s.frames.iter().flatten().copied().collect())
            .unwrap_or_default();
        pages.sort_unstable();
        pages
    }

    /// Pages evicted over the run, in eviction order.
    pub fn evicted_pages(&self) -> Vec<PageId> {
        self.steps.iter().filter_map(|s| s.evicted).collect()
    }

    /// CRC32 over a canonical encoding of the run.
    ///
    /// Covers the policy, frame count and every step record, so two runs
    /// with equal fingerprints almost certainly produced the same history.
    pub fn fingerprint(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();

        hasher.update(&[match self.policy {
            PolicyKind::Fifo => 0,
            PolicyKind::Lru => 1,
        }]);
        hasher.update(&(self.frames as u64).to_le_bytes());

        for step in &self.steps {
            hasher.update(&step.page.0.to_le_bytes());
            hasher.update(&[step.outcome.tag() as u8]);
            for frame in &step.frames {
                match frame {
                    Some(page) => {
                        hasher.update(&[1]);
                        hasher.update(&page.0.to_le_bytes());
                    }
                    None => hasher.update(&[0]),
                }
            }
        }

        hasher.finalize()
    }
}
