//! Simulator - the shared replay loop.
//!
//! The [`Simulator`] provides:
//! - Hit/fault classification against a [`FrameSet`]
//! - Victim selection through a pluggable [`ReplacementPolicy`]
//! - Per-step history and aggregate counters

use log::{debug, info, trace};

use crate::common::{Error, PageId, Result, SimConfig};
use crate::sim::{
    FifoPolicy, FrameSet, LruPolicy, Outcome, PolicyKind, ReplacementPolicy, SimulationResult,
    SimulationStats, StepRecord,
};

/// Replays page requests against a fixed frame set.
///
/// # Architecture
/// ```text
/// ┌───────────────────────────────────────────────────────┐
/// │                      Simulator                        │
/// │  ┌──────────────────────┐   ┌──────────────────────┐  │
/// │  │      FrameSet        │   │       policy         │  │
/// │  │ slots + residency    │◀─▶│ FIFO queue | LRU list│  │
/// │  └──────────────────────┘   └──────────────────────┘  │
/// │  ┌──────────────────────┐   ┌──────────────────────┐  │
/// │  │ history: Vec<Step>   │   │ stats: counters      │  │
/// │  └──────────────────────┘   └──────────────────────┘  │
/// └───────────────────────────────────────────────────────┘
/// ```
///
/// Frame set and policy are updated in lockstep: after every request the
/// policy tracks exactly the resident pages.
///
/// # Usage
/// ```
/// use pagesim::{pages, LruPolicy, Simulator};
///
/// let mut sim = Simulator::new(2, LruPolicy::new()).unwrap();
/// for page in pages(&[1, 2, 1, 3]) {
///     sim.access(page).unwrap();
/// }
/// let result = sim.finish();
/// assert_eq!(result.faults(), 3);
/// assert_eq!(result.evicted_pages(), pages(&[2]));
/// ```
pub struct Simulator<P: ReplacementPolicy> {
    /// Simulated physical memory.
    frames: FrameSet,

    /// Eviction ordering.
    policy: P,

    /// Requests seen so far, in order.
    reference: Vec<PageId>,

    /// One record per request.
    history: Vec<StepRecord>,

    /// Running counters.
    stats: SimulationStats,
}

impl<P: ReplacementPolicy> Simulator<P> {
    /// Create a simulator with `frame_count` empty frames.
    ///
    /// # Errors
    /// - `Error::InvalidFrameCount` if `frame_count` is 0
    pub fn new(frame_count: usize, policy: P) -> Result<Self> {
        let frames = FrameSet::new(frame_count)?;
        Ok(Self {
            frames,
            policy,
            reference: Vec::new(),
            history: Vec::new(),
            stats: SimulationStats::new(),
        })
    }

    /// Process one page request and return its step record.
    ///
    /// # Errors
    /// - `Error::PolicyInvariant` if the policy and frame set disagree.
    ///   Never happens with the built-in policies.
    pub fn access(&mut self, page: PageId) -> Result<&StepRecord> {
        let record = if self.frames.contains(page) {
            self.handle_hit(page)
        } else {
            self.handle_fault(page)?
        };

        self.reference.push(page);
        self.history.push(record);
        // Just pushed, so `last` is always present.
        self.history
            .last()
            .ok_or_else(|| Error::PolicyInvariant("history empty after push".to_string()))
    }

    /// Process every request in order.
    pub fn run(&mut self, pages: &[PageId]) -> Result<()> {
        self.reference.reserve(pages.len());
        self.history.reserve(pages.len());
        for &page in pages {
            self.access(page)?;
        }
        Ok(())
    }

    /// Counters so far.
    pub fn stats(&self) -> SimulationStats {
        self.stats
    }

    /// Current frame contents.
    pub fn frames(&self) -> &FrameSet {
        &self.frames
    }

    /// The policy driving eviction.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Consume the simulator and hand back the finished result.
    pub fn finish(self) -> SimulationResult {
        let result = SimulationResult {
            policy: self.policy.kind(),
            frames: self.frames.capacity(),
            reference: self.reference,
            steps: self.history,
            stats: self.stats,
        };
        info!(
            "{} with {} frames finished: {}",
            result.policy,
            result.frames,
            result.stats
        );
        result
    }

    // ========================================================================
    // Internal: hit and fault handling
    // ========================================================================

    /// Resident page: nothing moves in memory, only the policy may reorder.
    fn handle_hit(&mut self, page: PageId) -> StepRecord {
        trace!("hit on page {}", page);
        self.policy.record_hit(page);
        self.stats.record_hit();

        StepRecord {
            page,
            frames: self.frames.snapshot(),
            outcome: Outcome::Hit,
            evicted: None,
            loaded_into: None,
        }
    }

    /// Non-resident page: fill a free frame or replace the policy's victim.
    fn handle_fault(&mut self, page: PageId) -> Result<StepRecord> {
        let (frame_id, evicted) = if self.frames.is_full() {
            let victim = self.policy.evict().ok_or_else(|| {
                Error::PolicyInvariant(format!(
                    "{} policy has no victim with {} frames full",
                    self.policy.kind(),
                    self.frames.len()
                ))
            })?;
            let frame_id = self.frames.replace(victim, page)?;
            debug!("fault on page {}: evicted {} from {}", page, victim, frame_id);
            (frame_id, Some(victim))
        } else {
            let frame_id = self.frames.place(page)?;
            debug!("fault on page {}: loaded into free {}", page, frame_id);
            (frame_id, None)
        };

        self.policy.record_insert(page);
        self.stats.record_fault(evicted.is_some());

        Ok(StepRecord {
            page,
            frames: self.frames.snapshot(),
            outcome: Outcome::Fault,
            evicted,
            loaded_into: Some(frame_id),
        })
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Replay `pages` against `frame_count` frames using `kind`.
///
/// # Errors
/// - `Error::InvalidFrameCount` if `frame_count` is 0
///
/// # Example
/// ```
/// use pagesim::{pages, simulate, Outcome, PolicyKind};
///
/// let result = simulate(PolicyKind::Fifo, &pages(&[1, 2, 1]), 2).unwrap();
/// assert_eq!(result.outcomes(), vec![Outcome::Fault, Outcome::Fault, Outcome::Hit]);
/// ```
pub fn simulate(kind: PolicyKind, pages: &[PageId], frame_count: usize) -> Result<SimulationResult> {
    match kind {
        PolicyKind::Fifo => simulate_fifo(pages, frame_count),
        PolicyKind::Lru => simulate_lru(pages, frame_count),
    }
}

/// Replay `pages` with FIFO replacement.
pub fn simulate_fifo(pages: &[PageId], frame_count: usize) -> Result<SimulationResult> {
    run_with(FifoPolicy::with_capacity(frame_count), pages, frame_count)
}

/// Replay `pages` with LRU replacement.
pub fn simulate_lru(pages: &[PageId], frame_count: usize) -> Result<SimulationResult> {
    run_with(LruPolicy::with_capacity(frame_count), pages, frame_count)
}

/// Replay `pages` with the frame count and policy from `config`.
pub fn simulate_config(config: &SimConfig, pages: &[PageId]) -> Result<SimulationResult> {
    simulate(config.policy(), pages, config.frames())
}

fn run_with<P: ReplacementPolicy>(
    policy: P,
    pages: &[PageId],
    frame_count: usize,
) -> Result<SimulationResult> {
    let mut sim = Simulator::new(frame_count, policy)?;
    sim.run(pages)?;
    Ok(sim.finish())
}
