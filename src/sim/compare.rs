//! Side-by-side FIFO/LRU comparison.
//!
//! Each run owns all of its state, so the two policies replay the same
//! reference string on separate threads and only meet again when their
//! results are collected.

use std::thread;

use log::debug;
use parking_lot::Mutex;

use crate::common::{Error, PageId, Result};
use crate::sim::{simulate, PolicyKind, SimulationResult};

/// FIFO and LRU results for the same input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub fifo: SimulationResult,
    pub lru: SimulationResult,
}

impl Comparison {
    /// Index of the first step whose frame contents differ, if any.
    ///
    /// Hit/fault patterns can agree while frame contents already differ,
    /// because the two policies evicted different pages.
    pub fn first_divergence(&self) -> Option<usize> {
        self.fifo
            .steps()
            .iter()
            .zip(self.lru.steps())
            .position(|(a, b)| a.frames != b.frames)
    }

    /// Policy with fewer faults, or None on a tie.
    pub fn fewer_faults(&self) -> Option<PolicyKind> {
        use std::cmp::Ordering;

        match self.fifo.faults().cmp(&self.lru.faults()) {
            Ordering::Less => Some(PolicyKind::Fifo),
            Ordering::Greater => Some(PolicyKind::Lru),
            Ordering::Equal => None,
        }
    }
}

/// Run FIFO and LRU on the same input in parallel.
///
/// # Errors
/// - `Error::InvalidFrameCount` if `frame_count` is 0
pub fn compare(pages: &[PageId], frame_count: usize) -> Result<Comparison> {
    if frame_count == 0 {
        return Err(Error::InvalidFrameCount(0));
    }

    let results: Mutex<Vec<(PolicyKind, Result<SimulationResult>)>> =
        Mutex::new(Vec::with_capacity(PolicyKind::ALL.len()));

    thread::scope(|s| {
        for kind in PolicyKind::ALL {
            let results = &results;
            s.spawn(move || {
                let outcome = simulate(kind, pages, frame_count);
                debug!("{} comparison run complete", kind);
                results.lock().push((kind, outcome));
            });
        }
    });

    let mut fifo = None;
    let mut lru = None;
    for (kind, outcome) in results.into_inner() {
        match kind {
            PolicyKind::Fifo => fifo = Some(outcome?),
            PolicyKind::Lru => lru = Some(outcome?),
        }
    }

    match (fifo, lru) {
        (Some(fifo), Some(lru)) => Ok(Comparison { fifo, lru }),
        _ => Err(Error::PolicyInvariant(
            "comparison run produced no result".to_string(),
        )),
    }
}
