//! Simulation statistics tracking.

use std::fmt;

/// Aggregate counters for one simulation run.
///
/// Runs are single-threaded, so plain integers suffice.
/// `faults + hits == requests` holds after every step.
///
/// # Example
/// ```
/// use pagesim::SimulationStats;
///
/// let mut stats = SimulationStats::new();
/// stats.record_fault(false);
/// stats.record_hit();
/// assert_eq!(stats.requests, 2);
/// assert_eq!(stats.hit_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    /// Number of page requests processed.
    pub requests: u64,

    /// Number of requests for a non-resident page.
    pub faults: u64,

    /// Number of requests for a resident page.
    pub hits: u64,

    /// Number of faults that displaced a resident page.
    pub evictions: u64,
}

impl SimulationStats {
    /// Create a tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a hit.
    #[inline]
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.hits += 1;
    }

    /// Count a fault, noting whether it evicted a page.
    #[inline]
    pub fn record_fault(&mut self, evicted: bool) {
        self.requests += 1;
        self.faults += 1;
        if evicted {
            self.evictions += 1;
        }
    }

    /// Hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        ratio(self.hits, self.requests)
    }

    /// Fault rate (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        ratio(self.faults, self.requests)
    }
}

fn ratio(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ requests: {}, faults: {}, hits: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.requests,
            self.faults,
            self.hits,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
