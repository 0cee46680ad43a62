//! Page-replacement simulation.
//!
//! A simulation replays a reference string against a fixed number of
//! frames and records the frame contents after every request.
//!
//! # Components
//! - [`Simulator`] - The shared replay loop
//! - [`FrameSet`] - Frame slots plus the residency index
//! - [`policy`] - Replacement policy implementations (FIFO, LRU)
//! - [`SimulationResult`] / [`StepRecord`] - Per-step history
//! - [`SimulationStats`] - Request, fault and hit counters
//! - [`compare`] - Both policies side by side

mod compare;
mod frame_set;
mod history;
pub mod policy;
mod simulator;
mod stats;

pub use compare::{compare, Comparison};
pub use frame_set::FrameSet;
pub use history::{Outcome, SimulationResult, StepRecord};
pub use policy::{FifoPolicy, LruPolicy, PolicyKind, ReplacementPolicy};
pub use simulator::{simulate, simulate_config, simulate_fifo, simulate_lru, Simulator};
pub use stats::SimulationStats;
