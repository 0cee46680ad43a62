//! pagesim - FIFO and LRU page-replacement simulation.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            Presentation (report/, main.rs)              │   │
//! │  │   reference string parsing → table / comparison text    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Simulation (sim/)                       │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │     Replacement Policies: FIFO | LRU            │   │   │
//! │  │   │          (selected per run)                     │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │     Simulator + FrameSet + StepRecord history + Stats    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`sim`] - Simulation loop, frame set and replacement policies
//! - [`report`] - Reference string input and tabular output
//!
//! # Quick Start
//! ```
//! use pagesim::{pages, simulate_fifo, simulate_lru, Outcome::*};
//!
//! let input = pages(&[1, 2, 3, 1, 2, 4]);
//!
//! let fifo = simulate_fifo(&input, 3).unwrap();
//! let lru = simulate_lru(&input, 3).unwrap();
//!
//! // Same hit/fault pattern...
//! assert_eq!(fifo.outcomes(), vec![Fault, Fault, Fault, Hit, Hit, Fault]);
//! assert_eq!(lru.outcomes(), fifo.outcomes());
//!
//! // ...but different victims.
//! assert_eq!(fifo.resident_pages(), pages(&[2, 3, 4]));
//! assert_eq!(lru.resident_pages(), pages(&[1, 2, 4]));
//! ```

pub mod common;
pub mod report;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::{pages, Error, FrameId, PageId, Result, SimConfig};

pub use sim::{
    compare, simulate, simulate_config, simulate_fifo, simulate_lru, Comparison, FifoPolicy,
    FrameSet, LruPolicy, Outcome, PolicyKind, ReplacementPolicy, SimulationResult,
    SimulationStats, Simulator, StepRecord,
};
