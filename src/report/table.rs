//! Tabular rendering of simulation results.
//!
//! Time runs left to right: one column per request, one row per frame.
//!
//! ```text
//! FIFO Algorithm Simulation
//! Number of Frames: 3
//!
//! Reference String:
//!                   1   2   3   1   2   4
//!
//! Frame 1:          1   1   1   1   1   4
//! Frame 2:          -   2   2   2   2   2
//! Frame 3:          -   -   3   3   3   3
//!
//! Hit/Fault:        F   F   F   H   H   F
//!
//! Total Page Requests: 6
//! Total Page Faults: 4
//! Total Page Hits: 2
//! ```

use std::fmt;

use crate::common::config::{CELL_WIDTH, EMPTY_FRAME_MARKER, LABEL_WIDTH};
use crate::common::FrameId;
use crate::sim::{Comparison, SimulationResult};

/// `Display` adapter rendering one result as a table.
pub struct Table<'a>(pub &'a SimulationResult);

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;

        writeln!(f, "{} Algorithm Simulation", result.policy())?;
        writeln!(f, "Number of Frames: {}", result.frame_count())?;
        writeln!(f)?;

        writeln!(f, "Reference String:")?;
        write_row(f, "", result.reference().iter().map(|p| p.to_string()))?;
        writeln!(f)?;

        for slot in 0..result.frame_count() {
            let frame_id = FrameId::new(slot);
            let cells = result.steps().iter().map(move |step| match step.frames[slot] {
                Some(page) => page.to_string(),
                None => EMPTY_FRAME_MARKER.to_string(),
            });
            write_row(f, &format!("{}:", frame_id), cells)?;
        }
        writeln!(f)?;

        write_row(
            f,
            "Hit/Fault:",
            result.steps().iter().map(|s| s.outcome.to_string()),
        )?;
        writeln!(f)?;

        writeln!(f, "Total Page Requests: {}", result.requests())?;
        writeln!(f, "Total Page Faults: {}", result.faults())?;
        write!(f, "Total Page Hits: {}", result.hits())
    }
}

/// One labelled row of fixed-width cells, trailing padding trimmed.
///
/// Every cell ends in at least one space, so values wider than the
/// column still stay apart.
fn write_row<I>(f: &mut fmt::Formatter<'_>, label: &str, cells: I) -> fmt::Result
where
    I: Iterator<Item = String>,
{
    let mut line = format!("{:<width$}", label, width = LABEL_WIDTH);
    for cell in cells {
        line.push_str(&format!("{:<width$} ", cell, width = CELL_WIDTH - 1));
    }
    writeln!(f, "{}", line.trim_end())
}

/// Render one result as a table.
pub fn render_table(result: &SimulationResult) -> String {
    Table(result).to_string()
}

/// `Display` adapter rendering both tables of a comparison and a verdict.
pub struct ComparisonTable<'a>(pub &'a Comparison);

impl fmt::Display for ComparisonTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cmp = self.0;

        writeln!(f, "{}", Table(&cmp.fifo))?;
        writeln!(f)?;
        writeln!(f, "{}", Table(&cmp.lru))?;
        writeln!(f)?;

        match cmp.first_divergence() {
            // Steps are shown 1-based.
            Some(step) => writeln!(f, "Frame contents first diverge at step {}", step + 1)?,
            None => writeln!(f, "Frame contents never diverge")?,
        }
        match cmp.fewer_faults() {
            Some(kind) => write!(
                f,
                "{} had fewer faults ({} vs {})",
                kind,
                cmp.fifo.faults().min(cmp.lru.faults()),
                cmp.fifo.faults().max(cmp.lru.faults())
            ),
            None => write!(f, "FIFO and LRU tie at {} faults", cmp.fifo.faults()),
        }
    }
}

/// Render a comparison.
pub fn render_comparison(comparison: &Comparison) -> String {
    ComparisonTable(comparison).to_string()
}
