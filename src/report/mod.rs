//! Presentation layer: reading reference strings and rendering results.
//!
//! Nothing here touches simulation state; it only consumes
//! [`SimulationResult`](crate::sim::SimulationResult) values.

mod input;
mod table;

pub use input::{parse_reference_string, read_reference_string, resolve_reference_string};
pub use table::{render_comparison, render_table, ComparisonTable, Table};
