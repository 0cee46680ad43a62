//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and validated run settings
//! - Error types
//! - Identifiers (PageId, FrameId)

pub mod config;
pub mod error;
mod frame_id;
mod page_id;

pub use config::SimConfig;
pub use error::{Error, Result};
pub use frame_id::FrameId;
pub use page_id::{pages, PageId};
