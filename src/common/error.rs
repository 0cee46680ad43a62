//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Simulation itself is total for valid input, so most variants describe
/// caller mistakes caught before any step is processed.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading a reference string from disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Frame count was zero or negative.
    #[error("Invalid frame count: {0} (must be at least 1)")]
    InvalidFrameCount(i64),

    /// Frame count exceeds the configured maximum.
    #[error("Frame count {requested} exceeds maximum of {max}")]
    FrameCountTooLarge { requested: usize, max: usize },

    /// No reference string was supplied at all.
    ///
    /// Distinct from an empty reference string, which is valid input.
    #[error("No reference string supplied")]
    MissingReferenceString,

    /// A token in a textual reference string is not a page number.
    #[error("Invalid page token: {0:?}")]
    InvalidPageToken(String),

    /// Policy name not recognised.
    #[error("Unknown replacement policy: {0:?} (expected \"fifo\" or \"lru\")")]
    UnknownPolicy(String),

    /// Frame set and policy state disagree.
    ///
    /// This indicates a bug - the two are updated in lockstep.
    #[error("Policy state out of sync: {0}")]
    PolicyInvariant(String),
}
