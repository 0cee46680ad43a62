//! Configuration constants and validated run settings.

use crate::common::{Error, Result};
use crate::sim::PolicyKind;

/// Frame count used when the caller does not pick one.
///
/// Three frames is the textbook size for hand-traceable reference strings.
pub const DEFAULT_FRAME_COUNT: usize = 3;

/// Upper bound on frames per run.
///
/// Each step snapshots the whole frame set, so history memory grows as
/// `requests × frames`. The cap keeps a typo from allocating gigabytes.
pub const MAX_FRAME_COUNT: usize = 4096;

/// Width of one time-step column in the rendered table.
pub const CELL_WIDTH: usize = 4;

/// Width of the row-label column (`"Frame 12:"`, `"Hit/Fault:"`).
pub const LABEL_WIDTH: usize = 18;

/// Placeholder printed for an empty frame.
pub const EMPTY_FRAME_MARKER: &str = "-";

/// Validated settings for one simulation run.
///
/// # Example
/// ```
/// use pagesim::{PolicyKind, SimConfig};
///
/// let config = SimConfig::new(3, PolicyKind::Lru).unwrap();
/// assert_eq!(config.frames(), 3);
///
/// assert!(SimConfig::new(0, PolicyKind::Fifo).is_err());
/// assert!(SimConfig::new(-2, PolicyKind::Fifo).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    frames: usize,
    policy: PolicyKind,
}

impl SimConfig {
    /// Validate a frame count and pair it with a policy.
    ///
    /// Takes a signed count so negative user input is reported as such
    /// rather than wrapping.
    ///
    /// # Errors
    /// - `Error::InvalidFrameCount` if `frames <= 0`
    /// - `Error::FrameCountTooLarge` if `frames > MAX_FRAME_COUNT`
    pub fn new(frames: i64, policy: PolicyKind) -> Result<Self> {
        let frames = validate_frame_count(frames)?;
        Ok(Self { frames, policy })
    }

    /// Number of frames.
    #[inline]
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Replacement policy.
    #[inline]
    pub fn policy(&self) -> PolicyKind {
        self.policy
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAME_COUNT,
            policy: PolicyKind::Fifo,
        }
    }
}

/// Check a signed frame count and convert it to `usize`.
pub fn validate_frame_count(frames: i64) -> Result<usize> {
    if frames <= 0 {
        return Err(Error::InvalidFrameCount(frames));
    }
    let frames = usize::try_from(frames).map_err(|_| Error::FrameCountTooLarge {
        requested: usize::MAX,
        max: MAX_FRAME_COUNT,
    })?;
    if frames > MAX_FRAME_COUNT {
        return Err(Error::FrameCountTooLarge {
            requested: frames,
            max: MAX_FRAME_COUNT,
        });
    }
    Ok(frames)
}
