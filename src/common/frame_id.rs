//! Frame identifier type.

use std::fmt;

/// Identifies a slot in the simulated frame set.
///
/// Using `usize` because:
/// 1. Slots are stored in `Vec<Option<PageId>>`
/// 2. Direct indexing without casting: `slots[frame_id.0]`
///
/// # Example
/// ```
/// use pagesim::FrameId;
///
/// let frame_id = FrameId::new(0);
/// assert_eq!(frame_id.to_string(), "Frame 1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }
}

impl fmt::Display for FrameId {
    /// Frames are numbered from 1 when shown to people.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame {}", self.0 + 1)
    }
}
