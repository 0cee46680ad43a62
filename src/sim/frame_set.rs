//! FrameSet - the simulated physical memory.
//!
//! A [`FrameSet`] holds a fixed number of slots plus a residency index:
//! - Which page each slot holds (if any)
//! - Which slot a resident page lives in

use std::collections::HashMap;

use crate::common::{Error, FrameId, PageId, Result};

/// Fixed-capacity frame slots with an O(1) residency index.
///
/// # Invariants
/// - The non-empty slots hold exactly the keys of `residency`.
/// - `residency[p] == f` iff `slots[f.0] == Some(p)`.
/// - Slots fill lowest-index first and never empty again; a full set only
///   changes by replacing one page with another.
#[derive(Debug, Clone)]
pub struct FrameSet {
    /// Page held by each slot, `None` if empty.
    slots: Vec<Option<PageId>>,

    /// Maps resident pages to their slot.
    residency: HashMap<PageId, FrameId>,
}

impl FrameSet {
    /// Create a frame set with `capacity` empty slots.
    ///
    /// # Errors
    /// - `Error::InvalidFrameCount` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidFrameCount(0));
        }

        Ok(Self {
            slots: vec![None; capacity],
            residency: HashMap::with_capacity(capacity),
        })
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.residency.len()
    }

    /// True if no page is resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.residency.is_empty()
    }

    /// True if every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Check whether a page is resident.
    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.residency.contains_key(&page)
    }

    /// Slot holding `page`, if resident.
    #[inline]
    pub fn frame_of(&self, page: PageId) -> Option<FrameId> {
        self.residency.get(&page).copied()
    }

    /// Page held by a slot.
    #[inline]
    pub fn page_in(&self, frame_id: FrameId) -> Option<PageId> {
        self.slots.get(frame_id.0).copied().flatten()
    }

    /// Borrow the slot contents in slot order.
    #[inline]
    pub fn slots(&self) -> &[Option<PageId>] {
        &self.slots
    }

    /// Owned copy of the slot contents, used for step snapshots.
    pub fn snapshot(&self) -> Vec<Option<PageId>> {
        self.slots.clone()
    }

    /// Resident pages, sorted ascending.
    pub fn resident_pages(&self) -> Vec<PageId> {
        let mut pages: Vec<PageId> = self.residency.keys().copied().collect();
        pages.sort_unstable();
        pages
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Place a page into the lowest-index empty slot.
    ///
    /// # Errors
    /// - `Error::PolicyInvariant` if the set is full or the page is
    ///   already resident
    pub fn place(&mut self, page: PageId) -> Result<FrameId> {
        if self.contains(page) {
            return Err(Error::PolicyInvariant(format!(
                "page {} placed while already resident",
                page
            )));
        }

        // Slots never empty, so the first empty slot is always at `len`.
        let frame_id = FrameId::new(self.len());
        if !matches!(self.slots.get(frame_id.0), Some(None)) {
            return Err(Error::PolicyInvariant(format!(
                "no empty slot for page {}",
                page
            )));
        }
        self.slots[frame_id.0] = Some(page);

        self.residency.insert(page, frame_id);
        Ok(frame_id)
    }

    /// Overwrite the slot of resident page `victim` with `page`.
    ///
    /// # Errors
    /// - `Error::PolicyInvariant` if `victim` is not resident or `page`
    ///   already is
    pub fn replace(&mut self, victim: PageId, page: PageId) -> Result<FrameId> {
        if self.contains(page) {
            return Err(Error::PolicyInvariant(format!(
                "page {} swapped in while already resident",
                page
            )));
        }

        let frame_id = self.residency.remove(&victim).ok_or_else(|| {
            Error::PolicyInvariant(format!("eviction victim {} is not resident", victim))
        })?;

        self.slots[frame_id.0] = Some(page);
        self.residency.insert(page, frame_id);
        Ok(frame_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frame_set_is_empty() {
        let frames = FrameSet::new(3).unwrap();
        assert_eq!(frames.capacity(), 3);
        assert_eq!(frames.len(), 0);
        assert!(frames.is_empty());
        assert!(!frames.is_full());
        let empty: Vec<Option<PageId>> = vec![None; 3];
        assert_eq!(frames.slots(), empty.as_slice());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(matches!(FrameSet::new(0), Err(Error::InvalidFrameCount(0))));
    }

    #[test]
    fn test_place_fills_lowest_slot_first() {
        let mut frames = FrameSet::new(3).unwrap();

        assert_eq!(frames.place(PageId::new(7)).unwrap(), FrameId::new(0));
        assert_eq!(frames.place(PageId::new(2)).unwrap(), FrameId::new(1));

        assert_eq!(
            frames.snapshot(),
            vec![Some(PageId::new(7)), Some(PageId::new(2)), None]
        );
        assert_eq!(frames.frame_of(PageId::new(2)), Some(FrameId::new(1)));
        assert_eq!(frames.page_in(FrameId::new(0)), Some(PageId::new(7)));
        assert_eq!(frames.page_in(FrameId::new(2)), None);
    }

    #[test]
    fn test_place_when_full_fails() {
        let mut frames = FrameSet::new(1).unwrap();
        frames.place(PageId::new(1)).unwrap();
        assert!(frames.is_full());

        assert!(matches!(
            frames.place(PageId::new(2)),
            Err(Error::PolicyInvariant(_))
        ));
    }

    #[test]
    fn test_place_duplicate_fails() {
        let mut frames = FrameSet::new(2).unwrap();
        frames.place(PageId::new(1)).unwrap();
        assert!(frames.place(PageId::new(1)).is_err());
        assert_eq!(frames.len(), 1);
    }

    #[test]
    fn test_replace_reuses_victim_slot() {
        let mut frames = FrameSet::new(2).unwrap();
        frames.place(PageId::new(1)).unwrap();
        frames.place(PageId::new(2)).unwrap();

        let slot = frames.replace(PageId::new(1), PageId::new(9)).unwrap();

        assert_eq!(slot, FrameId::new(0));
        assert!(!frames.contains(PageId::new(1)));
        assert!(frames.contains(PageId::new(9)));
        assert_eq!(frames.resident_pages(), vec![PageId::new(2), PageId::new(9)]);
        assert_eq!(frames.len(), 2);
    }

    #[test]
    fn test_replace_missing_victim_fails() {
        let mut frames = FrameSet::new(2).unwrap();
        frames.place(PageId::new(1)).unwrap();

        assert!(frames.replace(PageId::new(5), PageId::new(6)).is_err());
        // Nothing changed
        assert_eq!(frames.resident_pages(), vec![PageId::new(1)]);
    }
}
