//! Frame table - the physical frames and the page table over them.
//!
//! A [`FrameTable`] holds one slot per physical frame plus the metadata
//! every replacement policy shares:
//! - Which page is loaded in each frame (if any)
//! - Dirty flag for write-back accounting
//! - Page table for O(1) residency checks
//! - Free list of frames that have never been filled

use std::collections::HashMap;

use crate::common::{FrameId, PageId};

/// A page currently loaded in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resident {
    /// Which page is loaded.
    pub page_id: PageId,

    /// Whether the page has been written since it was loaded.
    pub dirty: bool,
}

/// The fixed set of physical frames.
///
/// # Invariant
/// `page_table[p] == f` iff `frames[f]` holds page `p`. The key set of the
/// page table is exactly the set of pages loaded in non-empty frames, and
/// a frame is on the free list iff it is empty.
#[derive(Debug, Clone)]
pub struct FrameTable {
    /// One slot per frame, `None` while empty.
    frames: Vec<Option<Resident>>,

    /// Maps resident page IDs to the frame holding them.
    page_table: HashMap<PageId, FrameId>,

    /// Empty frames, stored highest index first so `pop` yields frame 0 first.
    free_list: Vec<FrameId>,
}

impl FrameTable {
    /// Create a table of `capacity` empty frames.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            frames: vec![None; capacity],
            page_table: HashMap::with_capacity(capacity),
            free_list: (0..capacity).rev().map(FrameId::new).collect(),
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Number of frames (immutable after construction).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.frames.len()
    }

    /// Number of frames currently holding a page.
    #[inline]
    pub fn len(&self) -> usize {
        self.page_table.len()
    }

    /// Check if no frame holds a page.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.page_table.is_empty()
    }

    /// Check if every frame holds a page.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.free_list.is_empty()
    }

    /// Number of frames that are still empty.
    #[inline]
    pub fn free_frame_count(&self) -> usize {
        self.free_list.len()
    }

    /// The frame holding `page_id`, if resident.
    #[inline]
    pub fn lookup(&self, page_id: PageId) -> Option<FrameId> {
        self.page_table.get(&page_id).copied()
    }

    /// The page loaded in `frame_id`, or `None` if the frame is empty.
    ///
    /// # Panics
    /// Panics if `frame_id` is out of range.
    #[inline]
    pub fn get(&self, frame_id: FrameId) -> Option<&Resident> {
        self.frames[frame_id.0].as_ref()
    }

    /// Iterate over the non-empty frames in index order.
    pub fn iter(&self) -> impl Iterator<Item = (FrameId, &Resident)> + '_ {
        self.frames
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|r| (FrameId::new(i), r)))
    }

    /// Verify that the page table and the frames agree.
    pub fn is_consistent(&self) -> bool {
        let occupied = self.frames.iter().filter(|slot| slot.is_some()).count();
        occupied == self.page_table.len()
            && occupied + self.free_list.len() == self.capacity()
            && self
                .page_table
                .iter()
                .all(|(&pid, &fid)| matches!(self.get(fid), Some(r) if r.page_id == pid))
            && self.free_list.iter().all(|&fid| self.get(fid).is_none())
    }

    // ========================================================================
    // Mutation (driven by the Mmu only)
    // ========================================================================

    /// Take the lowest-indexed empty frame.
    #[inline]
    pub(crate) fn take_free_frame(&mut self) -> Option<FrameId> {
        self.free_list.pop()
    }

    /// Load `page_id` into an empty frame and register it in the page table.
    pub(crate) fn install(&mut self, frame_id: FrameId, page_id: PageId, dirty: bool) {
        debug_assert!(self.frames[frame_id.0].is_none(), "installing into occupied frame");
        self.frames[frame_id.0] = Some(Resident { page_id, dirty });
        self.page_table.insert(page_id, frame_id);
    }

    /// Remove whatever page `frame_id` holds and return it.
    ///
    /// The frame is left empty but is *not* returned to the free list; the
    /// caller reuses it immediately for the incoming page.
    pub(crate) fn evict(&mut self, frame_id: FrameId) -> Option<Resident> {
        let resident = self.frames[frame_id.0].take()?;
        self.page_table.remove(&resident.page_id);
        Some(resident)
    }

    /// Mark the page in `frame_id` as modified.
    #[inline]
    pub(crate) fn mark_dirty(&mut self, frame_id: FrameId) {
        if let Some(resident) = self.frames[frame_id.0].as_mut() {
            resident.dirty = true;
        }
    }
}
