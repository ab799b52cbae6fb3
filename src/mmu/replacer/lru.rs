//! LRU (Least Recently Used) replacement policy.
//!
//! Every request advances a logical clock and stamps the requested page.
//! The victim is the resident page with the oldest stamp.
//!
//! Stamps are kept twice: by page for updates, and in an ordered index
//! for O(log n) victim selection.

use std::collections::{BTreeMap, HashMap};

use crate::common::{FrameId, PageId};
use crate::mmu::replacer::Replacer;
use crate::mmu::FrameTable;

/// Logical time of the last request for a page.
pub type Timestamp = u64;

/// Exact LRU over a logical clock.
#[derive(Debug, Clone, Default)]
pub struct LruReplacer {
    /// Ticks once per request.
    current_timestamp: Timestamp,

    /// Last request time of each resident page.
    last_used: HashMap<PageId, Timestamp>,

    /// Resident pages ordered by (last use, page ID), oldest first.
    ///
    /// The page ID in the key makes the order total: equal stamps resolve
    /// to the lowest page number.
    recency: BTreeMap<(Timestamp, PageId), FrameId>,
}

impl LruReplacer {
    /// Create an empty LRU replacer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pages tracked.
    #[inline]
    pub fn size(&self) -> usize {
        self.last_used.len()
    }

    /// Logical time of the most recent request.
    #[inline]
    pub fn current_timestamp(&self) -> Timestamp {
        self.current_timestamp
    }

    /// Logical time `page_id` was last requested, if tracked.
    #[inline]
    pub fn last_used(&self, page_id: PageId) -> Option<Timestamp> {
        self.last_used.get(&page_id).copied()
    }
}

impl Replacer for LruReplacer {
    fn record_access(&mut self, frame_id: FrameId, page_id: PageId) {
        self.current_timestamp += 1;
        let now = self.current_timestamp;

        if let Some(previous) = self.last_used.insert(page_id, now) {
            self.recency.remove(&(previous, page_id));
        }
        self.recency.insert((now, page_id), frame_id);
    }

    fn evict(&mut self, _frames: &FrameTable) -> Option<FrameId> {
        let ((_, page_id), frame_id) = self.recency.pop_first()?;
        self.last_used.remove(&page_id);
        Some(frame_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> FrameTable {
        FrameTable::new(0)
    }

    #[test]
    fn test_lru_evicts_oldest() {
        let mut replacer = LruReplacer::new();

        replacer.record_access(FrameId::new(0), PageId::new(10));
        replacer.record_access(FrameId::new(1), PageId::new(11));
        replacer.record_access(FrameId::new(2), PageId::new(12));

        assert_eq!(replacer.size(), 3);
        assert_eq!(replacer.evict(&table()), Some(FrameId::new(0)));
        assert_eq!(replacer.evict(&table()), Some(FrameId::new(1)));
        assert_eq!(replacer.evict(&table()), Some(FrameId::new(2)));
        assert_eq!(replacer.evict(&table()), None);
    }

    #[test]
    fn test_lru_reaccess_reorders() {
        let mut replacer = LruReplacer::new();

        replacer.record_access(FrameId::new(0), PageId::new(1));
        replacer.record_access(FrameId::new(1), PageId::new(2));
        replacer.record_access(FrameId::new(0), PageId::new(1)); // Page 1 is now newest

        assert_eq!(replacer.size(), 2);
        assert_eq!(replacer.evict(&table()), Some(FrameId::new(1)));
        assert_eq!(replacer.evict(&table()), Some(FrameId::new(0)));
    }

    #[test]
    fn test_lru_clock_ticks_per_access() {
        let mut replacer = LruReplacer::new();

        replacer.record_access(FrameId::new(0), PageId::new(1));
        replacer.record_access(FrameId::new(0), PageId::new(1));
        replacer.record_access(FrameId::new(1), PageId::new(2));

        assert_eq!(replacer.current_timestamp(), 3);
        assert_eq!(replacer.last_used(PageId::new(1)), Some(2));
        assert_eq!(replacer.last_used(PageId::new(2)), Some(3));
    }

    #[test]
    fn test_lru_evict_forgets_page() {
        let mut replacer = LruReplacer::new();

        replacer.record_access(FrameId::new(0), PageId::new(5));
        assert_eq!(replacer.evict(&table()), Some(FrameId::new(0)));

        assert_eq!(replacer.last_used(PageId::new(5)), None);
        assert_eq!(replacer.size(), 0);
    }
}
