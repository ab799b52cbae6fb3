//! MMU statistics tracking.

use std::fmt;

/// Counters tracked by an [`Mmu`](crate::Mmu).
///
/// Fields are private: only the owning MMU mutates them, and callers get
/// a copy through [`Mmu::stats`](crate::Mmu::stats). All counters are
/// monotonically non-decreasing for the lifetime of the MMU.
///
/// # Example
/// ```
/// use pagesim::{Mmu, PageId};
///
/// let mut mmu = Mmu::lru(2).unwrap();
/// mmu.read(PageId::new(1));
/// mmu.read(PageId::new(1));
///
/// let stats = mmu.stats();
/// assert_eq!(stats.page_faults(), 1);
/// assert_eq!(stats.hits(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MmuStats {
    /// Requests for a page that was already resident.
    hits: u64,

    /// Requests for a page that was not resident.
    page_faults: u64,

    /// Resident pages removed to make room for a faulting page.
    evictions: u64,

    /// Pages loaded from disk.
    disk_reads: u64,

    /// Dirty victims written back to disk.
    disk_writes: u64,
}

impl MmuStats {
    /// Create a tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    #[inline]
    pub fn page_faults(&self) -> u64 {
        self.page_faults
    }

    #[inline]
    pub fn evictions(&self) -> u64 {
        self.evictions
    }

    #[inline]
    pub fn disk_reads(&self) -> u64 {
        self.disk_reads
    }

    #[inline]
    pub fn disk_writes(&self) -> u64 {
        self.disk_writes
    }

    /// Total number of requests seen.
    #[inline]
    pub fn accesses(&self) -> u64 {
        self.hits + self.page_faults
    }

    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.accesses();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // ========================================================================
    // Recording (Mmu only)
    // ========================================================================

    #[inline]
    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// A fault always loads the page, so it counts one disk read too.
    #[inline]
    pub(crate) fn record_fault(&mut self) {
        self.page_faults += 1;
        self.disk_reads += 1;
    }

    #[inline]
    pub(crate) fn record_eviction(&mut self, dirty: bool) {
        self.evictions += 1;
        if dirty {
            self.disk_writes += 1;
        }
    }
}

impl fmt::Display for MmuStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ faults: {}, reads: {}, writes: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.page_faults,
            self.disk_reads,
            self.disk_writes,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
