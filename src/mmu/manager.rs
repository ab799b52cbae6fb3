//! Mmu - the page replacement simulation core.
//!
//! The [`Mmu`] provides:
//! - Residency checks through the page table
//! - Dirty tracking for write-back accounting
//! - Fault, read, write and eviction counters
//! - A replacement policy picked at construction

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, trace};

use crate::common::{AccessKind, Error, FrameId, PageId, Result};
use crate::mmu::replacer::{
    Algorithm, ClockReplacer, LruReplacer, Policy, RandomReplacer, Replacer,
};
use crate::mmu::{FrameTable, MmuStats};

/// Simulates a fixed set of physical frames under one eviction policy.
///
/// # Architecture
/// ```text
/// ┌─────────────────────────────────────────────────────────────┐
/// │                            Mmu                              │
/// │  ┌───────────────────────────────────────────────────────┐  │
/// │  │                  frames: FrameTable                   │  │
/// │  │   page table      slots              free list        │  │
/// │  │  PageId → Fid ─▶ [F0] [F1] [F2] ..   Vec<FrameId>     │  │
/// │  └───────────────────────────────────────────────────────┘  │
/// │  ┌──────────────────┐  ┌──────────────────┐  ┌───────────┐  │
/// │  │ replacer: Policy │  │ stats: MmuStats  │  │debug: bool│  │
/// │  └──────────────────┘  └──────────────────┘  └───────────┘  │
/// └─────────────────────────────────────────────────────────────┘
/// ```
///
/// Every request takes `&mut self`, so one request is always applied as a
/// whole. An instance has a single owner; independent instances may run on
/// separate threads.
///
/// # Usage
/// ```
/// use pagesim::{Mmu, PageId};
///
/// let mut mmu = Mmu::clock(2)?;
/// mmu.read(PageId::new(1));
/// mmu.read(PageId::new(2));
/// mmu.read(PageId::new(3));
///
/// assert_eq!(mmu.total_page_faults(), 3);
/// assert_eq!(mmu.total_disk_reads(), 3);
/// assert_eq!(mmu.total_disk_writes(), 0);
/// # Ok::<(), pagesim::Error>(())
/// ```
#[derive(Debug)]
pub struct Mmu {
    /// Physical frames, page table and free list.
    frames: FrameTable,

    /// Eviction policy for selecting victim frames.
    replacer: Policy,

    /// Fault and I/O counters.
    stats: MmuStats,

    /// Emit a `debug!` event per hit, fault and eviction.
    debug: bool,
}

impl Mmu {
    /// Create an MMU with `frame_count` frames using `algorithm`.
    ///
    /// The Random policy is seeded from the operating system; use
    /// [`Mmu::random_seeded`] or [`MmuConfig::seed`](crate::MmuConfig::seed)
    /// for reproducible runs.
    ///
    /// # Errors
    /// - `Error::InvalidFrameCount` if `frame_count` is 0
    pub fn new(frame_count: usize, algorithm: Algorithm) -> Result<Self> {
        Self::with_policy(frame_count, Policy::new(algorithm, frame_count))
    }

    /// Create an MMU using the Clock policy.
    pub fn clock(frame_count: usize) -> Result<Self> {
        Self::with_policy(frame_count, Policy::Clock(ClockReplacer::new(frame_count)))
    }

    /// Create an MMU using the LRU policy.
    pub fn lru(frame_count: usize) -> Result<Self> {
        Self::with_policy(frame_count, Policy::Lru(LruReplacer::new()))
    }

    /// Create an MMU using the Random policy with an OS-seeded generator.
    pub fn random(frame_count: usize) -> Result<Self> {
        Self::random_with_rng(frame_count, StdRng::from_entropy())
    }

    /// Create an MMU using the Random policy with a fixed seed.
    pub fn random_seeded(frame_count: usize, seed: u64) -> Result<Self> {
        Self::random_with_rng(frame_count, StdRng::seed_from_u64(seed))
    }

    /// Create an MMU using the Random policy drawing from `rng`.
    ///
    /// Any generator works, including `rand::rngs::mock::StepRng` for
    /// scripted victim choices.
    pub fn random_with_rng(
        frame_count: usize,
        rng: impl RngCore + Send + 'static,
    ) -> Result<Self> {
        Self::with_policy(frame_count, Policy::Random(RandomReplacer::boxed(rng)))
    }

    fn with_policy(frame_count: usize, replacer: Policy) -> Result<Self> {
        if frame_count == 0 {
            return Err(Error::InvalidFrameCount(frame_count));
        }

        trace!(frames = frame_count, algorithm = %replacer.algorithm(), "mmu created");

        Ok(Self {
            frames: FrameTable::new(frame_count),
            replacer,
            stats: MmuStats::new(),
            debug: false,
        })
    }

    // ========================================================================
    // Public API: Requests
    // ========================================================================

    /// Record a read of `page_id`, loading it on a miss.
    pub fn read(&mut self, page_id: PageId) {
        self.access(page_id, AccessKind::Load);
    }

    /// Record a write of `page_id`, loading it on a miss and marking it dirty.
    pub fn write(&mut self, page_id: PageId) {
        self.access(page_id, AccessKind::Store);
    }

    /// Apply one request.
    pub fn access(&mut self, page_id: PageId, kind: AccessKind) {
        match self.frames.lookup(page_id) {
            Some(frame_id) => self.handle_hit(frame_id, page_id, kind),
            None => self.handle_fault(page_id, kind),
        }
    }

    // ========================================================================
    // Public API: Debug toggle
    // ========================================================================

    /// Trace every hit, fault and eviction through `tracing::debug!`.
    pub fn set_debug(&mut self) {
        self.debug = true;
    }

    /// Stop per-request tracing.
    pub fn reset_debug(&mut self) {
        self.debug = false;
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    // ========================================================================
    // Public API: Counters and inspection
    // ========================================================================

    pub fn total_disk_reads(&self) -> u64 {
        self.stats.disk_reads()
    }

    pub fn total_disk_writes(&self) -> u64 {
        self.stats.disk_writes()
    }

    pub fn total_page_faults(&self) -> u64 {
        self.stats.page_faults()
    }

    /// Get a copy of all counters.
    pub fn stats(&self) -> MmuStats {
        self.stats
    }

    /// The replacement algorithm in use.
    pub fn algorithm(&self) -> Algorithm {
        self.replacer.algorithm()
    }

    /// Number of physical frames.
    pub fn frame_count(&self) -> usize {
        self.frames.capacity()
    }

    /// Number of frames currently holding a page.
    pub fn resident_count(&self) -> usize {
        self.frames.len()
    }

    pub fn is_resident(&self, page_id: PageId) -> bool {
        self.frames.lookup(page_id).is_some()
    }

    /// The frame holding `page_id`, if resident.
    pub fn frame_of(&self, page_id: PageId) -> Option<FrameId> {
        self.frames.lookup(page_id)
    }

    /// Whether `page_id` is resident and modified. Non-resident pages are clean.
    pub fn is_dirty(&self, page_id: PageId) -> bool {
        self.frames
            .lookup(page_id)
            .and_then(|fid| self.frames.get(fid))
            .is_some_and(|r| r.dirty)
    }

    /// Read-only view of the frame table.
    pub fn frames(&self) -> &FrameTable {
        &self.frames
    }

    // ========================================================================
    // Internal: Hit and fault paths
    // ========================================================================

    fn handle_hit(&mut self, frame_id: FrameId, page_id: PageId, kind: AccessKind) {
        if kind.is_write() {
            self.frames.mark_dirty(frame_id);
        }
        self.replacer.record_access(frame_id, page_id);
        self.stats.record_hit();

        if self.debug {
            debug!(page = page_id.0, frame = frame_id.0, %kind, "hit");
        }
    }

    fn handle_fault(&mut self, page_id: PageId, kind: AccessKind) {
        self.stats.record_fault();

        if self.debug {
            debug!(page = page_id.0, %kind, "page fault");
        }

        let frame_id = self.get_free_frame();

        self.frames.install(frame_id, page_id, kind.is_write());
        self.replacer.record_access(frame_id, page_id);

        if self.debug {
            debug!(page = page_id.0, frame = frame_id.0, dirty = kind.is_write(), "loaded");
        }
    }

    // ========================================================================
    // Internal: Frame allocation and eviction
    // ========================================================================

    /// Get an empty frame, evicting if necessary.
    fn get_free_frame(&mut self) -> FrameId {
        match self.frames.take_free_frame() {
            Some(frame_id) => frame_id,
            None => self.evict_page(),
        }
    }

    /// Evict the policy's victim and return its now-empty frame.
    fn evict_page(&mut self) -> FrameId {
        let Some(frame_id) = self.replacer.evict(&self.frames) else {
            // The table is full and holds at least one frame, so every
            // policy has a candidate.
            unreachable!("no eviction candidate in a full frame table");
        };

        if let Some(victim) = self.frames.evict(frame_id) {
            self.stats.record_eviction(victim.dirty);

            if self.debug {
                debug!(
                    victim = victim.page_id.0,
                    frame = frame_id.0,
                    dirty = victim.dirty,
                    "evicted"
                );
            }
        }

        frame_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn pid(id: u64) -> PageId {
        PageId::new(id)
    }

    fn counters(mmu: &Mmu) -> (u64, u64, u64) {
        (
            mmu.total_page_faults(),
            mmu.total_disk_reads(),
            mmu.total_disk_writes(),
        )
    }

    #[test]
    fn test_zero_frames_rejected() {
        for algorithm in Algorithm::ALL {
            assert_eq!(
                Mmu::new(0, algorithm).unwrap_err(),
                Error::InvalidFrameCount(0)
            );
        }
        assert!(Mmu::random_seeded(0, 1).is_err());
    }

    #[test]
    fn test_new_mmu_is_empty() {
        let mmu = Mmu::lru(4).unwrap();
        assert_eq!(mmu.frame_count(), 4);
        assert_eq!(mmu.resident_count(), 0);
        assert_eq!(counters(&mmu), (0, 0, 0));
        assert_eq!(mmu.algorithm(), Algorithm::Lru);
        assert!(!mmu.is_debug());
    }

    #[test]
    fn test_clock_scenario() {
        let mut mmu = Mmu::clock(2).unwrap();
        mmu.read(pid(1));
        mmu.read(pid(2));
        mmu.read(pid(3));

        assert_eq!(counters(&mmu), (3, 3, 0));
        assert!(!mmu.is_resident(pid(1)));
        assert_eq!(mmu.frame_of(pid(3)), Some(FrameId::new(0)));
        assert_eq!(mmu.frame_of(pid(2)), Some(FrameId::new(1)));
    }

    #[test]
    fn test_lru_scenario_evicts_least_recent() {
        let mut mmu = Mmu::lru(2).unwrap();
        mmu.read(pid(1));
        mmu.read(pid(2));
        mmu.write(pid(1));
        mmu.read(pid(3));

        assert_eq!(counters(&mmu), (3, 3, 0));
        assert!(!mmu.is_resident(pid(2)));
        assert!(mmu.is_dirty(pid(1)));
    }

    #[test]
    fn test_lru_dirty_victim_written_back() {
        let mut mmu = Mmu::lru(1).unwrap();
        mmu.write(pid(5));
        mmu.read(pid(6));

        assert_eq!(counters(&mmu), (2, 2, 1));
        assert_eq!(mmu.stats().evictions(), 1);
    }

    #[test]
    fn test_random_single_frame_dirty_victim() {
        let mut mmu = Mmu::random(1).unwrap();
        mmu.write(pid(7));
        mmu.read(pid(8));

        assert_eq!(counters(&mmu), (2, 2, 1));
        assert!(mmu.is_resident(pid(8)));
    }

    #[test]
    fn test_initial_fill_no_evictions() {
        for algorithm in Algorithm::ALL {
            let mut mmu = Mmu::new(3, algorithm).unwrap();
            for p in 1..=3 {
                mmu.read(pid(p));
            }

            assert_eq!(counters(&mmu), (3, 3, 0));
            assert_eq!(mmu.resident_count(), 3);
            assert_eq!(mmu.stats().evictions(), 0);
            for (i, p) in (1..=3).enumerate() {
                assert_eq!(mmu.frame_of(pid(p)), Some(FrameId::new(i)));
            }
        }
    }

    #[test]
    fn test_hit_does_not_change_counters() {
        let mut mmu = Mmu::clock(2).unwrap();
        mmu.read(pid(1));
        let before = counters(&mmu);

        mmu.read(pid(1));
        mmu.write(pid(1));
        mmu.read(pid(1));

        assert_eq!(counters(&mmu), before);
        assert_eq!(mmu.stats().hits(), 3);
    }

    #[test]
    fn test_write_hit_marks_dirty_read_hit_keeps_it() {
        let mut mmu = Mmu::lru(2).unwrap();
        mmu.read(pid(1));
        assert!(!mmu.is_dirty(pid(1)));

        mmu.write(pid(1));
        assert!(mmu.is_dirty(pid(1)));

        mmu.read(pid(1));
        assert!(mmu.is_dirty(pid(1)));
    }

    #[test]
    fn test_reloaded_page_starts_clean() {
        let mut mmu = Mmu::lru(1).unwrap();
        mmu.write(pid(1));
        mmu.read(pid(2)); // Evicts dirty page 1
        mmu.read(pid(1)); // Evicts clean page 2, reloads page 1 clean

        assert!(!mmu.is_dirty(pid(1)));
        assert_eq!(counters(&mmu), (3, 3, 1));
    }

    #[test]
    fn test_clock_second_chance_through_mmu() {
        let mut mmu = Mmu::clock(3).unwrap();
        mmu.read(pid(1));
        mmu.read(pid(2));
        mmu.read(pid(3));
        mmu.read(pid(4)); // Clears all bits, evicts page 1 from frame 0; hand at 1
        mmu.read(pid(2)); // Hit: frame 1 referenced again
        mmu.read(pid(5)); // Frame 1 gets a second chance, page 3 in frame 2 goes

        assert!(mmu.is_resident(pid(2)));
        assert!(!mmu.is_resident(pid(3)));
        assert_eq!(mmu.frame_of(pid(5)), Some(FrameId::new(2)));
    }

    #[test]
    fn test_access_matches_read_write() {
        let mut a = Mmu::lru(2).unwrap();
        let mut b = Mmu::lru(2).unwrap();
        let requests = [(1, AccessKind::Store), (2, AccessKind::Load), (3, AccessKind::Load)];

        for (p, kind) in requests {
            a.access(pid(p), kind);
            match kind {
                AccessKind::Load => b.read(pid(p)),
                AccessKind::Store => b.write(pid(p)),
            }
        }

        assert_eq!(a.stats(), b.stats());
    }

    #[test]
    fn test_debug_toggle_does_not_change_counters() {
        let requests = [1u64, 2, 3, 1, 4, 2, 5, 1];

        let mut quiet = Mmu::clock(2).unwrap();
        let mut verbose = Mmu::clock(2).unwrap();
        verbose.set_debug();
        assert!(verbose.is_debug());

        for &p in &requests {
            quiet.write(pid(p));
            verbose.write(pid(p));
        }

        assert_eq!(quiet.stats(), verbose.stats());
        verbose.reset_debug();
        assert!(!verbose.is_debug());
    }

    #[test]
    fn test_frames_stay_consistent() {
        let mut mmu = Mmu::random_seeded(4, 11).unwrap();
        for i in 0..200u64 {
            if i % 3 == 0 {
                mmu.write(pid(i % 13));
            } else {
                mmu.read(pid((i * 7) % 17));
            }
            assert!(mmu.frames().is_consistent());
        }
    }
    #[test]
    fn test_frame_table_owns_page_table_and_free_list() {
        let mut mmu = Mmu::clock(3).unwrap();
        assert_eq!(mmu.frames().free_frame_count(), 3);

        mmu.write(pid(9));
        let table = mmu.frames();
        assert_eq!(table.free_frame_count(), 2);
        assert_eq!(table.lookup(pid(9)), Some(FrameId::new(0)));
        assert_eq!(table.lookup(pid(9)), mmu.frame_of(pid(9)));

        let resident = table.get(FrameId::new(0)).unwrap();
        assert_eq!(resident.page_id, pid(9));
        assert!(resident.dirty);
    }

    #[test]
    fn test_random_with_injected_rng() {
        // A zero-step generator always draws the low end, so frame 0 is
        // the victim every time.
        let mut mmu = Mmu::random_with_rng(3, StepRng::new(0, 0)).unwrap();
        assert_eq!(mmu.algorithm(), Algorithm::Random);

        mmu.read(pid(1));
        mmu.read(pid(2));
        mmu.read(pid(3));
        mmu.write(pid(4));
        assert!(!mmu.is_resident(pid(1)));
        assert_eq!(mmu.frame_of(pid(4)), Some(FrameId::new(0)));

        mmu.read(pid(5));
        assert!(!mmu.is_resident(pid(4)));
        assert_eq!(mmu.frame_of(pid(5)), Some(FrameId::new(0)));
        assert!(mmu.is_resident(pid(2)));
        assert!(mmu.is_resident(pid(3)));
        assert_eq!(counters(&mmu), (5, 5, 1));
    }

    #[test]
    fn test_random_seeded_matches_injected_std_rng() {
        let mut seeded = Mmu::random_seeded(4, 21).unwrap();
        let mut injected = Mmu::random_with_rng(4, StdRng::seed_from_u64(21)).unwrap();

        for i in 0..300u64 {
            let page = pid((i * 11) % 19);
            if i % 4 == 0 {
                seeded.write(page);
                injected.write(page);
            } else {
                seeded.read(page);
                injected.read(page);
            }
        }
        assert_eq!(seeded.stats(), injected.stats());
    }
}
