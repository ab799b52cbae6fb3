//! Random replacement policy.
//!
//! Keeps no recency state at all. The random source is a type parameter so
//! tests and experiments can pin it to a seed or swap in another generator.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::common::{FrameId, PageId};
use crate::mmu::replacer::Replacer;
use crate::mmu::FrameTable;

/// A type-erased random source, as held by [`Policy`](super::Policy).
pub type BoxedRng = Box<dyn RngCore + Send>;

/// Uniform eviction among resident pages.
#[derive(Clone)]
pub struct RandomReplacer<R = StdRng> {
    rng: R,
}

impl<R> fmt::Debug for RandomReplacer<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomReplacer").finish_non_exhaustive()
    }
}

impl RandomReplacer<StdRng> {
    /// Create a replacer seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a replacer whose choices are reproducible for `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomReplacer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomReplacer<R> {
    /// Create a replacer drawing from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomReplacer<BoxedRng> {
    /// Create a replacer drawing from any generator, boxed.
    pub fn boxed(rng: impl RngCore + Send + 'static) -> Self {
        Self::with_rng(Box::new(rng))
    }
}

impl<R: Rng> Replacer for RandomReplacer<R> {
    fn record_access(&mut self, _frame_id: FrameId, _page_id: PageId) {}

    /// Draw one frame uniformly.
    ///
    /// Eviction only happens with a full table, so every frame holds a
    /// resident page and a uniform frame is a uniform resident page.
    fn evict(&mut self, frames: &FrameTable) -> Option<FrameId> {
        if frames.is_empty() {
            return None;
        }
        debug_assert!(frames.is_full(), "random eviction with free frames");

        Some(FrameId::new(self.rng.gen_range(0..frames.capacity())))
    }
}
