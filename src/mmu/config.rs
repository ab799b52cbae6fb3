//! Builder for [`Mmu`] instances.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::common::config::DEFAULT_FRAMES;
use crate::common::Result;
use crate::mmu::replacer::Algorithm;
use crate::mmu::Mmu;

/// Everything needed to construct an [`Mmu`].
///
/// # Example
/// ```
/// use pagesim::{Algorithm, MmuConfig};
///
/// let mmu = MmuConfig::new(16)
///     .algorithm(Algorithm::Random)
///     .seed(42)
///     .build()?;
/// assert_eq!(mmu.frame_count(), 16);
/// # Ok::<(), pagesim::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MmuConfig {
    frames: usize,
    algorithm: Algorithm,
    seed: Option<u64>,
    debug: bool,
}

impl MmuConfig {
    /// Start a configuration with `frames` frames and the Clock policy.
    pub fn new(frames: usize) -> Self {
        Self {
            frames,
            ..Self::default()
        }
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Seed the Random policy. Ignored by Clock and LRU.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Build the MMU.
    ///
    /// # Errors
    /// - `Error::InvalidFrameCount` if the frame count is 0
    pub fn build(self) -> Result<Mmu> {
        let mut mmu = match (self.algorithm, self.seed) {
            (Algorithm::Random, Some(seed)) => {
                Mmu::random_with_rng(self.frames, StdRng::seed_from_u64(seed))?
            }
            (algorithm, _) => Mmu::new(self.frames, algorithm)?,
        };

        if self.debug {
            mmu.set_debug();
        }
        Ok(mmu)
    }
}

impl Default for MmuConfig {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAMES,
            algorithm: Algorithm::Clock,
            seed: None,
            debug: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Error, PageId};

    #[test]
    fn test_default_config() {
        let mmu = MmuConfig::default().build().unwrap();
        assert_eq!(mmu.frame_count(), DEFAULT_FRAMES);
        assert_eq!(mmu.algorithm(), Algorithm::Clock);
        assert!(!mmu.is_debug());
    }

    #[test]
    fn test_build_rejects_zero_frames() {
        let err = MmuConfig::new(0).algorithm(Algorithm::Lru).build().unwrap_err();
        assert_eq!(err, Error::InvalidFrameCount(0));
    }

    #[test]
    fn test_debug_flag_applied() {
        let mmu = MmuConfig::new(2).debug(true).build().unwrap();
        assert!(mmu.is_debug());
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let config = MmuConfig::new(4).algorithm(Algorithm::Random).seed(1234);
        let mut a = config.build().unwrap();
        let mut b = config.build().unwrap();

        for i in 0..500u64 {
            let page = PageId::new((i * i + 3 * i) % 23);
            a.write(page);
            b.write(page);
        }

        assert_eq!(a.stats(), b.stats());
        let resident_a: Vec<_> = a.frames().iter().map(|(_, r)| r.page_id).collect();
        let resident_b: Vec<_> = b.frames().iter().map(|(_, r)| r.page_id).collect();
        assert_eq!(resident_a, resident_b);
    }
}
