//! Eviction policy implementations (replacers).
//!
//! Implements:
//! - [`ClockReplacer`] - Second chance over per-frame reference bits
//! - [`LruReplacer`] - Exact least-recently-used over a logical clock
//! - [`RandomReplacer`] - Uniform choice among resident pages
//!
//! [`Policy`] is the closed set of these three, chosen at construction.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::common::{Error, FrameId, PageId, Result};
use crate::mmu::FrameTable;

mod clock;
mod lru;
mod random;

pub use clock::ClockReplacer;
pub use lru::{LruReplacer, Timestamp};
pub use random::{BoxedRng, RandomReplacer};

/// The contract every eviction policy implements.
///
/// The [`Mmu`](crate::Mmu) owns the frame table and the counters; a
/// replacer only keeps its own ordering metadata on top of them.
pub trait Replacer {
    /// Record that `page_id`, held by `frame_id`, was requested.
    ///
    /// Called exactly once per request: on a hit, and on the load that
    /// follows a fault.
    fn record_access(&mut self, frame_id: FrameId, page_id: PageId);

    /// Select a victim frame and drop it from the replacer's metadata.
    ///
    /// Only called when every frame holds a page. Returns `None` only if
    /// the replacer knows of no resident page.
    fn evict(&mut self, frames: &FrameTable) -> Option<FrameId>;
}

/// Names of the available replacement algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Clock,
    Lru,
    Random,
}

impl Algorithm {
    /// All algorithms, in report order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Random, Algorithm::Lru, Algorithm::Clock];

    /// The name used on the command line and in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Clock => "clock",
            Algorithm::Lru => "lru",
            Algorithm::Random => "rand",
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "clock" => Ok(Algorithm::Clock),
            "lru" => Ok(Algorithm::Lru),
            "rand" | "random" => Ok(Algorithm::Random),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A concrete replacer, one variant per [`Algorithm`].
#[derive(Debug)]
pub enum Policy {
    Clock(ClockReplacer),
    Lru(LruReplacer),
    Random(RandomReplacer<BoxedRng>),
}

impl Policy {
    /// Build the replacer for `algorithm` over `frame_count` frames.
    ///
    /// The Random variant draws from a non-deterministic source.
    pub fn new(algorithm: Algorithm, frame_count: usize) -> Self {
        match algorithm {
            Algorithm::Clock => Policy::Clock(ClockReplacer::new(frame_count)),
            Algorithm::Lru => Policy::Lru(LruReplacer::new()),
            Algorithm::Random => {
                Policy::Random(RandomReplacer::boxed(StdRng::from_entropy()))
            }
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Policy::Clock(_) => Algorithm::Clock,
            Policy::Lru(_) => Algorithm::Lru,
            Policy::Random(_) => Algorithm::Random,
        }
    }
}

impl Replacer for Policy {
    #[inline]
    fn record_access(&mut self, frame_id: FrameId, page_id: PageId) {
        match self {
            Policy::Clock(r) => r.record_access(frame_id, page_id),
            Policy::Lru(r) => r.record_access(frame_id, page_id),
            Policy::Random(r) => r.record_access(frame_id, page_id),
        }
    }

    #[inline]
    fn evict(&mut self, frames: &FrameTable) -> Option<FrameId> {
        match self {
            Policy::Clock(r) => r.evict(frames),
            Policy::Lru(r) => r.evict(frames),
            Policy::Random(r) => r.evict(frames),
        }
    }
}
