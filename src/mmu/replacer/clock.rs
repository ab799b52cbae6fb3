//! CLOCK (second chance) replacement policy.
//!
//! Frames sit on a circular list swept by a hand. Every access sets the
//! frame's reference bit; the hand clears set bits as it passes and stops
//! at the first frame whose bit is already clear.

use crate::common::{FrameId, PageId};
use crate::mmu::replacer::Replacer;
use crate::mmu::FrameTable;

/// Second chance eviction over per-frame reference bits.
#[derive(Debug, Clone)]
pub struct ClockReplacer {
    /// One reference bit per frame.
    reference_bits: Vec<bool>,

    /// Next frame the hand examines.
    hand: usize,
}

impl ClockReplacer {
    /// Create a replacer for `frame_count` frames, all bits clear, hand at 0.
    pub fn new(frame_count: usize) -> Self {
        Self {
            reference_bits: vec![false; frame_count],
            hand: 0,
        }
    }

    /// Position of the clock hand.
    #[inline]
    pub fn hand(&self) -> FrameId {
        FrameId::new(self.hand)
    }

    /// Whether `frame_id` has been referenced since the hand last passed.
    #[inline]
    pub fn is_referenced(&self, frame_id: FrameId) -> bool {
        self.reference_bits[frame_id.0]
    }

    #[inline]
    fn advance(&mut self) {
        self.hand = (self.hand + 1) % self.reference_bits.len();
    }
}

impl Replacer for ClockReplacer {
    fn record_access(&mut self, frame_id: FrameId, _page_id: PageId) {
        self.reference_bits[frame_id.0] = true;
    }

    /// Sweep from the hand until a clear reference bit is found.
    ///
    /// Terminates within two full revolutions: the first clears every bit.
    fn evict(&mut self, _frames: &FrameTable) -> Option<FrameId> {
        if self.reference_bits.is_empty() {
            return None;
        }

        loop {
            let current = self.hand;
            self.advance();

            if !self.reference_bits[current] {
                return Some(FrameId::new(current));
            }
            self.reference_bits[current] = false;
        }
    }
}
