//! Configuration constants for pagesim.

/// Number of low address bits that form the offset inside a page.
///
/// Trace addresses are byte addresses; the page number is the address
/// shifted right by this amount.
pub const PAGE_SHIFT: u32 = 12;

/// Size of a simulated page in bytes (4KB).
///
/// Matches the OS page size on most systems and the page size the
/// trace files were recorded with.
pub const PAGE_SIZE: usize = 1 << PAGE_SHIFT;

/// Frame count used by [`MmuConfig::default`](crate::MmuConfig).
pub const DEFAULT_FRAMES: usize = 64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_is_power_of_two() {
        assert!(PAGE_SIZE.is_power_of_two());
        assert_eq!(PAGE_SIZE, 4096);
    }

    #[test]
    fn test_page_shift_matches_size() {
        assert_eq!(PAGE_SIZE.trailing_zeros(), PAGE_SHIFT);
    }

    #[test]
    fn test_default_frames_nonzero() {
        assert!(DEFAULT_FRAMES > 0);
    }
}
