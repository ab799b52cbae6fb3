//! Page identifier type.

use std::fmt;

use crate::common::config::PAGE_SHIFT;

/// Identifies a logical page in the simulated address space.
///
/// Using `u64` so that every page number a trace can produce is accepted.
/// Bounding the address space is the driver's business, not the MMU's.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::from_address(0x0041_f7a0);
/// assert_eq!(page_id, PageId::new(0x41f));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u64);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u64) -> Self {
        PageId(id)
    }

    /// Derive the page holding a byte address.
    #[inline]
    pub fn from_address(address: u64) -> Self {
        PageId(address >> PAGE_SHIFT)
    }
}

impl From<u64> for PageId {
    fn from(id: u64) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}
