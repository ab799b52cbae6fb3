//! Summary rows for experiment reports.

use std::fmt;

use crate::mmu::replacer::Algorithm;
use crate::mmu::Mmu;

/// The outcome of replaying one trace through one MMU configuration.
///
/// `Display` renders a CSV row matching [`RunSummary::CSV_HEADER`].
///
/// # Example
/// ```
/// use pagesim::{Mmu, PageId, RunSummary};
///
/// let mut mmu = Mmu::lru(1)?;
/// mmu.write(PageId::new(5));
/// mmu.read(PageId::new(6));
///
/// let row = RunSummary::from_mmu("gcc.trace", &mmu);
/// assert_eq!(row.to_string(), "gcc.trace,1,lru,2,2,1");
/// # Ok::<(), pagesim::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub trace: String,
    pub frames: usize,
    pub algorithm: Algorithm,
    pub page_faults: u64,
    pub disk_reads: u64,
    pub disk_writes: u64,
}

impl RunSummary {
    pub const CSV_HEADER: &str =
        "trace,frames,algorithm,page_faults,disk_reads,disk_writes";

    /// Capture the final counters of `mmu` for `trace`.
    pub fn from_mmu(trace: impl Into<String>, mmu: &Mmu) -> Self {
        Self {
            trace: trace.into(),
            frames: mmu.frame_count(),
            algorithm: mmu.algorithm(),
            page_faults: mmu.total_page_faults(),
            disk_reads: mmu.total_disk_reads(),
            disk_writes: mmu.total_disk_writes(),
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.trace,
            self.frames,
            self.algorithm,
            self.page_faults,
            self.disk_reads,
            self.disk_writes
        )
    }
}
