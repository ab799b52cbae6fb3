//! pagesim - A page replacement simulator with swappable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          Trace driver                           │
//! │            (address, R/W) → PageId + AccessKind                 │
//! └─────────────────────────────────────────────────────────────────┘
//!                                 ↓
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           Mmu (mmu/)                            │
//! │   ┌─────────────────────────────────────────────────────────┐   │
//! │   │        Eviction Policies: CLOCK | LRU | RANDOM          │   │
//! │   │              (chosen at construction)                   │   │
//! │   └─────────────────────────────────────────────────────────┘   │
//! │        FrameTable (frames + page table) + MmuStats              │
//! └─────────────────────────────────────────────────────────────────┘
//!                                 ↓
//!             page_faults, disk_reads, disk_writes → RunSummary
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, AccessKind, Error, config)
//! - [`mmu`] - Frame table, replacement policies and statistics
//!
//! # Quick Start
//! ```
//! use pagesim::{Algorithm, Mmu, PageId};
//!
//! let mut mmu = Mmu::new(2, Algorithm::Lru)?;
//! mmu.read(PageId::new(1));
//! mmu.read(PageId::new(2));
//! mmu.write(PageId::new(1));
//! mmu.read(PageId::new(3)); // evicts page 2
//!
//! assert_eq!(mmu.total_page_faults(), 3);
//! assert_eq!(mmu.total_disk_writes(), 0);
//! # Ok::<(), pagesim::Error>(())
//! ```

pub mod common;
pub mod mmu;

// Re-export commonly used items at crate root for convenience
pub use common::config::{PAGE_SHIFT, PAGE_SIZE};
pub use common::{AccessKind, Error, FrameId, PageId, Result};

pub use mmu::{Algorithm, Mmu, MmuConfig, MmuStats, RunSummary};
