//! Simulated memory management.
//!
//! A fixed set of physical frames caches logical pages. On a miss the
//! configured replacement policy picks a victim; dirty victims count a
//! write back to disk.
//!
//! # Components
//! - [`Mmu`] - The request path and counters
//! - [`FrameTable`] - Frames, page table and free list
//! - [`MmuStats`] - Fault and I/O counters
//! - [`MmuConfig`] - Builder for MMU instances
//! - [`RunSummary`] - CSV report rows
//! - [`replacer`] - Eviction policy implementations

mod config;
mod frame;
mod manager;
pub mod replacer;
mod report;
mod stats;

pub use config::MmuConfig;
pub use frame::{FrameTable, Resident};
pub use manager::Mmu;
pub use replacer::Algorithm;
pub use report::RunSummary;
pub use stats::MmuStats;
