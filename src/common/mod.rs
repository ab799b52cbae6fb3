//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - Identifiers (PageId, FrameId) and the request kind (AccessKind)

mod access;
pub mod config;
pub mod error;
mod frame_id;
mod page_id;

pub use access::AccessKind;
pub use error::{Error, Result};
pub use frame_id::FrameId;
pub use page_id::PageId;
