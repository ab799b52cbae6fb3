//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Only configuration can fail. Once an [`Mmu`](crate::Mmu) exists, every
/// read and write is total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An MMU was requested with zero frames.
    ///
    /// No victim could ever be selected, so this is rejected up front
    /// instead of looping forever on the first fault.
    #[error("Invalid frame count: {0} (at least one frame is required)")]
    InvalidFrameCount(usize),

    /// The algorithm name is not one of `clock`, `lru`, `rand`.
    #[error("Unknown replacement algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// A trace record carried an access flag other than `R` or `W`.
    #[error("Invalid access kind: {0:?}")]
    InvalidAccessKind(char),
}
