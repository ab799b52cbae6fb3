//! Access kind carried by each trace record.

use std::fmt;

use crate::common::{Error, Result};

/// Whether a request reads or writes its page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessKind {
    /// A read (`R` in a trace). Leaves the dirty bit alone.
    Load,
    /// A write (`W` in a trace). Marks the page dirty.
    Store,
}

impl AccessKind {
    /// Parse the single-character flag of a trace record.
    ///
    /// Accepts `R`/`r` for loads and `W`/`w` for stores.
    pub fn from_trace_flag(flag: char) -> Result<Self> {
        match flag {
            'R' | 'r' => Ok(AccessKind::Load),
            'W' | 'w' => Ok(AccessKind::Store),
            other => Err(Error::InvalidAccessKind(other)),
        }
    }

    #[inline]
    pub fn is_write(self) -> bool {
        matches!(self, AccessKind::Store)
    }
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessKind::Load => write!(f, "read"),
            AccessKind::Store => write!(f, "write"),
        }
    }
}
