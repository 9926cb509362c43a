use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of the inverse search for the smallest pool that meets a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// Smallest pool size meeting the target.
    Found { pool_size: u32 },
    /// No pool size up to and including `ceiling` meets the target.
    NotFoundWithinCeiling { ceiling: u32 },
}

impl SearchOutcome {
    /// Pool size when the search succeeded.
    pub fn pool_size(self) -> Option<u32> {
        match self {
            Self::Found { pool_size } => Some(pool_size),
            Self::NotFoundWithinCeiling { .. } => None,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Extra units needed on top of `current_pool`, or `None` when the target
    /// is unreachable within the searched range.
    pub fn capacity_gap(self, current_pool: u32) -> Option<u32> {
        self.pool_size()
            .map(|required| required.saturating_sub(current_pool))
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found { pool_size } => write!(f, "{pool_size}"),
            Self::NotFoundWithinCeiling { ceiling } => {
                write!(f, "unreachable within {ceiling}")
            }
        }
    }
}
