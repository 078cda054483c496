//! Dimension: one level of the fixed decomposition schema
//!
//! A dimension carries a single non-negative level. Dimensions are totally
//! ordered by level; a dimension structurally contains every dimension at
//! the same or a lower level.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One level of the decomposition schema
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct Dimension {
    level: u64,
}

impl Dimension {
    /// Create a dimension at the given level
    pub const fn new(level: u64) -> Self {
        Dimension { level }
    }

    /// The level of this dimension
    pub const fn level(&self) -> u64 {
        self.level
    }

    /// Structural containment: true when this dimension's level is at or
    /// above the other's
    pub const fn contains(&self, other: &Dimension) -> bool {
        self.level >= other.level
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dim[{}]", self.level)
    }
}
