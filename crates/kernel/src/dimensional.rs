//! Structural decomposition: divide
//!
//! `divide` maps every substrate onto the same fixed nine-slot sequence of
//! dimensions, the Fibonacci schema `[0, 1, 1, 2, 3, 5, 8, 13, 21]`. The
//! decomposition is a pure function of the schema, not of substrate data,
//! so structural traversal is O(1) for every substrate regardless of how
//! complex its expression is.

use crate::substrate::Substrate;
use smallvec::SmallVec;
use substratum_core::{Dimension, Error, Result, SCHEMA, SCHEMA_LEN};

/// The fixed nine-slot dimension sequence produced by [`divide`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    dims: SmallVec<[Dimension; SCHEMA_LEN]>,
}

impl Decomposition {
    fn from_schema() -> Self {
        Decomposition {
            dims: SCHEMA.iter().map(|&level| Dimension::new(level)).collect(),
        }
    }

    /// Number of slots (always [`SCHEMA_LEN`])
    pub fn len(&self) -> usize {
        self.dims.len()
    }

    /// Never true: the schema always has nine slots
    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// Dimension at `index`
    ///
    /// ## Errors
    ///
    /// `Error::Index` when `index` falls outside `[0, 9)`.
    pub fn get(&self, index: usize) -> Result<Dimension> {
        self.dims.get(index).copied().ok_or(Error::Index {
            index,
            len: self.dims.len(),
        })
    }

    /// The levels in slot order
    pub fn levels(&self) -> [u64; SCHEMA_LEN] {
        let mut levels = [0u64; SCHEMA_LEN];
        for (slot, dim) in self.dims.iter().enumerate() {
            levels[slot] = dim.level();
        }
        levels
    }

    /// Iterate the dimensions in slot order
    pub fn iter(&self) -> impl Iterator<Item = &Dimension> {
        self.dims.iter()
    }
}

impl<'a> IntoIterator for &'a Decomposition {
    type Item = &'a Dimension;
    type IntoIter = std::slice::Iter<'a, Dimension>;

    fn into_iter(self) -> Self::IntoIter {
        self.dims.iter()
    }
}

/// Decompose a substrate into the fixed dimension sequence
///
/// A pure function of the schema: every substrate decomposes into the same
/// shape, and the substrate's expression is never invoked.
pub fn divide(_substrate: &Substrate) -> Decomposition {
    Decomposition::from_schema()
}
