//! Residue: the unexpressed remainder of a modulus projection
//!
//! Projecting a value through a modulus splits it exactly in two: the
//! expressed part (`value mod modulus`) and the residue (everything the
//! projection did not express). The two always recombine to the original
//! value; that reconstruction law is the invariant the reversibility
//! validators check.
//!
//! Residues seed recursive refinement: `seed_next_dimension` hands the
//! unexpressed remainder back to the caller, which may divide and project
//! again. Recursion is caller-driven, never automatic inside the kernel.

use crate::error::{Error, Result};
use crate::identity::Identity;
use serde::{Deserialize, Serialize};

/// The unexpressed remainder of one modulus projection
///
/// Produced only by [`compute_residue`]; never constructed directly by
/// callers, so the reconstruction invariant holds for every live value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Residue {
    /// The unexpressed portion: `value - (value mod modulus)`
    pub value: u64,
    /// Identity of the substrate the projection was taken from
    pub source: Identity,
    /// The modulus that produced this residue
    pub modulus: u64,
}

impl Residue {
    /// True when nothing remains unexpressed
    pub const fn is_complete(&self) -> bool {
        self.value == 0
    }

    /// Hand the unexpressed remainder back for a further refinement cycle
    pub const fn seed_next_dimension(&self) -> u64 {
        self.value
    }
}

/// Split a value into its expressed part and residue under a modulus
///
/// Returns `(expressed, residue)` where `expressed = value mod modulus` and
/// `residue.value = value - expressed`.
///
/// ## Guarantee
///
/// `expressed + residue.value == value` exactly, for every accepted input.
///
/// ## Errors
///
/// `Error::Validation` when the modulus is zero.
pub fn compute_residue(value: u64, modulus: u64, source: Identity) -> Result<(u64, Residue)> {
    if modulus == 0 {
        return Err(Error::Validation(format!(
            "modulus must be positive, got {}",
            modulus
        )));
    }

    let expressed = value % modulus;
    let residue = Residue {
        value: value - expressed,
        source,
        modulus,
    };
    Ok((expressed, residue))
}
