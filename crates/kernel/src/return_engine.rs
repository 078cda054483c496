//! Return engine: the caller-driven refinement loop
//!
//! The kernel never recurses on its own: `compute_residue` hands the
//! unexpressed remainder back and stops. The return engine is the explicit
//! driver the flow expects: it walks the fixed dimension schema, projecting
//! the running value through each usable level as a modulus and seeding the
//! next slot with the residue. The walk is bounded by the schema length,
//! so refinement provably terminates.
//!
//! Level-0 slots cannot act as moduli (a zero modulus violates the
//! `compute_residue` precondition) and are skipped.
//!
//! ## Reconstruction
//!
//! The expressed parts and the final remainder partition the original
//! value exactly: `sum(expressed) + remainder == value`. `recombine`
//! reassembles it; `return_to_unity` recombines manifested values
//! multiplicatively toward the unity value.

use crate::manifold::multiply;
use serde::{Deserialize, Serialize};
use substratum_core::{compute_residue, Identity, Residue, SCHEMA};

/// One projection step of a refinement walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefinementStep {
    /// The part of the running value the modulus expressed
    pub expressed: u64,
    /// The residue that seeded the next slot
    pub residue: Residue,
}

/// The record of a full refinement walk over the dimension schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refinement {
    /// Identity the walk was taken from
    pub source: Identity,
    /// The original value the walk decomposed
    pub value: u64,
    steps: Vec<RefinementStep>,
    /// What remained unexpressed after the final slot
    pub remainder: u64,
}

impl Refinement {
    /// The projection steps in slot order
    pub fn steps(&self) -> &[RefinementStep] {
        &self.steps
    }

    /// True when the walk expressed the value completely
    pub fn is_complete(&self) -> bool {
        self.remainder == 0
    }

    /// Reassemble the original value from the expressed parts and the
    /// remainder
    ///
    /// Exact for every refinement: the parts partition the value.
    pub fn recombine(&self) -> u64 {
        self.steps
            .iter()
            .map(|step| step.expressed)
            .sum::<u64>()
            + self.remainder
    }
}

/// Refine a value through the dimension schema
///
/// Projects the running value through each non-zero schema level in slot
/// order, seeding every next slot with the residue of the previous one.
pub fn refine(value: u64, source: Identity) -> Refinement {
    let mut steps = Vec::with_capacity(SCHEMA.len());
    let mut current = value;

    for &level in SCHEMA.iter().filter(|&&level| level > 0) {
        // Non-zero level: the precondition holds, so this cannot fail
        let (expressed, residue) =
            compute_residue(current, level, source).expect("schema levels above zero are valid moduli");
        steps.push(RefinementStep { expressed, residue });
        current = residue.seed_next_dimension();
    }

    Refinement {
        source,
        value,
        steps,
        remainder: current,
    }
}

/// Recombine manifested values multiplicatively toward the unity value
pub fn return_to_unity(values: &[u64]) -> u64 {
    multiply(values)
}
