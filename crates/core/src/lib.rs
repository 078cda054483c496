//! Core value types and invariants for Substratum
//!
//! This crate defines the foundational types used throughout the system:
//! - Identity: 64-bit content address, immutable, equality by value
//! - Delta: opaque change descriptor and the `promote` derivation
//! - Dimension: one level of the fixed decomposition schema
//! - Residue: the unexpressed remainder of a modulus projection
//! - Error: error type hierarchy
//! - Masked 64-bit arithmetic helpers
//! - Reversibility validators for the round-trip laws
//!
//! Everything here is a plain immutable value: `Copy` where possible,
//! shareable across threads without locking, and never mutated after
//! construction.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod arithmetic;
pub mod delta;
pub mod dimension;
pub mod error;
pub mod fibonacci;
pub mod identity;
pub mod residue;
pub mod reversibility;

// Re-export commonly used types at the crate root
pub use arithmetic::{mask64, mix64, wrap_add, wrap_mul, wrap_sub, MASK64};
pub use delta::{promote, Delta};
pub use dimension::Dimension;
pub use error::{Error, Result};
pub use fibonacci::{fibonacci, schema_levels, SCHEMA, SCHEMA_LEN};
pub use identity::Identity;
pub use residue::{compute_residue, Residue};
pub use reversibility::{
    validate_addition, validate_division, validate_multiplication, validate_residue,
    validate_subtraction, DEFAULT_TOLERANCE,
};
