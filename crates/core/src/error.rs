//! Error types for the Substratum kernel
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! Every operation in the kernel is pure, deterministic, and local, so a
//! failure is never transient: errors are raised immediately, with no
//! silent coercion and no retries. Collaborating layers own user-facing
//! translation and recovery; the kernel performs none of it.

use thiserror::Error;

/// Result type alias for kernel operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the Substratum kernel
#[derive(Debug, Error)]
pub enum Error {
    /// A 64-bit-bounded value was constructed out of range.
    ///
    /// Raised only at construction, where a wider or signed integer is
    /// narrowed into the identity domain `[0, 2^64)`.
    #[error("value {value} out of 64-bit identity range")]
    Range {
        /// Display form of the offending value (may exceed i128)
        value: String,
    },

    /// A precondition was violated (e.g. a zero modulus)
    #[error("validation failed: {0}")]
    Validation(String),

    /// Dimension index out of bounds
    #[error("dimension index {index} out of bounds (len {len})")]
    Index {
        /// Requested index
        index: usize,
        /// Length of the decomposition
        len: usize,
    },

    /// A second, distinct substrate was registered under a known identity
    #[error("identity {identity:#018x} is already bound to a distinct substrate")]
    NonDuplication {
        /// Numeric value of the contested identity
        identity: u64,
    },

    /// Registration was attempted after the registry was frozen
    #[error("registry is frozen; registration is no longer possible")]
    FrozenRegistry,

    /// A round-trip law failed to hold (diagnostic, from the validators)
    #[error(
        "reversibility violated for {operation}: lhs={lhs}, rhs={rhs}, \
         expected={expected}, observed={observed}"
    )]
    Reversibility {
        /// Name of the arithmetic operation under test
        operation: &'static str,
        /// Left operand
        lhs: u64,
        /// Right operand
        rhs: u64,
        /// Value the round trip should have recovered
        expected: u64,
        /// Value the round trip actually produced
        observed: u64,
    },
}

impl Error {
    /// Build a range error from any displayable out-of-range value
    pub fn range(value: impl std::fmt::Display) -> Self {
        Error::Range {
            value: value.to_string(),
        }
    }
}
