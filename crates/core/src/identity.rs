//! Identity: the 64-bit content address
//!
//! Every entity in the kernel is identified by an `Identity`, an opaque
//! immutable 64-bit value. Identities are compared, hashed, and ordered by
//! value alone; they carry no behavior and are never mutated after
//! creation.
//!
//! ## Range
//!
//! The identity domain is `[0, 2^64)`. Construction from a `u64` is total
//! because the type already enforces the range; construction from wider or
//! signed integers is checked and fails with [`Error::Range`] when the
//! value falls outside the domain.
//!
//! ## Spawning
//!
//! Collaborating layers hash externally fetched bytes into an identity via
//! [`Identity::spawn`]. The hash is xxh3: compact and fast, not
//! cryptographically collision-resistant, which is all the kernel
//! promises.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use xxhash_rust::xxh3::xxh3_64;

/// Opaque 64-bit content address
///
/// ## Invariants
///
/// - Always in `[0, 2^64)` (enforced by the representation)
/// - Equality, hash, and ordering are by value only
/// - Never mutated after creation
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct Identity(u64);

impl Identity {
    /// Create an identity from a value already in the 64-bit domain
    pub const fn new(value: u64) -> Self {
        Identity(value)
    }

    /// Numeric value of this identity
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Derive an identity by hashing external bytes (xxh3)
    ///
    /// This is the "spawn" path used by connectors: fetched bytes become a
    /// content address without the caller choosing a value.
    pub fn spawn(bytes: &[u8]) -> Self {
        Identity(xxh3_64(bytes))
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

impl From<u64> for Identity {
    fn from(value: u64) -> Self {
        Identity(value)
    }
}

impl TryFrom<u128> for Identity {
    type Error = Error;

    fn try_from(value: u128) -> Result<Self, Error> {
        if value > u64::MAX as u128 {
            return Err(Error::range(value));
        }
        Ok(Identity(value as u64))
    }
}

impl TryFrom<i128> for Identity {
    type Error = Error;

    fn try_from(value: i128) -> Result<Self, Error> {
        if value < 0 || value > u64::MAX as i128 {
            return Err(Error::range(value));
        }
        Ok(Identity(value as u64))
    }
}
