//! Delta and promotion: the sole mutation-like primitive
//!
//! Nothing in the kernel is ever modified in place. A "change" is expressed
//! by combining an existing identity, an attribute value, and a [`Delta`]
//! into a freshly minted identity via [`promote`]. The original identity is
//! untouched; callers that want the old object keep the old object.
//!
//! ## Mixing function
//!
//! `promote` XOR-combines the three inputs and then applies the splitmix64
//! finalizer. Bare XOR would make the derivation trivially invertible
//! (`new ^ attribute ^ change` recovers the old value); the finalizer
//! removes that property while keeping the derivation deterministic.

use crate::arithmetic::mix64;
use crate::identity::Identity;
use serde::{Deserialize, Serialize};

/// Opaque, immutable change descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Delta {
    change: u64,
}

impl Delta {
    /// Create a delta carrying the given change value
    pub const fn new(change: u64) -> Self {
        Delta { change }
    }

    /// The raw change value
    pub const fn change(&self) -> u64 {
        self.change
    }
}

/// Mint a new identity from an old identity, an attribute value, and a delta
///
/// Deterministic: identical inputs always yield the identical output. The
/// old identity is never altered: promotion derives, it does not mutate.
pub fn promote(old: Identity, attribute_value: u64, delta: &Delta) -> Identity {
    Identity::new(mix64(old.value() ^ attribute_value ^ delta.change))
}
