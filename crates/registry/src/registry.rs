//! The append-only identity → substrate store
//!
//! ## Non-duplication
//!
//! Expression equivalence cannot be proven for opaque closures, so the
//! registry compares substrate *object identity* (equal identity plus the
//! same expression allocation):
//! - unregistered identity → stored, a fresh [`Reference`] is returned
//! - same identity, same object → idempotent: the original Reference again
//! - same identity, distinct object → `Error::NonDuplication`, conservative
//!   rejection
//!
//! First-writer-wins. Two behaviorally different substrates that happen to
//! share an identity are accepted on first registration and rejected only
//! on the second, distinct-object attempt.
//!
//! ## Thread Safety
//!
//! All methods take `&self`. Registration and freezing serialize on a
//! `parking_lot::RwLock` scoped to the instance; reads take the shared
//! lock and return owned snapshots. The frozen flag is checked under the
//! write lock, so no registration can slip past a concurrent freeze.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use substratum_core::{Error, Identity, Result};
use substratum_kernel::Substrate;
use tracing::debug;

/// Handle returned by a successful registration
///
/// Equal for idempotent re-registrations of the same substrate object:
/// the slot records the insertion position of the first registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    identity: Identity,
    slot: u64,
}

impl Reference {
    /// Identity the reference points at
    pub const fn identity(&self) -> Identity {
        self.identity
    }

    /// Insertion position of the registration
    pub const fn slot(&self) -> u64 {
        self.slot
    }
}

#[derive(Default)]
struct RegistryInner {
    entries: FxHashMap<u64, (Substrate, u64)>,
    order: Vec<Identity>,
}

/// Append-only content-addressed store enforcing one substrate per identity
#[derive(Default)]
pub struct Registry {
    inner: RwLock<RegistryInner>,
    frozen: AtomicBool,
}

impl Registry {
    /// Create an empty, unfrozen registry
    pub fn new() -> Self {
        Registry::default()
    }

    /// Bind a substrate to its identity
    ///
    /// ## Errors
    ///
    /// - `Error::FrozenRegistry` after [`Registry::freeze`], regardless of
    ///   identity novelty
    /// - `Error::NonDuplication` when the identity is already bound to a
    ///   distinct substrate object
    pub fn register(&self, substrate: &Substrate) -> Result<Reference> {
        let mut inner = self.inner.write();
        if self.frozen.load(Ordering::SeqCst) {
            return Err(Error::FrozenRegistry);
        }

        let identity = substrate.identity();
        if let Some((existing, slot)) = inner.entries.get(&identity.value()) {
            if existing.same_object(substrate) {
                return Ok(Reference {
                    identity,
                    slot: *slot,
                });
            }
            return Err(Error::NonDuplication {
                identity: identity.value(),
            });
        }

        let slot = inner.order.len() as u64;
        inner
            .entries
            .insert(identity.value(), (substrate.clone(), slot));
        inner.order.push(identity);
        debug!(%identity, slot, "substrate registered");
        Ok(Reference { identity, slot })
    }

    /// The substrate bound to `identity`, if any
    pub fn lookup(&self, identity: Identity) -> Option<Substrate> {
        self.inner
            .read()
            .entries
            .get(&identity.value())
            .map(|(substrate, _)| substrate.clone())
    }

    /// True when `identity` is bound
    pub fn exists(&self, identity: Identity) -> bool {
        self.inner.read().entries.contains_key(&identity.value())
    }

    /// Number of bound identities
    pub fn count(&self) -> usize {
        self.inner.read().order.len()
    }

    /// Immutable snapshot of all bound identities, in insertion order
    pub fn get_all_identities(&self) -> Vec<Identity> {
        self.inner.read().order.clone()
    }

    /// Freeze the registry: a one-way terminal transition
    ///
    /// Taken under the write lock so in-flight registrations either finish
    /// before the freeze or fail after it.
    pub fn freeze(&self) {
        let _guard = self.inner.write();
        self.frozen.store(true, Ordering::SeqCst);
        debug!("registry frozen");
    }

    /// True once [`Registry::freeze`] has been called
    pub fn is_frozen(&self) -> bool {
        self.frozen.load(Ordering::SeqCst)
    }
}
