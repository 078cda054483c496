//! Lens: pure projection with its own identity
//!
//! A lens is a stateless, immutable projection from one 64-bit value to
//! another, carrying its own identity so observations can record which
//! view produced a manifestation. Lenses built from catalogue operators
//! get a content-derived identity hashed from the operator's canonical
//! encoding.

use crate::operators::Operator;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use substratum_core::Identity;

/// A pure projection function with its own identity
#[derive(Clone)]
pub struct Lens {
    lens_id: Identity,
    projection: Arc<dyn Fn(u64) -> u64 + Send + Sync>,
}

impl Lens {
    /// Create a lens from an identity and a projection
    pub fn new<F>(lens_id: Identity, projection: F) -> Self
    where
        F: Fn(u64) -> u64 + Send + Sync + 'static,
    {
        Lens {
            lens_id,
            projection: Arc::new(projection),
        }
    }

    /// The identity of this lens
    pub const fn identity(&self) -> Identity {
        self.lens_id
    }

    /// Project a manifested value
    pub fn project(&self, value: u64) -> u64 {
        (self.projection)(value)
    }

    /// The pass-through lens: projects every value to itself
    pub fn passthrough() -> Self {
        Lens::new(Identity::spawn(b"lens/passthrough"), |value| value)
    }

    /// Build a lens from a catalogue operator
    ///
    /// The lens identity is hashed from the operator's canonical encoding,
    /// so the same operator always yields the same lens identity.
    pub fn from_operator(operator: Operator) -> Self {
        let lens_id = Identity::spawn(&operator.encode());
        Lens::new(lens_id, move |value| operator.apply(value))
    }
}

impl fmt::Debug for Lens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lens")
            .field("lens_id", &self.lens_id)
            .field("projection", &"<opaque>")
            .finish()
    }
}

impl PartialEq for Lens {
    fn eq(&self, other: &Self) -> bool {
        self.lens_id == other.lens_id
    }
}

impl Eq for Lens {}

impl Hash for Lens {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lens_id.hash(state);
    }
}
