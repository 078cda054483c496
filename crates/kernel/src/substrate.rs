//! Substrate: the atomic content-addressed unit
//!
//! A substrate pairs an [`Identity`] with a pure expression: a function
//! from an attribute [`Request`] to a 64-bit value. The expression is
//! stored, never invoked, at construction; [`Substrate::invoke`] re-executes
//! it on every call and caches nothing. The kernel guarantees purity only
//! with respect to the explicit request: callers may legitimately embed
//! counters or clocks inside an expression, and the kernel does not guard
//! against it.
//!
//! ## Equality
//!
//! Two substrates are equal exactly when their identities are equal; the
//! expressions are opaque and never compared for behavior. Object identity
//! (same allocation, see [`Substrate::same_object`]) is the stronger
//! comparison the registry's non-duplication check relies on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use substratum_core::Identity;

/// A pure expression: attribute request in, 64-bit value out
pub type Expression = Arc<dyn Fn(Request) -> u64 + Send + Sync>;

/// Attribute request passed to an expression at invocation time
///
/// This is the enumerable contract between callers and expressions. An
/// expression matches exhaustively on the variants; there is no
/// string-keyed dispatch and no fallback branch for unknown attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Request {
    /// Manifest the substrate's base value
    #[default]
    Base,
    /// Manifest at a dimension level
    AtLevel(u64),
    /// Manifest from a refinement seed
    Seeded(u64),
}

/// An identity paired with a pure expression
///
/// ## Invariants
///
/// - The expression is never invoked at construction (lazy)
/// - `invoke` re-executes the expression every call; nothing is cached
/// - The result is always within `[0, 2^64)` (the return type enforces
///   the 64-bit mask)
/// - Equality and hash consider the identity only
#[derive(Clone)]
pub struct Substrate {
    identity: Identity,
    expression: Expression,
}

impl Substrate {
    /// Create a substrate from an identity and an expression
    ///
    /// Stores the expression without invoking it.
    pub fn new<F>(identity: Identity, expression: F) -> Self
    where
        F: Fn(Request) -> u64 + Send + Sync + 'static,
    {
        Substrate {
            identity,
            expression: Arc::new(expression),
        }
    }

    /// Create a substrate from an already-shared expression
    pub fn from_expression(identity: Identity, expression: Expression) -> Self {
        Substrate {
            identity,
            expression,
        }
    }

    /// A substrate whose expression always manifests the same value
    pub fn constant(identity: Identity, value: u64) -> Self {
        Substrate::new(identity, move |_| value)
    }

    /// Spawn a substrate whose identity is hashed from external bytes
    ///
    /// The connector-facing path: fetched bytes become the content address,
    /// the caller supplies the expression.
    pub fn spawn<F>(bytes: &[u8], expression: F) -> Self
    where
        F: Fn(Request) -> u64 + Send + Sync + 'static,
    {
        Substrate::new(Identity::spawn(bytes), expression)
    }

    /// The identity of this substrate
    pub const fn identity(&self) -> Identity {
        self.identity
    }

    /// Execute the expression for the given request
    ///
    /// Re-executes on every call; the 64-bit mask is enforced by the
    /// return type.
    pub fn invoke(&self, request: Request) -> u64 {
        (self.expression)(request)
    }

    /// True when `other` is the same substrate object: equal identity and
    /// the same expression allocation
    ///
    /// Expression equivalence cannot be proven for opaque closures, so this
    /// object-identity comparison is the strongest check available. It is
    /// what the registry uses to distinguish idempotent re-registration
    /// from a genuine duplication attempt.
    pub fn same_object(&self, other: &Substrate) -> bool {
        self.identity == other.identity && Arc::ptr_eq(&self.expression, &other.expression)
    }
}

impl fmt::Debug for Substrate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Substrate")
            .field("identity", &self.identity)
            .field("expression", &"<opaque>")
            .finish()
    }
}

impl PartialEq for Substrate {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for Substrate {}

impl Hash for Substrate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity.hash(state);
    }
}
