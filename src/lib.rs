//! Substratum - content-addressed immutable computation kernel
//!
//! Every entity is identified by a fixed-width 64-bit hash-derived
//! [`Identity`] and represented as a pure expression rather than stored
//! data. The kernel provides structural decomposition and recomposition
//! ([`divide`]/[`multiply`]), delta-based identity promotion
//! ([`promote`]), residue-based recursive refinement, lens-based
//! projection, a typed relationship graph, and an append-only registry
//! enforcing non-duplication.
//!
//! # Quick Start
//!
//! ```
//! use substratum::{Identity, Lens, Observer, Registry, Substrate};
//!
//! // A substrate is an identity plus a pure expression
//! let substrate = Substrate::constant(Identity::new(42), 0xABCD);
//!
//! // Register it; the registry refuses to rebind the identity later
//! let registry = Registry::new();
//! let reference = registry.register(&substrate).unwrap();
//! assert_eq!(reference.identity(), Identity::new(42));
//!
//! // Observe it through a lens
//! let observer = Observer::new();
//! let lens = Lens::new(Identity::new(1), |value| value >> 8);
//! let observation = observer.observe(&substrate, &lens);
//! assert_eq!(observation.manifestation, 0xAB);
//! ```
//!
//! # Architecture
//!
//! The workspace splits along the kernel's seams: `substratum-core` holds
//! the plain value types and invariants, `substratum-kernel` the
//! substrates and operations over them, `substratum-graph` the
//! relationship graph, and `substratum-registry` the content-addressed
//! store. This facade re-exports the public API of all four.

pub use substratum_core::{
    compute_residue, fibonacci, promote, schema_levels, validate_addition, validate_division,
    validate_multiplication, validate_residue, validate_subtraction, Delta, Dimension, Error,
    Identity, Residue, Result, DEFAULT_TOLERANCE, MASK64, SCHEMA, SCHEMA_LEN,
};
pub use substratum_graph::{RelationKind, Relationship, RelationshipGraph};
pub use substratum_kernel::{
    divide, lookup_operator, multiply, operator_names, refine, return_to_unity, Decomposition,
    Expression, Lens, Observation, Observer, Operator, Refinement, RefinementStep, Request,
    Substrate, UNITY,
};
pub use substratum_registry::{Reference, Registry};
