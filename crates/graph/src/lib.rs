//! Typed relationship graph for Substratum identities
//!
//! Relationships are immutable typed directed edges between identities.
//! The graph accumulates them append-only and keeps three indexes (by
//! source, by target, by kind) consistent on every insert, keyed by the
//! identity's numeric value for O(1) average lookup.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod graph;
pub mod relationship;

pub use graph::RelationshipGraph;
pub use relationship::{RelationKind, Relationship};
