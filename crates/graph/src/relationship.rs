//! Immutable typed directed edges between identities

use serde::{Deserialize, Serialize};
use std::fmt;
use substratum_core::Identity;

/// The type of a relationship edge
///
/// Kinds are user-defined names; equality and hashing are by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationKind(String);

impl RelationKind {
    /// Create a relationship kind from a name
    pub fn new(name: impl Into<String>) -> Self {
        RelationKind(name.into())
    }

    /// The kind's name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RelationKind {
    fn from(name: &str) -> Self {
        RelationKind::new(name)
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A typed directed edge between two identities
///
/// ## Invariants
///
/// - Immutable after construction: no setters, derivation only
/// - `reverse` mints a new relationship; the original is untouched
/// - Lineage, when present, names the relationship this one was derived
///   from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    identity: Identity,
    kind: RelationKind,
    source: Identity,
    target: Identity,
    bidirectional: bool,
    constraints: Vec<String>,
    lineage: Option<Identity>,
}

impl Relationship {
    /// Create a directed relationship
    pub fn new(
        identity: Identity,
        kind: RelationKind,
        source: Identity,
        target: Identity,
    ) -> Self {
        Relationship {
            identity,
            kind,
            source,
            target,
            bidirectional: false,
            constraints: Vec::new(),
            lineage: None,
        }
    }

    /// Mark this relationship as traversable in both directions
    pub fn bidirectional(mut self) -> Self {
        self.bidirectional = true;
        self
    }

    /// Attach a constraint name
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraints.push(constraint.into());
        self
    }

    /// The identity of this relationship
    pub const fn identity(&self) -> Identity {
        self.identity
    }

    /// The relationship kind
    pub fn kind(&self) -> &RelationKind {
        &self.kind
    }

    /// Source endpoint
    pub const fn source(&self) -> Identity {
        self.source
    }

    /// Target endpoint
    pub const fn target(&self) -> Identity {
        self.target
    }

    /// Whether the edge is traversable in both directions
    pub const fn is_bidirectional(&self) -> bool {
        self.bidirectional
    }

    /// Constraint names attached to this relationship
    pub fn constraints(&self) -> &[String] {
        &self.constraints
    }

    /// The relationship this one was derived from, if any
    pub const fn lineage(&self) -> Option<Identity> {
        self.lineage
    }

    /// Derive the reversed relationship
    ///
    /// Swaps the endpoints, derives a new identity as
    /// `old ^ source ^ target`, and points lineage at the original.
    pub fn reverse(&self) -> Relationship {
        Relationship {
            identity: Identity::new(
                self.identity.value() ^ self.source.value() ^ self.target.value(),
            ),
            kind: self.kind.clone(),
            source: self.target,
            target: self.source,
            bidirectional: self.bidirectional,
            constraints: self.constraints.clone(),
            lineage: Some(self.identity),
        }
    }
}
