//! The append-only relationship graph
//!
//! ## Thread Safety
//!
//! The graph is internally synchronized: all methods take `&self`, and a
//! `parking_lot::RwLock` scoped to the instance serializes mutation.
//! Inserts hold the write lock across the list append and all three index
//! updates, so readers never observe a relationship in one index but not
//! another. Lookups take the shared lock and return owned snapshots.

use crate::relationship::{RelationKind, Relationship};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use substratum_core::Identity;
use tracing::debug;

#[derive(Default)]
struct GraphInner {
    relationships: Vec<Relationship>,
    by_source: FxHashMap<u64, Vec<usize>>,
    by_target: FxHashMap<u64, Vec<usize>>,
    by_kind: FxHashMap<RelationKind, Vec<usize>>,
}

/// Append-only graph of typed directed edges, indexed three ways
///
/// Indexes are keyed by the identity's numeric value (and by kind), giving
/// O(1) average lookup; the result lists preserve insertion order.
#[derive(Default)]
pub struct RelationshipGraph {
    inner: RwLock<GraphInner>,
}

impl RelationshipGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        RelationshipGraph::default()
    }

    /// Append a relationship and update all three indexes
    ///
    /// Relationships are never removed; the graph accumulates for the life
    /// of the instance.
    pub fn add(&self, relationship: Relationship) {
        let mut inner = self.inner.write();
        let slot = inner.relationships.len();

        inner
            .by_source
            .entry(relationship.source().value())
            .or_default()
            .push(slot);
        inner
            .by_target
            .entry(relationship.target().value())
            .or_default()
            .push(slot);
        inner
            .by_kind
            .entry(relationship.kind().clone())
            .or_default()
            .push(slot);

        debug!(
            identity = %relationship.identity(),
            kind = %relationship.kind(),
            source = %relationship.source(),
            target = %relationship.target(),
            "relationship added"
        );
        inner.relationships.push(relationship);
    }

    /// Relationships whose source is `identity`; empty if none
    pub fn get_outgoing(&self, identity: Identity) -> Vec<Relationship> {
        let inner = self.inner.read();
        Self::collect(&inner, inner.by_source.get(&identity.value()))
    }

    /// Relationships whose target is `identity`; empty if none
    pub fn get_incoming(&self, identity: Identity) -> Vec<Relationship> {
        let inner = self.inner.read();
        Self::collect(&inner, inner.by_target.get(&identity.value()))
    }

    /// Relationships of the given kind; empty if none
    pub fn get_by_kind(&self, kind: &RelationKind) -> Vec<Relationship> {
        let inner = self.inner.read();
        Self::collect(&inner, inner.by_kind.get(kind))
    }

    /// Number of relationships in the graph
    pub fn len(&self) -> usize {
        self.inner.read().relationships.len()
    }

    /// True when no relationship has been added
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn collect(inner: &GraphInner, slots: Option<&Vec<usize>>) -> Vec<Relationship> {
        slots
            .map(|slots| {
                slots
                    .iter()
                    .map(|&slot| inner.relationships[slot].clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}
