//! Core invariants: relationship reversal and graph index consistency

use substratum::{Identity, RelationKind, Relationship, RelationshipGraph};

fn edge(id: u64, kind: &str, source: u64, target: u64) -> Relationship {
    Relationship::new(
        Identity::new(id),
        RelationKind::new(kind),
        Identity::new(source),
        Identity::new(target),
    )
}

#[test]
fn test_added_relationship_visible_in_every_index() {
    // After add(r): r appears in get_outgoing(r.source),
    // get_incoming(r.target), and get_by_kind(r.kind)
    let graph = RelationshipGraph::new();
    let r = edge(0x1000, "depends_on", 10, 20);
    graph.add(r.clone());

    assert!(graph.get_outgoing(r.source()).contains(&r));
    assert!(graph.get_incoming(r.target()).contains(&r));
    assert!(graph.get_by_kind(r.kind()).contains(&r));
}

#[test]
fn test_reverse_endpoints_always_swap() {
    for (source, target) in [(10u64, 20u64), (0, u64::MAX), (7, 7)] {
        let r = edge(1, "links", source, target);
        let reversed = r.reverse();
        assert_eq!(reversed.source(), r.target());
        assert_eq!(reversed.target(), r.source());
    }
}

#[test]
fn test_reverse_lineage_chains_back_to_origin() {
    let original = edge(0x1000, "depends_on", 10, 20);
    let reversed = original.reverse();
    let twice = reversed.reverse();

    assert_eq!(reversed.lineage(), Some(original.identity()));
    assert_eq!(twice.lineage(), Some(reversed.identity()));
    assert_eq!(
        twice.identity(),
        original.identity(),
        "XOR derivation makes double reversal recover the identity"
    );
}

#[test]
fn test_graph_accumulates_derived_edges() {
    let graph = RelationshipGraph::new();
    let original = edge(0x1000, "depends_on", 10, 20);
    graph.add(original.clone());
    graph.add(original.reverse());

    // Both directions are now visible from the shared endpoint
    assert_eq!(graph.get_outgoing(Identity::new(10)).len(), 1);
    assert_eq!(graph.get_incoming(Identity::new(10)).len(), 1);
    assert_eq!(graph.get_by_kind(&RelationKind::new("depends_on")).len(), 2);
}

#[test]
fn test_self_loop_indexes_under_both_directions() {
    let graph = RelationshipGraph::new();
    let r = edge(1, "reflects", 5, 5);
    graph.add(r.clone());

    assert_eq!(graph.get_outgoing(Identity::new(5)), vec![r.clone()]);
    assert_eq!(graph.get_incoming(Identity::new(5)), vec![r]);
}

#[test]
fn test_identities_promoted_apart_stay_linked_by_lineage_edges() {
    use substratum::{promote, Delta};

    // Model a promotion chain as graph edges: old → new
    let graph = RelationshipGraph::new();
    let mut current = Identity::new(42);
    for step in 0..4u64 {
        let next = promote(current, step, &Delta::new(step + 1));
        let r = Relationship::new(
            Identity::new(current.value() ^ next.value()),
            RelationKind::new("promoted_to"),
            current,
            next,
        );
        graph.add(r);
        current = next;
    }

    assert_eq!(graph.get_by_kind(&RelationKind::new("promoted_to")).len(), 4);
    // The chain's origin has one outgoing edge and none incoming
    assert_eq!(graph.get_outgoing(Identity::new(42)).len(), 1);
    assert!(graph.get_incoming(Identity::new(42)).is_empty());
}
