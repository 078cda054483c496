//! Behavioral scenarios: the full kernel flow
//!
//! construct Identity → wrap in Substrate → register → divide into the
//! fixed schema → project dimensions through lenses → recombine toward
//! unity → promote a fresh identity for any change.

use substratum::{
    divide, multiply, promote, refine, return_to_unity, Delta, Identity, Lens, Observer, Operator,
    Registry, Request, Substrate, UNITY,
};

#[test]
fn test_full_flow_construct_register_observe_promote() {
    crate::common::init_tracing();
    let registry = Registry::new();
    let observer = Observer::new();

    // Construct: hash-derived identity, pure expression
    let substrate = Substrate::spawn(b"external payload", |request| match request {
        Request::Base => 0xABCD,
        Request::AtLevel(level) => level,
        Request::Seeded(seed) => seed,
    });

    // Register
    let reference = registry.register(&substrate).unwrap();
    assert_eq!(reference.identity(), substrate.identity());

    // Divide: fixed nine-slot shape
    let decomposition = divide(&substrate);
    assert_eq!(decomposition.len(), 9);

    // Observe through a lens
    let lens = Lens::from_operator(Operator::ShiftRight(8));
    let observation = observer.observe(&substrate, &lens);
    assert_eq!(observation.manifestation, 0xAB);
    assert_eq!(observer.call_count(), 1);

    // Promote: fresh identity, original untouched
    let promoted = promote(substrate.identity(), 0xAB, &Delta::new(1));
    assert_ne!(promoted, substrate.identity());
    assert!(registry.exists(substrate.identity()));
    assert!(!registry.exists(promoted));
}

#[test]
fn test_decomposition_recombines_toward_unity() {
    let substrate = Substrate::constant(Identity::new(1), 7);
    let decomposition = divide(&substrate);

    // Multiply the non-zero levels back together
    let levels: Vec<u64> = decomposition
        .iter()
        .map(|d| d.level())
        .filter(|&level| level > 0)
        .collect();
    assert_eq!(multiply(&levels), 1 * 1 * 2 * 3 * 5 * 8 * 13 * 21);

    // The empty recombination is the unity value
    assert_eq!(return_to_unity(&[]), UNITY);
}

#[test]
fn test_refinement_partitions_and_reconstructs() {
    let substrate = Substrate::constant(Identity::new(9), 100);
    let refinement = refine(substrate.invoke(Request::Base), substrate.identity());

    assert_eq!(refinement.recombine(), 100);
    for step in refinement.steps() {
        assert_eq!(step.residue.source, substrate.identity());
    }
}

#[test]
fn test_observe_dimension_with_and_without_lens() {
    let observer = Observer::new();
    let substrate = Substrate::constant(Identity::new(3), 0);

    let raw = observer.observe_dimension(&substrate, 8, None).unwrap();
    assert_eq!(raw, 21);

    let doubler = Lens::new(Identity::new(2), |level| level * 2);
    let projected = observer
        .observe_dimension(&substrate, 8, Some(&doubler))
        .unwrap();
    assert_eq!(projected, 42);
}

#[test]
fn test_promotion_chain_is_reproducible() {
    // A chain of promotions from the same seed is fully deterministic
    let seed = Identity::new(42);
    let chain_a: Vec<Identity> = (0..5u64)
        .scan(seed, |current, step| {
            *current = promote(*current, step, &Delta::new(step + 1));
            Some(*current)
        })
        .collect();
    let chain_b: Vec<Identity> = (0..5u64)
        .scan(seed, |current, step| {
            *current = promote(*current, step, &Delta::new(step + 1));
            Some(*current)
        })
        .collect();

    assert_eq!(chain_a, chain_b);
    assert_eq!(seed.value(), 42, "the seed is never altered");
}

#[test]
fn test_observation_serializes_for_collaborators() {
    // Collaborating layers persist observations, never substrates
    let observer = Observer::new();
    let substrate = Substrate::constant(Identity::new(42), 0xABCD);
    let lens = Lens::new(Identity::new(1), |value| value >> 8);

    let observation = observer.observe(&substrate, &lens);
    let json = serde_json::to_string(&observation).unwrap();
    let restored: substratum::Observation = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, observation);
}

#[test]
fn test_registered_substrate_survives_roundtrip_through_lookup() {
    let registry = Registry::new();
    let substrate = Substrate::new(Identity::new(77), |request| match request {
        Request::Base => 11,
        Request::AtLevel(level) => level + 11,
        Request::Seeded(seed) => seed,
    });
    registry.register(&substrate).unwrap();

    let found = registry.lookup(Identity::new(77)).unwrap();
    assert!(found.same_object(&substrate), "lookup returns the registered object");
    assert_eq!(found.invoke(Request::AtLevel(10)), 21);
}
