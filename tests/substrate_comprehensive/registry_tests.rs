//! Core invariants: registry non-duplication and freeze semantics

use std::sync::Arc;
use std::thread;
use substratum::{Error, Identity, Registry, Substrate};

#[test]
fn test_spec_scenario_idempotent_then_rejected() {
    // Register Substrate A (identity=7) twice → equal References, count 1;
    // a different object under identity=7 → NonDuplicationError, count
    // unchanged
    let registry = Registry::new();
    let a = Substrate::constant(Identity::new(7), 1);

    let first = registry.register(&a).unwrap();
    let second = registry.register(&a).unwrap();
    assert_eq!(first, second);
    assert_eq!(registry.count(), 1);

    let b = Substrate::constant(Identity::new(7), 1);
    assert!(matches!(
        registry.register(&b),
        Err(Error::NonDuplication { identity: 7 })
    ));
    assert_eq!(registry.count(), 1);
}

#[test]
fn test_spec_scenario_freeze_rejects_novel_identities() {
    // After freeze(), register always fails regardless of identity novelty
    let registry = Registry::new();
    registry.register(&Substrate::constant(Identity::new(1), 0)).unwrap();
    registry.freeze();

    for value in [1u64, 2, u64::MAX] {
        assert!(matches!(
            registry.register(&Substrate::constant(Identity::new(value), 0)),
            Err(Error::FrozenRegistry)
        ));
    }
}

#[test]
fn test_independent_registries_do_not_share_state() {
    // Explicit context objects: no hidden singleton, no cross-talk
    let a = Registry::new();
    let b = Registry::new();
    let substrate = Substrate::constant(Identity::new(7), 1);

    a.register(&substrate).unwrap();
    assert_eq!(a.count(), 1);
    assert_eq!(b.count(), 0);
    assert!(!b.exists(Identity::new(7)));

    a.freeze();
    assert!(!b.is_frozen(), "freezing one registry must not freeze another");
    b.register(&substrate).unwrap();
}

#[test]
fn test_freeze_during_concurrent_registration() {
    // Freezing races against writers: every registration either completed
    // before the freeze or failed with FrozenRegistry, no torn state
    crate::common::init_tracing();
    let registry = Arc::new(Registry::new());

    let writers: Vec<_> = (0..4u64)
        .map(|worker| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let mut accepted = 0usize;
                for i in 0..200u64 {
                    let identity = Identity::new(worker * 10_000 + i);
                    match registry.register(&Substrate::constant(identity, i)) {
                        Ok(_) => accepted += 1,
                        Err(Error::FrozenRegistry) => break,
                        Err(other) => panic!("unexpected error: {other}"),
                    }
                }
                accepted
            })
        })
        .collect();

    let freezer = {
        let registry = Arc::clone(&registry);
        thread::spawn(move || registry.freeze())
    };

    let accepted: usize = writers.into_iter().map(|w| w.join().unwrap()).sum();
    freezer.join().unwrap();

    assert!(registry.is_frozen());
    assert_eq!(
        registry.count(),
        accepted,
        "every accepted registration must be visible, nothing else"
    );
}

#[test]
fn test_snapshot_ordering_under_interleaved_writers() {
    let registry = Arc::new(Registry::new());
    let handles: Vec<_> = (0..4u64)
        .map(|worker| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for i in 0..100u64 {
                    registry
                        .register(&Substrate::constant(
                            Identity::new(worker * 1000 + i),
                            0,
                        ))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let identities = registry.get_all_identities();
    assert_eq!(identities.len(), 400);

    // Insertion order is a total order: every identity appears exactly once
    let unique: std::collections::HashSet<_> = identities.iter().collect();
    assert_eq!(unique.len(), 400);
}
