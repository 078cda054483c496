//! Properties: the universally quantified kernel laws
//!
//! Each property mirrors a reversibility validator or a structural
//! guarantee; proptest drives them across the full 64-bit domain.

use proptest::prelude::*;
use substratum::{
    compute_residue, divide, multiply, promote, validate_addition, validate_residue,
    validate_subtraction, Delta, Identity, Lens, Observer, Substrate, MASK64,
};

proptest! {
    #[test]
    fn prop_identity_roundtrip(value: u64) {
        prop_assert_eq!(Identity::new(value).value(), value);
    }

    #[test]
    fn prop_divide_shape_is_universal(id: u64, manifested: u64) {
        let substrate = Substrate::constant(Identity::new(id), manifested);
        let decomposition = divide(&substrate);
        prop_assert_eq!(decomposition.len(), 9);
        prop_assert_eq!(decomposition.levels(), [0, 1, 1, 2, 3, 5, 8, 13, 21]);
    }

    #[test]
    fn prop_multiply_singleton(value: u64) {
        prop_assert_eq!(multiply(&[value]), value & MASK64);
    }

    #[test]
    fn prop_residue_partition(value: u64, modulus in 1u64..) {
        let (expressed, residue) =
            compute_residue(value, modulus, Identity::new(0)).unwrap();
        prop_assert_eq!(expressed, value % modulus);
        prop_assert_eq!(expressed + residue.value, value);
        prop_assert!(validate_residue(value, modulus).is_ok());
    }

    #[test]
    fn prop_promote_deterministic_and_nonmutating(old: u64, attr: u64, change: u64) {
        let identity = Identity::new(old);
        let delta = Delta::new(change);
        let a = promote(identity, attr, &delta);
        let b = promote(identity, attr, &delta);
        prop_assert_eq!(a, b);
        prop_assert_eq!(identity.value(), old);
    }

    #[test]
    fn prop_addition_reversible_everywhere(x: u64, y: u64) {
        prop_assert!(validate_addition(x, y).is_ok());
        prop_assert!(validate_subtraction(x, y).is_ok());
    }

    #[test]
    fn prop_observation_is_lens_of_invoke(id: u64, manifested: u64, shift in 0u32..64) {
        let substrate = Substrate::constant(Identity::new(id), manifested);
        let lens = Lens::new(Identity::new(1), move |value| value >> shift);
        let observer = Observer::new();

        let observation = observer.observe(&substrate, &lens);
        prop_assert_eq!(observation.manifestation, manifested >> shift);
        prop_assert_eq!(observation.substrate, Identity::new(id));
    }
}

#[test]
fn test_multiply_empty_is_unity() {
    assert_eq!(multiply(&[]), 1);
}
