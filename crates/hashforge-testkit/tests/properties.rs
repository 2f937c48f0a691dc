//! Property-based tests over the whole compiled-in identifier set.

use proptest::prelude::*;

use hashforge_algo::{catalog, Algorithm, AlgorithmId, Family};
use hashforge_testkit::generators;

proptest! {
    #[test]
    fn prop_case_mangled_aliases_still_resolve(
        (alias, id) in generators::case_mangled_alias()
    ) {
        prop_assert_eq!(catalog::parse(Some(&alias)), id);
    }

    #[test]
    fn prop_junk_never_resolves(alias in generators::junk_alias()) {
        prop_assert_eq!(catalog::parse(Some(&alias)), AlgorithmId::Invalid);
    }

    #[test]
    fn prop_name_round_trips(id in generators::algorithm_id(), short in any::<bool>()) {
        let name = catalog::name(id, short);
        prop_assert_eq!(catalog::parse(Some(name)), id);
    }

    #[test]
    fn prop_metadata_is_a_pure_function_of_the_id(id in generators::algorithm_id()) {
        let a = Algorithm::new(id);
        let b = Algorithm::new(id);
        prop_assert_eq!(a.l2(), b.l2());
        prop_assert_eq!(a.l3(), b.l3());
        prop_assert_eq!(a.max_intensity(), b.max_intensity());
        prop_assert_eq!(a.family(), b.family());
    }

    #[test]
    fn prop_valid_algorithms_classify_and_serialize(algorithm in generators::algorithm()) {
        prop_assert!(algorithm.is_valid());
        prop_assert_ne!(algorithm.family(), Family::Unknown);

        let json = serde_json::to_string(&algorithm).unwrap();
        let back: Algorithm = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, algorithm);
    }

    #[test]
    fn prop_l3_is_nonzero_for_real_algorithms(id in generators::algorithm_id()) {
        // Every compiled-in variant has a documented working set.
        prop_assert!(Algorithm::new(id).l3() > 0, "{:?}", id);
    }
}
