//! Property tests for change detection.

use proptest::prelude::*;

use lighter::{unchanged, Mapping, Value};

use crate::strategies::{mapping, value};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every config is unchanged against itself.
    #[test]
    fn property_comparison_is_reflexive(a in mapping()) {
        prop_assert_eq!(unchanged(&a, &a), Ok(true));
    }

    /// PROPERTY: Fields only the orchestrator knows about never count as a change.
    #[test]
    fn property_extra_deployed_fields_are_ignored(a in mapping(), extra in value()) {
        let mut deployed = a.clone();
        deployed.insert("zz_version".to_string(), extra);
        prop_assert_eq!(unchanged(&a, &deployed), Ok(true));
    }

    /// PROPERTY: Sequence order does not matter.
    #[test]
    fn property_sequence_order_is_irrelevant(
        (items, shuffled) in prop::collection::vec(-1000i64..1000, 0..8)
            .prop_flat_map(|items| (Just(items.clone()), Just(items).prop_shuffle()))
    ) {
        let mut desired = Mapping::new();
        desired.insert(
            "ports".to_string(),
            Value::Sequence(items.into_iter().map(Value::from).collect()),
        );
        let mut deployed = Mapping::new();
        deployed.insert(
            "ports".to_string(),
            Value::Sequence(shuffled.into_iter().map(Value::from).collect()),
        );
        prop_assert_eq!(unchanged(&desired, &deployed), Ok(true));
    }

    /// PROPERTY: Dropping a desired key from the deployed state is a change.
    #[test]
    fn property_missing_key_is_a_change(a in mapping()) {
        prop_assume!(!a.is_empty());
        let mut deployed = a.clone();
        let key = deployed.keys().next().cloned().unwrap();
        deployed.remove(&key);
        prop_assert_eq!(unchanged(&a, &deployed), Ok(false));
    }
}
