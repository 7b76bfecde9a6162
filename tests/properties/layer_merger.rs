//! Property tests for layer merging.

use proptest::prelude::*;

use lighter::domain::services::merge_mappings;
use lighter::Mapping;

use crate::strategies::{mapping, scalar};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A single layer merges to itself.
    #[test]
    fn property_single_layer_is_identity(a in mapping()) {
        prop_assert_eq!(merge_mappings([&a]).unwrap(), a);
    }

    /// PROPERTY: Merging a layer with itself changes nothing.
    #[test]
    fn property_merge_is_idempotent(a in mapping()) {
        prop_assert_eq!(merge_mappings([&a, &a]).unwrap(), a);
    }

    /// PROPERTY: Empty layers on either side are neutral.
    #[test]
    fn property_empty_layer_is_neutral(a in mapping()) {
        let empty = Mapping::new();
        prop_assert_eq!(merge_mappings([&a, &empty]).unwrap(), a.clone());
        prop_assert_eq!(merge_mappings([&empty, &a]).unwrap(), a);
    }

    /// PROPERTY: A truthy scalar in a later layer always wins; a falsy one never does.
    #[test]
    fn property_later_truthy_scalar_wins(earlier in scalar(), later in scalar()) {
        let mut weaker = Mapping::new();
        weaker.insert("key".to_string(), earlier.clone());
        let mut stronger = Mapping::new();
        stronger.insert("key".to_string(), later.clone());

        let merged = merge_mappings([&weaker, &stronger]).unwrap();
        let expected = if later.is_truthy() { later } else { earlier };
        prop_assert_eq!(merged.get("key"), Some(&expected));
    }

    /// PROPERTY: Every key of every layer survives the merge.
    #[test]
    fn property_merge_keeps_all_keys(a in mapping(), b in mapping()) {
        let merged = merge_mappings([&a, &b]).unwrap();
        for key in a.keys().chain(b.keys()) {
            prop_assert!(merged.contains_key(key));
        }
        prop_assert!(merged.keys().all(|k| a.contains_key(k) || b.contains_key(k)));
    }

    /// PROPERTY: Merging never touches its inputs.
    #[test]
    fn property_merge_leaves_inputs_alone(a in mapping(), b in mapping()) {
        let (before_a, before_b) = (a.clone(), b.clone());
        let _ = merge_mappings([&a, &b]).unwrap();
        prop_assert_eq!(a, before_a);
        prop_assert_eq!(b, before_b);
    }
}
