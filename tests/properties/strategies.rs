//! Value generators shared by the property tests.

use proptest::prelude::*;

use lighter::{Mapping, Value};

pub fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        (-1000i64..1000).prop_map(Value::from),
        "[a-z]{0,4}".prop_map(Value::from),
    ]
}

/// Sequences hold a single kind so they stay comparable
pub fn sequence() -> impl Strategy<Value = Value> {
    prop_oneof![
        prop::collection::vec((-1000i64..1000).prop_map(Value::from), 0..5),
        prop::collection::vec("[a-z]{1,3}".prop_map(Value::from), 0..5),
    ]
    .prop_map(Value::Sequence)
}

pub fn value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![3 => scalar(), 1 => sequence()];
    leaf.prop_recursive(3, 32, 4, |inner| {
        prop::collection::btree_map("[a-d]{1,2}", inner, 0..4).prop_map(Value::Mapping)
    })
}

pub fn mapping() -> impl Strategy<Value = Mapping> {
    prop::collection::btree_map("[a-d]{1,2}", value(), 0..5)
}
