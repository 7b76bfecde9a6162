//! Comparable Value
//!
//! Values whose "is this the same deployment?" equality differs from raw
//! equality. Deploy keys are regenerated on every run, so two of them are
//! considered the same as long as their encoded lengths agree.

use super::value::Value;

/// Equality predicate carried by a volatile value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Equality {
    /// Standard equality of the wrapped value
    Exact,
    /// Equal iff the encoded lengths match, whatever the content
    LengthOnly,
}

/// A value wrapped together with its equality predicate
#[derive(Debug, Clone, PartialEq)]
pub struct VolatileValue {
    raw: Box<Value>,
    equality: Equality,
}

impl VolatileValue {
    pub fn new(raw: impl Into<Value>, equality: Equality) -> Self {
        Self {
            raw: Box::new(raw.into()),
            equality,
        }
    }

    /// Wrap a value whose content changes between runs but whose length
    /// does not (generated key material).
    pub fn length_only(raw: impl Into<Value>) -> Self {
        Self::new(raw, Equality::LengthOnly)
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn equality(&self) -> Equality {
        self.equality
    }

    /// Apply this value's predicate against any other operand
    pub fn same_as(&self, other: &Value) -> bool {
        match self.equality {
            Equality::Exact => exact_eq(&self.raw, other.raw()),
            Equality::LengthOnly => match (encoded_len(&self.raw), encoded_len(other)) {
                (Some(ours), Some(theirs)) => ours == theirs,
                _ => false,
            },
        }
    }
}

/// Comparison view over a value: plain values use exact equality, volatile
/// values carry their own predicate.
#[derive(Debug, Clone, Copy)]
pub enum ComparableValue<'a> {
    Plain(&'a Value),
    Volatile(&'a VolatileValue),
}

impl<'a> ComparableValue<'a> {
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::Volatile(v) => ComparableValue::Volatile(v),
            other => ComparableValue::Plain(other),
        }
    }

    /// Equality as seen by change detection
    ///
    /// When either side is volatile its predicate decides; the left operand
    /// wins when both are.
    pub fn matches(&self, other: &ComparableValue<'_>) -> bool {
        match (self, other) {
            (ComparableValue::Volatile(ours), ComparableValue::Volatile(theirs)) => {
                ours.same_as(theirs.raw())
            }
            (ComparableValue::Volatile(ours), ComparableValue::Plain(theirs)) => {
                ours.same_as(theirs)
            }
            (ComparableValue::Plain(ours), ComparableValue::Volatile(theirs)) => {
                theirs.same_as(ours)
            }
            (ComparableValue::Plain(ours), ComparableValue::Plain(theirs)) => {
                exact_eq(ours, theirs)
            }
        }
    }

    /// Convenience for comparing two raw values
    pub fn equal(left: &Value, right: &Value) -> bool {
        ComparableValue::of(left).matches(&ComparableValue::of(right))
    }

    pub fn is_volatile(&self) -> bool {
        matches!(self, ComparableValue::Volatile(_))
    }

    pub fn raw(&self) -> &'a Value {
        match self {
            ComparableValue::Plain(v) => v,
            ComparableValue::Volatile(v) => v.raw(),
        }
    }
}

/// Length of the value's textual encoding, for length-only comparison
///
/// Strings count bytes (key material is base64, so bytes == characters);
/// numbers and booleans count their rendered form. Other kinds have no
/// encoded length and never match.
fn encoded_len(value: &Value) -> Option<usize> {
    match value.raw() {
        Value::String(s) => Some(s.len()),
        Value::Number(n) => Some(n.to_string().len()),
        Value::Bool(b) => Some(b.to_string().len()),
        _ => None,
    }
}

/// Exact structural equality where numbers compare by numeric value
fn exact_eq(left: &Value, right: &Value) -> bool {
    match (left.raw(), right.raw()) {
        (Value::Number(a), Value::Number(b)) => numbers_eq(a, b),
        (Value::Sequence(a), Value::Sequence(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| exact_eq(x, y))
        }
        (Value::Mapping(a), Value::Mapping(b)) => {
            a.len() == b.len()
                && a
                    .iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| exact_eq(x, y)))
        }
        (a, b) => a == b,
    }
}

fn numbers_eq(a: &serde_json::Number, b: &serde_json::Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn length_only_ignores_content() {
        let a = Value::Volatile(VolatileValue::length_only("AAAA"));
        let b = Value::Volatile(VolatileValue::length_only("BBBB"));
        assert!(ComparableValue::equal(&a, &b));
    }

    #[test]
    fn length_only_rejects_different_lengths() {
        let a = Value::Volatile(VolatileValue::length_only("AAAA"));
        let b = Value::Volatile(VolatileValue::length_only("AAAAA"));
        assert!(!ComparableValue::equal(&a, &b));
    }

    #[test]
    fn length_only_against_plain_string() {
        let key = Value::Volatile(VolatileValue::length_only("abcd"));
        assert!(ComparableValue::equal(&key, &Value::from("wxyz")));
        assert!(ComparableValue::equal(&Value::from("wxyz"), &key));
        assert!(!ComparableValue::equal(&key, &Value::from("wxy")));
    }

    #[test]
    fn length_only_never_matches_structures() {
        let key = Value::Volatile(VolatileValue::length_only("ab"));
        assert!(!ComparableValue::equal(&key, &Value::from(json!(["a", "b"]))));
        assert!(!ComparableValue::equal(&key, &Value::Null));
    }

    #[test]
    fn exact_volatile_behaves_like_raw() {
        let wrapped = Value::Volatile(VolatileValue::new("same", Equality::Exact));
        assert!(ComparableValue::equal(&wrapped, &Value::from("same")));
        assert!(!ComparableValue::equal(&wrapped, &Value::from("sane")));
    }

    #[test]
    fn plain_numbers_compare_numerically() {
        assert!(ComparableValue::equal(
            &Value::from(json!(1)),
            &Value::from(json!(1.0))
        ));
        assert!(!ComparableValue::equal(
            &Value::from(json!(1)),
            &Value::from(json!("1"))
        ));
    }

    #[test]
    fn plain_nested_structures_use_exact_equality() {
        let left = Value::from(json!({"a": [1, {"b": 2.0}]}));
        let right = Value::from(json!({"a": [1, {"b": 2}]}));
        assert!(ComparableValue::equal(&left, &right));
        assert!(!ComparableValue::equal(
            &left,
            &Value::from(json!({"a": [1, {"b": 3}]}))
        ));
    }
}
