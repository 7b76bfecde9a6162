//! Change Detector Domain Service
//!
//! Decides whether a desired app definition is already what the
//! orchestrator is running. The comparison is one-sided: everything the
//! desired state says must hold in the deployed state, but the orchestrator
//! is free to carry extra fields (defaults, timestamps, versions).

use std::cmp::Ordering;

use tracing::debug;

use crate::domain::value_objects::{ComparableValue, Mapping, Value, ValueKind};

/// Nesting limit for compared documents
pub const MAX_COMPARE_DEPTH: usize = 64;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ComparisonError {
    #[error("cannot order {left} against {right} in sequence at {path}")]
    Unorderable {
        path: String,
        left: ValueKind,
        right: ValueKind,
    },

    #[error("configuration nested deeper than {limit} levels at {path}")]
    DepthExceeded { path: String, limit: usize },
}

/// True when every field of `desired` is present and equal in `deployed`
///
/// Stops at the first divergence and logs its path at debug level.
pub fn unchanged(desired: &Mapping, deployed: &Mapping) -> Result<bool, ComparisonError> {
    compare_mappings(desired, deployed, "", 0)
}

/// Value-level entry point, for comparing sub-trees
pub fn value_unchanged(desired: &Value, deployed: &Value) -> Result<bool, ComparisonError> {
    compare(desired, deployed, "", 0)
}

fn compare(
    desired: &Value,
    deployed: &Value,
    path: &str,
    depth: usize,
) -> Result<bool, ComparisonError> {
    if depth > MAX_COMPARE_DEPTH {
        return Err(ComparisonError::DepthExceeded {
            path: path.to_string(),
            limit: MAX_COMPARE_DEPTH,
        });
    }

    // Volatile values decide for themselves, whatever they wrap
    if desired.is_volatile() || deployed.is_volatile() {
        return Ok(report(
            ComparableValue::equal(desired, deployed),
            path,
            desired,
            deployed,
        ));
    }

    match (desired, deployed) {
        (Value::Mapping(next), Value::Mapping(prev)) => compare_mappings(next, prev, path, depth),
        (Value::Mapping(_), _) => {
            debug!("Value has changed at {} (mapping replaced by {})", path, deployed.kind());
            Ok(false)
        }
        (Value::Sequence(next), Value::Sequence(prev)) => {
            compare_sequences(next, prev, path, depth)
        }
        (Value::Sequence(_), _) => {
            debug!("List has changed at {} (now a {})", path, deployed.kind());
            Ok(false)
        }
        _ => Ok(report(
            ComparableValue::equal(desired, deployed),
            path,
            desired,
            deployed,
        )),
    }
}

fn compare_mappings(
    desired: &Mapping,
    deployed: &Mapping,
    path: &str,
    depth: usize,
) -> Result<bool, ComparisonError> {
    for (key, value) in desired {
        let keypath = format!("{path}/{key}");
        let Some(current) = deployed.get(key) else {
            debug!("New key found {}", keypath);
            return Ok(false);
        };
        if !compare(value, current, &keypath, depth + 1)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn compare_sequences(
    desired: &[Value],
    deployed: &[Value],
    path: &str,
    depth: usize,
) -> Result<bool, ComparisonError> {
    if desired.len() != deployed.len() {
        debug!("List has changed at {}", path);
        return Ok(false);
    }

    let next = sorted(desired, path)?;
    let prev = sorted(deployed, path)?;

    for (a, b) in next.into_iter().zip(prev) {
        if !compare(a, b, path, depth + 1)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn report(same: bool, path: &str, desired: &Value, deployed: &Value) -> bool {
    if !same {
        match (desired, deployed) {
            // Never log key material
            (Value::Volatile(_), _) | (_, Value::Volatile(_)) => {
                debug!("Value has changed at {} (volatile)", path)
            }
            _ => debug!(
                "Value has changed at {} ({} != {})",
                path,
                render(desired),
                render(deployed)
            ),
        }
    }
    same
}

fn render(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("{value:?}"))
}

/// Sort a sequence for order-independent comparison
///
/// Every element must share one kind; sequences mixing e.g. strings and
/// numbers have no meaningful order and are rejected.
fn sorted<'a>(items: &'a [Value], path: &str) -> Result<Vec<&'a Value>, ComparisonError> {
    if let Some(first) = items.first() {
        let kind = first.kind();
        if let Some(odd) = items.iter().find(|item| item.kind() != kind) {
            return Err(ComparisonError::Unorderable {
                path: path.to_string(),
                left: kind,
                right: odd.kind(),
            });
        }
    }

    let mut refs: Vec<&Value> = items.iter().collect();
    refs.sort_by(|a, b| total_order(a, b));
    Ok(refs)
}

/// Total order over values: kind first, then content
fn total_order(a: &Value, b: &Value) -> Ordering {
    match (a.raw(), b.raw()) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.total_cmp(&y)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Sequence(x), Value::Sequence(y)) => x
            .iter()
            .zip(y)
            .map(|(p, q)| total_order(p, q))
            .find(|o| o.is_ne())
            .unwrap_or_else(|| x.len().cmp(&y.len())),
        (Value::Mapping(x), Value::Mapping(y)) => x
            .iter()
            .zip(y)
            .map(|((kx, vx), (ky, vy))| kx.cmp(ky).then_with(|| total_order(vx, vy)))
            .find(|o| o.is_ne())
            .unwrap_or_else(|| x.len().cmp(&y.len())),
        (x, y) => x.kind().cmp(&y.kind()),
    }
}
