//! Layer merger
//!
//! Deep-merges configuration layers, weakest first:
//! - A key holding a mapping on either side is merged recursively; a scalar
//!   on the other side is treated as an empty mapping and dropped
//! - Otherwise the later value wins only when it is truthy; a present but
//!   falsy later value never hides a value from an earlier layer
//! - A key only one layer knows about keeps that layer's value

use crate::domain::entities::ConfigLayer;
use crate::domain::value_objects::{Mapping, Value};

/// Nesting limit for merged documents
pub const MAX_MERGE_DEPTH: usize = 64;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MergeError {
    #[error("configuration nested deeper than {limit} levels at {path}")]
    DepthExceeded { path: String, limit: usize },
}

/// Merge layers in order; the first layer is the weakest
pub fn merge_layers(layers: &[ConfigLayer]) -> Result<Mapping, MergeError> {
    merge_mappings(layers.iter().map(|layer| &layer.values))
}

/// Merge plain mappings in order; the first mapping is the weakest
pub fn merge_mappings<'a, I>(mappings: I) -> Result<Mapping, MergeError>
where
    I: IntoIterator<Item = &'a Mapping>,
{
    mappings
        .into_iter()
        .try_fold(Mapping::new(), |merged, layer| combine(&merged, layer))
}

/// Merge two mappings; `stronger` takes precedence where it is truthy
pub fn combine(weaker: &Mapping, stronger: &Mapping) -> Result<Mapping, MergeError> {
    combine_at(weaker, stronger, "", 0)
}

fn combine_at(
    weaker: &Mapping,
    stronger: &Mapping,
    path: &str,
    depth: usize,
) -> Result<Mapping, MergeError> {
    if depth > MAX_MERGE_DEPTH {
        return Err(MergeError::DepthExceeded {
            path: path.to_string(),
            limit: MAX_MERGE_DEPTH,
        });
    }

    let empty = Mapping::new();
    let mut merged = Mapping::new();

    for key in weaker.keys().chain(stronger.keys()) {
        if merged.contains_key(key) {
            continue;
        }

        let ours = weaker.get(key);
        let theirs = stronger.get(key);

        let value = if ours.is_some_and(Value::is_mapping) || theirs.is_some_and(Value::is_mapping)
        {
            let nested = combine_at(
                ours.and_then(Value::as_mapping).unwrap_or(&empty),
                theirs.and_then(Value::as_mapping).unwrap_or(&empty),
                &format!("{path}/{key}"),
                depth + 1,
            )?;
            Value::Mapping(nested)
        } else {
            pick(ours, theirs)
        };

        merged.insert(key.clone(), value);
    }

    Ok(merged)
}

/// Present-and-truthy beats present-but-falsy beats absent
fn pick(weaker: Option<&Value>, stronger: Option<&Value>) -> Value {
    match (weaker, stronger) {
        (_, Some(theirs)) if theirs.is_truthy() => theirs.clone(),
        (Some(ours), _) => ours.clone(),
        (None, Some(theirs)) => theirs.clone(),
        (None, None) => Value::Null,
    }
}
