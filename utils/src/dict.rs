//! Mapping transformations: merging, key filtering, inversion.
//!
//! Every function builds a new map; inputs are never modified. Results keep
//! insertion order, so a replaced key stays where it first appeared.

use std::collections::HashSet;
use std::hash::Hash;

use indexmap::IndexMap;
use tidy_types::{Key, Mapping, MergeDepth, OpError, OpResult, Value};

/// Merge `overlay` into a copy of `base`.
///
/// On a shared key the `overlay` value wins, except under [`MergeDepth::Deep`]
/// when both values are maps: those are merged recursively by the same rule.
///
/// ```
/// use serde_json::json;
/// use tidy_types::{MergeDepth, Value};
/// use tidy_utils::dict::merge_dicts;
///
/// let a = Value::from(json!({"a": {"x": 1}}));
/// let b = Value::from(json!({"a": {"y": 2}}));
/// let merged = merge_dicts(a.as_map().unwrap(), b.as_map().unwrap(), MergeDepth::Deep);
/// assert_eq!(Value::Map(merged), Value::from(json!({"a": {"x": 1, "y": 2}})));
/// ```
#[must_use]
pub fn merge_dicts(base: &Mapping, overlay: &Mapping, depth: MergeDepth) -> Mapping {
    let mut merged = base.clone();
    for (key, value) in overlay {
        let combined = match (depth, merged.get(key), value) {
            (MergeDepth::Deep, Some(Value::Map(existing)), Value::Map(incoming)) => {
                tracing::trace!(%key, "deep merging nested map");
                Value::Map(merge_dicts(existing, incoming, depth))
            }
            _ => value.clone(),
        };
        merged.insert(key.clone(), combined);
    }
    merged
}

/// Keep only the entries of `map` whose key is listed in `keys`.
///
/// Listed keys missing from `map` are skipped. The result follows `map`'s order.
#[must_use]
pub fn filter_dict<'k, K, V, I>(map: &IndexMap<K, V>, keys: I) -> IndexMap<K, V>
where
    K: Clone + Eq + Hash + 'k,
    V: Clone,
    I: IntoIterator<Item = &'k K>,
{
    let wanted: HashSet<&K> = keys.into_iter().collect();
    map.iter()
        .filter(|(key, _)| wanted.contains(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Swap keys and values.
///
/// When several keys share a value, the last key in iteration order wins and
/// the entry sits where that value first appeared.
#[must_use]
pub fn invert_dict<K, V>(map: &IndexMap<K, V>) -> IndexMap<V, K>
where
    K: Clone,
    V: Clone + Eq + Hash,
{
    let mut inverted = IndexMap::with_capacity(map.len());
    let mut overwritten = 0_usize;
    for (key, value) in map {
        if inverted.insert(value.clone(), key.clone()).is_some() {
            overwritten += 1;
        }
    }
    if overwritten > 0 {
        tracing::debug!(overwritten, "invert_dict: duplicate values, later keys won");
    }
    inverted
}

/// Invert a dynamic map. Every value must be hashable.
pub fn invert_mapping(map: &Mapping) -> OpResult<Mapping> {
    let keyed = map
        .iter()
        .map(|(key, value)| {
            value
                .as_key()
                .map(|value_key| (key.clone(), value_key))
                .ok_or_else(|| OpError::type_mismatch("invert_dict", "hashable value", value))
        })
        .collect::<OpResult<IndexMap<Key, Key>>>()?;
    Ok(invert_dict(&keyed)
        .into_iter()
        .map(|(key, value)| (key, Value::from(value)))
        .collect())
}
