//! Sequence transformations: chunking, deduplication, flattening.

use std::collections::HashSet;
use std::hash::Hash;

use tidy_types::{Key, Nested, OpError, OpResult, OrderPolicy, Value};

/// Split `items` into consecutive chunks of `chunk_size`.
///
/// The last chunk holds the remainder when the length does not divide evenly.
/// A zero `chunk_size` is rejected.
///
/// ```
/// use tidy_utils::list::chunk_list;
///
/// let chunks = chunk_list(&[1, 2, 3, 4, 5], 2).unwrap();
/// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub fn chunk_list<T: Clone>(items: &[T], chunk_size: usize) -> OpResult<Vec<Vec<T>>> {
    if chunk_size == 0 {
        return Err(OpError::invalid_argument(
            "chunk_list",
            "chunk size must be positive",
        ));
    }
    Ok(items.chunks(chunk_size).map(<[T]>::to_vec).collect())
}

/// Keep the first occurrence of every distinct element.
///
/// Under [`OrderPolicy::Preserve`] the result follows first-occurrence order.
/// Under [`OrderPolicy::Unordered`] the order is whatever the hash set yields.
#[must_use]
pub fn remove_duplicates<T>(items: &[T], order: OrderPolicy) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    match order {
        OrderPolicy::Preserve => {
            let mut seen = HashSet::with_capacity(items.len());
            items
                .iter()
                .filter(|item| seen.insert(*item))
                .cloned()
                .collect()
        }
        OrderPolicy::Unordered => items
            .iter()
            .collect::<HashSet<_>>()
            .into_iter()
            .cloned()
            .collect(),
    }
}

/// Deduplicate dynamic values. Every element must be hashable.
pub fn remove_duplicate_values(items: &[Value], order: OrderPolicy) -> OpResult<Vec<Value>> {
    let keys = items
        .iter()
        .map(|item| {
            item.as_key()
                .ok_or_else(|| OpError::type_mismatch("remove_duplicates", "hashable value", item))
        })
        .collect::<OpResult<Vec<Key>>>()?;
    Ok(remove_duplicates(&keys, order)
        .into_iter()
        .map(Value::from)
        .collect())
}

/// Flatten arbitrarily nested lists into their leaves, depth-first, left to right.
#[must_use]
pub fn flatten_list<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    let mut out = Vec::new();
    flatten_into(nested, &mut out);
    out
}

fn flatten_into<T: Clone>(nested: &[Nested<T>], out: &mut Vec<T>) {
    for item in nested {
        match item {
            Nested::Leaf(value) => out.push(value.clone()),
            Nested::List(items) => flatten_into(items, out),
        }
    }
}

/// Flatten a dynamic value. Only `Value::List` is descended into; any other
/// top-level value is already flat.
#[must_use]
pub fn flatten_value(value: Value) -> Vec<Value> {
    match Nested::from(value) {
        Nested::List(items) => flatten_list(&items),
        Nested::Leaf(leaf) => vec![leaf],
    }
}
