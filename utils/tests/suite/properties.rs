//! Property tests for the pure operations
//!
//! These tests use proptest to check the laws each operation promises.

use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;
use tidy_types::{Key, Mapping, MergeDepth, Nested, OrderPolicy, Value};
use tidy_utils::{dict, list, string};

fn nested_strategy() -> impl Strategy<Value = Nested<i32>> {
    let leaf = any::<i32>().prop_map(Nested::Leaf);
    leaf.prop_recursive(4, 64, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_map(Nested::List)
    })
}

fn leaf_multiset(nested: &Nested<i32>, out: &mut Vec<i32>) {
    match nested {
        Nested::Leaf(value) => out.push(*value),
        Nested::List(items) => items.iter().for_each(|item| leaf_multiset(item, out)),
    }
}

fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e6f64..1.0e6).prop_map(Value::Float),
        "[a-z]{0,4}".prop_map(Value::Str),
    ];
    leaf.prop_recursive(4, 64, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::List),
            prop::collection::vec(("[a-z]{1,3}", inner), 0..3).prop_map(|entries| {
                Value::Map(entries.into_iter().map(|(k, v)| (Key::Str(k), v)).collect())
            }),
        ]
    })
}

fn value_leaves(value: &Value, out: &mut Vec<Value>) {
    match value {
        Value::List(items) => items.iter().for_each(|item| value_leaves(item, out)),
        other => out.push(other.clone()),
    }
}

fn int_mapping(prefix: &str, entries: Vec<(String, i64)>) -> Mapping {
    entries
        .into_iter()
        .map(|(k, v)| (Key::Str(format!("{prefix}{k}")), Value::Int(v)))
        .collect()
}

proptest! {
    #[test]
    fn truncate_to_own_length_is_identity(text in "\\PC{0,40}") {
        let len = text.chars().count();
        prop_assert_eq!(string::truncate_string(&text, len, "...").unwrap(), text);
    }

    #[test]
    fn truncate_length_is_min_of_text_and_budget(
        text in "\\PC{0,40}",
        suffix in "[.~…]{0,3}",
        n in 0usize..50,
    ) {
        prop_assume!(n >= suffix.chars().count());
        let out = string::truncate_string(&text, n, &suffix).unwrap();
        prop_assert_eq!(out.chars().count(), text.chars().count().min(n));
    }

    #[test]
    fn capitalize_is_idempotent_on_ascii(text in "[a-zA-Z \t]{0,30}") {
        let once = string::capitalize_words(&text);
        prop_assert_eq!(string::capitalize_words(&once), once.clone());
        prop_assert!(!once.contains("  "));
    }

    #[test]
    fn chunks_concatenate_back(
        items in prop::collection::vec(any::<i32>(), 0..50),
        k in 1usize..10,
    ) {
        let chunks = list::chunk_list(&items, k).unwrap();
        let rebuilt: Vec<i32> = chunks.iter().flatten().copied().collect();
        prop_assert_eq!(&rebuilt, &items);
        if let Some((_last, full)) = chunks.split_last() {
            prop_assert!(full.iter().all(|chunk| chunk.len() == k));
        }
    }

    #[test]
    fn dedup_has_no_repeats_and_no_strangers(
        items in prop::collection::vec(0u8..10, 0..50),
        preserve in any::<bool>(),
    ) {
        let out = list::remove_duplicates(&items, OrderPolicy::from(preserve));
        let unique: HashSet<_> = out.iter().collect();
        prop_assert_eq!(unique.len(), out.len());
        prop_assert!(out.iter().all(|item| items.contains(item)));
        let expected: BTreeSet<_> = items.iter().collect();
        prop_assert_eq!(expected.len(), out.len());
    }

    #[test]
    fn flatten_preserves_leaves_in_order(nested in prop::collection::vec(nested_strategy(), 0..6)) {
        let mut expected = Vec::new();
        for item in &nested {
            leaf_multiset(item, &mut expected);
        }
        prop_assert_eq!(list::flatten_list(&nested), expected);
    }

    #[test]
    fn flatten_value_leaves_no_lists(value in value_strategy()) {
        let mut expected = Vec::new();
        value_leaves(&value, &mut expected);
        let flat = list::flatten_value(value);
        prop_assert!(flat.iter().all(|item| !matches!(item, Value::List(_))));
        prop_assert_eq!(flat, expected);
    }

    #[test]
    fn merge_of_disjoint_maps_is_union(
        left in prop::collection::vec(("[a-z]{1,4}", any::<i64>()), 0..10),
        right in prop::collection::vec(("[a-z]{1,4}", any::<i64>()), 0..10),
        deep in any::<bool>(),
    ) {
        let a = int_mapping("l_", left);
        let b = int_mapping("r_", right);
        let merged = dict::merge_dicts(&a, &b, MergeDepth::from(deep));
        prop_assert_eq!(merged.len(), a.len() + b.len());
        for (key, value) in a.iter().chain(b.iter()) {
            prop_assert_eq!(merged.get(key), Some(value));
        }
    }

    #[test]
    fn filter_keys_are_intersection(
        entries in prop::collection::vec(("[a-e]{1,2}", any::<i64>()), 0..12),
        wanted in prop::collection::vec("[a-e]{1,2}", 0..12),
    ) {
        let d = int_mapping("", entries);
        let keys: Vec<Key> = wanted.into_iter().map(Key::Str).collect();
        let filtered = dict::filter_dict(&d, &keys);
        let got: BTreeSet<&Key> = filtered.keys().collect();
        let want_set: BTreeSet<&Key> = keys.iter().collect();
        let expected: BTreeSet<&Key> = d.keys().filter(|k| want_set.contains(k)).collect();
        prop_assert_eq!(got, expected);
    }
}
