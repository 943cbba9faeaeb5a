//! Calls through the named lookup tables

use serde_json::json;
use tidy_types::{Key, OpError, Value};
use tidy_utils::{DICT_OPS, LIST_OPS, STRING_OPS, lookup, registry};

use crate::common::{map, v};

#[test]
fn every_group_is_reachable_by_name() {
    let groups: Vec<_> = registry::tables().iter().map(|t| t.group()).collect();
    assert_eq!(groups, ["string", "list", "dict"]);
    for table in registry::tables() {
        for name in table.names() {
            assert!(lookup(table.group(), name).is_ok(), "{}.{name}", table.group());
        }
    }
}

#[test]
fn string_group() {
    assert_eq!(
        STRING_OPS
            .call("capitalize_words", &[v(json!("hello   world"))])
            .unwrap(),
        v(json!("Hello World"))
    );
    assert_eq!(
        STRING_OPS
            .call("remove_special_chars", &[v(json!("a-b c!"))])
            .unwrap(),
        v(json!("ab c"))
    );
    assert_eq!(
        STRING_OPS
            .call("remove_special_chars", &[v(json!("a-b c!")), v(json!(false))])
            .unwrap(),
        v(json!("abc"))
    );
    assert_eq!(
        STRING_OPS
            .call("truncate_string", &[v(json!("hello world")), v(json!(8))])
            .unwrap(),
        v(json!("hello..."))
    );
    assert_eq!(
        STRING_OPS
            .call(
                "truncate_string",
                &[v(json!("hello world")), v(json!(6)), v(json!("~"))]
            )
            .unwrap(),
        v(json!("hello~"))
    );
}

#[test]
fn truncate_shorter_than_suffix_is_invalid() {
    let err = STRING_OPS
        .call("truncate_string", &[v(json!("hello")), v(json!(1))])
        .unwrap_err();
    assert!(matches!(err, OpError::InvalidArgument { .. }));
}

#[test]
fn list_group() {
    assert_eq!(
        LIST_OPS
            .call("chunk_list", &[v(json!([1, 2, 3, 4, 5])), v(json!(2))])
            .unwrap(),
        v(json!([[1, 2], [3, 4], [5]]))
    );
    assert_eq!(
        LIST_OPS
            .call("remove_duplicates", &[v(json!(["a", 1, "a", true, 1]))])
            .unwrap(),
        v(json!(["a", 1, true]))
    );
    assert_eq!(
        LIST_OPS
            .call("flatten_list", &[v(json!([1, [2, [3, ["x"]]], {"k": [4]}]))])
            .unwrap(),
        v(json!([1, 2, 3, "x", {"k": [4]}]))
    );
}

#[test]
fn chunk_size_zero_is_invalid() {
    let err = LIST_OPS
        .call("chunk_list", &[v(json!([1, 2])), v(json!(0))])
        .unwrap_err();
    assert_eq!(
        err,
        OpError::invalid_argument("chunk_list", "chunk size must be positive")
    );
}

#[test]
fn floats_dedup_and_invert() {
    assert_eq!(
        LIST_OPS
            .call("remove_duplicates", &[v(json!([1.5, 1.5, 2.5]))])
            .unwrap(),
        v(json!([1.5, 2.5]))
    );
    let inverted = DICT_OPS
        .call("invert_dict", &[v(json!({"a": 0.5}))])
        .unwrap();
    assert_eq!(inverted.as_map().unwrap()[&Key::from(0.5)], Value::from("a"));
}

#[test]
fn dedup_of_unhashable_is_a_type_mismatch() {
    let err = LIST_OPS
        .call(
            "remove_duplicates",
            &[v(json!([[1], [1]])), v(json!(false))],
        )
        .unwrap_err();
    assert!(matches!(err, OpError::TypeMismatch { found: "list", .. }));
}

#[test]
fn dict_group() {
    let merged = DICT_OPS
        .call(
            "merge_dicts",
            &[v(json!({"a": {"x": 1}})), v(json!({"a": {"y": 2}})), v(json!(true))],
        )
        .unwrap();
    assert_eq!(merged, v(json!({"a": {"x": 1, "y": 2}})));

    let shallow = DICT_OPS
        .call("merge_dicts", &[v(json!({"a": {"x": 1}})), v(json!({"a": {"y": 2}}))])
        .unwrap();
    assert_eq!(shallow, v(json!({"a": {"y": 2}})));

    let filtered = DICT_OPS
        .call(
            "filter_dict",
            &[v(json!({"a": 1, "b": 2, "c": 3})), v(json!(["c", "a", "missing"]))],
        )
        .unwrap();
    assert_eq!(filtered, v(json!({"a": 1, "c": 3})));

    let inverted = DICT_OPS
        .call("invert_dict", &[v(json!({"a": 1, "b": "two"}))])
        .unwrap();
    let inverted = inverted.as_map().unwrap();
    assert_eq!(inverted[&Key::Int(1)], Value::from("a"));
    assert_eq!(inverted[&Key::from("two")], Value::from("b"));
}

#[test]
fn invert_duplicate_values_last_key_wins() {
    // serde_json objects iterate in key order: "a", "b", "c".
    let d = map(json!({"a": 1, "b": 2, "c": 1}));
    let inverted = DICT_OPS.call("invert_dict", &[Value::Map(d)]).unwrap();
    assert_eq!(inverted.as_map().unwrap()[&Key::Int(1)], Value::from("c"));
}

#[test]
fn filter_with_unhashable_key_is_a_type_mismatch() {
    let err = DICT_OPS
        .call("filter_dict", &[v(json!({"a": 1})), v(json!([{"a": 1}]))])
        .unwrap_err();
    assert!(matches!(
        err,
        OpError::TypeMismatch {
            op: "filter_dict",
            ..
        }
    ));
}

#[test]
fn wrong_argument_type_names_both_types() {
    let err = DICT_OPS
        .call("merge_dicts", &[v(json!({})), v(json!([]))])
        .unwrap_err();
    assert_eq!(err.to_string(), "merge_dicts: expected map, found list");
}
