#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::{BTreeMap, HashMap};

use serde_json::json;

use gauge_exporter_core::labels::{normalize, LabelSet};

#[test]
fn insertion_order_does_not_matter() {
    let a = normalize([("zone", "eu"), ("host", "web-1"), ("app", "api")]).unwrap();
    let b = normalize(vec![("app", "api"), ("zone", "eu"), ("host", "web-1")]).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.canonical_key(), b.canonical_key());

    let names: Vec<&str> = a.iter().map(|(k, _)| k).collect();
    assert_eq!(names, ["app", "host", "zone"]);
}

#[test]
fn maps_and_pair_lists_agree() {
    let mut hm = HashMap::new();
    hm.insert("b".to_string(), "2".to_string());
    hm.insert("a".to_string(), "1".to_string());

    let mut bt = BTreeMap::new();
    bt.insert("b", "2");
    bt.insert("a", "1");

    let from_hash = normalize(&hm).unwrap();
    assert_eq!(from_hash, normalize(hm).unwrap());
    assert_eq!(from_hash, normalize(bt).unwrap());
    assert_eq!(from_hash, normalize(&[("a", "1"), ("b", "2")]).unwrap());
    assert_eq!(from_hash, normalize(json!({"b": "2", "a": "1"})).unwrap());
}

#[test]
fn sorts_by_name_not_value() {
    let labels = normalize([("b", "a"), ("a", "z")]).unwrap();
    assert_eq!(labels.to_string(), r#"{a="z",b="a"}"#);
}

#[test]
fn positional_json_is_rejected() {
    let err = normalize(json!(["label1:value1", "label2:value2"])).expect_err("must fail");
    assert_eq!(err.kind().as_str(), "VALIDATION");

    for bad in [json!("a=b"), json!(3), json!(null), json!(true)] {
        let err = normalize(&bad).expect_err("must fail");
        assert_eq!(err.kind().as_str(), "VALIDATION", "input={bad}");
    }
}

#[test]
fn empty_inputs_are_empty_sets() {
    assert!(normalize(json!({})).unwrap().is_empty());
    assert!(normalize(json!([])).unwrap().is_empty());
    assert!(normalize(Vec::<(String, String)>::new()).unwrap().is_empty());
    assert_eq!(LabelSet::new().canonical_key(), "");
}

#[test]
fn empty_and_duplicate_names_are_rejected() {
    let err = normalize([("", "x")]).expect_err("empty name");
    assert_eq!(err.kind().as_str(), "VALIDATION");

    let err = normalize(vec![("a", "1"), ("a", "2")]).expect_err("duplicate name");
    assert_eq!(err.kind().as_str(), "VALIDATION");
}

#[test]
fn canonical_key_is_unambiguous() {
    let a = normalize([("a", "b;c=d")]).unwrap();
    let b = normalize([("a", "b"), ("c", "d")]).unwrap();
    assert_ne!(a.canonical_key(), b.canonical_key());
}

#[test]
fn empty_set_serializes_as_object() {
    assert_eq!(serde_json::to_string(&LabelSet::new()).unwrap(), "{}");
    let labels = normalize([("key2", "d"), ("key1", "b")]).unwrap();
    assert_eq!(serde_json::to_string(&labels).unwrap(), r#"{"key1":"b","key2":"d"}"#);
}

#[test]
fn display_escapes_values() {
    let labels = normalize([("path", "a\"b\\c\nd")]).unwrap();
    assert_eq!(labels.to_string(), r#"{path="a\"b\\c\nd"}"#);
    assert_eq!(labels.get("path"), Some("a\"b\\c\nd"));
    assert_eq!(labels.len(), 1);
}

#[test]
fn canonical_key_is_length_prefixed_pairs() {
    let labels = normalize([("zone", "eu-1"), ("app", "")]).unwrap();
    assert_eq!(labels.canonical_key(), "3:app=0:;4:zone=4:eu-1;");
}
