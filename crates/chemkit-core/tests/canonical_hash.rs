use std::collections::HashMap;

use chemkit_core::serde::{from_json_slice, from_yaml_slice, to_canonical_json_bytes};
use chemkit_core::{round_f64, stable_hash_string};

#[test]
fn key_order_does_not_change_hash() {
    let mut first = HashMap::new();
    first.insert("slope", 1.5);
    first.insert("intercept", -2.0);
    let mut second = HashMap::new();
    second.insert("intercept", -2.0);
    second.insert("slope", 1.5);
    assert_eq!(
        stable_hash_string(&first).expect("hash"),
        stable_hash_string(&second).expect("hash")
    );
}

#[test]
fn canonical_bytes_sort_keys() {
    let value = serde_json::json!({ "b": 1, "a": { "d": 2, "c": 3 } });
    let bytes = to_canonical_json_bytes(&value).expect("bytes");
    assert_eq!(String::from_utf8(bytes).expect("utf8"), r#"{"a":{"c":3,"d":2},"b":1}"#);
}

#[test]
fn malformed_payloads_surface_serde_errors() {
    let err = from_json_slice::<Vec<f64>>(b"[1, 2,").unwrap_err();
    assert_eq!(err.info().code, "json_deserialize");
    let err = from_yaml_slice::<Vec<f64>>(b"- [unterminated").unwrap_err();
    assert_eq!(err.info().code, "yaml_deserialize");
}

#[test]
fn rounding_is_canonical() {
    assert_eq!(round_f64(1.000_000_000_4), 1.0);
    assert_eq!(round_f64(-2.5), -2.5);
}
