//! Field extraction helpers behind the `dto!` macro.
//!
//! Every helper applies the same presence rule: a field is read only when
//! its key exists and the value is truthy. Extraction is best-effort and
//! never fails; a value of the wrong shape leaves the field unset, and a
//! mistyped list element is skipped individually.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::{FromJson, JsonObject, value::truthy};

fn present<'a>(src: &'a JsonObject, key: &str) -> Option<&'a Value> {
    src.get(key).filter(|v| truthy(v))
}

#[must_use]
pub fn string(src: &JsonObject, key: &str) -> Option<String> {
    present(src, key).and_then(Value::as_str).map(str::to_owned)
}

#[must_use]
pub fn int(src: &JsonObject, key: &str) -> Option<i64> {
    present(src, key).and_then(Value::as_i64)
}

#[must_use]
pub fn float(src: &JsonObject, key: &str) -> Option<f64> {
    present(src, key).and_then(Value::as_f64)
}

/// Only `true` survives the truthiness gate; a wire `false` reads as unset.
#[must_use]
pub fn boolean(src: &JsonObject, key: &str) -> Option<bool> {
    present(src, key).and_then(Value::as_bool)
}

#[must_use]
pub fn any(src: &JsonObject, key: &str) -> Option<Value> {
    present(src, key).cloned()
}

/// Recursively constructs a nested record from the sub-value under `key`.
///
/// A truthy non-object value hydrates to a blank record, matching the
/// behavior of constructing from it directly.
#[must_use]
pub fn record<T: FromJson>(src: &JsonObject, key: &str) -> Option<T> {
    present(src, key).map(T::from_json)
}

#[must_use]
pub fn string_list(src: &JsonObject, key: &str) -> Vec<String> {
    list(src, key, |v| v.as_str().map(str::to_owned))
}

#[must_use]
pub fn int_list(src: &JsonObject, key: &str) -> Vec<i64> {
    list(src, key, Value::as_i64)
}

#[must_use]
pub fn record_list<T: FromJson>(src: &JsonObject, key: &str) -> Vec<T> {
    list(src, key, |v| Some(T::from_json(v)))
}

fn list<T>(src: &JsonObject, key: &str, element: impl Fn(&Value) -> Option<T>) -> Vec<T> {
    match present(src, key) {
        Some(Value::Array(items)) => items.iter().filter_map(element).collect(),
        _ => Vec::new(),
    }
}

#[must_use]
pub fn string_map(src: &JsonObject, key: &str) -> Option<BTreeMap<String, String>> {
    map(src, key, |v| v.as_str().map(str::to_owned))
}

#[must_use]
pub fn string_list_map(src: &JsonObject, key: &str) -> Option<BTreeMap<String, Vec<String>>> {
    map(src, key, |v| match v {
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_owned))
                .collect(),
        ),
        _ => None,
    })
}

#[must_use]
pub fn record_map<T: FromJson>(src: &JsonObject, key: &str) -> Option<BTreeMap<String, T>> {
    map(src, key, |v| Some(T::from_json(v)))
}

fn map<T>(
    src: &JsonObject,
    key: &str,
    value_of: impl Fn(&Value) -> Option<T>,
) -> Option<BTreeMap<String, T>> {
    match present(src, key) {
        Some(Value::Object(entries)) => Some(
            entries
                .iter()
                .filter_map(|(k, v)| value_of(v).map(|v| (k.clone(), v)))
                .collect(),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn src(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn falsy_scalars_stay_unset() {
        let src = src(json!({"a": "", "b": 0, "c": false, "d": null}));
        assert_eq!(string(&src, "a"), None);
        assert_eq!(int(&src, "b"), None);
        assert_eq!(boolean(&src, "c"), None);
        assert_eq!(any(&src, "d"), None);
    }

    #[test]
    fn mistyped_values_stay_unset() {
        let src = src(json!({"a": 12, "b": "twelve"}));
        assert_eq!(string(&src, "a"), None);
        assert_eq!(int(&src, "b"), None);
    }

    #[test]
    fn mistyped_list_elements_are_skipped() {
        let src = src(json!({"names": ["a", 1, "b", null]}));
        assert_eq!(string_list(&src, "names"), vec!["a", "b"]);
    }

    #[test]
    fn missing_list_defaults_to_empty() {
        let src = src(json!({}));
        assert!(string_list(&src, "names").is_empty());
        assert!(int_list(&src, "ports").is_empty());
    }

    #[test]
    fn empty_object_is_a_present_map() {
        let src = src(json!({"attributes": {}}));
        assert_eq!(string_map(&src, "attributes"), Some(BTreeMap::new()));
    }
}
