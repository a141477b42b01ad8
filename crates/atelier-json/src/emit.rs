//! Field emission helpers behind the `dto!` macro.
//!
//! Emission mirrors the hydration gate: a field is written only when its
//! current value is truthy. Explicitly set `false`, `0`, and `""` are
//! dropped, as are empty lists. Present nested records and maps are always
//! written, objects being truthy even when empty.

use std::collections::BTreeMap;

use serde_json::{Number, Value};

use crate::{JsonObject, ToJson, value::truthy};

pub fn string(out: &mut JsonObject, key: &str, field: Option<&String>) {
    if let Some(s) = field {
        if !s.is_empty() {
            out.insert(key.to_owned(), Value::String(s.clone()));
        }
    }
}

pub fn int(out: &mut JsonObject, key: &str, field: Option<i64>) {
    if let Some(n) = field {
        if n != 0 {
            out.insert(key.to_owned(), Value::Number(Number::from(n)));
        }
    }
}

pub fn float(out: &mut JsonObject, key: &str, field: Option<f64>) {
    if let Some(number) = field.filter(|n| *n != 0.0).and_then(Number::from_f64) {
        out.insert(key.to_owned(), Value::Number(number));
    }
}

pub fn boolean(out: &mut JsonObject, key: &str, field: Option<bool>) {
    if field == Some(true) {
        out.insert(key.to_owned(), Value::Bool(true));
    }
}

pub fn any(out: &mut JsonObject, key: &str, field: Option<&Value>) {
    if let Some(v) = field {
        if truthy(v) {
            out.insert(key.to_owned(), v.clone());
        }
    }
}

pub fn record<T: ToJson>(out: &mut JsonObject, key: &str, field: Option<&T>) {
    if let Some(dto) = field {
        out.insert(key.to_owned(), dto.to_json());
    }
}

pub fn string_list(out: &mut JsonObject, key: &str, field: &[String]) {
    if !field.is_empty() {
        let items = field.iter().cloned().map(Value::String).collect();
        out.insert(key.to_owned(), Value::Array(items));
    }
}

pub fn int_list(out: &mut JsonObject, key: &str, field: &[i64]) {
    if !field.is_empty() {
        let items = field.iter().map(|n| Value::Number(Number::from(*n))).collect();
        out.insert(key.to_owned(), Value::Array(items));
    }
}

pub fn record_list<T: ToJson>(out: &mut JsonObject, key: &str, field: &[T]) {
    if !field.is_empty() {
        let items = field.iter().map(ToJson::to_json).collect();
        out.insert(key.to_owned(), Value::Array(items));
    }
}

pub fn string_map(out: &mut JsonObject, key: &str, field: Option<&BTreeMap<String, String>>) {
    if let Some(entries) = field {
        let object = entries
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        out.insert(key.to_owned(), Value::Object(object));
    }
}

pub fn string_list_map(
    out: &mut JsonObject,
    key: &str,
    field: Option<&BTreeMap<String, Vec<String>>>,
) {
    if let Some(entries) = field {
        let object = entries
            .iter()
            .map(|(k, v)| {
                let items = v.iter().cloned().map(Value::String).collect();
                (k.clone(), Value::Array(items))
            })
            .collect();
        out.insert(key.to_owned(), Value::Object(object));
    }
}

pub fn record_map<T: ToJson>(out: &mut JsonObject, key: &str, field: Option<&BTreeMap<String, T>>) {
    if let Some(entries) = field {
        let object = entries
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect();
        out.insert(key.to_owned(), Value::Object(object));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn falsy_scalars_are_dropped() {
        let mut out = JsonObject::new();
        string(&mut out, "a", Some(&String::new()));
        int(&mut out, "b", Some(0));
        float(&mut out, "c", Some(0.0));
        boolean(&mut out, "d", Some(false));
        any(&mut out, "e", Some(&json!(null)));
        assert!(out.is_empty());
    }

    #[test]
    fn truthy_scalars_are_written() {
        let mut out = JsonObject::new();
        string(&mut out, "a", Some(&"x".to_owned()));
        int(&mut out, "b", Some(-3));
        boolean(&mut out, "c", Some(true));
        assert_eq!(Value::Object(out), json!({"a": "x", "b": -3, "c": true}));
    }

    #[test]
    fn empty_list_is_dropped() {
        let mut out = JsonObject::new();
        string_list(&mut out, "names", &[]);
        int_list(&mut out, "ports", &[]);
        assert!(out.is_empty());
    }

    #[test]
    fn present_map_is_written_even_when_empty() {
        let mut out = JsonObject::new();
        string_map(&mut out, "attributes", Some(&BTreeMap::new()));
        assert_eq!(Value::Object(out), json!({"attributes": {}}));
    }
}
