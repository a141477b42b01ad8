//! JavaScript truthiness over `serde_json::Value`.

use serde_json::Value;

/// Whether `value` is truthy under JavaScript coercion rules.
///
/// `null`, `false`, `0`, and `""` are falsy. Arrays and objects are always
/// truthy, including empty ones.
#[must_use]
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::truthy;
    use serde_json::json;

    #[test]
    fn falsy_values() {
        for value in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!truthy(&value), "{value} should be falsy");
        }
    }

    #[test]
    fn truthy_values() {
        for value in [
            json!(true),
            json!(1),
            json!(-1),
            json!(0.5),
            json!("x"),
            json!([]),
            json!({}),
        ] {
            assert!(truthy(&value), "{value} should be truthy");
        }
    }
}
