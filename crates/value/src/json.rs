//! Conversion from `serde_json::Value` into the comparison model.
//!
//! JSON null lowers to the nil-pointer state, so a present field
//! compared against null reports asymmetric absence. Numbers dispatch
//! i64 before u64 before f64, matching serde_json's own accessors.

use crate::adapt::ToValue;
use crate::value::Value;

impl From<&serde_json::Value> for Value {
    fn from(v: &serde_json::Value) -> Value {
        match v {
            serde_json::Value::Null => Value::null(),
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Uint(u)
                } else {
                    // serde_json guarantees one of the three accessors
                    // succeeds for a finite number.
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Text(s.clone()),
            serde_json::Value::Array(items) => {
                Value::List(Some(items.iter().map(Value::from).collect()))
            }
            serde_json::Value::Object(entries) => Value::Map(Some(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::from(v)))
                    .collect(),
            )),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Value {
        Value::from(&v)
    }
}

impl ToValue for serde_json::Value {
    fn to_value(&self) -> Value {
        Value::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_becomes_nil_pointer() {
        assert_eq!(Value::from(json!(null)), Value::null());
    }

    #[test]
    fn numbers_dispatch_by_representation() {
        assert_eq!(Value::from(json!(-2)), Value::Int(-2));
        assert_eq!(Value::from(json!(2)), Value::Int(2));
        assert_eq!(Value::from(json!(u64::MAX)), Value::Uint(u64::MAX));
        assert_eq!(Value::from(json!(1.5)), Value::Float(1.5));
    }

    #[test]
    fn nested_object_becomes_map() {
        let v = Value::from(json!({"a": 1, "b": [true, "x"]}));
        assert_eq!(
            v,
            Value::map(vec![
                ("a".to_string(), Value::Int(1)),
                (
                    "b".to_string(),
                    Value::list(vec![Value::Bool(true), Value::Text("x".to_string())]),
                ),
            ])
        );
    }
}
