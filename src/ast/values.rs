use serde::{Deserialize, Serialize};

use crate::ast::Arity;

/// A scalar comparison value carried by a leaf predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&Value> for serde_json::Value {
    fn from(v: &Value) -> Self {
        match v {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => (*b).into(),
            Value::Int(n) => (*n).into(),
            // Non-finite floats have no JSON form; serde_json maps them to null.
            Value::Float(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
        }
    }
}

/// Operand payload for dynamically constructed leaf predicates.
///
/// Used by callers that receive an operator tag and loose operands (e.g. a
/// request parser) and cannot pick a typed constructor at compile time.
#[derive(Debug, Clone, PartialEq)]
pub enum Operands {
    /// No comparison value
    None,
    /// One scalar value
    Single(Value),
    /// An ordered sequence of values
    Multi(Vec<Value>),
}

impl Operands {
    /// The arity this payload satisfies.
    pub fn arity(&self) -> Arity {
        match self {
            Operands::None => Arity::None,
            Operands::Single(_) => Arity::Single,
            Operands::Multi(_) => Arity::Multi,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_conversions() {
        assert_eq!(Value::from(42), Value::Int(42));
        assert_eq!(Value::from(42i64), Value::Int(42));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(1.5), Value::Float(1.5));
        assert_eq!(Value::from("abc"), Value::String("abc".to_string()));
    }

    #[test]
    fn test_value_to_json() {
        assert_eq!(serde_json::Value::from(&Value::Int(7)), serde_json::json!(7));
        assert_eq!(serde_json::Value::from(&Value::Null), serde_json::json!(null));
        assert_eq!(
            serde_json::Value::from(&Value::String("x".to_string())),
            serde_json::json!("x")
        );
        assert_eq!(
            serde_json::Value::from(&Value::Float(f64::NAN)),
            serde_json::json!(null)
        );
    }

    #[test]
    fn test_value_serde_is_untagged() {
        assert_eq!(serde_json::to_string(&Value::Int(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&Value::Bool(false)).unwrap(), "false");
        let back: Value = serde_json::from_str("\"hi\"").unwrap();
        assert_eq!(back, Value::String("hi".to_string()));
    }

    #[test]
    fn test_operands_arity() {
        assert_eq!(Operands::None.arity(), Arity::None);
        assert_eq!(Operands::Single(Value::Int(1)).arity(), Arity::Single);
        assert_eq!(Operands::Multi(vec![]).arity(), Arity::Multi);
    }
}
