//! Dynamic value model for boundary calls
//!
//! Values arriving from the scripting runtime are dynamically typed. Pinning
//! them to a closed tagged variant keeps every downstream conversion a total
//! match instead of an implicit coercion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A dynamically typed value carried by a boundary call.
///
/// `Undefined` stands for "no value at this position" as distinct from an
/// explicit `Null`; both reject every scalar conversion. Objects and other
/// runtime shapes the marshalling layer never consumes are collapsed to
/// `Undefined` at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    List(Vec<Value>),
}

/// Discriminant-only mirror of [`Value`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Undefined,
    Null,
    Bool,
    Number,
    Str,
    List,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Undefined => ValueKind::Undefined,
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::Str(_) => ValueKind::Str,
            Value::List(_) => ValueKind::List,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Undefined => "undefined",
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::Str => "string",
            ValueKind::List => "list",
        };
        write!(f, "{}", name)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(f64::from(v))
    }
}

/// The runtime represents numbers as doubles, so handles above 2^53 lose
/// precision on this path. Large handles should cross the boundary as
/// decimal strings instead.
impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) => Value::Number(f),
                None => Value::Undefined,
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            // Objects never reach the scalar conversions; collapse to "other".
            serde_json::Value::Object(_) => Value::Undefined,
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Undefined | Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => serde_json::Number::from_f64(n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Str(s) => serde_json::Value::String(s),
            Value::List(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mirrors_variant() {
        assert_eq!(Value::Undefined.kind(), ValueKind::Undefined);
        assert_eq!(Value::from(1.5).kind(), ValueKind::Number);
        assert_eq!(Value::from("x").kind(), ValueKind::Str);
        assert_eq!(Value::List(vec![]).kind(), ValueKind::List);
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::from(42.0).as_number(), Some(42.0));
        assert_eq!(Value::from("hi").as_str(), Some("hi"));
        assert_eq!(Value::from(42.0).as_str(), None);
        assert!(Value::Null.is_null());
        assert!(!Value::Null.is_undefined());
    }

    #[test]
    fn test_json_round_trip() {
        let value = Value::List(vec![
            Value::from("nick"),
            Value::from(7u32),
            Value::Bool(true),
            Value::Null,
        ]);
        let json = serde_json::Value::from(value.clone());
        assert_eq!(Value::from(json), value);
    }

    #[test]
    fn test_json_object_collapses_to_undefined() {
        let json: serde_json::Value = serde_json::json!({"key": "value"});
        assert_eq!(Value::from(json), Value::Undefined);
    }
}
