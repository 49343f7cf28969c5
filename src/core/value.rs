//! Discriminated argument values and structured fields
//!
//! This module provides:
//! - `Value`: one variadic argument of a log call
//! - `ErrorValue`: an error carried as an argument
//! - `Field`: a pre-built key/value pair
//! - `InvalidPair`: diagnostic record for a malformed key/value pair

use serde::{Serialize, Serializer};
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// One argument of a log call
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Null,
    Field(Box<Field>),
    Error(ErrorValue),
    Array(Vec<Value>),
    Object(Vec<Field>),
}

impl Value {
    /// Wrap any error as an argument
    pub fn error<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Value::Error(ErrorValue::new(err))
    }

    /// Build a field argument
    pub fn field<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Field(Box::new(Field::new(key, value)))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_field(&self) -> bool {
        matches!(self, Value::Field(_))
    }

    /// Convert to serde_json::Value for JSON rendering
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Int(i) => serde_json::Value::Number((*i).into()),
            Value::UInt(u) => serde_json::Value::Number((*u).into()),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Null => serde_json::Value::Null,
            Value::Field(field) => {
                let mut map = serde_json::Map::new();
                map.insert(field.key.clone(), field.value.to_json_value());
                serde_json::Value::Object(map)
            }
            Value::Error(err) => serde_json::Value::String(err.to_string()),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json_value).collect())
            }
            Value::Object(fields) => serde_json::Value::Object(
                fields
                    .iter()
                    .map(|f| (f.key.clone(), f.value.to_json_value()))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{}", i),
            Value::UInt(u) => write!(f, "{}", u),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Null => f.write_str("null"),
            Value::Field(field) => write!(f, "{}", field),
            Value::Error(err) => write!(f, "{}", err),
            Value::Array(_) | Value::Object(_) => write!(f, "{}", self.to_json_value()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json_value().serialize(serializer)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::String(c.to_string())
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(i: $t) -> Self {
                Value::Int(i as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(u: $t) -> Self {
                Value::UInt(u as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Field> for Value {
    fn from(field: Field) -> Self {
        Value::Field(Box::new(field))
    }
}

impl From<ErrorValue> for Value {
    fn from(err: ErrorValue) -> Self {
        Value::Error(err)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}

/// An error passed as a log argument
///
/// Cloning shares the underlying error. Two values compare equal when their
/// messages match.
#[derive(Debug, Clone)]
pub struct ErrorValue(Arc<dyn StdError + Send + Sync>);

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct MessageError(String);

impl ErrorValue {
    pub fn new<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        ErrorValue(Arc::new(err))
    }

    /// Create an error value from a bare message
    pub fn msg<S: Into<String>>(message: S) -> Self {
        ErrorValue(Arc::new(MessageError(message.into())))
    }

    pub fn inner(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.0.as_ref()
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq for ErrorValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.to_string() == other.to_string()
    }
}

/// A structured key/value field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub key: String,
    pub value: Value,
}

impl Field {
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Field carrying an error under the `error` key
    pub fn error(err: ErrorValue) -> Self {
        Self::new(crate::core::classifier::ERROR_KEY, err)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// A key/value pair whose key was not a string
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvalidPair {
    /// Index of the key within the argument list
    pub position: usize,
    pub key: Value,
    pub value: Value,
}

impl From<InvalidPair> for Value {
    fn from(pair: InvalidPair) -> Self {
        Value::Object(vec![
            Field::new("position", pair.position),
            Field::new("key", pair.key),
            Field::new("value", pair.value),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from("a"), Value::String("a".to_string()));
        assert_eq!(Value::from(5), Value::Int(5));
        assert_eq!(Value::from(5_u32), Value::UInt(5));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(42).to_string(), "42");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::field("user", "ann").to_string(), "user=ann");
        assert_eq!(Value::from(ErrorValue::msg("disk full")).to_string(), "disk full");
        assert_eq!(
            Value::Array(vec![Value::from(1), Value::from("b")]).to_string(),
            "[1,\"b\"]"
        );
    }

    #[test]
    fn test_invalid_pair_json_shape() {
        let pair = InvalidPair {
            position: 0,
            key: Value::from(42),
            value: Value::from("x"),
        };
        let json = Value::from(pair).to_json_value();
        assert_eq!(json, serde_json::json!({"position": 0, "key": 42, "value": "x"}));
    }

    #[test]
    fn test_error_value_equality() {
        let a = ErrorValue::msg("timeout");
        let b = ErrorValue::new(std::io::Error::new(std::io::ErrorKind::Other, "timeout"));
        assert_eq!(a, b);
        assert_ne!(a, ErrorValue::msg("refused"));
        assert_eq!(a.clone(), a);
    }

    #[test]
    fn test_field_serialize() {
        let field = Field::new("count", 5);
        let json = serde_json::to_string(&field).unwrap();
        assert_eq!(json, "{\"key\":\"count\",\"value\":5}");
    }

    #[test]
    fn test_nested_field_value() {
        let nested = Value::field("outer", Value::field("inner", 1));
        assert!(nested.is_field());
        assert_eq!(nested.to_string(), "outer=inner=1");
        assert_eq!(nested.to_json_value(), serde_json::json!({"outer": {"inner": 1}}));
        assert_eq!(Value::from(Field::new("k", "v")), Value::field("k", "v"));
    }

    #[test]
    fn test_non_finite_float_is_null() {
        assert_eq!(Value::from(f64::NAN).to_json_value(), serde_json::Value::Null);
    }
}
