//! Property values: the int / bool / string union carried in the open map.
//!
//! Renderers pattern-match the variant to stringify; parsers produce it via
//! [`PropertyValue::coerce`], which tries integer, then boolean, and keeps
//! the raw text otherwise. A bad value never fails a record, it just stays
//! a string.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// A single property value attached to a record beyond the standard fields.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Int(i64),
    Bool(bool),
    Str(String),
}

impl PropertyValue {
    /// Coerce raw cell text: integer first, then boolean, else string.
    ///
    /// Boolean matching is case-insensitive ("TRUE", "False", ...), so values
    /// written by the CSV renderer coerce back to the same variant.
    pub fn coerce(raw: &str) -> Self {
        if let Ok(value) = raw.parse::<i64>() {
            return PropertyValue::Int(value);
        }
        if raw.eq_ignore_ascii_case("true") {
            return PropertyValue::Bool(true);
        }
        if raw.eq_ignore_ascii_case("false") {
            return PropertyValue::Bool(false);
        }
        PropertyValue::Str(raw.to_string())
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Int(value) => write!(f, "{value}"),
            PropertyValue::Bool(value) => write!(f, "{value}"),
            PropertyValue::Str(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Int(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Str(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Str(value)
    }
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropertyValue::Int(value) => serializer.serialize_i64(*value),
            PropertyValue::Bool(value) => serializer.serialize_bool(*value),
            PropertyValue::Str(value) => serializer.serialize_str(value),
        }
    }
}

impl<'de> Deserialize<'de> for PropertyValue {
    /// Accepts any JSON scalar. Shapes outside the union degrade to their
    /// string rendering instead of failing the record.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::Bool(b) => PropertyValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => PropertyValue::Int(i),
                None => PropertyValue::Str(n.to_string()),
            },
            serde_json::Value::String(s) => PropertyValue::Str(s),
            serde_json::Value::Null => PropertyValue::Str(String::new()),
            other => PropertyValue::Str(other.to_string()),
        })
    }
}
