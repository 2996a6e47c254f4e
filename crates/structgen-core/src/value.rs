//! Decoded representation of example input

use crate::GenerateResult;
use std::collections::BTreeMap;
use std::fmt;

/// A decoded JSON value.
///
/// Objects are stored in a [`BTreeMap`] so iteration always follows the
/// byte order of keys, whatever order the input listed them in.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<SchemaValue>),
    Object(BTreeMap<String, SchemaValue>),
}

/// The shape of a [`SchemaValue`] without its contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl SchemaValue {
    /// Decode JSON text into a value.
    ///
    /// Malformed text yields [`GenerateError::Parse`](crate::GenerateError::Parse).
    pub fn parse(input: &str) -> GenerateResult<Self> {
        let json: serde_json::Value = serde_json::from_str(input)?;
        Ok(Self::from(json))
    }

    /// Get the kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            SchemaValue::Null => ValueKind::Null,
            SchemaValue::Bool(_) => ValueKind::Bool,
            SchemaValue::Number(_) => ValueKind::Number,
            SchemaValue::String(_) => ValueKind::String,
            SchemaValue::Array(_) => ValueKind::Array,
            SchemaValue::Object(_) => ValueKind::Object,
        }
    }

    /// Whether this is a number with no fractional component.
    ///
    /// The test is on the value, not on how it was written: `30.0` is
    /// integral.
    pub fn is_integral(&self) -> bool {
        match self {
            SchemaValue::Number(n) => n.is_finite() && *n == n.trunc(),
            _ => false,
        }
    }

    /// Borrow the fields if this is an object
    pub fn as_object(&self) -> Option<&BTreeMap<String, SchemaValue>> {
        match self {
            SchemaValue::Object(fields) => Some(fields),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for SchemaValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => SchemaValue::Null,
            serde_json::Value::Bool(b) => SchemaValue::Bool(b),
            // as_f64 only fails with serde_json's arbitrary_precision feature
            serde_json::Value::Number(n) => SchemaValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => SchemaValue::String(s),
            serde_json::Value::Array(items) => {
                SchemaValue::Array(items.into_iter().map(SchemaValue::from).collect())
            }
            serde_json::Value::Object(map) => SchemaValue::Object(
                map.into_iter()
                    .map(|(key, value)| (key, SchemaValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Null => write!(f, "null"),
            ValueKind::Bool => write!(f, "boolean"),
            ValueKind::Number => write!(f, "number"),
            ValueKind::String => write!(f, "string"),
            ValueKind::Array => write!(f, "array"),
            ValueKind::Object => write!(f, "object"),
        }
    }
}
