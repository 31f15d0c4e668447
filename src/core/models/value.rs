//! Nested values
//!
//! A closed, schema-less tree used for request and response payloads.
//! Converts to and from `serde_json::Value`, with JSON `null` mapping to
//! [`NestedValue::Absent`].

use std::collections::BTreeMap;

use serde_json::{Number, Value};

/// Leaf value of a [`NestedValue`] tree
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Boolean leaf
    Bool(bool),
    /// Numeric leaf (integer or float)
    Number(Number),
    /// String leaf
    Text(String),
}

/// Untyped payload tree
///
/// Trees are finite and acyclic: every node owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum NestedValue {
    /// Mapping with unique string keys
    Map(BTreeMap<String, NestedValue>),
    /// Ordered sequence
    List(Vec<NestedValue>),
    /// Leaf value
    Scalar(Scalar),
    /// Absence marker (JSON `null`)
    Absent,
}

impl NestedValue {
    /// Whether this node is one of the shapes the pruner removes:
    /// the absence marker, an empty map, or an empty list.
    #[must_use]
    pub fn is_vacant(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Map(map) => map.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Scalar(_) => false,
        }
    }

    /// Shorthand for a text scalar
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Scalar(Scalar::Text(value.into()))
    }

    /// Shorthand for a boolean scalar
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::Scalar(Scalar::Bool(value))
    }

    /// Shorthand for an integer scalar
    #[must_use]
    pub fn int(value: i64) -> Self {
        Self::Scalar(Scalar::Number(Number::from(value)))
    }
}

impl From<Value> for NestedValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::Bool(b) => Self::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Self::Scalar(Scalar::Number(n)),
            Value::String(s) => Self::Scalar(Scalar::Text(s)),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            },
        }
    }
}

impl From<&Value> for NestedValue {
    fn from(value: &Value) -> Self {
        Self::from(value.clone())
    }
}

impl From<NestedValue> for Value {
    fn from(value: NestedValue) -> Self {
        match value {
            NestedValue::Absent => Self::Null,
            NestedValue::Scalar(Scalar::Bool(b)) => Self::Bool(b),
            NestedValue::Scalar(Scalar::Number(n)) => Self::Number(n),
            NestedValue::Scalar(Scalar::Text(s)) => Self::String(s),
            NestedValue::List(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            NestedValue::Map(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            },
        }
    }
}
