//! Member values for dynamically constructed types.

use serde::{Deserialize, Serialize};

/// A value bound to a member name during type construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Null value (also the definition-order null marker).
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    Str(String),
    /// Ordered sequence of values.
    Sequence(Vec<Value>),
}

impl Value {
    /// Create a string value.
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Create a sequence of string values from identifier names.
    pub fn sequence_of_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::Sequence(names.into_iter().map(|n| Value::Str(n.into())).collect())
    }

    /// Check if this is the null marker.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the string contents if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get the elements if this is a sequence value.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Short description of the value's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Int(_) => "an integer",
            Value::Float(_) => "a float",
            Value::Str(_) => "a string",
            Value::Sequence(_) => "a sequence",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_helpers() {
        let name = Value::str("id");
        assert_eq!(name.as_str(), Some("id"));
        assert!(!name.is_null());
        assert!(Value::Null.is_null());

        let seq = Value::sequence_of_names(["a", "b"]);
        let items = seq.as_sequence().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_str(), Some("a"));
    }

    #[test]
    fn test_value_kind() {
        assert_eq!(Value::Int(7).kind(), "an integer");
        assert_eq!(Value::Null.kind(), "null");
        assert_eq!(Value::sequence_of_names(["x"]).kind(), "a sequence");
    }
}
