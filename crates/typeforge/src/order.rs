//! The finalized definition-order record.

use crate::error::Error;
use crate::namespace::ConstructionNamespace;
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Reserved attribute name a type body may assign to override the
/// automatically captured order.
pub const DEFINITION_ORDER_ATTR: &str = "__definition_order__";

/// An immutable ordered sequence of member names, attached to a completed
/// type once construction finishes.
///
/// The absence of order information (a type built outside the declarative
/// path) is represented as `Option::<DefinitionOrder>::None`, which is
/// distinct from an empty record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionOrder {
    names: Vec<String>,
}

impl DefinitionOrder {
    /// Capture the record from a construction namespace: each distinct name
    /// exactly once, in first-insertion order.
    pub fn from_namespace(namespace: &ConstructionNamespace) -> Self {
        Self {
            names: namespace.names().into_iter().map(String::from).collect(),
        }
    }

    /// Build a record from an explicit list of names.
    ///
    /// Used by lower-level mechanisms that supply order information for
    /// types with no declarative construction body.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Validate an explicit override value assigned to
    /// [`DEFINITION_ORDER_ATTR`] inside a type body.
    ///
    /// Null yields `Ok(None)` (the null marker). A sequence whose elements
    /// are all strings yields the populated record. Any other value is a
    /// type mismatch that aborts construction of `type_name`.
    pub fn from_override(type_name: &str, value: &Value) -> Result<Option<Self>, Error> {
        if value.is_null() {
            return Ok(None);
        }
        let items = value
            .as_sequence()
            .ok_or_else(|| Error::OrderTypeMismatch {
                type_name: type_name.to_string(),
                found: value.kind().to_string(),
            })?;
        let mut names = Vec::with_capacity(items.len());
        for item in items {
            match item.as_str() {
                Some(name) => names.push(name.to_string()),
                None => {
                    return Err(Error::OrderTypeMismatch {
                        type_name: type_name.to_string(),
                        found: format!("a sequence containing {}", item.kind()),
                    });
                }
            }
        }
        Ok(Some(Self { names }))
    }

    /// Member names in definition order.
    pub fn names(&self) -> Vec<&str> {
        self.names.iter().map(|s| s.as_str()).collect()
    }

    /// Number of recorded names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check whether the record is empty (an empty type body).
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Position of a name in the record, if present.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Iterate over names in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_from_namespace() {
        let mut ns = ConstructionNamespace::new();
        ns.insert("a", Value::Int(1));
        ns.insert("b", Value::Int(2));
        ns.insert("a", Value::Int(3));

        let order = DefinitionOrder::from_namespace(&ns);
        assert_eq!(order.names(), vec!["a", "b"]);
        assert_eq!(order.position("b"), Some(1));
        assert_eq!(order.position("c"), None);
    }

    #[test]
    fn test_override_null_is_null_marker() {
        let result = DefinitionOrder::from_override("Widget", &Value::Null).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_override_sequence_of_strings() {
        let value = Value::sequence_of_names(["x", "y"]);
        let order = DefinitionOrder::from_override("Widget", &value)
            .unwrap()
            .unwrap();
        assert_eq!(order.names(), vec!["x", "y"]);
    }

    #[test]
    fn test_override_rejects_non_sequence() {
        let err = DefinitionOrder::from_override("Widget", &Value::Int(5)).unwrap_err();
        assert_eq!(
            err,
            Error::OrderTypeMismatch {
                type_name: "Widget".into(),
                found: "an integer".into(),
            }
        );
    }

    #[test]
    fn test_override_rejects_mixed_sequence() {
        let value = Value::Sequence(vec![Value::str("x"), Value::Bool(true)]);
        let err = DefinitionOrder::from_override("Widget", &value).unwrap_err();
        assert!(matches!(err, Error::OrderTypeMismatch { .. }));
    }

    #[test]
    fn test_empty_record_is_not_null_marker() {
        let order = DefinitionOrder::from_namespace(&ConstructionNamespace::new());
        assert!(order.is_empty());
        assert_eq!(order.len(), 0);
    }
}
