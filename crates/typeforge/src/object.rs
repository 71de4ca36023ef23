//! Finished type objects.

use crate::error::Error;
use crate::order::{DefinitionOrder, DEFINITION_ORDER_ATTR};
use crate::value::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A completed composite type.
///
/// Owns exactly one definition-order record for its own declaration body
/// (not inherited, not merged with base types). The record is frozen at
/// construction: reassigning it through [`TypeObject::set_member`] fails
/// with [`Error::ReadOnlyAttribute`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeObject {
    /// Type name.
    name: String,
    /// Qualified name, if one was supplied.
    qualname: Option<String>,
    /// Member bindings in first-insertion order.
    members: IndexMap<String, Value>,
    /// Definition-order record, or the null marker.
    definition_order: Option<DefinitionOrder>,
}

impl TypeObject {
    /// Assemble a finalized type. Only construction paths inside the crate
    /// may attach a record.
    pub(crate) fn finalized(
        name: String,
        qualname: Option<String>,
        members: IndexMap<String, Value>,
        definition_order: Option<DefinitionOrder>,
    ) -> Self {
        Self {
            name,
            qualname,
            members,
            definition_order,
        }
    }

    /// Create a type with no declarative construction body.
    ///
    /// Synthesized types receive the null marker: no reliable order
    /// information is available for them.
    pub fn synthetic(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qualname: None,
            members: IndexMap::new(),
            definition_order: None,
        }
    }

    /// Explicitly supply a definition-order record for a type built outside
    /// the declarative path.
    pub fn with_definition_order(mut self, order: DefinitionOrder) -> Self {
        self.definition_order = Some(order);
        self
    }

    /// Type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Qualified name, if set.
    pub fn qualname(&self) -> Option<&str> {
        self.qualname.as_deref()
    }

    /// The read-only definition-order record, or `None` for types with no
    /// order information.
    pub fn definition_order(&self) -> Option<&DefinitionOrder> {
        self.definition_order.as_ref()
    }

    /// Get a member value by name.
    pub fn member(&self, name: &str) -> Option<&Value> {
        self.members.get(name)
    }

    /// Member names in first-insertion order.
    pub fn member_names(&self) -> Vec<&str> {
        self.members.keys().map(|s| s.as_str()).collect()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check whether the type has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Assign a member on the completed type.
    ///
    /// Ordinary members may be rebound after construction; the frozen
    /// definition-order record is unaffected by late assignments. Writing
    /// to [`DEFINITION_ORDER_ATTR`] is rejected and leaves the existing
    /// record unchanged.
    pub fn set_member(&mut self, name: impl Into<String>, value: Value) -> Result<(), Error> {
        let name = name.into();
        if name == DEFINITION_ORDER_ATTR {
            return Err(Error::ReadOnlyAttribute {
                type_name: self.name.clone(),
                attribute: name,
            });
        }
        self.members.insert(name, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_has_null_marker() {
        let ty = TypeObject::synthetic("Opaque");
        assert_eq!(ty.name(), "Opaque");
        assert!(ty.definition_order().is_none());
        assert!(ty.is_empty());
    }

    #[test]
    fn test_synthetic_with_supplied_order() {
        let ty = TypeObject::synthetic("Opaque")
            .with_definition_order(DefinitionOrder::from_names(["a", "b"]));

        let order = ty.definition_order().unwrap();
        assert_eq!(order.names(), vec!["a", "b"]);
    }

    #[test]
    fn test_set_member_rejects_order_attr() {
        let mut ty = TypeObject::synthetic("Opaque")
            .with_definition_order(DefinitionOrder::from_names(["a"]));

        let err = ty
            .set_member(DEFINITION_ORDER_ATTR, Value::sequence_of_names(["z"]))
            .unwrap_err();
        assert_eq!(
            err,
            Error::ReadOnlyAttribute {
                type_name: "Opaque".into(),
                attribute: DEFINITION_ORDER_ATTR.into(),
            }
        );
        assert_eq!(ty.definition_order().unwrap().names(), vec!["a"]);
    }

    #[test]
    fn test_set_member_allows_ordinary_names() {
        let mut ty = TypeObject::synthetic("Opaque");
        ty.set_member("color", Value::str("red")).unwrap();

        assert_eq!(ty.member("color"), Some(&Value::str("red")));
        assert!(ty.definition_order().is_none());
    }
}
