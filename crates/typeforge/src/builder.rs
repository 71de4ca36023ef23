//! Type construction.

use crate::error::Error;
use crate::namespace::ConstructionNamespace;
use crate::object::TypeObject;
use crate::order::{DefinitionOrder, DEFINITION_ORDER_ATTR};
use crate::value::Value;
use tracing::debug;

/// Builder for a composite type.
///
/// Construction is a single-threaded, one-shot event: the body populates the
/// construction namespace serially via [`TypeBuilder::define`], then
/// [`TypeBuilder::finish`] finalizes the namespace into a [`TypeObject`]
/// with its definition-order record attached. Finalization either completes
/// or aborts atomically; no partially recorded order survives an aborted
/// construction.
#[derive(Debug, Clone)]
pub struct TypeBuilder {
    name: String,
    qualname: Option<String>,
    namespace: ConstructionNamespace,
}

impl TypeBuilder {
    /// Start constructing a type with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qualname: None,
            namespace: ConstructionNamespace::new(),
        }
    }

    /// Set the qualified name.
    pub fn with_qualname(mut self, qualname: impl Into<String>) -> Self {
        self.qualname = Some(qualname.into());
        self
    }

    /// Declare a member.
    ///
    /// Every insertion goes through the construction namespace, so members
    /// declared indirectly (computed names, injected bookkeeping entries)
    /// are captured in the order exactly like textual declarations.
    /// Redeclaring a name overwrites its value but keeps its position.
    pub fn define(mut self, name: impl Into<String>, value: Value) -> Self {
        self.namespace.insert(name, value);
        self
    }

    /// The construction namespace populated so far.
    pub fn namespace(&self) -> &ConstructionNamespace {
        &self.namespace
    }

    /// Finalize construction.
    ///
    /// If the body assigned [`DEFINITION_ORDER_ATTR`], that value is
    /// validated and overrides the captured sequence (the reserved entry
    /// does not appear among the finished type's members). Otherwise the
    /// namespace's first-insertion order is captured; an empty body yields
    /// an empty record, never the null marker. A failed override validation
    /// aborts construction and produces no type object.
    pub fn finish(mut self) -> Result<TypeObject, Error> {
        let definition_order = match self.namespace.shift_remove(DEFINITION_ORDER_ATTR) {
            Some(explicit) => DefinitionOrder::from_override(&self.name, &explicit)?,
            None => Some(DefinitionOrder::from_namespace(&self.namespace)),
        };

        debug!(
            type_name = %self.name,
            members = self.namespace.len(),
            has_order = definition_order.is_some(),
            "finalized type construction"
        );

        Ok(TypeObject::finalized(
            self.name,
            self.qualname,
            self.namespace.into_entries(),
            definition_order,
        ))
    }
}
