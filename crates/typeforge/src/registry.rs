//! In-memory registry of finished types.

use crate::error::Error;
use crate::object::TypeObject;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Registry of completed types, keyed by name.
///
/// Finished types are immutable, so they are handed out as shared
/// references. The registry is the only shared structure; construction
/// itself never takes a lock.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: RwLock<HashMap<String, Arc<TypeObject>>>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a finished type.
    ///
    /// Fails if a type with the same name is already registered.
    pub fn register(&self, ty: TypeObject) -> Result<Arc<TypeObject>, Error> {
        let mut types = self.types.write();
        if types.contains_key(ty.name()) {
            return Err(Error::DuplicateType(ty.name().to_string()));
        }
        debug!(
            type_name = %ty.name(),
            has_order = ty.definition_order().is_some(),
            "registered type"
        );
        let ty = Arc::new(ty);
        types.insert(ty.name().to_string(), Arc::clone(&ty));
        Ok(ty)
    }

    /// Look up a type by name.
    pub fn get(&self, name: &str) -> Option<Arc<TypeObject>> {
        self.types.read().get(name).cloned()
    }

    /// Look up a type, erroring if it is not registered.
    pub fn require(&self, name: &str) -> Result<Arc<TypeObject>, Error> {
        self.get(name)
            .ok_or_else(|| Error::TypeNotFound(name.to_string()))
    }

    /// Check whether a type is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.types.read().contains_key(name)
    }

    /// List all registered type names, sorted.
    pub fn list_types(&self) -> Vec<String> {
        let mut names: Vec<String> = self.types.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.read().len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.types.read().is_empty()
    }
}
