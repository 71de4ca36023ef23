//! The ordered construction namespace a type body populates.

use crate::value::Value;
use indexmap::IndexMap;

/// The temporary ordered scope into which member names are inserted while a
/// type body executes.
///
/// Insertion order is preserved: the first insertion of a name fixes its
/// positional slot, and reinserting the same name overwrites the value
/// without moving the slot. No name pattern is filtered — bookkeeping names
/// inserted by the construction process itself are recorded like any other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstructionNamespace {
    entries: IndexMap<String, Value>,
}

impl ConstructionNamespace {
    /// Create an empty construction namespace.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Insert a member declaration.
    ///
    /// Returns the previous value if the name was already present; the
    /// name keeps its original position in that case.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(name.into(), value)
    }

    /// Get the current value bound to a name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Check whether a name has been inserted.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of distinct names inserted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the namespace is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (name, value) pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Distinct names in first-insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(|s| s.as_str()).collect()
    }

    /// Remove a name, preserving the positions of all remaining names.
    ///
    /// Used only by finalization to extract the reserved override entry.
    pub(crate) fn shift_remove(&mut self, name: &str) -> Option<Value> {
        self.entries.shift_remove(name)
    }

    /// Consume the namespace, yielding the underlying ordered map.
    pub(crate) fn into_entries(self) -> IndexMap<String, Value> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut ns = ConstructionNamespace::new();
        ns.insert("a", Value::Int(1));
        ns.insert("b", Value::Int(2));
        ns.insert("c", Value::Int(3));

        assert_eq!(ns.names(), vec!["a", "b", "c"]);
        assert_eq!(ns.len(), 3);
    }

    #[test]
    fn test_reinsertion_keeps_slot() {
        let mut ns = ConstructionNamespace::new();
        ns.insert("a", Value::Int(1));
        ns.insert("b", Value::Int(2));
        let previous = ns.insert("a", Value::Int(10));

        assert_eq!(previous, Some(Value::Int(1)));
        assert_eq!(ns.names(), vec!["a", "b"]);
        assert_eq!(ns.get("a"), Some(&Value::Int(10)));
    }

    #[test]
    fn test_no_name_filtering() {
        let mut ns = ConstructionNamespace::new();
        ns.insert("__name__", Value::str("Widget"));
        ns.insert("size", Value::Int(4));

        assert_eq!(ns.names(), vec!["__name__", "size"]);
    }
}
