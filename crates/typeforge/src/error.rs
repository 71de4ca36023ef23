//! Core error types.

use thiserror::Error;

/// Errors raised during type construction and registry operations.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Explicit definition-order override was neither a sequence of
    /// identifier strings nor the null marker.
    #[error("type mismatch for definition order of `{type_name}`: expected a sequence of identifier strings or null, found {found}")]
    OrderTypeMismatch {
        /// Name of the type under construction.
        type_name: String,
        /// Description of the rejected value.
        found: String,
    },

    /// Attempted to reassign a finalized, read-only attribute.
    #[error("attribute `{attribute}` of type `{type_name}` is read-only")]
    ReadOnlyAttribute {
        /// Name of the completed type.
        type_name: String,
        /// The attribute that rejected the write.
        attribute: String,
    },

    /// A type with the same name is already registered.
    #[error("type `{0}` is already registered")]
    DuplicateType(String),

    /// Registry lookup failed for an operation that requires the type.
    #[error("type `{0}` not found")]
    TypeNotFound(String),
}
