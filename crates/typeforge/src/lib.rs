//! Typeforge - definition-order metadata for dynamically constructed types.
//!
//! This crate captures, at type-construction time, the sequence of member
//! names declared in a type body and exposes it as a finalized, read-only
//! ordered record on the resulting type. Types built outside the
//! declarative path carry a null marker instead.

pub mod builder;
pub mod error;
pub mod namespace;
pub mod object;
pub mod order;
pub mod registry;
pub mod value;

pub use builder::TypeBuilder;
pub use error::Error;
pub use namespace::ConstructionNamespace;
pub use object::TypeObject;
pub use order::{DefinitionOrder, DEFINITION_ORDER_ATTR};
pub use registry::TypeRegistry;
pub use value::Value;
