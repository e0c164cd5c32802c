//! Managed objects and their value sources.

use crate::attribute::AttributeStore;
use crate::error::{Error, Result};
use crate::value::{TypeTag, Value};

/// Computes a value from the current device attributes.
pub type Resolver = fn(&AttributeStore) -> Result<Value>;

/// Where a managed object's value comes from.
#[derive(Clone)]
pub enum Source {
    /// Fixed value.
    Literal(Value),
    /// Value computed on every query.
    Computed(Resolver),
}

impl std::fmt::Debug for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Literal(v) => f.debug_tuple("Literal").field(v).finish(),
            Source::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// One entry of a MIB table.
#[derive(Debug, Clone)]
pub struct ManagedObject {
    /// MIB object name, for logs.
    pub name: &'static str,
    /// Declared type.
    pub type_tag: TypeTag,
    /// Value source.
    pub source: Source,
}

impl ManagedObject {
    /// Object with a fixed value; the type is taken from the value.
    pub fn literal(name: &'static str, value: Value) -> Self {
        Self {
            name,
            type_tag: value.type_tag(),
            source: Source::Literal(value),
        }
    }

    /// Object computed from device attributes.
    pub fn computed(name: &'static str, type_tag: TypeTag, resolver: Resolver) -> Self {
        Self {
            name,
            type_tag,
            source: Source::Computed(resolver),
        }
    }

    /// Resolve the current value.
    ///
    /// Fails if the resolver fails or produces a value of another type than
    /// the declared one.
    pub fn resolve(&self, attrs: &AttributeStore) -> Result<Value> {
        let value = match &self.source {
            Source::Literal(v) => v.clone(),
            Source::Computed(resolver) => resolver(attrs)?,
        };

        if value.type_tag() != self.type_tag {
            return Err(Error::TypeMismatch {
                declared: self.type_tag,
                actual: value.type_tag(),
            });
        }
        Ok(value)
    }
}
