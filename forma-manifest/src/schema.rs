//! Schema types.

use indexmap::IndexMap;
use serde::Deserialize;

/// Root of a class schema.
///
/// Classes and properties keep their document order; generation walks them
/// in that order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Schema {
    /// Classes keyed by (optionally namespace-qualified) class name
    pub classes: IndexMap<String, ClassDef>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class definition.
    pub fn class(mut self, name: impl Into<String>, class: ClassDef) -> Self {
        self.classes.insert(name.into(), class);
        self
    }

    /// Total number of declared properties across all classes.
    pub fn property_count(&self) -> usize {
        self.classes.values().map(|c| c.properties.len()).sum()
    }
}

/// A class declaration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassDef {
    /// Properties keyed by name
    pub properties: IndexMap<String, PropertyDef>,
}

impl ClassDef {
    /// Create a class with no properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property.
    pub fn property(mut self, name: impl Into<String>, property: PropertyDef) -> Self {
        self.properties.insert(name.into(), property);
        self
    }
}

/// A property descriptor.
///
/// An empty table (`email = {}`) declares an untyped property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyDef {
    /// Declared type (e.g., "string", "?int", "Entities\\Address")
    #[serde(default, rename = "type")]
    pub ty: Option<String>,
}

impl PropertyDef {
    /// An untyped property.
    pub fn untyped() -> Self {
        Self::default()
    }

    /// A property with a declared type.
    pub fn typed(ty: impl Into<String>) -> Self {
        Self {
            ty: Some(ty.into()),
        }
    }
}
