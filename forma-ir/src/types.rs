//! Type hints and visibility.

use std::fmt;

/// The declared type of a property or parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TypeHint {
    /// No type was declared. Documented as `mixed`.
    #[default]
    Unspecified,
    /// A named type as written in the schema (e.g., `string`, `?int`, `Entities\Address`).
    Named(String),
}

impl TypeHint {
    /// Name used in doc tags for an undeclared type.
    pub const UNSPECIFIED: &'static str = "mixed";

    /// Create a named type hint.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Returns true if a type was declared.
    pub fn is_specified(&self) -> bool {
        matches!(self, Self::Named(_))
    }

    /// The declared type name, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Unspecified => None,
            Self::Named(name) => Some(name),
        }
    }

    /// The declared type name with qualified class names made absolute.
    ///
    /// `Entities\Address` becomes `\Entities\Address`. Nullability and names
    /// that are already absolute or unqualified are kept as written.
    pub fn resolved_name(&self) -> Option<String> {
        let name = self.name()?;
        let (nullable, bare) = match name.strip_prefix('?') {
            Some(bare) => ("?", bare),
            None => ("", name),
        };

        if bare.contains('\\') && !bare.starts_with('\\') {
            Some(format!("{nullable}\\{bare}"))
        } else {
            Some(name.to_string())
        }
    }

    /// The type as written in the schema (`mixed` when unspecified).
    pub fn doc_name(&self) -> &str {
        self.name().unwrap_or(Self::UNSPECIFIED)
    }
}

/// Formats the resolved name, or `mixed` when unspecified.
impl fmt::Display for TypeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.resolved_name() {
            Some(name) => f.write_str(&name),
            None => f.write_str(Self::UNSPECIFIED),
        }
    }
}

impl From<Option<String>> for TypeHint {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Unspecified, Self::Named)
    }
}

impl From<&str> for TypeHint {
    fn from(value: &str) -> Self {
        Self::named(value)
    }
}

/// Member visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    /// The keyword for this visibility.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unspecified_documents_as_mixed() {
        let ty = TypeHint::default();
        assert!(!ty.is_specified());
        assert_eq!(ty.name(), None);
        assert_eq!(ty.doc_name(), "mixed");
        assert_eq!(ty.to_string(), "mixed");
    }

    #[test]
    fn test_named_type() {
        let ty = TypeHint::from(Some("string".to_string()));
        assert!(ty.is_specified());
        assert_eq!(ty.doc_name(), "string");
        assert_eq!(TypeHint::from(None), TypeHint::Unspecified);
    }

    #[test]
    fn test_resolved_name() {
        assert_eq!(TypeHint::Unspecified.resolved_name(), None);
        assert_eq!(TypeHint::named("int").resolved_name().as_deref(), Some("int"));
        assert_eq!(TypeHint::named("?int").resolved_name().as_deref(), Some("?int"));
        assert_eq!(
            TypeHint::named("Entities\\Address").resolved_name().as_deref(),
            Some("\\Entities\\Address")
        );
        assert_eq!(
            TypeHint::named("?Entities\\Address").resolved_name().as_deref(),
            Some("?\\Entities\\Address")
        );
        assert_eq!(
            TypeHint::named("\\DateTime").resolved_name().as_deref(),
            Some("\\DateTime")
        );
    }

    #[test]
    fn test_display_uses_resolved_name() {
        let ty = TypeHint::named("Entities\\Address");
        assert_eq!(ty.to_string(), "\\Entities\\Address");
        assert_eq!(ty.doc_name(), "Entities\\Address");
    }

    #[test]
    fn test_visibility_keywords() {
        assert_eq!(Visibility::Public.as_str(), "public");
        assert_eq!(Visibility::Protected.as_str(), "protected");
        assert_eq!(Visibility::Private.as_str(), "private");
    }
}
