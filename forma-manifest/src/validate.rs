//! Schema validation.

use std::collections::HashMap;

use forma_core::{
    class_short_name, is_reserved_word, ucfirst, validate_class_name, validate_property_name,
    validate_type_name,
};
use miette::SourceSpan;

use crate::{ClassDef, Result, Schema, SourceContext};

/// Validation context that carries source information.
///
/// Tracks the current path through the schema (e.g., `["User", "email"]`)
/// so nested errors can say where they happened.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(&source);
/// ctx.validate_class_name("User")?;
///
/// let nested = ctx.push("User");
/// nested.validate_property_name("email")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: &'a SourceContext,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a context at the schema root.
    pub fn new(source: &'a SourceContext) -> Self {
        Self {
            source,
            path: Vec::new(),
        }
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: self.source,
            path,
        }
    }

    /// Current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Describe a kind of name in the current location, e.g. "property in 'User'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Validate a class name and reject reserved words.
    pub fn validate_class_name(&self, name: &str) -> Result<()> {
        if let Some(reason) = validate_class_name(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for("class"),
                reason,
                self.find_span(name),
            ));
        }

        let short = class_short_name(name);
        if is_reserved_word(short) {
            return Err(self.source.reserved_word_error(
                short,
                self.context_for("class"),
                self.find_span(name),
            ));
        }

        Ok(())
    }

    /// Validate a property name.
    pub fn validate_property_name(&self, name: &str) -> Result<()> {
        match validate_property_name(name) {
            Some(reason) => Err(self.source.invalid_identifier_error(
                name,
                self.context_for("property"),
                reason,
                self.find_span(name),
            )),
            None => Ok(()),
        }
    }

    /// Validate a declared property type.
    pub fn validate_type(&self, property: &str, ty: &str) -> Result<()> {
        match validate_type_name(ty) {
            Some(reason) => Err(self.source.invalid_type_error(
                ty,
                property,
                reason,
                self.find_span(ty),
            )),
            None => Ok(()),
        }
    }

    /// Validate one class declaration.
    pub fn validate_class(&self, name: &'a str, class: &'a ClassDef) -> Result<()> {
        self.validate_class_name(name)?;

        let class_ctx = self.push(name);
        // Accessor names are case-insensitive in PHP.
        let mut accessors: HashMap<String, &str> = HashMap::new();

        for (prop_name, prop) in &class.properties {
            class_ctx.validate_property_name(prop_name)?;
            if let Some(ty) = &prop.ty {
                class_ctx.validate_type(prop_name, ty)?;
            }

            let accessor = ucfirst(prop_name).to_ascii_lowercase();
            if let Some(first) = accessors.insert(accessor, prop_name) {
                return Err(self.source.validation_error(format!(
                    "properties '{first}' and '{prop_name}' in '{name}' generate the same accessor 'get{}'",
                    ucfirst(prop_name)
                )));
            }
        }

        Ok(())
    }
}

/// Validate a whole schema.
pub(crate) fn validate_schema(schema: &Schema, source: &SourceContext) -> Result<()> {
    let ctx = ParseContext::new(source);
    // Class names are case-insensitive in PHP.
    let mut seen: HashMap<String, &str> = HashMap::new();

    for (name, class) in &schema.classes {
        ctx.validate_class(name, class)?;

        if let Some(first) = seen.insert(name.to_ascii_lowercase(), name) {
            return Err(source.validation_error(format!(
                "classes '{first}' and '{name}' differ only in case"
            )));
        }
    }

    Ok(())
}

impl Schema {
    /// Validate a schema that was built in code rather than parsed.
    ///
    /// Applies the same rules as parsing. Errors carry no source span.
    pub fn validate(&self) -> Result<()> {
        validate_schema(self, &SourceContext::new("", "<schema>"))
    }
}

/// Find the span of a name in TOML or JSON source.
///
/// Searches for patterns like `"name"`, `.name.`, `.name]` or `name =`.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    if name.is_empty() {
        return None;
    }

    let patterns = [
        (format!("\"{}\"", name), 1), // JSON keys, quoted TOML keys and values
        (format!(".{}.", name), 1),   // [classes.User.properties]
        (format!(".{}]", name), 1),   // [classes.User]
        (format!("{} =", name), 0),   // email = {}
        (format!("{}=", name), 0),    // email={}
    ];

    for (pattern, skip) in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            return Some(SourceSpan::from((pos + skip, name.len())));
        }
    }

    src.find(name).map(|pos| SourceSpan::from((pos, name.len())))
}
