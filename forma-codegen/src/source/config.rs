use std::{path::Path, str::FromStr};

use forma_ir::TypeHint;
use forma_manifest::Schema;
use tracing::info;

use crate::{ClassBuilder, Error, Listener, Listeners, Project, Result, Source};

/// Generates classes from a declarative schema.
///
/// Classes and properties are visited in schema order. The declared type of
/// each property is passed to [`ClassBuilder::append_property`].
#[derive(Debug)]
pub struct ConfigSource {
    schema: Schema,
    listeners: Listeners,
}

impl ConfigSource {
    /// Create a source for `schema`, with no listeners.
    ///
    /// The schema is validated when generation starts.
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            listeners: Listeners::new(),
        }
    }

    /// Load a `.toml` or `.json` schema file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(Schema::from_file(path)?))
    }

    /// Parse a JSON schema.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(Self::new(Schema::from_json_str(content)?))
    }

    /// Register a listener.
    pub fn listener(mut self, listener: impl Listener + 'static) -> Self {
        self.listeners.register(listener);
        self
    }

    /// Replace the listener registry.
    pub fn with_listeners(mut self, listeners: Listeners) -> Self {
        self.listeners = listeners;
        self
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }
}

impl FromStr for ConfigSource {
    type Err = Error;

    /// Parse a TOML schema.
    fn from_str(s: &str) -> Result<Self> {
        Ok(Self::new(s.parse::<Schema>()?))
    }
}

impl Source for ConfigSource {
    fn name(&self) -> &'static str {
        "config"
    }

    fn generate(&self, project: &mut dyn Project) -> Result<()> {
        self.schema.validate()?;

        for (class_name, class) in &self.schema.classes {
            let mut builder = ClassBuilder::new_class(class_name.as_str(), &self.listeners)?;
            for (property, def) in &class.properties {
                builder.append_property(property, TypeHint::from(def.ty.clone()))?;
            }

            project.empty_class(class_name)?.append(builder.into_node());
            info!(
                class = %class_name,
                properties = class.properties.len(),
                "generated class"
            );
        }

        Ok(())
    }
}
