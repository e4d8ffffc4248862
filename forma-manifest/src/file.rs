use std::path::{Path, PathBuf};

use crate::{Error, Format, Result, Schema, parse_schema};

/// A schema file on disk with both raw content and parsed schema.
#[derive(Debug)]
pub struct SchemaFile {
    path: PathBuf,
    format: Format,
    content: String,
    schema: Schema,
}

impl SchemaFile {
    /// Open and parse a schema file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let format = Format::from_path(&path)?;
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let schema = parse_schema(&content, &path.display().to_string(), format)?;

        Ok(Self {
            path,
            format,
            content,
            schema,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the detected format.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Consume the file and keep only the parsed schema.
    pub fn into_schema(self) -> Schema {
        self.schema
    }
}
