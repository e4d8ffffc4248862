//! Schema parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{Error, Result, Schema, SourceContext, validate::validate_schema};

/// Source format of a schema document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            _ => Err(Box::new(Error::UnsupportedFormat {
                path: path.to_path_buf(),
            })),
        }
    }
}

impl FromStr for Schema {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_schema(s, "forma.toml", Format::Toml)
    }
}

impl Schema {
    /// Parse a schema file, choosing the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_schema(&content, &path.display().to_string(), format)
    }

    /// Parse a JSON schema from a string.
    pub fn from_json_str(content: &str) -> Result<Self> {
        parse_schema(content, "forma.json", Format::Json)
    }
}

/// Parse and validate a schema with the given filename for error reporting.
pub fn parse_schema(content: &str, filename: &str, format: Format) -> Result<Schema> {
    let source = SourceContext::new(content, filename);
    let schema: Schema = match format {
        Format::Toml => toml::from_str(content).map_err(|e| source.toml_error(e))?,
        Format::Json => serde_json::from_str(content).map_err(|e| source.json_error(e))?,
    };
    validate_schema(&schema, &source)?;
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PropertyDef;

    #[test]
    fn test_parse_toml_keeps_document_order() {
        let schema: Schema = r#"
            [classes.User.properties]
            email = {}
            age = { type = "int" }
            name = {}

            [classes.Address.properties]
            street = { type = "string" }
        "#
        .parse()
        .unwrap();

        let classes: Vec<_> = schema.classes.keys().map(String::as_str).collect();
        assert_eq!(classes, ["User", "Address"]);

        let user = &schema.classes["User"];
        let props: Vec<_> = user.properties.keys().map(String::as_str).collect();
        assert_eq!(props, ["email", "age", "name"]);
        assert_eq!(user.properties["age"], PropertyDef::typed("int"));
        assert_eq!(user.properties["email"], PropertyDef::untyped());
        assert_eq!(schema.property_count(), 4);
    }

    #[test]
    fn test_parse_json() {
        let schema = Schema::from_json_str(
            r#"{"classes": {"Entities\\User": {"properties": {"email": {"type": "string"}}}}}"#,
        )
        .unwrap();

        let user = &schema.classes["Entities\\User"];
        assert_eq!(user.properties["email"].ty.as_deref(), Some("string"));
    }

    #[test]
    fn test_empty_properties_allowed() {
        let schema: Schema = "[classes.Marker]\nproperties = {}\n".parse().unwrap();
        assert!(schema.classes["Marker"].properties.is_empty());
    }

    #[test]
    fn test_missing_classes_key() {
        let err = "[models.User.properties]\n".parse::<Schema>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_missing_properties_key() {
        let err = "[classes.User]\n".parse::<Schema>().unwrap_err();
        let Error::Parse { source, .. } = *err else {
            panic!("expected parse error");
        };
        assert!(source.message().contains("properties"));
    }

    #[test]
    fn test_unknown_property_key() {
        let err = "[classes.User.properties]\nemail = { typ = \"string\" }\n"
            .parse::<Schema>()
            .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_json_missing_properties_key() {
        let err = Schema::from_json_str(r#"{"classes": {"User": {}}}"#).unwrap_err();
        assert!(matches!(*err, Error::Json { .. }));
    }

    #[test]
    fn test_invalid_property_name() {
        let err = "[classes.User.properties]\nfirst-name = {}\n"
            .parse::<Schema>()
            .unwrap_err();
        assert!(matches!(
            *err,
            Error::InvalidIdentifier { ref name, .. } if name == "first-name"
        ));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("forma.toml")).unwrap(), Format::Toml);
        assert_eq!(Format::from_path(Path::new("schema.JSON")).unwrap(), Format::Json);
        assert!(Format::from_path(Path::new("schema.yaml")).is_err());
        assert!(Format::from_path(Path::new("schema")).is_err());
    }
}
