//! Schema parsing and validation for forma.
//!
//! A schema declares the classes to generate and the properties of each:
//!
//! ```toml
//! [classes.User.properties]
//! email = {}
//! age = { type = "int" }
//! ```
//!
//! Parsing validates the whole document up front, so a schema that loads
//! successfully can be generated without configuration errors.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod parse;
mod schema;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use file::SchemaFile;
pub use parse::{Format, parse_schema};
pub use schema::{ClassDef, PropertyDef, Schema};
pub use validate::ParseContext;
