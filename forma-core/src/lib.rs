//! Core utilities and types for the forma class generator.
//!
//! This crate provides the naming helpers, identifier rules and
//! file-writing primitives shared by the other forma crates.

mod file;
mod ident;
mod utils;

// File operations
pub use file::GeneratedFile;
// Identifier rules
pub use ident::{
    RESERVED_WORDS, class_short_name, is_reserved_word, validate_class_name, validate_identifier,
    validate_property_name, validate_type_name,
};
// String utilities
pub use utils::{lcfirst, ucfirst};
