//! Pluggable origins of class definitions.

mod config;

pub use config::ConfigSource;

use crate::{Project, Result};

/// An origin of class definitions.
///
/// A source builds every class it knows about and places each finished node
/// into the project's slot for that class.
pub trait Source {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Build all classes into `project`.
    ///
    /// # Errors
    ///
    /// Returns the first naming, listener or project error. Classes placed
    /// before the error stay in the project.
    fn generate(&self, project: &mut dyn Project) -> Result<()>;
}
