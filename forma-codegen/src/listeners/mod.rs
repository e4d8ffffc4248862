//! Built-in listeners.

mod doc;

pub use doc::{DocListener, accessed_property_name};
