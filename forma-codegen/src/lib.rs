//! Class generation pipeline for forma.
//!
//! A [`Source`] walks its class definitions and drives a [`ClassBuilder`]
//! per class. The builder appends nodes and, after constructing each one,
//! dispatches a [`GenerationEvent`] to the registered [`Listener`]s, which
//! may decorate the node in place. Finished classes land in a [`Project`]
//! file slot.
//!
//! # Example
//!
//! ```
//! use forma_codegen::{ConfigSource, DocListener, GenerationProject, Source};
//!
//! let source: ConfigSource = "[classes.User.properties]\nemail = {}\n".parse()?;
//! let source = source.listener(DocListener);
//!
//! let mut project = GenerationProject::new();
//! source.generate(&mut project)?;
//!
//! let user = &project.file("User").unwrap().nodes()[0];
//! let getter = user.method("getEmail").unwrap();
//! assert_eq!(getter.doc.as_ref().unwrap().summary.as_deref(), Some("Return email"));
//! # Ok::<(), forma_codegen::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`event`] - Generation phases and the event carried through a dispatch
//! - [`listener`] - Listener contract and the ordered registry
//! - [`listeners`] - Built-in listeners ([`DocListener`])
//! - [`builder`] - [`ClassBuilder`] and accessor naming
//! - [`source`] - [`Source`] contract and [`ConfigSource`]
//! - [`project`] - Per-class file slots
//! - [`language`] - Language-specific generator contract

pub mod builder;
mod error;
pub mod event;
pub mod language;
pub mod listener;
pub mod listeners;
pub mod project;
pub mod source;

pub use builder::ClassBuilder;
pub use error::{Error, Result};
pub use event::{GenerationEvent, NodeMut, Phase};
pub use language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use listener::{Listener, Listeners};
pub use listeners::DocListener;
pub use project::{ClassFile, FileSlot, GenerationProject, Project};
pub use source::{ConfigSource, Source};
