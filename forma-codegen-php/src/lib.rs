//! PHP code generator for the forma class generator.
//!
//! Renders the class nodes collected in a
//! [`GenerationProject`](forma_codegen::GenerationProject) as PHP source,
//! one file per class slot.
//!
//! ```
//! use forma_codegen::{ConfigSource, DocListener, GenerationProject, Source};
//! use forma_codegen_php::{Generator, LanguageCodegen};
//!
//! let source: ConfigSource = "[classes.User.properties]\nemail = {}\n".parse()?;
//! let mut project = GenerationProject::new();
//! source.listener(DocListener).generate(&mut project)?;
//!
//! let files = Generator::new(&project).preview();
//! assert_eq!(files[0].path, "User.php");
//! assert!(files[0].content.contains("public function getEmail()"));
//! # Ok::<(), forma_codegen::Error>(())
//! ```
//!
//! # Generated Output
//!
//! - `<Namespace>/<Class>.php` - one class declaration per file, with its
//!   properties and accessors in declaration order

mod code_builder;
mod generator;
mod renderer;

pub mod files;

pub use code_builder::{CodeBuilder, INDENT};
pub use files::PhpFile;
pub use forma_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
pub use generator::Generator;
pub use renderer::{render_class, render_file, render_statement, type_declaration};
