//! Structural node model for the forma class generator.
//!
//! The nodes describe *what* a generated class contains, independent of how
//! it is printed:
//!
//! ```text
//! schema → forma-manifest → forma-codegen (ClassBuilder + listeners) → forma-ir nodes → renderer
//! ```
//!
//! Every node is a plain owned value. Listeners receive temporary exclusive
//! access to one node at a time; no node is shared between owners.

mod class;
mod doc;
mod member;
mod stmt;
mod types;

pub use class::{ClassNode, Member};
pub use doc::{DocBlock, DocTag};
pub use member::{MethodNode, Param, PropertyNode, Signature};
pub use stmt::{Expr, Statement};
pub use types::{TypeHint, Visibility};
