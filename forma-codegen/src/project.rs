//! Per-class file slots.

use forma_ir::ClassNode;
use indexmap::{IndexMap, map::Entry};

use crate::{Error, Result};

/// A destination for finished class nodes.
pub trait FileSlot {
    /// Place a finished class into this slot.
    fn append(&mut self, node: ClassNode);
}

/// The collaborator that owns output file slots, keyed by class name.
pub trait Project {
    /// Claim the empty slot for `class_name`.
    ///
    /// # Errors
    ///
    /// Implementations may refuse a slot, e.g. when it was already claimed.
    fn empty_class(&mut self, class_name: &str) -> Result<&mut dyn FileSlot>;
}

/// One output file holding the nodes generated for a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassFile {
    class_name: String,
    nodes: Vec<ClassNode>,
}

impl ClassFile {
    /// Create an empty file for `class_name`.
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            nodes: Vec::new(),
        }
    }

    /// The class name the slot was claimed for.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Nodes placed in this file, in append order.
    pub fn nodes(&self) -> &[ClassNode] {
        &self.nodes
    }
}

impl FileSlot for ClassFile {
    fn append(&mut self, node: ClassNode) {
        self.nodes.push(node);
    }
}

/// In-memory project with insertion-ordered file slots.
///
/// Each class name can be claimed once per project.
#[derive(Debug, Default)]
pub struct GenerationProject {
    files: IndexMap<String, ClassFile>,
}

impl GenerationProject {
    /// Create an empty project.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over files in the order their slots were claimed.
    pub fn files(&self) -> impl Iterator<Item = &ClassFile> {
        self.files.values()
    }

    /// Look up the file for `class_name`.
    pub fn file(&self, class_name: &str) -> Option<&ClassFile> {
        self.files.get(class_name)
    }

    /// Number of claimed slots.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if no slot was claimed.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Consume the project and keep its files.
    pub fn into_files(self) -> Vec<ClassFile> {
        self.files.into_values().collect()
    }
}

impl Project for GenerationProject {
    fn empty_class(&mut self, class_name: &str) -> Result<&mut dyn FileSlot> {
        match self.files.entry(class_name.to_string()) {
            Entry::Occupied(_) => Err(Error::SlotClaimed(class_name.to_string())),
            Entry::Vacant(entry) => Ok(entry.insert(ClassFile::new(class_name))),
        }
    }
}
