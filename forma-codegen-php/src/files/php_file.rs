//! One `.php` file per class slot.

use std::path::PathBuf;

use forma_codegen::ClassFile;
use forma_core::GeneratedFile;

use crate::render_file;

/// Opening tag written before every rendered file body.
pub const PHP_OPEN_TAG: &str = "<?php\n";

/// A PHP source file holding the classes generated for one slot.
///
/// The class name decides the location: namespace segments become
/// directories, so `Entities\User` lands in `Entities/User.php`.
pub struct PhpFile<'a> {
    file: &'a ClassFile,
}

impl<'a> PhpFile<'a> {
    pub fn new(file: &'a ClassFile) -> Self {
        Self { file }
    }

    /// Path relative to the output directory, always `/`-separated.
    pub fn display_path(&self) -> String {
        format!("{}.php", self.file.class_name().replace('\\', "/"))
    }

    /// Namespace of the slot's class name, if qualified.
    pub fn namespace(&self) -> Option<&str> {
        self.file.class_name().rsplit_once('\\').map(|(ns, _)| ns)
    }
}

impl GeneratedFile for PhpFile<'_> {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from(self.display_path())
    }

    fn header(&self) -> Option<&'static str> {
        Some(PHP_OPEN_TAG)
    }

    fn render(&self) -> String {
        render_file(self.namespace(), self.file.nodes())
    }
}
