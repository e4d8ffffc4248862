//! PHP code generator.

use std::path::Path;

use eyre::Result;
use forma_codegen::{GenerateResult, GenerationProject, LanguageCodegen, PreviewFile};
use forma_core::GeneratedFile;
use tracing::info;

use crate::files::PhpFile;

/// Renders every file slot of a generation project as PHP.
pub struct Generator<'a> {
    project: &'a GenerationProject,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "php"
    }

    fn file_extension(&self) -> &'static str {
        "php"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.files()
            .map(|file| PreviewFile {
                path: file.display_path(),
                content: file.contents(),
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for file in self.files() {
            let path = file.write(output_dir)?;
            info!("Generated: {}", path.display());
            result.written.push(path);
        }

        Ok(result)
    }
}

impl<'a> Generator<'a> {
    pub fn new(project: &'a GenerationProject) -> Self {
        Self { project }
    }

    fn files(&self) -> impl Iterator<Item = PhpFile<'a>> {
        self.project.files().map(PhpFile::new)
    }
}
