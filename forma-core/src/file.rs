use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// A source file produced by a generator.
///
/// Implementors describe where the file goes and what it contains. Files are
/// regenerated on every run.
pub trait GeneratedFile {
    /// File path relative to the output directory
    fn relative_path(&self) -> PathBuf;

    /// Text placed before the rendered body
    fn header(&self) -> Option<&'static str> {
        None
    }

    /// Render the file body (without the header)
    fn render(&self) -> String;

    /// Full file content, header included
    fn contents(&self) -> String {
        let body = self.render();
        match self.header() {
            Some(header) => format!("{header}\n{body}"),
            None => body,
        }
    }

    /// Write the file below `base`, replacing any existing file
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = base.join(self.relative_path());
        write_file(&path, &self.contents())?;
        Ok(path)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))
}
