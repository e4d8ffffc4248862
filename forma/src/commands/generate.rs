use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use forma_codegen::{
    ConfigSource, DocListener, GenerationProject, LanguageCodegen, Listeners, Source,
};
use forma_codegen_php::Generator;
use forma_manifest::SchemaFile;
use tracing::debug;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the class schema (defaults to ./forma.toml)
    #[arg(short, long, default_value = "forma.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Do not attach doc blocks to generated members
    #[arg(long)]
    pub no_docs: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let schema_file = SchemaFile::open(&self.config).unwrap_or_exit();
        let source = ConfigSource::new(schema_file.into_schema()).with_listeners(self.listeners());
        debug!(listeners = ?source.listeners(), "registered listeners");

        let mut project = GenerationProject::new();
        source
            .generate(&mut project)
            .wrap_err("Failed to build classes")?;

        let generator = Generator::new(&project);
        if self.dry_run {
            return self.run_preview(&generator);
        }

        let result = generator
            .generate(&self.output)
            .wrap_err("Failed to generate code")?;

        Self::print_classes(&project);
        println!("Generated: {}", self.output.display());
        for path in &result.written {
            let relative = path.strip_prefix(&self.output).unwrap_or(path);
            println!("  + {}", relative.display());
        }

        Ok(())
    }

    fn listeners(&self) -> Listeners {
        if self.no_docs {
            Listeners::new()
        } else {
            Listeners::new().with(DocListener)
        }
    }

    fn print_classes(project: &GenerationProject) {
        println!("Classes ({}):", project.len());
        for file in project.files() {
            let properties: usize = file.nodes().iter().map(|n| n.properties().count()).sum();
            println!(
                "  {} ({} propert{})",
                file.class_name(),
                properties,
                if properties == 1 { "y" } else { "ies" }
            );
        }
        println!();
    }

    fn run_preview<G: LanguageCodegen>(&self, generator: &G) -> Result<()> {
        let files = generator.preview();

        for file in &files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }
}
