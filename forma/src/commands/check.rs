use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use forma_manifest::SchemaFile;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the class schema (defaults to ./forma.toml)
    #[arg(short, long, default_value = "forma.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let schema_file = SchemaFile::open(&self.config).unwrap_or_exit();
        let schema = schema_file.schema();

        println!("✓ {} is valid\n", self.config.display());

        let class_count = schema.classes.len();
        println!(
            "  {} class{}:",
            class_count,
            if class_count == 1 { "" } else { "es" }
        );
        for (name, class) in &schema.classes {
            println!("    {}", name);
            for (property, def) in &class.properties {
                println!("      {}: {}", property, def.ty.as_deref().unwrap_or("mixed"));
            }
        }

        Ok(())
    }
}
