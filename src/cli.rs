use clap::Parser;
use std::path::PathBuf;

use crate::generator::generate_entity_module;

/// Command-line interface for nestgen
///
/// One invocation reads one entity specification document and writes the five
/// CRUD slice artifacts under the output root. Invoking with no arguments is
/// a usage error with a non-zero exit status.
#[derive(Parser)]
#[command(name = "nestgen")]
#[command(about = "Generate a CRUD slice (model, validation, service, controller, module) from an entity spec", long_about = None)]
pub struct Cli {
    /// Path to the entity specification document (JSON or YAML)
    pub spec: PathBuf,

    /// Root directory under which the src/ layout is written
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let generated = generate_entity_module(&cli.spec, &cli.output)?;
    println!(
        "✅ Generated CRUD slice ({} artifacts) → {:?}",
        generated.files.len(),
        generated.entity_dir
    );
    Ok(())
}
