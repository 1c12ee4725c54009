//! Stencil Code Generator
//!
//! Synthesizes concrete Rust record types from record specifications.

use std::path::Path;

use clap::Parser;
use colored::Colorize;
use stencil_define::RecordModule;
use stencil_definitions::googleai::define_googleai_module;
use stencil_definitions::openai::define_openai_module;
use stencil_gen::cargo_gen::write_records_manifest;
use stencil_gen::errors::GeneratorError;
use stencil_gen::output::generate_and_write_all;
use stencil_gen::registry::SynthesisRegistry;

/// Stencil code generator - transforms record specifications into typed Rust structs
#[derive(Parser, Debug)]
#[command(name = "stencil-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Record module to generate code for ("googleai", "openai", or "all")
    #[arg(short, long, default_value = "all")]
    module: String,

    /// Output directory for generated code
    #[arg(short, long, default_value = "records/src")]
    output: String,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();

    if cli.verbose > 0 {
        eprintln!("Generating code for module: {}", cli.module);
        eprintln!("Output directory: {}", cli.output);
        if cli.dry_run {
            eprintln!("Dry run mode - no files will be written");
        }
    }

    let modules: Vec<RecordModule> = match cli.module.as_str() {
        "googleai" => vec![define_googleai_module()],
        "openai" => vec![define_openai_module()],
        "all" => vec![define_googleai_module(), define_openai_module()],
        other => {
            return Err(GeneratorError::ConfigError(format!(
                "Unknown module: '{}'. Available modules: googleai, openai, all",
                other
            )));
        }
    };

    // The registry is built once here, before any code is emitted; it
    // validates every module and resolves one plan per record shape.
    let registry = SynthesisRegistry::build(&modules)?;

    if cli.verbose > 0 {
        eprintln!(
            "Registry: {} records, {} distinct shapes",
            registry.record_count(),
            registry.len()
        );
    }
    if cli.verbose > 1 {
        for module in &modules {
            eprintln!("Module: {} ({} records)", module.name, module.records.len());
            for record in &module.records {
                eprintln!("  - {} [{}]", record.name, record.fingerprint());
            }
        }
        for entry in registry.shared_shapes() {
            eprintln!("Shared shape {}: {}", entry.fingerprint, entry.names.join(", "));
        }
    }

    let output_dir = Path::new(&cli.output);
    let module_refs: Vec<&RecordModule> = modules.iter().collect();
    generate_and_write_all(&module_refs, &registry, output_dir, cli.dry_run)?;

    if !cli.dry_run {
        let manifest = write_records_manifest(output_dir)?;

        println!(
            "{} generated {} module(s) to {}",
            "✓".green().bold(),
            modules.len(),
            cli.output
        );
        if let Some(manifest_path) = manifest {
            println!("{} generated {}", "✓".green().bold(), manifest_path.display());
        }
    }

    Ok(())
}
