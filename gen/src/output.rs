//! Output assembly and file writing for generated code.
//!
//! This module handles the final phase of code generation: assembling all
//! generated record definitions into complete Rust files, validating the
//! output, formatting it, and writing it to disk atomically.
//!
//! ## Output Structure
//!
//! The generator produces per-module record files:
//! ```text
//! records/src/
//! ├── lib.rs         # Module declarations and crate documentation
//! ├── googleai.rs    # Google generateContent record types
//! ├── openai.rs      # OpenAI-style chat completion record types
//! └── prelude.rs     # Module re-exports for consumers
//! ```
//!
//! ## Safety Guarantees
//!
//! - **Validation**: All generated code is validated with `syn` before writing
//! - **Formatting**: Output is formatted with `prettyplease` for consistent style
//! - **Atomic writes**: Uses temp file + rename pattern to prevent partial writes

use std::fs;
use std::path::Path;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use stencil_define::RecordModule;

use crate::codegen::{generate_record_with_plan, ModuleDocBuilder};
use crate::errors::GeneratorError;
use crate::registry::SynthesisRegistry;

/// Assembles the record module code (e.g. googleai.rs).
///
/// This function generates code for a single record module, containing:
/// - Module documentation (intro, record listing, example)
/// - Import statements
/// - Every record struct with its synthesized method sets
///
/// Plans come from the registry, not from re-planning each spec: the
/// registry is the single source of truth for what a shape synthesizes.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGenError` if a record has no registered
/// plan, which means the registry was built from a different module set.
pub fn assemble_records_module(
    module: &RecordModule,
    registry: &SynthesisRegistry,
) -> Result<TokenStream, GeneratorError> {
    let output_module = module.output_module();

    let mut records = TokenStream::new();
    for record in &module.records {
        let plan = registry
            .plan_for(&output_module, &record.name)
            .ok_or_else(|| {
                GeneratorError::CodeGenError(format!(
                    "no registered plan for '{}::{}'",
                    output_module, record.name
                ))
            })?;
        records.extend(generate_record_with_plan(record, plan));
    }

    let module_docs = ModuleDocBuilder::new(module).build();

    Ok(quote! {
        #module_docs

        use serde::{Deserialize, Serialize};

        #records
    })
}

/// Assembles the lib.rs content for the records crate.
///
/// This generates the main library file that:
/// - Declares all record modules
/// - Provides a prelude module
/// - Carries the base64 helper module when any record needs it
pub fn assemble_lib_rs(modules: &[&RecordModule]) -> TokenStream {
    let module_decls: Vec<_> = modules
        .iter()
        .map(|module| {
            let module_name = format_ident!("{}", module.output_module());
            quote! {
                pub mod #module_name;
            }
        })
        .collect();

    let needs_b64 = modules
        .iter()
        .flat_map(|m| &m.records)
        .flat_map(|r| &r.fields)
        .any(|f| f.base64);
    let b64_module = needs_b64.then(b64_helper_module);

    quote! {
        //! Generated record types for LLM wire protocols.
        //!
        //! ## Available Modules
        //!
        //! Each protocol is available as a separate module containing its
        //! record types with synthesized constructors, equality, hashing,
        //! and debug output.
        //!
        //! ## Quick Start
        //!
        //! Use the prelude for convenient imports:
        //!
        //! ```ignore
        //! use stencil_records::prelude::*;
        //! ```

        pub mod prelude;

        #(#module_decls)*

        #b64_module
    }
}

/// Emits the `b64` serde helper module for byte fields that travel as
/// base64 strings on the wire.
fn b64_helper_module() -> TokenStream {
    quote! {
        /// Serde adapters for byte fields carried as base64 strings.
        pub mod b64 {
            use base64::Engine;
            use serde::{Deserialize, Deserializer, Serializer};

            const ENGINE: base64::engine::general_purpose::GeneralPurpose =
                base64::engine::general_purpose::STANDARD;

            pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&ENGINE.encode(bytes))
            }

            pub fn deserialize<'de, D: Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Vec<u8>, D::Error> {
                let encoded = String::deserialize(deserializer)?;
                ENGINE.decode(&encoded).map_err(serde::de::Error::custom)
            }

            /// Adapters for `Option<Vec<u8>>` fields.
            pub mod opt {
                use base64::Engine;
                use serde::{Deserialize, Deserializer, Serializer};

                pub fn serialize<S: Serializer>(
                    bytes: &Option<Vec<u8>>,
                    serializer: S,
                ) -> Result<S::Ok, S::Error> {
                    match bytes {
                        Some(bytes) => serializer.serialize_str(&super::ENGINE.encode(bytes)),
                        None => serializer.serialize_none(),
                    }
                }

                pub fn deserialize<'de, D: Deserializer<'de>>(
                    deserializer: D,
                ) -> Result<Option<Vec<u8>>, D::Error> {
                    Option::<String>::deserialize(deserializer)?
                        .map(|encoded| {
                            super::ENGINE.decode(&encoded).map_err(serde::de::Error::custom)
                        })
                        .transpose()
                }
            }
        }
    }
}

/// Assembles the prelude.rs content for the records crate.
///
/// The prelude re-exports the modules rather than glob-importing their
/// contents: different protocols reuse type names (`Tool`, `Usage`), and
/// glob re-exports of both would leave those names ambiguous.
pub fn assemble_prelude(modules: &[&RecordModule]) -> TokenStream {
    let module_reexports: Vec<_> = modules
        .iter()
        .map(|module| {
            let module_name = format_ident!("{}", module.output_module());
            quote! {
                pub use crate::#module_name;
            }
        })
        .collect();

    quote! {
        //! Convenient re-exports for working with generated record types.
        //!
        //! Modules are re-exported whole because protocols share type
        //! names. Qualify records with their module:
        //!
        //! ## Examples
        //!
        //! ```ignore
        //! use stencil_records::prelude::*;
        //!
        //! let message = openai::UserMessage::new("Hello!");
        //! let blob = googleai::Blob::new("image/png", vec![0x89, 0x50]);
        //! ```

        #(#module_reexports)*
    }
}

/// Validates generated code using syn.
///
/// Parses the token stream as a complete Rust file to ensure it's
/// syntactically valid before writing to disk.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGenError` if the code fails to parse.
pub fn validate_code(tokens: &TokenStream) -> Result<syn::File, GeneratorError> {
    syn::parse2(tokens.clone())
        .map_err(|e| GeneratorError::CodeGenError(format!("Generated code is invalid: {}", e)))
}

/// Formats generated code using prettyplease.
///
/// Converts a parsed syn::File back to a nicely formatted string,
/// prepending an auto-generated notice as a regular comment.
pub fn format_code(file: &syn::File) -> String {
    let formatted = prettyplease::unparse(file);
    format!(
        "// This code was automatically generated by stencil-gen. Do not edit manually.\n\n{}",
        formatted
    )
}

/// Writes content to a file atomically using temp file + rename.
///
/// This pattern ensures that:
/// - The file is never left in a partially-written state
/// - Other processes see either the old or new content, never a mix
/// - Power failures or crashes don't corrupt the file
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if:
/// - Parent directories cannot be created
/// - The temp file cannot be written
/// - The rename operation fails
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Generates and writes one record module plus crate scaffolding.
///
/// Convenience wrapper over [`generate_and_write_all`] for a single
/// module.
pub fn generate_and_write(
    module: &RecordModule,
    registry: &SynthesisRegistry,
    output_dir: &Path,
    dry_run: bool,
) -> Result<String, GeneratorError> {
    let modules = [module];
    generate_and_write_all(&modules, registry, output_dir, dry_run)
}

/// Generates and writes code for multiple record modules.
///
/// This is the main entry point for code generation. It produces a
/// complete records crate source tree:
/// - `lib.rs` - Module declarations for all record modules
/// - `prelude.rs` - Module re-exports
/// - `{module_name}.rs` - One file per record module
///
/// ## Returns
///
/// The formatted code for the first record module (useful for dry-run
/// mode or testing).
///
/// ## Errors
///
/// Returns an error if:
/// - A record has no registered plan
/// - Code generation produces invalid Rust
/// - File writing fails
pub fn generate_and_write_all(
    modules: &[&RecordModule],
    registry: &SynthesisRegistry,
    output_dir: &Path,
    dry_run: bool,
) -> Result<String, GeneratorError> {
    let lib_tokens = assemble_lib_rs(modules);
    let lib_file = validate_code(&lib_tokens)?;
    let lib_formatted = format_code(&lib_file);

    let prelude_tokens = assemble_prelude(modules);
    let prelude_file = validate_code(&prelude_tokens)?;
    let prelude_formatted = format_code(&prelude_file);

    let mut record_modules: Vec<(String, String)> = Vec::new();
    for module in modules {
        let tokens = assemble_records_module(module, registry)?;
        let file = validate_code(&tokens)?;
        let formatted = format_code(&file);
        let filename = format!("{}.rs", module.output_module());
        record_modules.push((filename, formatted));
    }

    if dry_run {
        println!("=== lib.rs ===\n{}\n", lib_formatted);
        println!("=== prelude.rs ===\n{}\n", prelude_formatted);
        for (filename, content) in &record_modules {
            println!("=== {} ===\n{}\n", filename, content);
        }
    } else {
        write_atomic(&output_dir.join("lib.rs"), &lib_formatted)?;
        write_atomic(&output_dir.join("prelude.rs"), &prelude_formatted)?;
        for (filename, content) in &record_modules {
            write_atomic(&output_dir.join(filename), content)?;
        }
    }

    Ok(record_modules
        .into_iter()
        .next()
        .map(|(_, content)| content)
        .unwrap_or_default())
}
