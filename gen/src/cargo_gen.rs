//! Manifest generation for the records crate.
//!
//! The generated source tree is a complete crate, so the generator also
//! maintains its Cargo.toml. The manifest carries exactly what the
//! emitted code uses: serde for the derives, serde_json for the untyped
//! JSON fields (tool arguments, schema blobs), and base64 for byte
//! fields carried as base64 strings.

use std::path::{Path, PathBuf};

use crate::errors::GeneratorError;
use crate::output::write_atomic;

/// Package name of the generated records crate.
pub const RECORDS_CRATE_NAME: &str = "stencil-records";

/// Renders the Cargo.toml content for the generated records crate.
pub fn records_manifest() -> String {
    format!(
        r#"# This manifest was automatically generated by stencil-gen. Do not edit manually.

[package]
name = "{name}"
version = "0.1.0"
edition = "2024"
license = "AGPL-3.0-only"
description = "Generated record types for LLM wire protocols"

[dependencies]
base64 = "0.22"
serde = {{ version = "1.0", features = ["derive"] }}
serde_json = "1.0"
"#,
        name = RECORDS_CRATE_NAME
    )
}

/// Writes the generated crate's manifest next to its `src` directory.
///
/// Only fires when the output directory is a crate `src` layout; ad-hoc
/// output directories (tests, scratch dumps) stay manifest-free. Returns
/// the manifest path when one was written.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if the manifest cannot be
/// written.
pub fn write_records_manifest(output_dir: &Path) -> Result<Option<PathBuf>, GeneratorError> {
    let is_src_layout = output_dir.file_name().is_some_and(|name| name == "src");
    let Some(crate_dir) = output_dir.parent().filter(|_| is_src_layout) else {
        return Ok(None);
    };

    let manifest_path = crate_dir.join("Cargo.toml");
    write_atomic(&manifest_path, &records_manifest())?;
    Ok(Some(manifest_path))
}
