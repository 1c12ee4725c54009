//! Stencil code generator library.
//!
//! This crate synthesizes concrete Rust record types from the
//! specifications authored with `stencil-define`. For each record spec
//! the generated code includes:
//!
//! - A struct definition with serde derives and wire-name renames
//! - A `new()` constructor over the required fields
//! - `with_{name}()` builders for defaulted fields
//! - Getters for frozen records (fields stay private)
//! - Explicit `Clone`, `PartialEq`/`Eq`, `Hash`, and `Debug` impls per
//!   the record's capability flags
//!
//! ## Modules
//!
//! - [`registry`] - The startup-built registry of record shapes
//! - [`validation`] - Pre-generation specification checks
//! - [`codegen`] - Plan resolution and per-method-set emitters
//! - [`output`] - Final assembly, validation, and file writing
//! - [`cargo_gen`] - Cargo.toml generation for the records crate
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::path::Path;
//! use stencil_definitions::openai::define_openai_module;
//! use stencil_gen::output::generate_and_write;
//! use stencil_gen::registry::SynthesisRegistry;
//!
//! let module = define_openai_module();
//! let registry = SynthesisRegistry::build(std::slice::from_ref(&module)).unwrap();
//! let output_dir = Path::new("records/src");
//!
//! // Generate code (dry_run=false writes to disk)
//! let code = generate_and_write(&module, &registry, output_dir, true).unwrap();
//! println!("{}", code);
//! ```
//!
//! ## Generated Code Structure
//!
//! For a record named `FileData` with a required `file_uri` and an
//! optional `mime_type`:
//!
//! ```text
//! pub struct FileData {
//!     #[serde(rename = "fileUri")]
//!     file_uri: String,
//!     #[serde(rename = "mimeType", default, skip_serializing_if = "Option::is_none")]
//!     mime_type: Option<String>,
//! }
//!
//! impl FileData {
//!     pub fn new(file_uri: impl Into<String>) -> Self;
//!     pub fn file_uri(&self) -> &String;
//!     pub fn mime_type(&self) -> &Option<String>;
//!     pub fn with_mime_type(self, mime_type: impl Into<String>) -> Self;
//! }
//!
//! impl Clone for FileData { ... }
//! impl PartialEq for FileData { ... }
//! impl Eq for FileData {}
//! impl ::std::hash::Hash for FileData { ... }
//! impl ::std::fmt::Debug for FileData { ... }
//! ```

pub mod cargo_gen;
pub mod codegen;
pub mod errors;
pub mod output;
pub mod registry;
pub mod validation;
