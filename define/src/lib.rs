//! Stencil Definition Library
//!
//! This crate provides types (primitives) for describing record value types
//! in a declarative way. These descriptions are consumed by the `stencil-gen`
//! binary to generate strongly-typed, immutable Rust structs.
//!
//! ## Core Types
//!
//! - [`RecordSpec`] - A complete record specification: fields plus capabilities
//! - [`FieldSpec`] - A single field: name, type, default policy, binding
//! - [`FieldDefault`] - Whether a field is required or carries a default expression
//! - [`Binding`] - Positional vs. keyword-only constructor binding
//! - [`Capabilities`] - Which method sets the generated type carries
//! - [`RecordModule`] - A named group of record specs generated into one module
//!
//! ## Examples
//!
//! Define a small frozen record:
//!
//! ```
//! use stencil_define::{Capabilities, FieldSpec, RecordSpec};
//!
//! let spec = RecordSpec {
//!     name: "FileData".to_string(),
//!     description: "A URI-referenced file attachment".to_string(),
//!     fields: vec![
//!         FieldSpec::required("mime_type", "String").wire("mimeType"),
//!         FieldSpec::required("file_uri", "String").wire("fileUri"),
//!     ],
//!     caps: Capabilities::value(),
//! }
//! .keyword_only();
//!
//! assert!(spec.caps.frozen);
//! assert_eq!(spec.fields.len(), 2);
//! ```
//!
//! Identical shapes share a fingerprint regardless of the record name:
//!
//! ```
//! use stencil_define::{Capabilities, FieldSpec, RecordSpec};
//!
//! let a = RecordSpec {
//!     name: "SystemMessage".to_string(),
//!     description: "A system message".to_string(),
//!     fields: vec![FieldSpec::required("content", "String")],
//!     caps: Capabilities::value(),
//! };
//! let mut b = a.clone();
//! b.name = "UserMessage".to_string();
//!
//! assert_eq!(a.fingerprint(), b.fingerprint());
//! ```

mod capability;
mod fingerprint;
mod module;
mod record;

pub mod prelude;

pub use capability::Capabilities;
pub use module::RecordModule;
pub use record::{Binding, FieldDefault, FieldSpec, RecordSpec};
