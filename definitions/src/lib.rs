//! Stencil Record Definitions
//!
//! This crate contains actual record specifications that use the
//! primitives from `stencil-define`. Each wire protocol is organized in
//! its own module.
//!
//! ## Available Modules
//!
//! - [`googleai`] - Google generateContent wire protocol records
//! - [`openai`] - OpenAI-style chat completion wire protocol records
//!
//! ## Examples
//!
//! ```
//! use stencil_definitions::googleai::define_googleai_module;
//!
//! let module = define_googleai_module();
//! assert_eq!(module.name, "GoogleAi");
//! assert!(!module.records.is_empty());
//! ```

pub mod googleai;
pub mod openai;
pub mod prelude;

// Re-export definition functions for convenience
pub use googleai::define_googleai_module;
pub use openai::define_openai_module;
