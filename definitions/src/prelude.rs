//! Convenient re-exports for working with record definitions.
//!
//! ## Examples
//!
//! ```
//! use stencil_definitions::prelude::*;
//!
//! let module = define_openai_module();
//! assert_eq!(module.name, "OpenAi");
//! ```

// Module definition functions
pub use crate::googleai::define_googleai_module;
pub use crate::openai::define_openai_module;
