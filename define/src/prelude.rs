//! Convenient re-exports for authoring record specifications.
//!
//! ## Examples
//!
//! ```
//! use stencil_define::prelude::*;
//!
//! let spec = RecordSpec {
//!     name: "SafetySetting".to_string(),
//!     description: "A harm category threshold".to_string(),
//!     fields: vec![
//!         FieldSpec::required("category", "String"),
//!         FieldSpec::required("threshold", "String"),
//!     ],
//!     caps: Capabilities::value(),
//! }
//! .keyword_only();
//!
//! assert_eq!(spec.fields.len(), 2);
//! ```

pub use crate::capability::Capabilities;
pub use crate::module::RecordModule;
pub use crate::record::{Binding, FieldDefault, FieldSpec, RecordSpec};
