//! Grouping of record specifications into generated modules.

use serde::{Deserialize, Serialize};

use crate::record::RecordSpec;

/// A named group of record specs generated into one module file.
///
/// The module name becomes the generated file and `mod` name (lowercased
/// unless `module_path` overrides it); every record in the group lands in
/// that module.
///
/// ## Examples
///
/// ```
/// use stencil_define::{Capabilities, FieldSpec, RecordModule, RecordSpec};
///
/// let module = RecordModule {
///     name: "GoogleAi".to_string(),
///     description: "Google generateContent wire protocol".to_string(),
///     docs_url: Some("https://ai.google.dev/api/generate-content".to_string()),
///     module_path: Some("googleai".to_string()),
///     records: vec![RecordSpec {
///         name: "FileData".to_string(),
///         description: "A URI-referenced file".to_string(),
///         fields: vec![FieldSpec::required("file_uri", "String").wire("fileUri")],
///         caps: Capabilities::value(),
///     }],
/// };
///
/// assert_eq!(module.records.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordModule {
    /// Identifier for this module (PascalCase, e.g. "GoogleAi").
    pub name: String,
    /// Human-readable description of the protocol the records describe.
    pub description: String,
    /// Link to the upstream protocol documentation (optional).
    pub docs_url: Option<String>,
    /// Explicit output module name (lowercase). Falls back to the
    /// lowercased module name when absent.
    pub module_path: Option<String>,
    /// All record specs in this module.
    pub records: Vec<RecordSpec>,
}

impl RecordModule {
    /// Returns the output module name: `module_path` if set, otherwise
    /// the lowercased module name.
    pub fn output_module(&self) -> String {
        self.module_path
            .clone()
            .unwrap_or_else(|| self.name.to_lowercase())
    }
}
