//! The synthesis registry.
//!
//! The registry is built once at startup from every record module the
//! generator is asked to process. It is keyed by shape fingerprint, so
//! records with identical shapes (same field list and capability flags
//! under different names) share one entry and one synthesis plan.
//!
//! Building the registry also validates every module: nothing enters the
//! registry that generation could later choke on.

use std::collections::BTreeMap;

use stencil_define::RecordModule;

use crate::codegen::{plan_record, RecordPlan};
use crate::errors::GeneratorError;
use crate::validation::validate_module;

/// One registered shape: the records that share it and their common plan.
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    /// The shape fingerprint (fixed-width hex).
    pub fingerprint: String,
    /// Qualified names (`module::Record`) sharing this shape, in
    /// registration order.
    pub names: Vec<String>,
    /// The synthesis plan every record of this shape uses.
    pub plan: RecordPlan,
}

/// Registry of every record shape known to the generator.
///
/// ## Examples
///
/// ```
/// use stencil_define::{Capabilities, FieldSpec, RecordModule, RecordSpec};
/// use stencil_gen::registry::SynthesisRegistry;
///
/// let module = RecordModule {
///     name: "OpenAi".to_string(),
///     description: "OpenAI-style chat completions".to_string(),
///     docs_url: None,
///     module_path: None,
///     records: vec![RecordSpec {
///         name: "ToolMessage".to_string(),
///         description: "A tool result message".to_string(),
///         fields: vec![
///             FieldSpec::required("content", "String"),
///             FieldSpec::required("tool_call_id", "String"),
///         ],
///         caps: Capabilities::value(),
///     }],
/// };
///
/// let registry = SynthesisRegistry::build(&[module]).unwrap();
/// assert_eq!(registry.len(), 1);
/// assert!(registry.plan_for("openai", "ToolMessage").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct SynthesisRegistry {
    entries: BTreeMap<String, RegistryEntry>,
    by_name: BTreeMap<String, String>,
}

impl SynthesisRegistry {
    /// Builds the registry from every module, validating as it goes.
    ///
    /// Fails on the first invalid module, and on any qualified name
    /// registered twice with conflicting shapes.
    pub fn build(modules: &[RecordModule]) -> Result<Self, GeneratorError> {
        let mut entries: BTreeMap<String, RegistryEntry> = BTreeMap::new();
        let mut by_name: BTreeMap<String, String> = BTreeMap::new();

        for module in modules {
            validate_module(module)?;
            let output_module = module.output_module();

            for record in &module.records {
                let fingerprint = record.fingerprint();
                let qualified = format!("{}::{}", output_module, record.name);

                if let Some(existing) = by_name.get(&qualified) {
                    if *existing != fingerprint {
                        return Err(GeneratorError::ShapeCollision {
                            name: qualified,
                            first: existing.clone(),
                            second: fingerprint,
                        });
                    }
                    continue;
                }

                let entry = entries
                    .entry(fingerprint.clone())
                    .or_insert_with(|| RegistryEntry {
                        fingerprint: fingerprint.clone(),
                        names: Vec::new(),
                        plan: plan_record(record),
                    });
                entry.names.push(qualified.clone());
                by_name.insert(qualified, fingerprint);
            }
        }

        Ok(Self { entries, by_name })
    }

    /// Number of distinct shapes registered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of records registered (counting shared shapes once per name).
    pub fn record_count(&self) -> usize {
        self.by_name.len()
    }

    /// Looks up the entry for a shape fingerprint.
    pub fn entry(&self, fingerprint: &str) -> Option<&RegistryEntry> {
        self.entries.get(fingerprint)
    }

    /// Looks up the plan for a record by module and name.
    pub fn plan_for(&self, module: &str, record: &str) -> Option<&RecordPlan> {
        let fingerprint = self.by_name.get(&format!("{}::{}", module, record))?;
        self.entries.get(fingerprint).map(|e| &e.plan)
    }

    /// Iterates entries in fingerprint order.
    pub fn entries(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.values()
    }

    /// Entries shared by more than one record.
    pub fn shared_shapes(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.values().filter(|e| e.names.len() > 1)
    }
}
