//! Module documentation generation for record modules.
//!
//! This module provides the [`ModuleDocBuilder`] struct for generating
//! module-level documentation for generated record modules. The
//! documentation includes an introduction, a record listing, and a usage
//! example.

use proc_macro2::TokenStream;
use quote::quote;
use stencil_define::RecordModule;

/// Builds module-level documentation for a generated record module.
///
/// The builder generates documentation sections including:
/// - Introduction paragraph with module name and description
/// - Records section listing every generated type, grouped by mutability
/// - Example section constructing the first record
///
/// ## Examples
///
/// ```ignore
/// use stencil_define::RecordModule;
/// use stencil_gen::codegen::ModuleDocBuilder;
///
/// let module: RecordModule = /* ... */;
/// let builder = ModuleDocBuilder::new(&module);
/// let doc_tokens = builder.build();
/// ```
pub struct ModuleDocBuilder<'a> {
    module: &'a RecordModule,
}

impl<'a> ModuleDocBuilder<'a> {
    /// Creates a new module documentation builder for the given module.
    pub fn new(module: &'a RecordModule) -> Self {
        Self { module }
    }

    /// Builds the complete module documentation as a token stream.
    ///
    /// The generated tokens include `#![doc = "..."]` attributes that
    /// form the module-level documentation.
    pub fn build(&self) -> TokenStream {
        let intro = self.intro_paragraph();
        let records_section = self.records_section();
        let example_section = self.example_section();

        quote! {
            #![doc = #intro]
            //!
            #![doc = #records_section]
            //!
            #![doc = #example_section]
        }
    }

    /// Generates the introduction paragraph.
    ///
    /// If a documentation URL is available, the module name is rendered
    /// as a markdown link. Otherwise, just the name is used.
    fn intro_paragraph(&self) -> String {
        let name = &self.module.name;
        let desc = &self.module.description;

        if let Some(docs_url) = &self.module.docs_url {
            format!(
                " Generated record types for [{}]({}).\n\n {}",
                name, docs_url, desc
            )
        } else {
            format!(" Generated record types for {}.\n\n {}", name, desc)
        }
    }

    /// Generates the records section.
    ///
    /// Lists every record in the module, immutable value types first.
    fn records_section(&self) -> String {
        if self.module.records.is_empty() {
            return " ## Records\n\n No records defined.".to_string();
        }

        let mut lines = vec![" ## Records".to_string(), String::new()];
        let frozen: Vec<_> = self.module.records.iter().filter(|r| r.caps.frozen).collect();
        let mutable: Vec<_> = self.module.records.iter().filter(|r| !r.caps.frozen).collect();

        if !frozen.is_empty() {
            lines.push(" **Immutable values**:".to_string());
            for record in &frozen {
                lines.push(format!(" - `{}` - {}", record.name, record.description));
            }
            lines.push(String::new());
        }
        if !mutable.is_empty() {
            lines.push(" **Mutable**:".to_string());
            for record in &mutable {
                lines.push(format!(" - `{}` - {}", record.name, record.description));
            }
            lines.push(String::new());
        }
        lines.join("\n")
    }

    /// Generates the example section.
    ///
    /// Uses the first record with required fields so the example can show
    /// a `new()` call, falling back to `Default` construction.
    fn example_section(&self) -> String {
        let record = self
            .module
            .records
            .iter()
            .find(|r| r.required_fields().next().is_some())
            .or_else(|| self.module.records.first());

        let Some(record) = record else {
            return " ## Example\n\n No records available for example.".to_string();
        };

        // The prelude re-exports modules, not types, so the example
        // qualifies the record with its module.
        let qualified = format!("{}::{}", self.module.output_module(), record.name);
        let construction = if record.required_fields().next().is_some() {
            let args = record
                .required_fields()
                .map(|f| format!("/* {} */", f.name))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}::new({})", qualified, args)
        } else {
            format!("{}::default()", qualified)
        };

        format!(
            r#" ## Example

 ```ignore
 use stencil_records::prelude::*;

 let value = {};
 println!("{{:?}}", value);
 ```"#,
            construction
        )
    }
}
