//! Clone emission.
//!
//! Clones are field-wise and explicit. Spelling the impl out instead of
//! deriving it keeps the generated method set uniform: every capability
//! a record carries is visible in its emitted source.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use stencil_define::RecordSpec;

use super::RecordPlan;

/// Generates `Clone` for a record.
pub fn generate_clone(spec: &RecordSpec, plan: &RecordPlan) -> TokenStream {
    let name = format_ident!("{}", spec.name);

    let field_clones = plan
        .copy
        .iter()
        .flat_map(|c| c.fields.iter())
        .map(|field| {
            let field_name = format_ident!("{}", field);
            quote! { #field_name: self.#field_name.clone() }
        });

    quote! {
        impl Clone for #name {
            fn clone(&self) -> Self {
                Self {
                    #(#field_clones),*
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::plan_record;
    use stencil_define::{Capabilities, FieldSpec};

    #[test]
    fn clones_every_field() {
        let spec = RecordSpec {
            name: "FileData".to_string(),
            description: "A URI-referenced file".to_string(),
            fields: vec![
                FieldSpec::required("file_uri", "String"),
                FieldSpec::optional("mime_type", "String"),
            ],
            caps: Capabilities::value(),
        };

        let plan = plan_record(&spec);
        let code = generate_clone(&spec, &plan).to_string();
        assert!(code.contains("impl Clone for FileData"));
        assert!(code.contains("file_uri : self . file_uri . clone ()"));
        assert!(code.contains("mime_type : self . mime_type . clone ()"));
    }
}
