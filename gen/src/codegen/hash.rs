//! Hash emission.
//!
//! The hash visits exactly the fields equality compares, in the same
//! order. Validation has already rejected hash-capable records with
//! unhashable field types, so every visited field implements `Hash`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use stencil_define::RecordSpec;

use super::RecordPlan;

/// Generates `Hash` for a record.
pub fn generate_hash(spec: &RecordSpec, plan: &RecordPlan) -> TokenStream {
    let name = format_ident!("{}", spec.name);

    let fields: Vec<&String> = plan.hash.iter().flat_map(|h| h.fields.iter()).collect();
    // Underscore the parameter for empty shapes so the generated code
    // stays warning-free.
    let state = if fields.is_empty() {
        format_ident!("_state")
    } else {
        format_ident!("state")
    };
    let field_hashes = fields.iter().map(|field| {
        let field_name = format_ident!("{}", field.as_str());
        // Fully qualified so the generated module needs no Hash import.
        quote! { ::std::hash::Hash::hash(&self.#field_name, #state); }
    });

    quote! {
        impl ::std::hash::Hash for #name {
            fn hash<H: ::std::hash::Hasher>(&self, #state: &mut H) {
                #(#field_hashes)*
            }
        }
    }
}
