//! Debug representation emission.
//!
//! The debug output lists the repr-flagged fields by name. When a record
//! hides fields (large byte payloads, opaque signatures), the formatter
//! finishes non-exhaustively so the output admits there is more.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use stencil_define::RecordSpec;

use super::RecordPlan;

/// Generates `Debug` for a record.
pub fn generate_repr(spec: &RecordSpec, plan: &RecordPlan) -> TokenStream {
    let name = format_ident!("{}", spec.name);
    let name_str = spec.name.clone();

    let repr_fields: Vec<&String> = plan.repr.iter().flat_map(|r| r.fields.iter()).collect();
    let field_calls = repr_fields.iter().map(|field| {
        let field_str = field.as_str();
        let field_name = format_ident!("{}", field_str);
        quote! { .field(#field_str, &self.#field_name) }
    });

    let finish = if repr_fields.len() < spec.fields.len() {
        quote! { .finish_non_exhaustive() }
    } else {
        quote! { .finish() }
    };

    quote! {
        impl ::std::fmt::Debug for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(#name_str)
                    #(#field_calls)*
                    #finish
            }
        }
    }
}
