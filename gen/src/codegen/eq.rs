//! Structural equality emission.
//!
//! Equality compares every declared field in declaration order. The `Eq`
//! marker (full equivalence) is emitted only for hashable shapes: shapes
//! that opted out of hashing usually did so because they carry floats,
//! and float fields make `Eq` a lie under NaN.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use stencil_define::RecordSpec;

use super::RecordPlan;

/// Generates `PartialEq` (and, for hashable shapes, `Eq`) for a record.
pub fn generate_eq(spec: &RecordSpec, plan: &RecordPlan) -> TokenStream {
    let name = format_ident!("{}", spec.name);

    // Underscore the parameter for empty shapes so the generated code
    // stays warning-free.
    let (other, body) = match plan.eq.as_ref() {
        Some(eq_plan) if !eq_plan.fields.is_empty() => {
            let comparisons = eq_plan.fields.iter().map(|field| {
                let field_name = format_ident!("{}", field);
                quote! { self.#field_name == other.#field_name }
            });
            (format_ident!("other"), quote! { #(#comparisons)&&* })
        }
        _ => (format_ident!("_other"), quote! { true }),
    };

    let eq_marker = plan.hash.is_some().then(|| {
        quote! { impl Eq for #name {} }
    });

    quote! {
        impl PartialEq for #name {
            fn eq(&self, #other: &Self) -> bool {
                #body
            }
        }
        #eq_marker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::plan_record;
    use stencil_define::{Capabilities, FieldSpec};

    fn generate(spec: &RecordSpec) -> String {
        let plan = plan_record(spec);
        generate_eq(spec, &plan).to_string()
    }

    #[test]
    fn compares_every_field_in_declaration_order() {
        let spec = RecordSpec {
            name: "Interval".to_string(),
            description: "A time interval".to_string(),
            fields: vec![
                FieldSpec::required("start_time", "String"),
                FieldSpec::required("end_time", "String"),
            ],
            caps: Capabilities::value(),
        };

        let code = generate(&spec);
        assert!(code.contains("self . start_time == other . start_time"));
        assert!(code.contains("self . end_time == other . end_time"));
        assert!(
            code.find("start_time").unwrap() < code.find("end_time").unwrap(),
            "comparison order follows declaration order"
        );
    }

    #[test]
    fn hashable_shapes_get_the_eq_marker() {
        let spec = RecordSpec {
            name: "FileData".to_string(),
            description: "A URI-referenced file".to_string(),
            fields: vec![FieldSpec::required("file_uri", "String")],
            caps: Capabilities::value(),
        };

        assert!(generate(&spec).contains("impl Eq for FileData"));
    }

    #[test]
    fn unhashable_shapes_stay_partial() {
        let spec = RecordSpec {
            name: "GenerationConfig".to_string(),
            description: "Sampling controls".to_string(),
            fields: vec![FieldSpec::optional("temperature", "f64")],
            caps: Capabilities::value().without_hash(),
        };

        let code = generate(&spec);
        assert!(code.contains("impl PartialEq for GenerationConfig"));
        assert!(!code.contains("impl Eq for GenerationConfig"));
    }

    #[test]
    fn empty_records_are_always_equal() {
        let spec = RecordSpec {
            name: "UrlContext".to_string(),
            description: "Enables URL context retrieval".to_string(),
            fields: vec![],
            caps: Capabilities::value(),
        };

        assert!(generate(&spec).contains("true"));
    }
}
