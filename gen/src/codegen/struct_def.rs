//! Struct definition emission.
//!
//! Emits the struct itself: doc comment from the spec description, serde
//! derives, per-field serde attributes (wire renames, optional-field
//! skipping), and field visibility driven by the frozen flag.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use stencil_define::{FieldDefault, RecordSpec};

use super::{field_type, option_inner, RecordPlan};

/// Generates the struct definition for a record.
///
/// Frozen records get private fields (construction goes through `new()`
/// and reads go through getters); non-frozen records get `pub` fields.
/// Serialization always derives: renames follow each field's wire name,
/// and optional fields are skipped when `None` so absent wire keys and
/// `None` round-trip cleanly.
pub fn generate_struct_def(spec: &RecordSpec, plan: &RecordPlan) -> TokenStream {
    let name = format_ident!("{}", spec.name);
    let doc = format!(" {}", spec.description);

    let fields = spec.fields.iter().map(|field| {
        let field_name = format_ident!("{}", field.name);
        let ty = field_type(field);

        let mut serde_parts: Vec<TokenStream> = Vec::new();
        if let Some(wire) = &field.wire_name {
            serde_parts.push(quote! { rename = #wire });
        }
        if field.base64 {
            let with_path = if option_inner(&field.ty).is_some() {
                "crate::b64::opt"
            } else {
                "crate::b64"
            };
            serde_parts.push(quote! { with = #with_path });
        }
        let defaulted_option =
            matches!(field.default, FieldDefault::Expr(_)) && option_inner(&field.ty).is_some();
        if defaulted_option {
            serde_parts.push(quote! { default });
            serde_parts.push(quote! { skip_serializing_if = "Option::is_none" });
        }
        let serde_attr = (!serde_parts.is_empty()).then(|| {
            quote! { #[serde(#(#serde_parts),*)] }
        });

        let vis = if plan.frozen {
            quote! {}
        } else {
            quote! { pub }
        };

        quote! {
            #serde_attr
            #vis #field_name: #ty
        }
    });

    // When every default expression is the type's own default value,
    // derive Default here instead of emitting a hand-written impl.
    let default_derive = plan
        .init
        .derivable_default()
        .then(|| quote! { , Default })
        .unwrap_or_default();

    quote! {
        #[doc = #doc]
        #[derive(Serialize, Deserialize #default_derive)]
        pub struct #name {
            #(#fields),*
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::plan_record;
    use stencil_define::{Capabilities, FieldSpec};

    fn generate(spec: &RecordSpec) -> String {
        let plan = plan_record(spec);
        generate_struct_def(spec, &plan).to_string()
    }

    #[test]
    fn frozen_records_get_private_fields() {
        let spec = RecordSpec {
            name: "Blob".to_string(),
            description: "Inline media bytes".to_string(),
            fields: vec![FieldSpec::required("data", "Vec<u8>")],
            caps: Capabilities::value(),
        };

        let code = generate(&spec);
        assert!(code.contains("struct Blob"));
        assert!(!code.contains("pub data"));
    }

    #[test]
    fn mutable_records_get_pub_fields() {
        let spec = RecordSpec {
            name: "Delta".to_string(),
            description: "A streamed delta".to_string(),
            fields: vec![FieldSpec::optional("content", "String")],
            caps: Capabilities::value().without_frozen(),
        };

        assert!(generate(&spec).contains("pub content"));
    }

    #[test]
    fn wire_names_become_serde_renames() {
        let spec = RecordSpec {
            name: "FileData".to_string(),
            description: "A URI-referenced file".to_string(),
            fields: vec![FieldSpec::required("file_uri", "String").wire("fileUri")],
            caps: Capabilities::value(),
        };

        assert!(generate(&spec).contains("rename = \"fileUri\""));
    }

    #[test]
    fn optional_fields_skip_when_none() {
        let spec = RecordSpec {
            name: "SafetySetting".to_string(),
            description: "A harm threshold".to_string(),
            fields: vec![
                FieldSpec::required("category", "String"),
                FieldSpec::optional("method", "String"),
            ],
            caps: Capabilities::value(),
        };

        let code = generate(&spec);
        assert!(code.contains("skip_serializing_if = \"Option::is_none\""));
        // Required fields carry no serde attributes at all.
        assert_eq!(code.matches("skip_serializing_if").count(), 1);
    }

    #[test]
    fn base64_fields_get_the_encoding_module() {
        let spec = RecordSpec {
            name: "Blob".to_string(),
            description: "Inline media bytes".to_string(),
            fields: vec![
                FieldSpec::required("mine_type", "String").wire("mineType"),
                FieldSpec::required("data", "Vec<u8>").base64(),
                FieldSpec::optional("thought_signature", "Vec<u8>")
                    .wire("thoughtSignature")
                    .base64(),
            ],
            caps: Capabilities::value(),
        };

        let code = generate(&spec);
        assert!(code.contains("with = \"crate::b64\""));
        assert!(code.contains("with = \"crate::b64::opt\""));
        // The plain string field carries no encoding attribute.
        assert_eq!(code.matches("crate::b64").count(), 2);
    }

    #[test]
    fn all_none_defaults_derive_default() {
        let spec = RecordSpec {
            name: "ThinkingConfig".to_string(),
            description: "Thinking controls".to_string(),
            fields: vec![
                FieldSpec::optional("include_thoughts", "bool"),
                FieldSpec::optional("thinking_budget", "i64"),
            ],
            caps: Capabilities::value(),
        };

        assert!(generate(&spec).contains("derive (Serialize , Deserialize , Default)"));
    }

    #[test]
    fn records_with_required_fields_do_not_derive_default() {
        let spec = RecordSpec {
            name: "FileData".to_string(),
            description: "A URI-referenced file".to_string(),
            fields: vec![FieldSpec::required("file_uri", "String")],
            caps: Capabilities::value(),
        };

        assert!(!generate(&spec).contains("Default"));
    }

    #[test]
    fn description_becomes_doc_comment() {
        let spec = RecordSpec {
            name: "Usage".to_string(),
            description: "Token accounting for one completion".to_string(),
            fields: vec![],
            caps: Capabilities::value(),
        };

        assert!(generate(&spec).contains("Token accounting for one completion"));
    }
}
