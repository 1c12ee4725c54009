//! Constructor and builder emission.
//!
//! Emits the inherent impl for a record: `new()` over the required
//! fields, getters for frozen records, `with_{name}()` builders for
//! defaulted fields, and a `Default` implementation when every field
//! carries a default that the derive cannot provide.
//!
//! Parameter order in `new()` is positional fields first, then
//! keyword-only fields, each group in declaration order. `String`
//! parameters are taken as `impl Into<String>` so call sites can pass
//! string literals directly.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use stencil_define::{FieldDefault, FieldSpec, RecordSpec};

use super::{default_expr, field_type, is_copy_primitive, option_inner, InitPlan, RecordPlan};

/// Generates the inherent impl (and `Default`, when applicable) for a
/// record.
pub fn generate_ctor(spec: &RecordSpec, plan: &RecordPlan) -> TokenStream {
    let name = format_ident!("{}", spec.name);

    let new_fn = generate_new(spec, &plan.init);
    let getters = (plan.frozen && !spec.fields.is_empty()).then(|| generate_getters(spec));
    let builders: Vec<TokenStream> = plan.init.defaulted.iter().map(generate_builder).collect();

    let has_items = new_fn.is_some() || getters.is_some() || !builders.is_empty();
    let inherent = has_items.then(|| {
        quote! {
            impl #name {
                #new_fn
                #getters
                #(#builders)*
            }
        }
    });

    // Derivable defaults are handled by the struct definition's derive
    // list; only non-trivial default expressions need a written impl.
    let default_impl = (plan.init.emit_default && !plan.init.derivable_default())
        .then(|| generate_default(spec));

    quote! {
        #inherent
        #default_impl
    }
}

/// Generates `new()` over the required fields, or nothing when there are
/// none (construction then goes through `Default`).
fn generate_new(spec: &RecordSpec, init: &InitPlan) -> Option<TokenStream> {
    let required: Vec<&FieldSpec> = init
        .positional
        .iter()
        .chain(init.keyword_only.iter())
        .collect();
    if required.is_empty() {
        return None;
    }

    let params = required.iter().map(|field| {
        let param = format_ident!("{}", field.name);
        if field.ty == "String" {
            quote! { #param: impl Into<String> }
        } else {
            let ty = field_type(field);
            quote! { #param: #ty }
        }
    });

    let inits = spec.fields.iter().map(|field| {
        let field_name = format_ident!("{}", field.name);
        match &field.default {
            FieldDefault::Required => {
                if field.ty == "String" {
                    quote! { #field_name: #field_name.into() }
                } else {
                    quote! { #field_name }
                }
            }
            FieldDefault::Expr(expr) => {
                let expr = default_expr(expr);
                quote! { #field_name: #expr }
            }
        }
    });

    let doc = format!(" Creates a new `{}` from its required fields.", spec.name);
    Some(quote! {
        #[doc = #doc]
        pub fn new(#(#params),*) -> Self {
            Self {
                #(#inits),*
            }
        }
    })
}

/// Generates one getter per field. Primitive fields (and options of
/// primitives) return by value; everything else by reference.
fn generate_getters(spec: &RecordSpec) -> TokenStream {
    let getters = spec.fields.iter().map(|field| {
        let field_name = format_ident!("{}", field.name);
        let ty = field_type(field);
        let by_value = is_copy_primitive(&field.ty)
            || option_inner(&field.ty).is_some_and(is_copy_primitive);

        if by_value {
            quote! {
                pub fn #field_name(&self) -> #ty {
                    self.#field_name
                }
            }
        } else {
            quote! {
                pub fn #field_name(&self) -> &#ty {
                    &self.#field_name
                }
            }
        }
    });

    quote! { #(#getters)* }
}

/// Generates a `with_{name}()` builder for one defaulted field.
///
/// Builders on `Option<T>` fields take the inner `T` and wrap it; the
/// `None` case is what the default already provides.
fn generate_builder(field: &FieldSpec) -> TokenStream {
    let method = format_ident!("with_{}", field.name);
    let field_name = format_ident!("{}", field.name);
    let doc = format!(" Sets the `{}` field.", field.name);

    let (param, assigned) = match option_inner(&field.ty) {
        Some("String") => (
            quote! { #field_name: impl Into<String> },
            quote! { Some(#field_name.into()) },
        ),
        Some(inner) => {
            let inner_ty: syn::Type =
                syn::parse_str(inner).expect("field type validated before generation");
            (
                quote! { #field_name: #inner_ty },
                quote! { Some(#field_name) },
            )
        }
        None if field.ty == "String" => (
            quote! { #field_name: impl Into<String> },
            quote! { #field_name.into() },
        ),
        None => {
            let ty = field_type(field);
            (quote! { #field_name: #ty }, quote! { #field_name })
        }
    };

    quote! {
        #[doc = #doc]
        pub fn #method(mut self, #param) -> Self {
            self.#field_name = #assigned;
            self
        }
    }
}

/// Generates `Default` from the per-field default expressions.
fn generate_default(spec: &RecordSpec) -> TokenStream {
    let name = format_ident!("{}", spec.name);
    let inits = spec.fields.iter().map(|field| {
        let field_name = format_ident!("{}", field.name);
        match &field.default {
            FieldDefault::Expr(expr) => {
                let expr = default_expr(expr);
                quote! { #field_name: #expr }
            }
            // Unreachable once emit_default gates this, but keep the
            // arm total rather than panicking.
            FieldDefault::Required => quote! { #field_name: Default::default() },
        }
    });

    quote! {
        impl Default for #name {
            fn default() -> Self {
                Self {
                    #(#inits),*
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::plan_record;
    use stencil_define::Capabilities;

    fn generate(spec: &RecordSpec) -> String {
        let plan = plan_record(spec);
        generate_ctor(spec, &plan).to_string()
    }

    fn make_spec(fields: Vec<FieldSpec>, caps: Capabilities) -> RecordSpec {
        RecordSpec {
            name: "Sample".to_string(),
            description: "A sample record".to_string(),
            fields,
            caps,
        }
    }

    #[test]
    fn new_takes_required_fields_positional_first() {
        let spec = make_spec(
            vec![
                FieldSpec::required("role", "String").keyword_only(),
                FieldSpec::required("content", "String"),
            ],
            Capabilities::value(),
        );

        let code = generate(&spec);
        let content_pos = code.find("content : impl Into < String >");
        let role_pos = code.find("role : impl Into < String >");
        assert!(content_pos.is_some());
        assert!(role_pos.is_some());
        assert!(content_pos < role_pos, "positional must precede keyword-only");
    }

    #[test]
    fn new_initializes_defaulted_fields_from_their_exprs() {
        let spec = make_spec(
            vec![
                FieldSpec::required("model", "String"),
                FieldSpec::defaulted("stream", "bool", "false"),
            ],
            Capabilities::value(),
        );

        let code = generate(&spec);
        assert!(code.contains("stream : false"));
    }

    #[test]
    fn no_new_when_every_field_is_defaulted() {
        let spec = make_spec(
            vec![FieldSpec::optional("content", "String")],
            Capabilities::value(),
        );

        let code = generate(&spec);
        assert!(!code.contains("pub fn new"));
        // All-`None` defaults derive Default on the struct instead.
        assert!(!code.contains("impl Default for Sample"));
    }

    #[test]
    fn non_trivial_defaults_get_a_written_default_impl() {
        let spec = make_spec(
            vec![FieldSpec::defaulted("role", "String", "String::from(\"user\")")],
            Capabilities::value(),
        );

        let code = generate(&spec);
        assert!(code.contains("impl Default for Sample"));
        assert!(code.contains("String :: from (\"user\")"));
    }

    #[test]
    fn frozen_records_get_getters() {
        let spec = make_spec(
            vec![FieldSpec::required("file_uri", "String")],
            Capabilities::value(),
        );

        let code = generate(&spec);
        assert!(code.contains("pub fn file_uri (& self) -> & String"));
    }

    #[test]
    fn mutable_records_get_no_getters() {
        let spec = make_spec(
            vec![FieldSpec::required("file_uri", "String")],
            Capabilities::value().without_frozen(),
        );

        assert!(!generate(&spec).contains("pub fn file_uri"));
    }

    #[test]
    fn primitive_getters_return_by_value() {
        let spec = make_spec(
            vec![
                FieldSpec::required("index", "i64"),
                FieldSpec::optional("temperature", "f64"),
            ],
            Capabilities::value().without_hash(),
        );

        let code = generate(&spec);
        assert!(code.contains("pub fn index (& self) -> i64"));
        assert!(code.contains("pub fn temperature (& self) -> Option < f64 >"));
    }

    #[test]
    fn option_builders_take_the_inner_type() {
        let spec = make_spec(
            vec![
                FieldSpec::required("name", "String"),
                FieldSpec::optional("description", "String"),
                FieldSpec::optional("strict", "bool"),
            ],
            Capabilities::value(),
        );

        let code = generate(&spec);
        assert!(code.contains("pub fn with_description (mut self , description : impl Into < String >)"));
        assert!(code.contains("pub fn with_strict (mut self , strict : bool)"));
        assert!(code.contains("Some (strict)"));
    }

    #[test]
    fn empty_record_emits_no_inherent_impl() {
        let spec = make_spec(vec![], Capabilities::value());
        let code = generate(&spec);
        assert!(!code.contains("pub fn new"));
        assert!(!code.contains("impl Sample"));
    }
}
