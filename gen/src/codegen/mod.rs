//! Code generation for record specifications.
//!
//! Generation runs in two stages. [`plan_record`] resolves a spec's
//! capability flags into a [`RecordPlan`]; the emitter modules then turn
//! the plan into token streams:
//!
//! - [`struct_def`] - The struct definition with serde attributes
//! - [`ctor`] - `new()`, builder methods, getters, and `Default`
//! - [`clone`] - Field-wise `Clone`
//! - [`eq`] - Structural `PartialEq` (and `Eq` for hashable shapes)
//! - [`hash`] - `Hash` over the equality field list
//! - [`repr`] - `Debug` over the repr-flagged fields
//! - [`module_docs`] - Module-level documentation headers
//!
//! [`generate_record`] stitches the emitters together for one spec.

pub mod clone;
pub mod ctor;
pub mod eq;
pub mod hash;
pub mod module_docs;
pub mod plan;
pub mod repr;
pub mod struct_def;

pub use module_docs::ModuleDocBuilder;
pub use plan::{plan_record, CopyPlan, EqPlan, HashPlan, InitPlan, RecordPlan, ReprPlan};

use proc_macro2::TokenStream;
use stencil_define::{FieldSpec, RecordSpec};

/// Parses a field's type string into a `syn::Type`.
///
/// Validation rejects unparseable types before generation starts, so a
/// parse failure here is a generator bug.
pub(crate) fn field_type(field: &FieldSpec) -> syn::Type {
    syn::parse_str(&field.ty).expect("field type validated before generation")
}

/// Parses a default expression string into a `syn::Expr`.
pub(crate) fn default_expr(expr: &str) -> syn::Expr {
    syn::parse_str(expr).expect("default expression validated before generation")
}

/// Returns the inner `T` of an `Option<T>` type string, if it is one.
pub(crate) fn option_inner(ty: &str) -> Option<&str> {
    ty.strip_prefix("Option<")?.strip_suffix(">")
}

/// Whether the type is a primitive cheap enough to return by value from
/// a getter instead of by reference.
pub(crate) fn is_copy_primitive(ty: &str) -> bool {
    matches!(
        ty,
        "bool"
            | "char"
            | "i8"
            | "i16"
            | "i32"
            | "i64"
            | "u8"
            | "u16"
            | "u32"
            | "u64"
            | "usize"
            | "isize"
            | "f32"
            | "f64"
    )
}

/// Generates the complete definition for one record: the struct plus
/// every method set its plan calls for.
///
/// ## Examples
///
/// ```
/// use stencil_define::{Capabilities, FieldSpec, RecordSpec};
/// use stencil_gen::codegen::generate_record;
///
/// let spec = RecordSpec {
///     name: "FileData".to_string(),
///     description: "A URI-referenced file".to_string(),
///     fields: vec![FieldSpec::required("file_uri", "String").wire("fileUri")],
///     caps: Capabilities::value(),
/// };
///
/// let code = generate_record(&spec).to_string();
/// assert!(code.contains("struct FileData"));
/// assert!(code.contains("impl Clone for FileData"));
/// ```
pub fn generate_record(spec: &RecordSpec) -> TokenStream {
    let plan = plan_record(spec);
    generate_record_with_plan(spec, &plan)
}

/// Generates a record against an already-resolved plan.
///
/// The registry resolves plans once per shape; generation consumes them
/// here without re-planning.
pub fn generate_record_with_plan(spec: &RecordSpec, plan: &RecordPlan) -> TokenStream {
    let struct_def = struct_def::generate_struct_def(spec, plan);
    let ctor = ctor::generate_ctor(spec, plan);
    let clone_impl = plan.copy.as_ref().map(|_| clone::generate_clone(spec, plan));
    let eq_impl = plan.eq.as_ref().map(|_| eq::generate_eq(spec, plan));
    let hash_impl = plan.hash.as_ref().map(|_| hash::generate_hash(spec, plan));
    let repr_impl = plan.repr.as_ref().map(|_| repr::generate_repr(spec, plan));

    quote::quote! {
        #struct_def
        #ctor
        #clone_impl
        #eq_impl
        #hash_impl
        #repr_impl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stencil_define::Capabilities;

    #[test]
    fn option_inner_strips_wrapper() {
        assert_eq!(option_inner("Option<String>"), Some("String"));
        assert_eq!(option_inner("Option<Vec<Part>>"), Some("Vec<Part>"));
        assert_eq!(option_inner("String"), None);
    }

    #[test]
    fn copy_primitives_recognized() {
        assert!(is_copy_primitive("bool"));
        assert!(is_copy_primitive("f64"));
        assert!(!is_copy_primitive("String"));
        assert!(!is_copy_primitive("Option<bool>"));
    }

    #[test]
    fn generate_record_covers_every_enabled_capability() {
        let spec = RecordSpec {
            name: "Interval".to_string(),
            description: "A time interval".to_string(),
            fields: vec![
                FieldSpec::required("start_time", "String"),
                FieldSpec::required("end_time", "String"),
            ],
            caps: Capabilities::value(),
        };

        let code = generate_record(&spec).to_string();
        assert!(code.contains("struct Interval"));
        assert!(code.contains("impl Clone for Interval"));
        assert!(code.contains("impl PartialEq for Interval"));
        assert!(code.contains("Hash for Interval"));
        assert!(code.contains("Debug for Interval"));
    }

    #[test]
    fn generate_record_omits_disabled_capabilities() {
        let spec = RecordSpec {
            name: "GenerationConfig".to_string(),
            description: "Sampling controls".to_string(),
            fields: vec![FieldSpec::optional("temperature", "f64")],
            caps: Capabilities::value().without_hash(),
        };

        let code = generate_record(&spec).to_string();
        assert!(!code.contains("Hash for GenerationConfig"));
        assert!(code.contains("impl PartialEq for GenerationConfig"));
    }
}
