//! Pre-generation validation of record modules.
//!
//! Validation runs before any code is emitted and fails loudly: a bad
//! specification is a programming error, and emitting code for one would
//! only move the failure somewhere harder to diagnose. Checks cover
//! naming, field uniqueness, type and default-expression parseability,
//! collisions with the synthesized method set, constructor parameter
//! ordering, and capability coherence.

use stencil_define::{Binding, FieldDefault, RecordModule, RecordSpec};

use crate::errors::GeneratorError;

/// Method names every record synthesis may install. A field carrying one
/// of these names would shadow the method (or be shadowed by it).
const RESERVED_METHOD_NAMES: &[&str] = &["new", "clone", "eq", "hash", "fmt", "default"];

/// Field types that implement equality but not hashing.
const UNHASHABLE_TYPES: &[&str] = &["f32", "f64", "serde_json::Value"];

/// Validates a record module before generation.
///
/// Returns the first problem found. Checks every record in the module:
///
/// - Record names are unique, valid identifiers, and PascalCase
/// - Field names are unique, valid identifiers, and snake_case
/// - Field types parse as Rust types
/// - Base64-encoded fields are byte-typed
/// - Default expressions parse as Rust expressions
/// - No field collides with a generated method name
/// - No required positional field follows a defaulted positional field
/// - Capability flags are coherent (`hash` requires `eq` and `frozen`)
/// - Hash-capable records carry no unhashable field types
///
/// ## Examples
///
/// ```
/// use stencil_define::{Capabilities, FieldSpec, RecordModule, RecordSpec};
/// use stencil_gen::validation::validate_module;
///
/// let module = RecordModule {
///     name: "GoogleAi".to_string(),
///     description: "Google generateContent wire protocol".to_string(),
///     docs_url: None,
///     module_path: None,
///     records: vec![RecordSpec {
///         name: "FileData".to_string(),
///         description: "A URI-referenced file".to_string(),
///         fields: vec![FieldSpec::required("file_uri", "String")],
///         caps: Capabilities::value(),
///     }],
/// };
///
/// assert!(validate_module(&module).is_ok());
/// ```
pub fn validate_module(module: &RecordModule) -> Result<(), GeneratorError> {
    let output_module = module.output_module();
    if syn::parse_str::<syn::Ident>(&output_module).is_err() {
        return Err(GeneratorError::ConfigError(format!(
            "module '{}' has invalid output module name '{}'",
            module.name, output_module
        )));
    }

    let mut seen_names: Vec<&str> = Vec::new();
    for record in &module.records {
        if seen_names.contains(&record.name.as_str()) {
            return Err(GeneratorError::DuplicateRecordName {
                module: module.name.clone(),
                name: record.name.clone(),
            });
        }
        seen_names.push(&record.name);

        validate_record(record)?;
    }

    Ok(())
}

/// Validates a single record spec.
pub fn validate_record(record: &RecordSpec) -> Result<(), GeneratorError> {
    validate_record_name(record)?;

    let mut seen_fields: Vec<&str> = Vec::new();
    for field in &record.fields {
        if seen_fields.contains(&field.name.as_str()) {
            return Err(GeneratorError::DuplicateFieldName {
                record: record.name.clone(),
                field: field.name.clone(),
            });
        }
        seen_fields.push(&field.name);

        validate_field_name(record, &field.name)?;

        if let Err(e) = syn::parse_str::<syn::Type>(&field.ty) {
            return Err(GeneratorError::InvalidFieldType {
                record: record.name.clone(),
                field: field.name.clone(),
                ty: field.ty.clone(),
                reason: e.to_string(),
            });
        }

        if field.base64 && field.ty != "Vec<u8>" && field.ty != "Option<Vec<u8>>" {
            return Err(GeneratorError::InvalidFieldType {
                record: record.name.clone(),
                field: field.name.clone(),
                ty: field.ty.clone(),
                reason: "base64 encoding requires Vec<u8> or Option<Vec<u8>>".to_string(),
            });
        }

        if let FieldDefault::Expr(expr) = &field.default {
            if let Err(e) = syn::parse_str::<syn::Expr>(expr) {
                return Err(GeneratorError::InvalidDefaultExpr {
                    record: record.name.clone(),
                    field: field.name.clone(),
                    expr: expr.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    validate_method_collisions(record)?;
    validate_field_ordering(record)?;
    validate_capabilities(record)?;

    Ok(())
}

fn validate_record_name(record: &RecordSpec) -> Result<(), GeneratorError> {
    if syn::parse_str::<syn::Ident>(&record.name).is_err() {
        return Err(GeneratorError::InvalidRecordName {
            name: record.name.clone(),
            reason: "not a valid Rust identifier".to_string(),
        });
    }
    let starts_upper = record.name.chars().next().is_some_and(char::is_uppercase);
    if !starts_upper || record.name.contains('_') {
        return Err(GeneratorError::InvalidRecordName {
            name: record.name.clone(),
            reason: "record names must be PascalCase".to_string(),
        });
    }
    Ok(())
}

fn validate_field_name(record: &RecordSpec, name: &str) -> Result<(), GeneratorError> {
    if syn::parse_str::<syn::Ident>(name).is_err() {
        return Err(GeneratorError::InvalidFieldName {
            record: record.name.clone(),
            field: name.to_string(),
            reason: "not a valid Rust identifier".to_string(),
        });
    }
    if name.chars().any(char::is_uppercase) {
        return Err(GeneratorError::InvalidFieldName {
            record: record.name.clone(),
            field: name.to_string(),
            reason: "field names must be snake_case".to_string(),
        });
    }
    Ok(())
}

/// Rejects fields whose names collide with the methods the synthesis
/// installs: the fixed set (`new`, `clone`, ...) plus the `with_{name}`
/// builder of every defaulted field.
fn validate_method_collisions(record: &RecordSpec) -> Result<(), GeneratorError> {
    for field in &record.fields {
        if RESERVED_METHOD_NAMES.contains(&field.name.as_str()) {
            return Err(GeneratorError::MethodCollision {
                record: record.name.clone(),
                field: field.name.clone(),
                method: field.name.clone(),
            });
        }
    }

    for defaulted in record.defaulted_fields() {
        let builder = format!("with_{}", defaulted.name);
        if record.fields.iter().any(|f| f.name == builder) {
            return Err(GeneratorError::MethodCollision {
                record: record.name.clone(),
                field: builder.clone(),
                method: builder,
            });
        }
    }

    Ok(())
}

/// Rejects required positional fields declared after defaulted positional
/// fields. Keyword-only fields are exempt: they bind after all positional
/// parameters regardless of declaration position.
fn validate_field_ordering(record: &RecordSpec) -> Result<(), GeneratorError> {
    let mut saw_defaulted_positional = false;
    for field in &record.fields {
        if field.binding != Binding::Positional {
            continue;
        }
        match &field.default {
            FieldDefault::Expr(_) => saw_defaulted_positional = true,
            FieldDefault::Required if saw_defaulted_positional => {
                return Err(GeneratorError::FieldOrdering {
                    record: record.name.clone(),
                    field: field.name.clone(),
                });
            }
            FieldDefault::Required => {}
        }
    }
    Ok(())
}

fn validate_capabilities(record: &RecordSpec) -> Result<(), GeneratorError> {
    if record.caps.hash && !record.caps.eq {
        return Err(GeneratorError::CapabilityConflict {
            record: record.name.clone(),
            required: "eq".to_string(),
        });
    }
    if record.caps.hash && !record.caps.frozen {
        return Err(GeneratorError::CapabilityConflict {
            record: record.name.clone(),
            required: "frozen".to_string(),
        });
    }

    if record.caps.hash {
        for field in &record.fields {
            if UNHASHABLE_TYPES.iter().any(|t| field.ty.contains(t)) {
                return Err(GeneratorError::UnhashableField {
                    record: record.name.clone(),
                    field: field.name.clone(),
                    ty: field.ty.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stencil_define::{Capabilities, FieldSpec};

    fn make_record(name: &str, fields: Vec<FieldSpec>) -> RecordSpec {
        RecordSpec {
            name: name.to_string(),
            description: format!("{} record", name),
            fields,
            caps: Capabilities::value(),
        }
    }

    fn make_module(records: Vec<RecordSpec>) -> RecordModule {
        RecordModule {
            name: "Sample".to_string(),
            description: "Sample records".to_string(),
            docs_url: None,
            module_path: None,
            records,
        }
    }

    #[test]
    fn valid_module_passes() {
        let module = make_module(vec![make_record(
            "FileData",
            vec![
                FieldSpec::required("file_uri", "String"),
                FieldSpec::optional("mime_type", "String"),
            ],
        )]);
        assert!(validate_module(&module).is_ok());
    }

    #[test]
    fn duplicate_record_names_rejected() {
        let module = make_module(vec![
            make_record("Usage", vec![]),
            make_record("Usage", vec![]),
        ]);
        assert!(matches!(
            validate_module(&module),
            Err(GeneratorError::DuplicateRecordName { name, .. }) if name == "Usage"
        ));
    }

    #[test]
    fn snake_case_record_name_rejected() {
        let module = make_module(vec![make_record("file_data", vec![])]);
        assert!(matches!(
            validate_module(&module),
            Err(GeneratorError::InvalidRecordName { .. })
        ));
    }

    #[test]
    fn keyword_record_name_rejected() {
        let module = make_module(vec![make_record("struct", vec![])]);
        assert!(matches!(
            validate_module(&module),
            Err(GeneratorError::InvalidRecordName { .. })
        ));
    }

    #[test]
    fn duplicate_field_names_rejected() {
        let record = make_record(
            "Usage",
            vec![
                FieldSpec::required("total_tokens", "i64"),
                FieldSpec::required("total_tokens", "i64"),
            ],
        );
        assert!(matches!(
            validate_record(&record),
            Err(GeneratorError::DuplicateFieldName { field, .. }) if field == "total_tokens"
        ));
    }

    #[test]
    fn camel_case_field_name_rejected() {
        let record = make_record("FileData", vec![FieldSpec::required("fileUri", "String")]);
        assert!(matches!(
            validate_record(&record),
            Err(GeneratorError::InvalidFieldName { .. })
        ));
    }

    #[test]
    fn unparseable_field_type_rejected() {
        let record = make_record("Blob", vec![FieldSpec::required("data", "Vec<")]);
        assert!(matches!(
            validate_record(&record),
            Err(GeneratorError::InvalidFieldType { .. })
        ));
    }

    #[test]
    fn base64_on_non_byte_field_rejected() {
        let record = make_record("Blob", vec![FieldSpec::required("data", "String").base64()]);
        assert!(matches!(
            validate_record(&record),
            Err(GeneratorError::InvalidFieldType { field, .. }) if field == "data"
        ));
    }

    #[test]
    fn base64_on_byte_fields_accepted() {
        let record = make_record(
            "Blob",
            vec![
                FieldSpec::required("data", "Vec<u8>").base64(),
                FieldSpec::optional("thought_signature", "Vec<u8>").base64(),
            ],
        );
        assert!(validate_record(&record).is_ok());
    }

    #[test]
    fn unparseable_default_expr_rejected() {
        let record = make_record(
            "Choice",
            vec![FieldSpec::defaulted("index", "i64", "0 +")],
        );
        assert!(matches!(
            validate_record(&record),
            Err(GeneratorError::InvalidDefaultExpr { .. })
        ));
    }

    #[test]
    fn field_named_after_generated_method_rejected() {
        let record = make_record("Widget", vec![FieldSpec::required("new", "String")]);
        assert!(matches!(
            validate_record(&record),
            Err(GeneratorError::MethodCollision { method, .. }) if method == "new"
        ));
    }

    #[test]
    fn field_colliding_with_builder_rejected() {
        let record = make_record(
            "Widget",
            vec![
                FieldSpec::optional("name", "String"),
                FieldSpec::required("with_name", "String"),
            ],
        );
        assert!(matches!(
            validate_record(&record),
            Err(GeneratorError::MethodCollision { method, .. }) if method == "with_name"
        ));
    }

    #[test]
    fn required_positional_after_defaulted_positional_rejected() {
        let record = make_record(
            "ChatCompletionRequest",
            vec![
                FieldSpec::optional("temperature", "f64"),
                FieldSpec::required("model", "String"),
            ],
        );
        assert!(matches!(
            validate_record(&record),
            Err(GeneratorError::FieldOrdering { field, .. }) if field == "model"
        ));
    }

    #[test]
    fn required_keyword_only_after_defaulted_is_fine() {
        let mut record = make_record(
            "SystemMessage",
            vec![
                FieldSpec::optional("name", "String"),
                FieldSpec::required("content", "String").keyword_only(),
            ],
        );
        record.caps = Capabilities::value().without_hash();
        assert!(validate_record(&record).is_ok());
    }

    #[test]
    fn hash_without_frozen_rejected() {
        let mut record = make_record("Delta", vec![FieldSpec::optional("content", "String")]);
        record.caps.frozen = false;
        assert!(matches!(
            validate_record(&record),
            Err(GeneratorError::CapabilityConflict { required, .. }) if required == "frozen"
        ));
    }

    #[test]
    fn hash_without_eq_rejected() {
        let mut record = make_record("Delta", vec![]);
        record.caps.eq = false;
        assert!(matches!(
            validate_record(&record),
            Err(GeneratorError::CapabilityConflict { required, .. }) if required == "eq"
        ));
    }

    #[test]
    fn float_field_on_hashable_record_rejected() {
        let record = make_record(
            "GenerationConfig",
            vec![FieldSpec::optional("temperature", "f64")],
        );
        assert!(matches!(
            validate_record(&record),
            Err(GeneratorError::UnhashableField { field, .. }) if field == "temperature"
        ));
    }

    #[test]
    fn float_field_fine_without_hash() {
        let mut record = make_record(
            "GenerationConfig",
            vec![FieldSpec::optional("temperature", "f64")],
        );
        record.caps = Capabilities::value().without_hash();
        assert!(validate_record(&record).is_ok());
    }

    #[test]
    fn json_value_field_on_hashable_record_rejected() {
        let record = make_record(
            "FunctionCall",
            vec![FieldSpec::optional("args", "serde_json::Value")],
        );
        assert!(matches!(
            validate_record(&record),
            Err(GeneratorError::UnhashableField { .. })
        ));
    }
}
