//! Error types for the stencil generator.

use thiserror::Error;

/// Errors that can occur during record synthesis.
///
/// Every variant signals a programmer-error class failure: a bad
/// specification, a collision the synthesis refuses to paper over, or
/// emitted code that does not parse. None of these are recoverable -
/// they surface at generation time and abort the run.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A record name is not a usable Rust type name.
    #[error("Invalid record name '{name}': {reason}")]
    InvalidRecordName {
        /// The offending record name.
        name: String,
        /// Explanation of why the name is invalid.
        reason: String,
    },

    /// Two records in one module share a name.
    #[error("Duplicate record name '{name}' in module '{module}'")]
    DuplicateRecordName {
        /// The module containing the duplicates.
        module: String,
        /// The duplicated record name.
        name: String,
    },

    /// A field name is not a usable Rust field name.
    #[error("Record '{record}': invalid field name '{field}': {reason}")]
    InvalidFieldName {
        /// The record containing the field.
        record: String,
        /// The offending field name.
        field: String,
        /// Explanation of why the name is invalid.
        reason: String,
    },

    /// Two fields in one record share a name.
    #[error("Record '{record}': duplicate field name '{field}'")]
    DuplicateFieldName {
        /// The record containing the duplicates.
        record: String,
        /// The duplicated field name.
        field: String,
    },

    /// A field's type string does not parse as a Rust type.
    #[error("Record '{record}': field '{field}' has unparseable type '{ty}': {reason}")]
    InvalidFieldType {
        /// The record containing the field.
        record: String,
        /// The field with the bad type.
        field: String,
        /// The type string that failed to parse.
        ty: String,
        /// The parse error.
        reason: String,
    },

    /// A default expression does not parse as a Rust expression.
    #[error("Record '{record}': field '{field}' has unparseable default '{expr}': {reason}")]
    InvalidDefaultExpr {
        /// The record containing the field.
        record: String,
        /// The field with the bad default.
        field: String,
        /// The expression string that failed to parse.
        expr: String,
        /// The parse error.
        reason: String,
    },

    /// A field name collides with a method the synthesis is about to
    /// install on the type.
    ///
    /// Installing the method anyway would silently shadow the field (or
    /// vice versa), so this is fatal - the specification and the
    /// synthesized method set disagree about the name.
    #[error("Record '{record}': field '{field}' collides with generated method '{method}'")]
    MethodCollision {
        /// The record containing the field.
        record: String,
        /// The colliding field name.
        field: String,
        /// The generated method the field collides with.
        method: String,
    },

    /// A required positional field was declared after a defaulted
    /// positional field, making constructor parameter order ambiguous.
    #[error(
        "Record '{record}': required positional field '{field}' follows a defaulted positional field"
    )]
    FieldOrdering {
        /// The record containing the field.
        record: String,
        /// The misplaced required field.
        field: String,
    },

    /// Capability flags that cannot be honored together.
    #[error("Record '{record}': capability 'hash' requires '{required}'")]
    CapabilityConflict {
        /// The record with the incoherent flags.
        record: String,
        /// The missing prerequisite capability.
        required: String,
    },

    /// A hash-capable record declares a field of a type that cannot hash.
    #[error("Record '{record}': field '{field}' of type '{ty}' cannot be hashed")]
    UnhashableField {
        /// The record with the hash capability.
        record: String,
        /// The offending field.
        field: String,
        /// The unhashable type.
        ty: String,
    },

    /// Two different shapes would synthesize the same type name.
    #[error(
        "Type name collision: records named '{name}' with different shapes (fingerprints {first} and {second})"
    )]
    ShapeCollision {
        /// The colliding record name.
        name: String,
        /// Fingerprint of the first registered shape.
        first: String,
        /// Fingerprint of the conflicting shape.
        second: String,
    },

    /// Failed to generate code.
    #[error("Code generation failed: {0}")]
    CodeGenError(String),

    /// Failed to write output file.
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        /// The path that could not be written.
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}
