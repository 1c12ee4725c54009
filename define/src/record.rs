//! Core types for record specifications.
//!
//! This module provides the fundamental types for describing a record:
//!
//! - [`RecordSpec`] - The top-level record specification
//! - [`FieldSpec`] - Individual field definitions
//! - [`FieldDefault`] - Default-value policy for a field
//! - [`Binding`] - Constructor binding kind

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::capability::Capabilities;

/// How a field binds to the generated constructor.
///
/// Positional fields become leading `new()` parameters in declaration order.
/// Keyword-only fields come after all positional parameters, also in
/// declaration order (Rust has no keyword arguments, so the distinction
/// surfaces purely as parameter ordering).
///
/// ## Examples
///
/// Parse from string:
///
/// ```
/// use std::str::FromStr;
/// use stencil_define::Binding;
///
/// let binding = Binding::from_str("keyword_only").unwrap();
/// assert_eq!(binding, Binding::KeywordOnly);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Binding {
    /// Leading constructor parameter, order follows declaration order.
    Positional,
    /// Trailing constructor parameter, after all positional parameters.
    KeywordOnly,
}

/// Default-value policy for a field.
///
/// A required field becomes a `new()` parameter. A defaulted field is
/// initialized from its default expression inside `new()` and gets a
/// `with_{name}()` builder method.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldDefault {
    /// No default - the field must be supplied at construction.
    Required,
    /// A Rust expression producing the default value (e.g. `None`,
    /// `String::new()`, `Vec::new()`).
    Expr(String),
}

impl FieldDefault {
    /// Returns true if the field must be supplied at construction.
    pub fn is_required(&self) -> bool {
        matches!(self, FieldDefault::Required)
    }
}

/// A single field in a record specification.
///
/// Field declaration order is semantic: it fixes constructor parameter
/// order and the order fields are visited for equality, hashing, and
/// representation.
///
/// ## Examples
///
/// A required field with a wire name differing from the Rust name:
///
/// ```
/// use stencil_define::{Binding, FieldSpec};
///
/// let field = FieldSpec::required("mime_type", "String")
///     .wire("mimeType")
///     .keyword_only();
///
/// assert_eq!(field.name, "mime_type");
/// assert_eq!(field.wire_name.as_deref(), Some("mimeType"));
/// assert_eq!(field.binding, Binding::KeywordOnly);
/// ```
///
/// An optional field defaulting to `None`, hidden from `Debug` output:
///
/// ```
/// use stencil_define::FieldSpec;
///
/// let field = FieldSpec::optional("thought_signature", "Vec<u8>").no_repr();
/// assert_eq!(field.ty, "Option<Vec<u8>>");
/// assert!(!field.repr);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name (snake_case, unique within a record).
    pub name: String,
    /// Rust type expression (e.g. `String`, `Option<Vec<Part>>`).
    pub ty: String,
    /// Default policy: required, or a default expression.
    pub default: FieldDefault,
    /// Constructor binding kind.
    pub binding: Binding,
    /// Serialized name when it differs from the field name
    /// (e.g. lowerCamelCase wire protocols).
    pub wire_name: Option<String>,
    /// Whether the field appears in the generated `Debug` output.
    pub repr: bool,
    /// Whether the field serializes as a base64 string instead of its
    /// native serde form. Only meaningful for byte-carrying fields
    /// (`Vec<u8>` or `Option<Vec<u8>>`).
    pub base64: bool,
}

impl FieldSpec {
    /// Creates a required positional field.
    pub fn required(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            default: FieldDefault::Required,
            binding: Binding::Positional,
            wire_name: None,
            repr: true,
            base64: false,
        }
    }

    /// Creates a field with a default expression.
    ///
    /// ## Examples
    ///
    /// ```
    /// use stencil_define::{FieldDefault, FieldSpec};
    ///
    /// let field = FieldSpec::defaulted("object", "String", "String::new()");
    /// assert_eq!(field.default, FieldDefault::Expr("String::new()".to_string()));
    /// ```
    pub fn defaulted(
        name: impl Into<String>,
        ty: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            default: FieldDefault::Expr(default.into()),
            binding: Binding::Positional,
            wire_name: None,
            repr: true,
            base64: false,
        }
    }

    /// Creates an `Option<T>` field defaulting to `None`.
    ///
    /// The supplied type is the inner `T`; the field type becomes
    /// `Option<T>`.
    pub fn optional(name: impl Into<String>, inner_ty: impl Into<String>) -> Self {
        Self::defaulted(name, format!("Option<{}>", inner_ty.into()), "None")
    }

    /// Marks the field keyword-only.
    pub fn keyword_only(mut self) -> Self {
        self.binding = Binding::KeywordOnly;
        self
    }

    /// Sets the serialized wire name.
    pub fn wire(mut self, wire_name: impl Into<String>) -> Self {
        self.wire_name = Some(wire_name.into());
        self
    }

    /// Excludes the field from the generated `Debug` output.
    pub fn no_repr(mut self) -> Self {
        self.repr = false;
        self
    }

    /// Serializes the field as a base64 string.
    ///
    /// Byte fields would otherwise serialize as JSON integer arrays;
    /// wire protocols carry them base64-encoded.
    pub fn base64(mut self) -> Self {
        self.base64 = true;
        self
    }
}

/// A complete record specification.
///
/// This captures everything needed to synthesize a value type: the field
/// list (with declaration order) and the capability flags selecting which
/// method sets are generated.
///
/// ## Examples
///
/// ```
/// use stencil_define::{Capabilities, FieldSpec, RecordSpec};
///
/// let spec = RecordSpec {
///     name: "Blob".to_string(),
///     description: "Inline media bytes".to_string(),
///     fields: vec![
///         FieldSpec::required("mine_type", "String"),
///         FieldSpec::required("data", "Vec<u8>").no_repr(),
///     ],
///     caps: Capabilities::value(),
/// };
///
/// assert_eq!(spec.name, "Blob");
/// assert!(spec.caps.frozen);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSpec {
    /// PascalCase type name, unique within its module.
    pub name: String,
    /// Human-readable description (becomes the generated type's doc comment).
    pub description: String,
    /// Declared fields, in declaration order.
    pub fields: Vec<FieldSpec>,
    /// Capability flags for the generated type.
    pub caps: Capabilities,
}

impl RecordSpec {
    /// Marks every field keyword-only.
    ///
    /// Mirrors declaring a whole record keyword-only instead of flagging
    /// each field individually.
    pub fn keyword_only(mut self) -> Self {
        for field in &mut self.fields {
            field.binding = Binding::KeywordOnly;
        }
        self
    }

    /// Returns the required fields, in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.default.is_required())
    }

    /// Returns the defaulted fields, in declaration order.
    pub fn defaulted_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| !f.default.is_required())
    }

    /// Returns true if every field carries a default.
    ///
    /// Only such records get a generated `Default` implementation.
    pub fn all_fields_defaulted(&self) -> bool {
        self.fields.iter().all(|f| !f.default.is_required())
    }
}
