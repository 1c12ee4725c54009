//! Stable content fingerprinting of record specifications.
//!
//! A fingerprint covers a record's *shape* - its field list and capability
//! flags - but not its name or description. Records with identical shapes
//! (e.g. `SystemMessage` and `UserMessage` in an OpenAI-style protocol)
//! therefore share a fingerprint, which is what lets the synthesis
//! registry deduplicate them.
//!
//! The hash is xxh64 over a canonical textual rendering of the shape, so
//! it is stable across processes and across reorderings of nothing: field
//! order is part of the shape.

use xxhash_rust::xxh64::xxh64;

use crate::record::{FieldDefault, RecordSpec};

/// Seed for the xxh64 fingerprint. Changing this invalidates every
/// recorded fingerprint, so it is fixed.
const FINGERPRINT_SEED: u64 = 0;

/// Renders the canonical textual form of a record's shape.
///
/// The rendering is deterministic and covers everything that affects the
/// synthesized methods: each field's name, type, default policy, binding,
/// wire name, repr flag, and base64 flag, in declaration order, plus the
/// capability flags. The record name and description are deliberately
/// excluded.
pub fn canonical_shape(spec: &RecordSpec) -> String {
    let mut out = String::from("shape(fields=[");

    for (i, field) in spec.fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let default = match &field.default {
            FieldDefault::Required => "required".to_string(),
            FieldDefault::Expr(expr) => format!("expr({expr})"),
        };
        out.push_str(&format!(
            "({name}:{ty};default={default};binding={binding};wire={wire};repr={repr};b64={b64})",
            name = field.name,
            ty = field.ty,
            binding = field.binding,
            wire = field.wire_name.as_deref().unwrap_or("-"),
            repr = field.repr,
            b64 = field.base64,
        ));
    }

    out.push_str(&format!(
        "],caps=(clone={},eq={},hash={},frozen={},repr={}))",
        spec.caps.clone, spec.caps.eq, spec.caps.hash, spec.caps.frozen, spec.caps.repr,
    ));

    out
}

impl RecordSpec {
    /// Returns the stable shape fingerprint as fixed-width hex.
    ///
    /// Equal shapes produce equal fingerprints; the registry keys its
    /// dedup table on this value.
    ///
    /// ## Examples
    ///
    /// ```
    /// use stencil_define::{Capabilities, FieldSpec, RecordSpec};
    ///
    /// let spec = RecordSpec {
    ///     name: "Interval".to_string(),
    ///     description: "A time interval".to_string(),
    ///     fields: vec![FieldSpec::required("start_time", "String")],
    ///     caps: Capabilities::value(),
    /// };
    ///
    /// let fp = spec.fingerprint();
    /// assert_eq!(fp.len(), 16);
    /// assert_eq!(fp, spec.fingerprint()); // stable across calls
    /// ```
    pub fn fingerprint(&self) -> String {
        let canonical = canonical_shape(self);
        format!("{:016x}", xxh64(canonical.as_bytes(), FINGERPRINT_SEED))
    }
}
