//! Synthesis planning for record specifications.
//!
//! Planning separates *deciding* what methods a record gets from
//! *emitting* them. A [`RecordPlan`] is the fully resolved decision: one
//! sub-plan per enabled capability, each carrying exactly the field list
//! that capability visits. The emitters in the sibling modules consume
//! plans and never look at capability flags themselves.
//!
//! Because a plan is derived purely from a record's shape, two records
//! with equal fingerprints produce equal plans. The registry leans on
//! that to share one plan across same-shaped records.

use stencil_define::{Binding, FieldDefault, FieldSpec, RecordSpec};

/// Constructor plan: how `new()`, builders, and `Default` are laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitPlan {
    /// Required positional fields, declaration order. These are the
    /// leading `new()` parameters.
    pub positional: Vec<FieldSpec>,
    /// Required keyword-only fields, declaration order. These trail the
    /// positional parameters.
    pub keyword_only: Vec<FieldSpec>,
    /// Defaulted fields, declaration order. Each is initialized from its
    /// default expression and gets a `with_{name}()` builder.
    pub defaulted: Vec<FieldSpec>,
    /// Whether to emit a `Default` implementation (every field defaulted).
    pub emit_default: bool,
}

impl InitPlan {
    /// Whether `Default` can be derived instead of written out: every
    /// default expression is already the type's own default value.
    pub fn derivable_default(&self) -> bool {
        self.emit_default
            && self.defaulted.iter().all(|f| {
                matches!(
                    f.default,
                    FieldDefault::Expr(ref expr)
                        if matches!(expr.as_str(), "None" | "false" | "0" | "String::new()" | "Vec::new()")
                )
            })
    }
}

/// Field names visited by the clone implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyPlan {
    pub fields: Vec<String>,
}

/// Field names visited by equality, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqPlan {
    pub fields: Vec<String>,
}

/// Field names fed to the hasher.
///
/// Always the same list as the eq plan: a hash that disagrees with
/// equality breaks every hash container that stores the type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashPlan {
    pub fields: Vec<String>,
}

/// Field names shown in the debug representation (repr-flagged only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReprPlan {
    pub fields: Vec<String>,
}

/// The complete synthesis plan for one record shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPlan {
    /// Constructor layout. Every record has one.
    pub init: InitPlan,
    /// Clone synthesis, if the `clone` capability is enabled.
    pub copy: Option<CopyPlan>,
    /// Equality synthesis, if the `eq` capability is enabled.
    pub eq: Option<EqPlan>,
    /// Hash synthesis, if the `hash` capability is enabled.
    pub hash: Option<HashPlan>,
    /// Debug synthesis, if the `repr` capability is enabled.
    pub repr: Option<ReprPlan>,
    /// Whether fields are private with getters.
    pub frozen: bool,
}

/// Resolves a record spec into its synthesis plan.
///
/// ## Examples
///
/// ```
/// use stencil_define::{Capabilities, FieldSpec, RecordSpec};
/// use stencil_gen::codegen::plan_record;
///
/// let spec = RecordSpec {
///     name: "FileData".to_string(),
///     description: "A URI-referenced file".to_string(),
///     fields: vec![
///         FieldSpec::required("file_uri", "String"),
///         FieldSpec::optional("mime_type", "String"),
///     ],
///     caps: Capabilities::value(),
/// };
///
/// let plan = plan_record(&spec);
/// assert_eq!(plan.init.positional.len(), 1);
/// assert_eq!(plan.init.defaulted.len(), 1);
/// assert!(plan.hash.is_some());
/// assert!(plan.frozen);
/// ```
pub fn plan_record(spec: &RecordSpec) -> RecordPlan {
    let positional: Vec<FieldSpec> = spec
        .fields
        .iter()
        .filter(|f| f.default.is_required() && f.binding == Binding::Positional)
        .cloned()
        .collect();
    let keyword_only: Vec<FieldSpec> = spec
        .fields
        .iter()
        .filter(|f| f.default.is_required() && f.binding == Binding::KeywordOnly)
        .cloned()
        .collect();
    let defaulted: Vec<FieldSpec> = spec.defaulted_fields().cloned().collect();

    let all_fields: Vec<String> = spec.fields.iter().map(|f| f.name.clone()).collect();

    RecordPlan {
        init: InitPlan {
            positional,
            keyword_only,
            emit_default: spec.all_fields_defaulted(),
            defaulted,
        },
        copy: spec.caps.clone.then(|| CopyPlan {
            fields: all_fields.clone(),
        }),
        eq: spec.caps.eq.then(|| EqPlan {
            fields: all_fields.clone(),
        }),
        hash: spec.caps.hash.then(|| HashPlan {
            fields: all_fields.clone(),
        }),
        repr: spec.caps.repr.then(|| ReprPlan {
            fields: spec
                .fields
                .iter()
                .filter(|f| f.repr)
                .map(|f| f.name.clone())
                .collect(),
        }),
        frozen: spec.caps.frozen,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stencil_define::Capabilities;

    fn make_spec(fields: Vec<FieldSpec>, caps: Capabilities) -> RecordSpec {
        RecordSpec {
            name: "Sample".to_string(),
            description: "A sample record".to_string(),
            fields,
            caps,
        }
    }

    #[test]
    fn plan_partitions_constructor_params() {
        let spec = make_spec(
            vec![
                FieldSpec::required("content", "String"),
                FieldSpec::required("role", "String").keyword_only(),
                FieldSpec::optional("name", "String"),
            ],
            Capabilities::value(),
        );
        let plan = plan_record(&spec);

        let pos: Vec<_> = plan.init.positional.iter().map(|f| f.name.as_str()).collect();
        let kw: Vec<_> = plan.init.keyword_only.iter().map(|f| f.name.as_str()).collect();
        let def: Vec<_> = plan.init.defaulted.iter().map(|f| f.name.as_str()).collect();

        assert_eq!(pos, vec!["content"]);
        assert_eq!(kw, vec!["role"]);
        assert_eq!(def, vec!["name"]);
        assert!(!plan.init.emit_default);
    }

    #[test]
    fn plan_emits_default_when_all_fields_defaulted() {
        let spec = make_spec(
            vec![
                FieldSpec::optional("role", "String"),
                FieldSpec::optional("content", "String"),
            ],
            Capabilities::value(),
        );
        assert!(plan_record(&spec).init.emit_default);
    }

    #[test]
    fn default_is_derivable_only_for_trivial_exprs() {
        let trivial = make_spec(
            vec![
                FieldSpec::optional("content", "String"),
                FieldSpec::defaulted("stream", "bool", "false"),
            ],
            Capabilities::value(),
        );
        assert!(plan_record(&trivial).init.derivable_default());

        let written = make_spec(
            vec![FieldSpec::defaulted("role", "String", "String::from(\"user\")")],
            Capabilities::value(),
        );
        let plan = plan_record(&written);
        assert!(plan.init.emit_default);
        assert!(!plan.init.derivable_default());

        let partial = make_spec(
            vec![FieldSpec::required("model", "String")],
            Capabilities::value(),
        );
        assert!(!plan_record(&partial).init.derivable_default());
    }

    #[test]
    fn hash_plan_matches_eq_plan() {
        let spec = make_spec(
            vec![
                FieldSpec::required("id", "String"),
                FieldSpec::optional("usage", "Usage"),
            ],
            Capabilities::value(),
        );
        let plan = plan_record(&spec);
        assert_eq!(
            plan.hash.as_ref().map(|h| &h.fields),
            plan.eq.as_ref().map(|e| &e.fields),
        );
    }

    #[test]
    fn disabled_capabilities_produce_no_plans() {
        let spec = make_spec(
            vec![FieldSpec::required("temperature", "f64")],
            Capabilities::value().without_hash(),
        );
        let plan = plan_record(&spec);
        assert!(plan.hash.is_none());
        assert!(plan.eq.is_some());
        assert!(plan.copy.is_some());
    }

    #[test]
    fn repr_plan_skips_unflagged_fields() {
        let spec = make_spec(
            vec![
                FieldSpec::required("mine_type", "String"),
                FieldSpec::required("data", "Vec<u8>").no_repr(),
            ],
            Capabilities::value(),
        );
        let plan = plan_record(&spec);
        assert_eq!(
            plan.repr.as_ref().map(|r| r.fields.clone()),
            Some(vec!["mine_type".to_string()]),
        );
    }

    #[test]
    fn equal_shapes_yield_equal_plans() {
        let a = make_spec(
            vec![FieldSpec::required("content", "String")],
            Capabilities::value(),
        );
        let mut b = a.clone();
        b.name = "UserMessage".to_string();

        assert_eq!(plan_record(&a), plan_record(&b));
    }
}
