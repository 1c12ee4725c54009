//! Capability flags for generated record types.
//!
//! A capability flag selects whether a record supports a structural
//! behavior: cloning, equality, hashing, frozen (immutable) storage,
//! and debug representation. The generator synthesizes one method set
//! per enabled capability.

use serde::{Deserialize, Serialize};

/// Which method sets the generated type carries.
///
/// Capability coherence is enforced by the generator's validation pass:
/// `hash` requires both `eq` (hashes must agree with equality) and
/// `frozen` (hashes of mutable values go stale).
///
/// ## Examples
///
/// The common case - a fully capable immutable value type:
///
/// ```
/// use stencil_define::Capabilities;
///
/// let caps = Capabilities::value();
/// assert!(caps.clone && caps.eq && caps.hash && caps.frozen && caps.repr);
/// ```
///
/// An unhashable value type (e.g. one carrying floats):
///
/// ```
/// use stencil_define::Capabilities;
///
/// let caps = Capabilities::value().without_hash();
/// assert!(caps.eq && caps.frozen);
/// assert!(!caps.hash);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Capabilities {
    /// Generate a field-wise `Clone` implementation.
    pub clone: bool,
    /// Generate structural `PartialEq`/`Eq` over all declared fields.
    pub eq: bool,
    /// Generate `Hash` over the same field tuple equality uses.
    pub hash: bool,
    /// Private fields with getters; no mutation after construction.
    pub frozen: bool,
    /// Generate `Debug` listing the repr-flagged fields.
    pub repr: bool,
}

impl Capabilities {
    /// All capabilities enabled - an immutable, comparable, hashable,
    /// printable value type.
    pub fn value() -> Self {
        Self {
            clone: true,
            eq: true,
            hash: true,
            frozen: true,
            repr: true,
        }
    }

    /// Disables hashing, keeping the rest.
    ///
    /// Used for records whose fields cannot hash (floats, JSON values).
    pub fn without_hash(mut self) -> Self {
        self.hash = false;
        self
    }

    /// Disables frozen storage: fields are generated `pub` and the type
    /// is freely mutable. Implies no hashing.
    pub fn without_frozen(mut self) -> Self {
        self.frozen = false;
        self.hash = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_enables_everything() {
        let caps = Capabilities::value();
        assert!(caps.clone);
        assert!(caps.eq);
        assert!(caps.hash);
        assert!(caps.frozen);
        assert!(caps.repr);
    }

    #[test]
    fn default_enables_nothing() {
        let caps = Capabilities::default();
        assert!(!caps.clone && !caps.eq && !caps.hash && !caps.frozen && !caps.repr);
    }

    #[test]
    fn without_frozen_also_drops_hash() {
        let caps = Capabilities::value().without_frozen();
        assert!(!caps.frozen);
        assert!(!caps.hash);
        assert!(caps.eq);
    }

    #[test]
    fn capabilities_serde_roundtrip() {
        let caps = Capabilities::value().without_hash();
        let json = serde_json::to_string(&caps).unwrap();
        let back: Capabilities = serde_json::from_str(&json).unwrap();
        assert_eq!(back, caps);
    }
}
