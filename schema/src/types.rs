//! Field and constraint definition types.

use std::fmt;
use vet_core::FieldKind;

/// The closed catalog of recognized constraint keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKey {
    /// Text fails on empty string; Int fails on zero.
    Required,
    /// Minimum text length in bytes (inclusive pass at the boundary).
    MinLen,
    /// Maximum text length in bytes (inclusive pass at the boundary).
    MaxLen,
    /// Minimum integer value (inclusive pass at the boundary).
    Min,
    /// Maximum integer value (inclusive pass at the boundary).
    Max,
    /// Text must match the fixed email pattern.
    Email,
}

impl ConstraintKey {
    /// The literal spelling used in declarations.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstraintKey::Required => "required",
            ConstraintKey::MinLen => "minLen",
            ConstraintKey::MaxLen => "maxLen",
            ConstraintKey::Min => "min",
            ConstraintKey::Max => "max",
            ConstraintKey::Email => "email",
        }
    }

    /// Parse a key from its literal spelling.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "required" => Some(ConstraintKey::Required),
            "minLen" => Some(ConstraintKey::MinLen),
            "maxLen" => Some(ConstraintKey::MaxLen),
            "min" => Some(ConstraintKey::Min),
            "max" => Some(ConstraintKey::Max),
            "email" => Some(ConstraintKey::Email),
            _ => None,
        }
    }

    /// Check whether this key's rule can run against a field of `kind`.
    pub fn applies_to(&self, kind: FieldKind) -> bool {
        match self {
            ConstraintKey::Required => true,
            ConstraintKey::MinLen | ConstraintKey::MaxLen | ConstraintKey::Email => {
                kind == FieldKind::Text
            }
            ConstraintKey::Min | ConstraintKey::Max => kind == FieldKind::Int,
        }
    }

    /// Check whether a declared literal parses as the parameter type this
    /// key's evaluator needs.
    pub fn literal_parses(&self, literal: &str) -> bool {
        match self {
            ConstraintKey::Required | ConstraintKey::Email => literal.parse::<bool>().is_ok(),
            ConstraintKey::MinLen | ConstraintKey::MaxLen => literal.parse::<usize>().is_ok(),
            ConstraintKey::Min | ConstraintKey::Max => literal.parse::<i64>().is_ok(),
        }
    }
}

impl fmt::Display for ConstraintKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field definition within a record schema.
///
/// Constraint parameters are declared as string literals and parsed by the
/// engine at evaluation time; the declaration itself is an immutable
/// key-to-literal mapping shared by every instance of the record type.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Field name, unique within the record.
    pub name: String,
    /// Semantic kind of the field.
    pub kind: FieldKind,
    /// Declared constraints, keyed by constraint key.
    constraints: Vec<(ConstraintKey, String)>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            constraints: Vec::new(),
        }
    }

    /// Shorthand for a text field.
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    /// Shorthand for an integer field.
    pub fn int(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Int)
    }

    /// Declare a constraint with a literal parameter. Re-declaring a key
    /// replaces its previous literal.
    pub fn constrain(mut self, key: ConstraintKey, literal: impl Into<String>) -> Self {
        let literal = literal.into();
        if let Some(entry) = self.constraints.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = literal;
        } else {
            self.constraints.push((key, literal));
        }
        self
    }

    pub fn required(self) -> Self {
        self.constrain(ConstraintKey::Required, "true")
    }

    pub fn min_len(self, len: usize) -> Self {
        self.constrain(ConstraintKey::MinLen, len.to_string())
    }

    pub fn max_len(self, len: usize) -> Self {
        self.constrain(ConstraintKey::MaxLen, len.to_string())
    }

    pub fn min(self, value: i64) -> Self {
        self.constrain(ConstraintKey::Min, value.to_string())
    }

    pub fn max(self, value: i64) -> Self {
        self.constrain(ConstraintKey::Max, value.to_string())
    }

    pub fn email(self) -> Self {
        self.constrain(ConstraintKey::Email, "true")
    }

    /// Get the declared literal for a key, if any. Absent keys are simply
    /// not evaluated.
    pub fn param(&self, key: ConstraintKey) -> Option<&str> {
        self.constraints
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, literal)| literal.as_str())
    }

    /// Iterate over all declared constraints.
    pub fn constraints(&self) -> impl Iterator<Item = (ConstraintKey, &str)> {
        self.constraints.iter().map(|(k, v)| (*k, v.as_str()))
    }
}
