//! Semantic field kinds.
//!
//! The constraint vocabulary is kind-gated: text rules never run against
//! integer fields and vice versa. The kind set is closed in this core.

use crate::Value;
use std::fmt;

/// The semantic kind of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// UTF-8 text field.
    Text,
    /// 64-bit signed integer field.
    Int,
}

impl FieldKind {
    /// Returns the kind's display name.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text => "Text",
            FieldKind::Int => "Int",
        }
    }

    /// Check whether a runtime value has this kind.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldKind::Text => value.is_text(),
            FieldKind::Int => value.is_int(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
