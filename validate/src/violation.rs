//! Constraint violation types.

use std::fmt;

/// Why a field failed its constraint check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// Required field was empty (text) or zero (integer).
    Required,
    /// Text shorter than the declared minimum length.
    TooShort,
    /// Text longer than the declared maximum length.
    TooLong,
    /// Integer below the declared minimum.
    TooSmall,
    /// Integer above the declared maximum.
    TooLarge,
    /// Text did not match the declared format pattern.
    InvalidFormat,
}

impl Reason {
    /// Stable snake_case tag for this reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::Required => "required",
            Reason::TooShort => "too_short",
            Reason::TooLong => "too_long",
            Reason::TooSmall => "too_small",
            Reason::TooLarge => "too_large",
            Reason::InvalidFormat => "invalid_format",
        }
    }

    /// Human-readable predicate, completed by the field name.
    fn phrase(&self) -> &'static str {
        match self {
            Reason::Required => "is required",
            Reason::TooShort => "is too short",
            Reason::TooLong => "is too long",
            Reason::TooSmall => "is too small",
            Reason::TooLarge => "is too large",
            Reason::InvalidFormat => "is not a valid email",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single constraint violation: the offending field plus the reason.
/// A validation call produces at most one of these (first-failure
/// semantics); it is the call's result, never a fatal condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Name of the field that failed.
    pub field: String,
    /// Why it failed.
    pub reason: Reason,
}

impl Violation {
    /// Create a new violation.
    pub fn new(field: impl Into<String>, reason: Reason) -> Self {
        Self {
            field: field.into(),
            reason,
        }
    }

    /// Human-readable message, e.g. "Name is required".
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.reason.phrase())
    }
}
