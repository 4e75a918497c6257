//! Configuration error types.
//!
//! These cover mistakes in a record type's declarations or in the shape of
//! the input handed to the engine. They are distinct from validation
//! violations: a violation is an expected, data-driven outcome, while these
//! indicate a bug the caller must fix before re-invoking.

use thiserror::Error;

/// Result type for validation calls.
pub type ValidateResult<T> = Result<T, ValidateError>;

/// Configuration errors that abort a validation call.
#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("Cannot validate {type_name}: not a record")]
    NotARecord { type_name: String },

    #[error("Malformed {key} constraint on field {field}: {literal:?} does not parse")]
    MalformedConstraint {
        field: String,
        key: String,
        literal: String,
    },

    #[error("Record is missing declared field: {field}")]
    MissingField { field: String },

    #[error("Field {field} is declared {expected} but holds {actual}")]
    KindMismatch {
        field: String,
        expected: String,
        actual: String,
    },
}

impl ValidateError {
    pub fn not_a_record(type_name: impl Into<String>) -> Self {
        Self::NotARecord {
            type_name: type_name.into(),
        }
    }

    pub fn malformed_constraint(
        field: impl Into<String>,
        key: impl Into<String>,
        literal: impl Into<String>,
    ) -> Self {
        Self::MalformedConstraint {
            field: field.into(),
            key: key.into(),
            literal: literal.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn kind_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::KindMismatch {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}
