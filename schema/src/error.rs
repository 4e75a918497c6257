//! Schema construction error types.

use thiserror::Error;

/// Result type for schema construction.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur while building a record schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Duplicate field name: {0}")]
    DuplicateField(String),

    #[error("Constraint {key} does not apply to {kind} field {field}")]
    InapplicableConstraint {
        field: String,
        key: String,
        kind: String,
    },
}

impl SchemaError {
    pub fn duplicate_field(name: impl Into<String>) -> Self {
        Self::DuplicateField(name.into())
    }

    pub fn inapplicable_constraint(
        field: impl Into<String>,
        key: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self::InapplicableConstraint {
            field: field.into(),
            key: key.into(),
            kind: kind.into(),
        }
    }
}
