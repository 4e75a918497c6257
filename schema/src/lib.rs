//! VET Schema
//!
//! Declarative, type-level validation metadata.
//!
//! Responsibilities:
//! - Define the closed constraint vocabulary (ConstraintKey)
//! - Describe record types as ordered field descriptor tables (RecordSchema)
//! - Attach stringly-typed constraint declarations to fields (FieldDef)
//! - Catch definition-time mistakes before any validation runs

mod error;
mod record;
mod types;

pub use error::{SchemaError, SchemaResult};
pub use record::{RecordSchema, SchemaBuilder};
pub use types::{ConstraintKey, FieldDef};
