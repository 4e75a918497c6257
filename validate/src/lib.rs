//! VET Validate
//!
//! Evaluate a record instance against its type's constraint declarations.
//!
//! Responsibilities:
//! - Walk a record's fields in declared order (introspect)
//! - Run the per-key rule evaluators, kind-gated and priority-ordered (rules)
//! - Stop at the first violation and report the offending field (validator)
//! - Keep data-driven violations apart from configuration errors
//!
//! # Module Structure
//!
//! - `introspect` - FieldWalk over a schema/record pair
//! - `rules` - One pure evaluator per constraint key
//! - `validator` - The orchestrating walk and its Outcome
//! - `violation` - Violation and Reason types

mod introspect;
mod rules;
mod validator;
mod violation;

pub use introspect::{FieldSlot, FieldWalk};
pub use validator::{validate, Outcome, EVAL_ORDER};
pub use violation::{Reason, Violation};

// Re-export the shared configuration-error taxonomy for callers.
pub use vet_core::{ValidateError, ValidateResult};
