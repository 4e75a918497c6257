//! The validation orchestrator.

use vet_core::{ValidateResult, Value};
use vet_schema::{ConstraintKey, RecordSchema};

use crate::introspect::{FieldSlot, FieldWalk};
use crate::rules;
use crate::violation::Violation;

/// Fixed evaluation priority across constraint keys. For each field, only
/// the keys applicable to its kind are attempted; the rest are skipped.
pub const EVAL_ORDER: [ConstraintKey; 6] = [
    ConstraintKey::Required,
    ConstraintKey::MinLen,
    ConstraintKey::Min,
    ConstraintKey::MaxLen,
    ConstraintKey::Max,
    ConstraintKey::Email,
];

/// Result of a completed validation walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every field passed every applicable rule.
    Valid,
    /// The walk stopped at this first violation.
    Invalid(Violation),
}

impl Outcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid)
    }

    /// The violation, if the record was invalid.
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Outcome::Valid => None,
            Outcome::Invalid(v) => Some(v),
        }
    }
}

/// Validate a record instance against its type's constraint declarations.
///
/// Walks the fields in declared order and evaluates each field's declared
/// constraints in [`EVAL_ORDER`]. The first violation anywhere in the walk
/// terminates it with `Ok(Outcome::Invalid(_))`; the first configuration
/// error (non-record input, shape drift, malformed parameter) terminates it
/// with `Err(_)`. Pure and read-only: validating the same record twice
/// yields the same result.
pub fn validate(schema: &RecordSchema, value: &Value) -> ValidateResult<Outcome> {
    for slot in FieldWalk::over(schema, value)? {
        if let Some(violation) = check_field(&slot?)? {
            return Ok(Outcome::Invalid(violation));
        }
    }
    Ok(Outcome::Valid)
}

/// Run every applicable declared constraint for one field, in priority
/// order, returning the first violation.
fn check_field(slot: &FieldSlot<'_>) -> ValidateResult<Option<Violation>> {
    let def = slot.def;
    for key in EVAL_ORDER {
        if !key.applies_to(def.kind) {
            continue;
        }
        let Some(literal) = def.param(key) else {
            continue;
        };
        if let Some(violation) = rules::evaluate(key, &def.name, slot.value, literal)? {
            return Ok(Some(violation));
        }
    }
    Ok(None)
}
