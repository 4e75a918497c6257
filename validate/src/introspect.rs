//! Field introspection - walk a record instance against its schema.

use vet_core::{Fields, ValidateError, ValidateResult, Value};
use vet_schema::{FieldDef, RecordSchema};

/// One field of a record, paired with its definition for evaluation.
#[derive(Debug, Clone, Copy)]
pub struct FieldSlot<'a> {
    /// The field's definition, including its constraint declarations.
    pub def: &'a FieldDef,
    /// The field's current value in this record instance.
    pub value: &'a Value,
}

/// Lazy walk over a record's fields in the schema's declared order.
///
/// Construction checks the one structural precondition: the input must be a
/// record value. Each step then pairs the next declared field with its
/// runtime value, reporting shape drift (missing field, wrong kind) as a
/// configuration error. Restart by constructing a new walk over the same
/// inputs.
#[derive(Debug)]
pub struct FieldWalk<'a> {
    schema: &'a RecordSchema,
    fields: &'a Fields,
    index: usize,
}

impl<'a> FieldWalk<'a> {
    /// Begin a walk over `value` as an instance of `schema`.
    pub fn over(schema: &'a RecordSchema, value: &'a Value) -> ValidateResult<Self> {
        match value {
            Value::Record(fields) => Ok(Self {
                schema,
                fields,
                index: 0,
            }),
            other => Err(ValidateError::not_a_record(other.type_name())),
        }
    }
}

impl<'a> Iterator for FieldWalk<'a> {
    type Item = ValidateResult<FieldSlot<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let def = self.schema.fields().get(self.index)?;
        self.index += 1;

        let Some(value) = self.fields.get(&def.name) else {
            return Some(Err(ValidateError::missing_field(&def.name)));
        };
        if !def.kind.matches(value) {
            return Some(Err(ValidateError::kind_mismatch(
                &def.name,
                def.kind.name(),
                value.type_name(),
            )));
        }

        Some(Ok(FieldSlot { def, value }))
    }
}
