//! RecordSchema - immutable field descriptor table for a record type.

use crate::{FieldDef, SchemaError, SchemaResult};
use vet_core::{ValidateError, ValidateResult};

/// The descriptor table for one record type: its name and its fields in
/// declared order. Immutable after construction and safe to share across
/// threads; the engine walks this table instead of live reflection.
#[derive(Debug, Clone)]
pub struct RecordSchema {
    name: String,
    fields: Vec<FieldDef>,
}

impl RecordSchema {
    /// Start building a schema for the named record type.
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// The record type's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields in declared order.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Get a field definition by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check if this schema declares a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.get_field(name).is_some()
    }

    /// Field names in declared order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Eagerly verify that every declared literal parses as the parameter
    /// type its evaluator needs. The engine parses lazily at evaluation
    /// time; callers that prefer to surface `MalformedConstraint` at
    /// definition time run this sweep once after building.
    pub fn check_constraints(&self) -> ValidateResult<()> {
        for def in &self.fields {
            for (key, literal) in def.constraints() {
                if !key.literal_parses(literal) {
                    return Err(ValidateError::malformed_constraint(
                        &def.name,
                        key.as_str(),
                        literal,
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Builder for constructing an immutable RecordSchema.
#[derive(Debug)]
pub struct SchemaBuilder {
    name: String,
    fields: Vec<FieldDef>,
}

impl SchemaBuilder {
    /// Add a field definition. Declaration order is preserved.
    pub fn field(mut self, def: FieldDef) -> Self {
        self.fields.push(def);
        self
    }

    /// Finalize the schema, rejecting duplicate field names and constraint
    /// keys that cannot apply to the field's kind.
    pub fn build(self) -> SchemaResult<RecordSchema> {
        let mut seen = std::collections::HashSet::new();
        for def in &self.fields {
            if !seen.insert(def.name.clone()) {
                return Err(SchemaError::duplicate_field(&def.name));
            }
            for (key, _) in def.constraints() {
                if !key.applies_to(def.kind) {
                    return Err(SchemaError::inapplicable_constraint(
                        &def.name,
                        key.as_str(),
                        def.kind.name(),
                    ));
                }
            }
        }

        Ok(RecordSchema {
            name: self.name,
            fields: self.fields,
        })
    }
}
