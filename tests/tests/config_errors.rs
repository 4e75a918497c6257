//! Configuration-error surface: definition mistakes and shape drift are
//! reported as errors, never as violations.

use vet_tests::prelude::*;

#[test]
fn test_non_record_inputs_are_rejected_up_front() {
    let schema = user_schema();

    let err = validate(&schema, &Value::Int(42)).unwrap_err();
    assert!(matches!(err, ValidateError::NotARecord { ref type_name } if type_name == "Int"));

    let err = validate(&schema, &Value::List(vec![Value::Int(1)])).unwrap_err();
    assert!(matches!(err, ValidateError::NotARecord { ref type_name } if type_name == "List"));
}

#[test]
fn test_missing_declared_field() {
    let record = Value::record(fields! { "Name" => "Tony Stark", "Age" => 53i64 });

    let err = validate(&user_schema(), &record).unwrap_err();
    assert!(matches!(err, ValidateError::MissingField { ref field } if field == "Email"));
}

#[test]
fn test_field_kind_mismatch() {
    let record = Value::record(fields! {
        "Name" => "Tony Stark",
        "Age" => "fifty-three",
        "Email" => "tonystark@avengers.com",
    });

    let err = validate(&user_schema(), &record).unwrap_err();
    assert!(matches!(
        err,
        ValidateError::KindMismatch { ref field, ref expected, ref actual }
            if field == "Age" && expected == "Int" && actual == "Text"
    ));
}

#[test]
fn test_malformed_boolean_literal() {
    let schema = RecordSchema::builder("User")
        .field(FieldDef::text("Name").constrain(ConstraintKey::Required, "yes"))
        .build()
        .unwrap();
    let record = Value::record(fields! { "Name" => "Tony Stark" });

    let err = validate(&schema, &record).unwrap_err();
    assert!(matches!(
        err,
        ValidateError::MalformedConstraint { ref key, .. } if key == "required"
    ));
}

#[test]
fn test_false_literal_disables_the_rule() {
    let schema = RecordSchema::builder("User")
        .field(FieldDef::text("Name").constrain(ConstraintKey::Required, "false"))
        .build()
        .unwrap();
    let record = Value::record(fields! { "Name" => "" });

    assert!(validate(&schema, &record).unwrap().is_valid());
}

#[test]
fn test_schema_builder_rejects_definition_mistakes() {
    let dup = RecordSchema::builder("User")
        .field(FieldDef::text("Name"))
        .field(FieldDef::text("Name"))
        .build();
    assert!(matches!(dup, Err(SchemaError::DuplicateField(_))));

    let inapplicable = RecordSchema::builder("User")
        .field(FieldDef::int("Age").constrain(ConstraintKey::Email, "true"))
        .build();
    assert!(matches!(
        inapplicable,
        Err(SchemaError::InapplicableConstraint { .. })
    ));
}

#[test]
fn test_eager_constraint_sweep_matches_lazy_behavior() {
    let schema = RecordSchema::builder("User")
        .field(FieldDef::int("Age").constrain(ConstraintKey::Min, "eighteen"))
        .build()
        .unwrap();

    // The up-front sweep reports the same malformed literal the walk would.
    let eager = schema.check_constraints().unwrap_err();
    let record = Value::record(fields! { "Age" => 30i64 });
    let lazy = validate(&schema, &record).unwrap_err();

    assert_eq!(eager.to_string(), lazy.to_string());
    assert!(user_schema().check_constraints().is_ok());
}
