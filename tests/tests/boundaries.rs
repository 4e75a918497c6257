//! Boundary and ordering properties of the rule evaluators.

use vet_tests::prelude::*;

fn probe_schema(field: FieldDef) -> RecordSchema {
    RecordSchema::builder("Probe").field(field).build().unwrap()
}

fn outcome_for(schema: &RecordSchema, value: Value) -> Outcome {
    let record = Value::record(fields! { "F" => value });
    validate(schema, &record).unwrap()
}

#[test]
fn test_min_len_boundary_is_inclusive() {
    let schema = probe_schema(FieldDef::text("F").min_len(3));

    assert!(outcome_for(&schema, "abc".into()).is_valid());
    assert_eq!(
        outcome_for(&schema, "ab".into()).violation().unwrap().reason,
        Reason::TooShort
    );
}

#[test]
fn test_max_len_boundary_is_inclusive() {
    let schema = probe_schema(FieldDef::text("F").max_len(3));

    assert!(outcome_for(&schema, "abc".into()).is_valid());
    assert_eq!(
        outcome_for(&schema, "abcd".into()).violation().unwrap().reason,
        Reason::TooLong
    );
}

#[test]
fn test_min_boundary_is_inclusive() {
    let schema = probe_schema(FieldDef::int("F").min(18));

    assert!(outcome_for(&schema, 18i64.into()).is_valid());
    assert_eq!(
        outcome_for(&schema, 17i64.into()).violation().unwrap().reason,
        Reason::TooSmall
    );
}

#[test]
fn test_max_boundary_is_inclusive() {
    let schema = probe_schema(FieldDef::int("F").max(65));

    assert!(outcome_for(&schema, 65i64.into()).is_valid());
    assert_eq!(
        outcome_for(&schema, 66i64.into()).violation().unwrap().reason,
        Reason::TooLarge
    );
}

#[test]
fn test_required_int_zero_check_is_independent_of_range() {
    // A negative value is non-zero, so required passes and the range rule
    // reports instead.
    let schema = probe_schema(FieldDef::int("F").required().min(18));

    assert_eq!(
        outcome_for(&schema, (-5i64).into()).violation().unwrap().reason,
        Reason::TooSmall
    );
    assert_eq!(
        outcome_for(&schema, 0i64.into()).violation().unwrap().reason,
        Reason::Required
    );
}

#[test]
fn test_required_precedes_min_len() {
    let schema = probe_schema(FieldDef::text("F").required().min_len(2));

    // Empty string violates both; required is reported.
    assert_eq!(
        outcome_for(&schema, "".into()).violation().unwrap().reason,
        Reason::Required
    );
}

#[test]
fn test_min_len_precedes_max_len_and_email() {
    let schema = probe_schema(FieldDef::text("F").min_len(20).max_len(5).email());

    // "abc" fails both minLen and email; the earliest failing rule in
    // priority order is reported.
    assert_eq!(
        outcome_for(&schema, "abc".into()).violation().unwrap().reason,
        Reason::TooShort
    );
}

#[test]
fn test_same_record_validates_identically_twice() {
    let schema = user_schema();
    let record = user("Tony Stark", 53, "tonystark@avengers.com");

    assert_eq!(
        validate(&schema, &record).unwrap(),
        validate(&schema, &record).unwrap()
    );

    let invalid = user("Tony Stark", 16, "tonystark@avengers.com");
    assert_eq!(
        validate(&schema, &invalid).unwrap(),
        validate(&schema, &invalid).unwrap()
    );
}

#[test]
fn test_schema_is_shareable_across_threads() {
    let schema = std::sync::Arc::new(user_schema());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let schema = schema.clone();
            std::thread::spawn(move || {
                let record = user("Tony Stark", 20 + i, "tonystark@avengers.com");
                validate(&schema, &record).unwrap().is_valid()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
