//! Rule evaluators - one pure function per constraint key.
//!
//! Each evaluator parses its declared parameter before looking at the value,
//! so a malformed literal always surfaces as a configuration error, even
//! when the value would otherwise pass. Kind gating happens in the
//! orchestrator; evaluators additionally pattern-match the value and pass
//! through on a non-matching variant.

use std::sync::OnceLock;

use regex_lite::Regex;
use vet_core::{ValidateError, ValidateResult, Value};
use vet_schema::ConstraintKey;

use crate::violation::{Reason, Violation};

/// Anchored email pattern: local part, `@`, domain, a literal dot, then a
/// two-or-more letter TLD. No normalization is applied before matching.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+ -]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// `required` - text fails on the empty string, integers fail on zero.
///
/// The zero check deliberately mirrors the long-standing behavior this
/// engine replaces: an integer `0` counts as missing, even though that
/// conflates a legitimate zero with absence. Callers who need a zero-valued
/// field simply omit the `required` declaration.
pub(crate) fn required(field: &str, value: &Value, literal: &str) -> ValidateResult<Option<Violation>> {
    if !bool_param(field, ConstraintKey::Required, literal)? {
        return Ok(None);
    }
    let empty = match value {
        Value::Text(s) => s.is_empty(),
        Value::Int(i) => *i == 0,
        _ => false,
    };
    Ok(empty.then(|| Violation::new(field, Reason::Required)))
}

/// `minLen` - text length in bytes must be at least the parameter.
pub(crate) fn min_len(field: &str, value: &Value, literal: &str) -> ValidateResult<Option<Violation>> {
    let min = len_param(field, ConstraintKey::MinLen, literal)?;
    let Some(text) = value.as_text() else {
        return Ok(None);
    };
    Ok((text.len() < min).then(|| Violation::new(field, Reason::TooShort)))
}

/// `maxLen` - text length in bytes must be at most the parameter.
pub(crate) fn max_len(field: &str, value: &Value, literal: &str) -> ValidateResult<Option<Violation>> {
    let max = len_param(field, ConstraintKey::MaxLen, literal)?;
    let Some(text) = value.as_text() else {
        return Ok(None);
    };
    Ok((text.len() > max).then(|| Violation::new(field, Reason::TooLong)))
}

/// `min` - integer must be at least the parameter (inclusive).
pub(crate) fn min(field: &str, value: &Value, literal: &str) -> ValidateResult<Option<Violation>> {
    let bound = int_param(field, ConstraintKey::Min, literal)?;
    let Some(n) = value.as_int() else {
        return Ok(None);
    };
    Ok((n < bound).then(|| Violation::new(field, Reason::TooSmall)))
}

/// `max` - integer must be at most the parameter (inclusive).
pub(crate) fn max(field: &str, value: &Value, literal: &str) -> ValidateResult<Option<Violation>> {
    let bound = int_param(field, ConstraintKey::Max, literal)?;
    let Some(n) = value.as_int() else {
        return Ok(None);
    };
    Ok((n > bound).then(|| Violation::new(field, Reason::TooLarge)))
}

/// `email` - the full text must match the fixed email pattern.
pub(crate) fn email(field: &str, value: &Value, literal: &str) -> ValidateResult<Option<Violation>> {
    if !bool_param(field, ConstraintKey::Email, literal)? {
        return Ok(None);
    }
    let Some(text) = value.as_text() else {
        return Ok(None);
    };
    Ok((!email_regex().is_match(text)).then(|| Violation::new(field, Reason::InvalidFormat)))
}

/// Dispatch one declared constraint for a field.
pub(crate) fn evaluate(
    key: ConstraintKey,
    field: &str,
    value: &Value,
    literal: &str,
) -> ValidateResult<Option<Violation>> {
    match key {
        ConstraintKey::Required => required(field, value, literal),
        ConstraintKey::MinLen => min_len(field, value, literal),
        ConstraintKey::MaxLen => max_len(field, value, literal),
        ConstraintKey::Min => min(field, value, literal),
        ConstraintKey::Max => max(field, value, literal),
        ConstraintKey::Email => email(field, value, literal),
    }
}

fn bool_param(field: &str, key: ConstraintKey, literal: &str) -> ValidateResult<bool> {
    literal
        .parse::<bool>()
        .map_err(|_| ValidateError::malformed_constraint(field, key.as_str(), literal))
}

fn len_param(field: &str, key: ConstraintKey, literal: &str) -> ValidateResult<usize> {
    literal
        .parse::<usize>()
        .map_err(|_| ValidateError::malformed_constraint(field, key.as_str(), literal))
}

fn int_param(field: &str, key: ConstraintKey, literal: &str) -> ValidateResult<i64> {
    literal
        .parse::<i64>()
        .map_err(|_| ValidateError::malformed_constraint(field, key.as_str(), literal))
}
