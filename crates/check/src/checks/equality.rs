//! The `equals` check (alias `exactly`).

use super::{CheckKind, report};
use crate::foundation::{CheckResult, FieldError, FieldKey, Record, Value};

/// Requires the value of `field` to equal `target` strictly: `1` does not
/// equal `1.0`.
///
/// Passes when the field is absent.
pub fn check_equals<R>(record: &R, field: &FieldKey, target: &Value) -> CheckResult
where
    R: Record + ?Sized,
{
    let result = match record.lookup(field) {
        Some(value) if value != target => CheckResult::Invalid(FieldError::new(
            field,
            "equals",
            format!("must be equal to {target}; got: {value}"),
        )),
        _ => CheckResult::Valid,
    };
    report(CheckKind::Equals, field, result)
}

/// Alias for [`check_equals`].
pub fn check_exactly<R>(record: &R, field: &FieldKey, target: &Value) -> CheckResult
where
    R: Record + ?Sized,
{
    check_equals(record, field, target)
}
