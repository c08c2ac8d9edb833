//! Presence checks: `required` and `allow_nil`.

use super::{CheckKind, report};
use crate::foundation::{CheckResult, FieldError, FieldKey, Record};

/// Requires an entry for `field` when `is_required` is set.
///
/// An entry storing nil counts as present; use [`check_allow_nil`] to reject
/// stored nils.
///
/// # Examples
///
/// ```
/// use nebula_check::prelude::*;
///
/// let record = record! { name: Value::Nil };
/// assert!(check_required(&record, &FieldKey::atom("name"), true).is_valid());
/// assert!(!check_required(&record, &FieldKey::atom("email"), true).is_valid());
/// assert!(check_required(&record, &FieldKey::atom("email"), false).is_valid());
/// ```
pub fn check_required<R>(record: &R, field: &FieldKey, is_required: bool) -> CheckResult
where
    R: Record + ?Sized,
{
    let result = if !is_required || record.contains_field(field) {
        CheckResult::Valid
    } else {
        CheckResult::Invalid(FieldError::new(field, "required", "is required"))
    };
    report(CheckKind::Required, field, result)
}

/// Rejects a stored nil unless `allowed` is set.
///
/// A missing entry is not a stored nil and passes.
pub fn check_allow_nil<R>(record: &R, field: &FieldKey, allowed: bool) -> CheckResult
where
    R: Record + ?Sized,
{
    let result = match record.lookup(field) {
        Some(value) if !allowed && value.is_nil() => {
            CheckResult::Invalid(FieldError::new(field, "allow_nil", "doesn't allow nil"))
        }
        _ => CheckResult::Valid,
    };
    report(CheckKind::AllowNil, field, result)
}
