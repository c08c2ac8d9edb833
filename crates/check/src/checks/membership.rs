//! Collection checks: `in`, `not_in` and `subset_of`.
//!
//! The constraint list is a [`Value`]; anything other than a
//! [`Value::List`] is a malformed constraint and the check passes vacuously.
//! Membership uses strict equality, so `1` is not a member of `[1.0]`.

use super::{CheckKind, report};
use crate::foundation::render::render;
use crate::foundation::{CheckResult, FieldError, FieldKey, Record, Value};

/// Requires the value of `field` to be one of `allowed`.
///
/// An absent field is never a member and fails.
pub fn check_in<R>(record: &R, field: &FieldKey, allowed: &Value) -> CheckResult
where
    R: Record + ?Sized,
{
    let Value::List(items) = allowed else {
        return report(CheckKind::In, field, CheckResult::Valid);
    };
    let value = record.lookup(field);
    let result = if value.is_some_and(|v| items.contains(v)) {
        CheckResult::Valid
    } else {
        CheckResult::Invalid(FieldError::new(
            field,
            "in",
            format!("must be one of {allowed}; got: {}", render(value)),
        ))
    };
    report(CheckKind::In, field, result)
}

/// Requires the value of `field` not to be one of `forbidden`.
///
/// An absent field is never a member and passes.
pub fn check_not_in<R>(record: &R, field: &FieldKey, forbidden: &Value) -> CheckResult
where
    R: Record + ?Sized,
{
    let Value::List(items) = forbidden else {
        return report(CheckKind::NotIn, field, CheckResult::Valid);
    };
    let result = match record.lookup(field) {
        Some(value) if items.contains(value) => CheckResult::Invalid(FieldError::new(
            field,
            "not_in",
            format!("must not be included in {forbidden}; got: {value}"),
        )),
        _ => CheckResult::Valid,
    };
    report(CheckKind::NotIn, field, result)
}

/// Requires the value of `field` to be a non-empty list whose elements all
/// come from `allowed`.
///
/// Elements are matched as a multiset: each entry of `allowed` covers one
/// occurrence, so `[1, 1]` is not a subset of `[1]`.
///
/// # Examples
///
/// ```
/// use nebula_check::prelude::*;
///
/// let record = record! { a: vec![1, 2], b: Vec::<i32>::new(), c: "x" };
/// let allowed = Value::from(vec![1, 2, 3]);
/// assert!(check_subset_of(&record, &FieldKey::atom("a"), &allowed).is_valid());
/// assert!(!check_subset_of(&record, &FieldKey::atom("b"), &allowed).is_valid());
/// assert!(!check_subset_of(&record, &FieldKey::atom("c"), &allowed).is_valid());
/// ```
pub fn check_subset_of<R>(record: &R, field: &FieldKey, allowed: &Value) -> CheckResult
where
    R: Record + ?Sized,
{
    let Value::List(pool) = allowed else {
        return report(CheckKind::SubsetOf, field, CheckResult::Valid);
    };
    let result = match record.lookup(field) {
        None => CheckResult::Valid,
        Some(Value::List(items)) if !items.is_empty() && multiset_contains(pool, items) => {
            CheckResult::Valid
        }
        Some(value @ Value::List(_)) => CheckResult::Invalid(FieldError::new(
            field,
            "subset_of",
            format!("must be a subset of {allowed}; got: {value}"),
        )),
        Some(value) => CheckResult::Invalid(FieldError::new(
            field,
            "subset_of",
            format!("must be a list; got: {value}"),
        )),
    };
    report(CheckKind::SubsetOf, field, result)
}

/// Returns true when removing one matching entry of `pool` per element of
/// `items` never runs out.
fn multiset_contains(pool: &[Value], items: &[Value]) -> bool {
    let mut remaining: Vec<&Value> = pool.iter().collect();
    items.iter().all(|item| {
        match remaining.iter().position(|candidate| *candidate == item) {
            Some(index) => {
                remaining.swap_remove(index);
                true
            }
            None => false,
        }
    })
}
