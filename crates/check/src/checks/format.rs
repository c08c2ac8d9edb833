//! The `format` check (alias `regex`).

use regex::Regex;

use super::{CheckKind, report};
use crate::foundation::{CheckResult, FieldError, FieldKey, Record};

/// Requires a string stored in `field` to match `pattern`.
///
/// Matching is unanchored, as with [`Regex::is_match`]. Values that are not
/// strings, and absent fields, pass: format only constrains text.
///
/// # Examples
///
/// ```
/// use nebula_check::prelude::*;
/// use regex::Regex;
///
/// let pattern = Regex::new(r"^\d{4}$").unwrap();
/// let record = record! { pin: "1234", code: "12a4", count: 12 };
/// assert!(check_format(&record, &FieldKey::atom("pin"), &pattern).is_valid());
/// assert!(!check_format(&record, &FieldKey::atom("code"), &pattern).is_valid());
/// assert!(check_format(&record, &FieldKey::atom("count"), &pattern).is_valid());
/// ```
pub fn check_format<R>(record: &R, field: &FieldKey, pattern: &Regex) -> CheckResult
where
    R: Record + ?Sized,
{
    let result = match record.lookup(field) {
        Some(value) if value.as_str().is_some_and(|text| !pattern.is_match(text)) => {
            CheckResult::Invalid(FieldError::new(
                field,
                "format",
                format!("has invalid format; got: {value}"),
            ))
        }
        _ => CheckResult::Valid,
    };
    report(CheckKind::Format, field, result)
}

/// Alias for [`check_format`].
pub fn check_regex<R>(record: &R, field: &FieldKey, pattern: &Regex) -> CheckResult
where
    R: Record + ?Sized,
{
    check_format(record, field, pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Value;

    fn a() -> FieldKey {
        FieldKey::atom("a")
    }

    fn email() -> Regex {
        Regex::new(r"^[^@\s]+@[^@\s]+$").unwrap()
    }

    #[test]
    fn matching_string_passes() {
        let record = vec![(a(), Value::from("ann@example.com"))];
        assert!(check_format(&record, &a(), &email()).is_valid());
    }

    #[test]
    fn non_matching_string_fails() {
        let record = vec![(a(), Value::from("ann"))];
        assert_eq!(
            check_format(&record, &a(), &email()),
            CheckResult::Invalid(FieldError::new(
                &a(),
                "format",
                r#"has invalid format; got: "ann""#
            ))
        );
    }

    #[test]
    fn match_is_unanchored() {
        let record = vec![(a(), Value::from("order-42-x"))];
        assert!(check_format(&record, &a(), &Regex::new(r"\d+").unwrap()).is_valid());
    }

    #[test]
    fn non_strings_pass() {
        let pattern = email();
        for value in [Value::from(42), Value::Nil, Value::atom("ann"), Value::from(vec![1])] {
            let record = vec![(a(), value)];
            assert!(check_format(&record, &a(), &pattern).is_valid());
        }
        let empty: Vec<(FieldKey, Value)> = Vec::new();
        assert!(check_format(&empty, &a(), &pattern).is_valid());
    }

    #[test]
    fn regex_alias_behaves_identically() {
        let pattern = email();
        for value in [Value::from("x@y"), Value::from("nope"), Value::from(1)] {
            let record = vec![(a(), value)];
            assert_eq!(
                check_regex(&record, &a(), &pattern),
                check_format(&record, &a(), &pattern)
            );
        }
    }
}
