//! The `length` check.
//!
//! Length is measured as:
//!
//! | value | length |
//! |---|---|
//! | list, tuple | element count |
//! | string | character count (not bytes) |
//! | atom | character count of its name |
//! | map, struct | key count |
//!
//! The result always lists one outcome per clause, even when all pass.

use std::fmt;
use std::ops::RangeInclusive;

use super::{CheckKind, report};
use crate::foundation::{CheckResult, FieldError, FieldKey, Record, Value};

const UNSUPPORTED_SHAPE: &str =
    "length check supports only lists, binaries, atoms, maps and tuples";

// ============================================================================
// COMPARATOR
// ============================================================================

/// Comparison performed by one length clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LengthComparator {
    /// `min`, `gte`, `greater_than_or_equal_to`.
    Min,
    /// `gt`, `greater_than`.
    GreaterThan,
    /// `max`, `lte`, `less_than_or_equal_to`.
    Max,
    /// `lt`, `less_than`.
    LessThan,
    /// `is`, `equal_to`, `eq`, `equals`.
    Is,
    /// `in`: the length lies within an inclusive range.
    In,
    /// A name that resolves to no comparator. Fails its clause.
    Unknown(String),
}

impl LengthComparator {
    /// Resolves a comparator name or alias.
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        match name {
            "min" | "gte" | "greater_than_or_equal_to" => Self::Min,
            "gt" | "greater_than" => Self::GreaterThan,
            "max" | "lte" | "less_than_or_equal_to" => Self::Max,
            "lt" | "less_than" => Self::LessThan,
            "is" | "equal_to" | "eq" | "equals" => Self::Is,
            "in" => Self::In,
            other => Self::Unknown(other.to_owned()),
        }
    }

    /// Canonical name, or the unresolved name for `Unknown`.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Min => "min",
            Self::GreaterThan => "gt",
            Self::Max => "max",
            Self::LessThan => "lt",
            Self::Is => "is",
            Self::In => "in",
            Self::Unknown(name) => name,
        }
    }
}

impl fmt::Display for LengthComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// CLAUSE
// ============================================================================

/// Right-hand side of a length clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LengthBound {
    /// A single length, for every comparator except `in`.
    Count(usize),
    /// An inclusive range, for `in`.
    Range(RangeInclusive<usize>),
}

impl From<usize> for LengthBound {
    fn from(n: usize) -> Self {
        Self::Count(n)
    }
}

impl From<RangeInclusive<usize>> for LengthBound {
    fn from(range: RangeInclusive<usize>) -> Self {
        Self::Range(range)
    }
}

/// One `(comparator, bound)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthClause {
    /// The comparison.
    pub comparator: LengthComparator,
    /// The right-hand side.
    pub bound: LengthBound,
}

impl LengthClause {
    /// Creates a clause, resolving `name` through [`LengthComparator::resolve`].
    pub fn new(name: &str, bound: impl Into<LengthBound>) -> Self {
        Self {
            comparator: LengthComparator::resolve(name),
            bound: bound.into(),
        }
    }

    /// Creates a clause against a single length.
    pub fn count(name: &str, n: usize) -> Self {
        Self::new(name, LengthBound::Count(n))
    }

    /// Creates a clause against an inclusive range.
    pub fn range(name: &str, range: RangeInclusive<usize>) -> Self {
        Self::new(name, LengthBound::Range(range))
    }

    fn evaluate(&self, field: &FieldKey, length: Option<usize>) -> Result<(), FieldError> {
        let fail = |message: String| Err(FieldError::new(field, "length", message));

        let (holds, expectation) = match (&self.comparator, &self.bound) {
            (LengthComparator::Unknown(name), _) => {
                return fail(format!("unknown check '{name}'"));
            }
            (LengthComparator::In, LengthBound::Range(range)) => {
                let Some(length) = length else {
                    return fail(UNSUPPORTED_SHAPE.to_owned());
                };
                (
                    range.contains(&length),
                    format!("in range {}..{}", range.start(), range.end()),
                )
            }
            (LengthComparator::In, LengthBound::Count(_)) | (_, LengthBound::Range(_)) => {
                return fail(format!("invalid threshold for check '{}'", self.comparator));
            }
            (comparator, LengthBound::Count(n)) => {
                let Some(length) = length else {
                    return fail(UNSUPPORTED_SHAPE.to_owned());
                };
                let n = *n;
                match comparator {
                    LengthComparator::Min => {
                        (length >= n, format!("greater than or equal to {n}"))
                    }
                    LengthComparator::GreaterThan => (length > n, format!("greater than {n}")),
                    LengthComparator::Max => (length <= n, format!("less than or equal to {n}")),
                    LengthComparator::LessThan => (length < n, format!("less than {n}")),
                    _ => (length == n, format!("equal to {n}")),
                }
            }
        };

        if holds {
            Ok(())
        } else {
            fail(format!(
                "length must be {expectation}; got length: {}",
                length.unwrap_or_default()
            ))
        }
    }
}

// ============================================================================
// CHECK
// ============================================================================

/// Measures the length of a value, or `None` for shapes without one.
#[must_use]
pub fn measure(value: &Value) -> Option<usize> {
    match value {
        Value::List(items) | Value::Tuple(items) => Some(items.len()),
        Value::String(s) | Value::Atom(s) => Some(s.chars().count()),
        Value::Map(map) => Some(map.len()),
        Value::Struct(s) => Some(s.fields().len()),
        _ => None,
    }
}

/// Compares the length of the value stored in `field` against every clause.
///
/// Always returns [`CheckResult::Clauses`], one outcome per clause. An
/// absent field passes every clause.
///
/// # Examples
///
/// ```
/// use nebula_check::prelude::*;
///
/// let record = record! { a: "abc" };
/// assert_eq!(
///     check_length(&record, &FieldKey::atom("a"), &[LengthClause::count("min", 1)]),
///     CheckResult::Clauses(vec![Ok(())]),
/// );
/// ```
pub fn check_length<R>(record: &R, field: &FieldKey, clauses: &[LengthClause]) -> CheckResult
where
    R: Record + ?Sized,
{
    let outcomes: Vec<Result<(), FieldError>> = match record.lookup(field) {
        None => vec![Ok(()); clauses.len()],
        Some(value) => {
            let length = measure(value);
            clauses
                .iter()
                .map(|clause| clause.evaluate(field, length))
                .collect()
        }
    };
    report(CheckKind::Length, field, CheckResult::Clauses(outcomes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::StructValue;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn a() -> FieldKey {
        FieldKey::atom("a")
    }

    fn record(value: impl Into<Value>) -> Vec<(FieldKey, Value)> {
        vec![(a(), value.into())]
    }

    fn err(message: &str) -> FieldError {
        FieldError::new(&a(), "length", message.to_owned())
    }

    #[rstest]
    #[case(Value::from(vec![1, 2, 3]), Some(3))]
    #[case(Value::tuple([1, 2]), Some(2))]
    #[case(Value::from("h\u{e9}llo"), Some(5))]
    #[case(Value::atom("ok"), Some(2))]
    #[case(Value::map([("a", 1), ("b", 2)]), Some(2))]
    #[case(Value::from(StructValue::new("User").with_field("name", "x")), Some(1))]
    #[case(Value::from(42), None)]
    #[case(Value::Nil, None)]
    #[case(Value::from(true), None)]
    fn measures(#[case] value: Value, #[case] expected: Option<usize>) {
        assert_eq!(measure(&value), expected);
    }

    #[rstest]
    #[case("min", LengthComparator::Min)]
    #[case("gte", LengthComparator::Min)]
    #[case("gt", LengthComparator::GreaterThan)]
    #[case("max", LengthComparator::Max)]
    #[case("lte", LengthComparator::Max)]
    #[case("lt", LengthComparator::LessThan)]
    #[case("is", LengthComparator::Is)]
    #[case("equal_to", LengthComparator::Is)]
    #[case("in", LengthComparator::In)]
    fn aliases_resolve(#[case] name: &str, #[case] expected: LengthComparator) {
        assert_eq!(LengthComparator::resolve(name), expected);
    }

    #[test]
    fn passing_clauses_are_not_collapsed() {
        assert_eq!(
            check_length(&record("abc"), &a(), &[LengthClause::count("min", 1)]),
            CheckResult::Clauses(vec![Ok(())])
        );
    }

    #[test]
    fn every_comparator_message() {
        let clauses = [
            LengthClause::count("min", 4),
            LengthClause::count("gt", 3),
            LengthClause::count("max", 2),
            LengthClause::count("lt", 3),
            LengthClause::count("is", 5),
            LengthClause::range("in", 5..=9),
        ];
        assert_eq!(
            check_length(&record(vec![1, 2, 3]), &a(), &clauses),
            CheckResult::Clauses(vec![
                Err(err("length must be greater than or equal to 4; got length: 3")),
                Err(err("length must be greater than 3; got length: 3")),
                Err(err("length must be less than or equal to 2; got length: 3")),
                Err(err("length must be less than 3; got length: 3")),
                Err(err("length must be equal to 5; got length: 3")),
                Err(err("length must be in range 5..9; got length: 3")),
            ])
        );
    }

    #[test]
    fn strings_count_characters() {
        let clauses = [LengthClause::count("is", 2)];
        assert!(check_length(&record("\u{1f44b}\u{1f30d}"), &a(), &clauses).is_valid());
    }

    #[test]
    fn range_is_inclusive() {
        let clauses = [LengthClause::range("in", 1..=3)];
        assert!(check_length(&record("a"), &a(), &clauses).is_valid());
        assert!(check_length(&record("abc"), &a(), &clauses).is_valid());
        assert!(!check_length(&record(""), &a(), &clauses).is_valid());
    }

    #[test]
    fn unsupported_shape_fails_every_clause() {
        let clauses = [LengthClause::count("min", 1), LengthClause::count("max", 3)];
        assert_eq!(
            check_length(&record(12), &a(), &clauses),
            CheckResult::Clauses(vec![Err(err(UNSUPPORTED_SHAPE)), Err(err(UNSUPPORTED_SHAPE))])
        );
    }

    #[test]
    fn unknown_comparator_fails_only_its_clause() {
        let clauses = [LengthClause::count("min", 1), LengthClause::count("about", 3)];
        assert_eq!(
            check_length(&record("abc"), &a(), &clauses),
            CheckResult::Clauses(vec![Ok(()), Err(err("unknown check 'about'"))])
        );
    }

    #[test]
    fn mismatched_bound_shape_is_reported() {
        let clauses = [LengthClause::range("min", 1..=2), LengthClause::count("in", 2)];
        assert_eq!(
            check_length(&record("ab"), &a(), &clauses),
            CheckResult::Clauses(vec![
                Err(err("invalid threshold for check 'min'")),
                Err(err("invalid threshold for check 'in'")),
            ])
        );
    }

    #[test]
    fn absent_field_passes_each_clause() {
        let empty: Vec<(FieldKey, Value)> = Vec::new();
        let clauses = [LengthClause::count("min", 1), LengthClause::count("about", 3)];
        assert_eq!(
            check_length(&empty, &a(), &clauses),
            CheckResult::Clauses(vec![Ok(()), Ok(())])
        );
    }

    #[test]
    fn no_clauses_is_an_empty_sequence() {
        assert_eq!(check_length(&record("x"), &a(), &[]), CheckResult::Clauses(vec![]));
    }
}
