//! The `numericality` check.
//!
//! Each clause compares the field's number against a threshold. When every
//! clause passes the result collapses to [`CheckResult::Valid`]; when any
//! fails the result lists every clause outcome in clause order.

use std::fmt;

use super::{CheckKind, report};
use crate::foundation::{CheckResult, FieldError, FieldKey, Number, Record, Value};

// ============================================================================
// COMPARATOR
// ============================================================================

/// Comparison performed by one numericality clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumberComparator {
    /// `equal_to`, `eq`, `equals`, `is`.
    EqualTo,
    /// `greater_than`, `gt`.
    GreaterThan,
    /// `greater_than_or_equal_to`, `min`, `gte`.
    GreaterThanOrEqualTo,
    /// `less_than`, `lt`.
    LessThan,
    /// `less_than_or_equal_to`, `max`, `lte`.
    LessThanOrEqualTo,
    /// A name that resolves to no comparator. Fails its clause.
    Unknown(String),
}

impl NumberComparator {
    /// Resolves a comparator name or alias.
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        match name {
            "equal_to" | "eq" | "equals" | "is" => Self::EqualTo,
            "greater_than" | "gt" => Self::GreaterThan,
            "greater_than_or_equal_to" | "min" | "gte" => Self::GreaterThanOrEqualTo,
            "less_than" | "lt" => Self::LessThan,
            "less_than_or_equal_to" | "max" | "lte" => Self::LessThanOrEqualTo,
            other => Self::Unknown(other.to_owned()),
        }
    }

    /// Canonical name, or the unresolved name for `Unknown`.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::EqualTo => "equal_to",
            Self::GreaterThan => "greater_than",
            Self::GreaterThanOrEqualTo => "greater_than_or_equal_to",
            Self::LessThan => "less_than",
            Self::LessThanOrEqualTo => "less_than_or_equal_to",
            Self::Unknown(name) => name,
        }
    }
}

impl fmt::Display for NumberComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// CLAUSE
// ============================================================================

/// One `(comparator, threshold)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericClause {
    /// The comparison.
    pub comparator: NumberComparator,
    /// The right-hand side.
    pub threshold: Number,
}

impl NumericClause {
    /// Creates a clause, resolving `name` through [`NumberComparator::resolve`].
    ///
    /// # Examples
    ///
    /// ```
    /// use nebula_check::checks::{NumberComparator, NumericClause};
    ///
    /// let clause = NumericClause::new("gte", 3);
    /// assert_eq!(clause.comparator, NumberComparator::GreaterThanOrEqualTo);
    /// ```
    pub fn new(name: &str, threshold: impl Into<Number>) -> Self {
        Self {
            comparator: NumberComparator::resolve(name),
            threshold: threshold.into(),
        }
    }

    fn evaluate(&self, field: &FieldKey, number: Number, value: &Value) -> Result<(), FieldError> {
        let threshold = self.threshold;
        let (holds, phrase) = match &self.comparator {
            NumberComparator::EqualTo => (number == threshold, "equal to"),
            NumberComparator::GreaterThan => (number > threshold, "greater than"),
            NumberComparator::GreaterThanOrEqualTo => {
                (number >= threshold, "greater than or equal to")
            }
            NumberComparator::LessThan => (number < threshold, "less than"),
            NumberComparator::LessThanOrEqualTo => (number <= threshold, "less than or equal to"),
            NumberComparator::Unknown(name) => {
                return Err(FieldError::new(
                    field,
                    "numericality",
                    format!("unknown check '{name}'"),
                ));
            }
        };
        if holds {
            Ok(())
        } else {
            Err(FieldError::new(
                field,
                "numericality",
                format!("must be {phrase} {threshold}; got: {value}"),
            ))
        }
    }
}

// ============================================================================
// CHECK
// ============================================================================

/// Compares the number stored in `field` against every clause.
///
/// Passes when the field is absent. A present non-number fails with a single
/// error.
///
/// # Examples
///
/// ```
/// use nebula_check::prelude::*;
///
/// let record = record! { a: 5 };
/// let a = FieldKey::atom("a");
///
/// let ok = [
///     NumericClause::new("greater_than_or_equal_to", 3),
///     NumericClause::new("less_than", 10),
/// ];
/// assert_eq!(check_numericality(&record, &a, &ok), CheckResult::Valid);
///
/// let failing = [
///     NumericClause::new("greater_than_or_equal_to", 3),
///     NumericClause::new("less_than", 4),
/// ];
/// let CheckResult::Clauses(outcomes) = check_numericality(&record, &a, &failing) else {
///     panic!("expected per-clause outcomes");
/// };
/// assert!(outcomes[0].is_ok());
/// assert_eq!(outcomes[1].as_ref().unwrap_err().message, "must be less than 4; got: 5");
/// ```
pub fn check_numericality<R>(record: &R, field: &FieldKey, clauses: &[NumericClause]) -> CheckResult
where
    R: Record + ?Sized,
{
    let Some(value) = record.lookup(field) else {
        return report(CheckKind::Numericality, field, CheckResult::Valid);
    };
    let Some(number) = value.as_number() else {
        let error = FieldError::new(field, "numericality", format!("not a number; got: {value}"));
        return report(CheckKind::Numericality, field, CheckResult::Invalid(error));
    };

    let outcomes: Vec<_> = clauses
        .iter()
        .map(|clause| clause.evaluate(field, number, value))
        .collect();
    let result = if outcomes.iter().all(Result::is_ok) {
        CheckResult::Valid
    } else {
        CheckResult::Clauses(outcomes)
    };
    report(CheckKind::Numericality, field, result)
}
