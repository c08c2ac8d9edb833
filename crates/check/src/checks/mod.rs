//! The twelve checks
//!
//! Every check is a pure function of `(record, field, constraint)` returning
//! a [`CheckResult`]. Checks are independent of each other and only read
//! the record.
//!
//! | check | function | constraint |
//! |---|---|---|
//! | `required` | [`check_required`] | `bool` |
//! | `type` | [`check_type`] | [`TypeTag`] |
//! | `numericality` | [`check_numericality`] | `&[NumericClause]` |
//! | `in` | [`check_in`] | list [`Value`] |
//! | `not_in` | [`check_not_in`] | list [`Value`] |
//! | `format` / `regex` | [`check_format`], [`check_regex`] | [`Regex`] |
//! | `length` | [`check_length`] | `&[LengthClause]` |
//! | `struct` | [`check_struct`] | [`StructSpec`] |
//! | `func` | [`check_func`] | closure |
//! | `equals` / `exactly` | [`check_equals`], [`check_exactly`] | [`Value`] |
//! | `allow_nil` | [`check_allow_nil`] | `bool` |
//! | `subset_of` | [`check_subset_of`] | list [`Value`] |
//!
//! [`Check`] bundles a check kind with its constraint so checks can be
//! stored, shared across threads, and built from declarative data with
//! [`Check::from_spec`].

mod equality;
mod format;
mod func;
mod length;
mod membership;
mod numericality;
mod presence;
mod structure;
mod types;

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::foundation::{CheckError, CheckResult, FieldKey, Record, Value};

pub use equality::{check_equals, check_exactly};
pub use format::{check_format, check_regex};
pub use func::{Predicate, Verdict, check_func};
pub use length::{LengthBound, LengthClause, LengthComparator, check_length, measure};
pub use membership::{check_in, check_not_in, check_subset_of};
pub use numericality::{NumberComparator, NumericClause, check_numericality};
pub use presence::{check_allow_nil, check_required};
pub use structure::{StructSpec, check_struct};
pub use types::{TypeTag, check_type};

// ============================================================================
// CHECK KIND
// ============================================================================

/// Name of a check family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    /// `type`
    Type,
    /// `required`
    Required,
    /// `numericality`
    Numericality,
    /// `in`
    In,
    /// `not_in`
    NotIn,
    /// `format`, alias `regex`
    Format,
    /// `length`
    Length,
    /// `struct`
    Struct,
    /// `func`
    Func,
    /// `equals`, alias `exactly`
    Equals,
    /// `allow_nil`
    AllowNil,
    /// `subset_of`
    SubsetOf,
}

impl CheckKind {
    /// Canonical name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Required => "required",
            Self::Numericality => "numericality",
            Self::In => "in",
            Self::NotIn => "not_in",
            Self::Format => "format",
            Self::Length => "length",
            Self::Struct => "struct",
            Self::Func => "func",
            Self::Equals => "equals",
            Self::AllowNil => "allow_nil",
            Self::SubsetOf => "subset_of",
        }
    }
}

impl FromStr for CheckKind {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "type" => Self::Type,
            "required" => Self::Required,
            "numericality" => Self::Numericality,
            "in" => Self::In,
            "not_in" => Self::NotIn,
            "format" | "regex" => Self::Format,
            "length" => Self::Length,
            "struct" => Self::Struct,
            "func" => Self::Func,
            "equals" | "exactly" => Self::Equals,
            "allow_nil" => Self::AllowNil,
            "subset_of" => Self::SubsetOf,
            other => return Err(CheckError::UnknownCheck(other.to_owned())),
        })
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Logs the outcome of a check and hands it back.
fn report(kind: CheckKind, field: &FieldKey, result: CheckResult) -> CheckResult {
    if result.is_valid() {
        tracing::trace!(check = kind.name(), %field, "check passed");
    } else {
        tracing::debug!(
            check = kind.name(),
            %field,
            errors = result.errors().len(),
            "check failed"
        );
    }
    result
}

// ============================================================================
// CHECK
// ============================================================================

/// A check kind together with its constraint.
///
/// # Examples
///
/// ```
/// use nebula_check::prelude::*;
///
/// let check = Check::from_spec("length", &Value::keyword([("min", 2), ("max", 4)])).unwrap();
/// let record = record! { code: "abc" };
/// assert_eq!(
///     check.run(&record, &FieldKey::atom("code")),
///     CheckResult::Clauses(vec![Ok(()), Ok(())]),
/// );
/// ```
#[derive(Debug, Clone)]
pub enum Check {
    /// See [`check_type`].
    Type(TypeTag),
    /// See [`check_required`].
    Required(bool),
    /// See [`check_numericality`].
    Numericality(Vec<NumericClause>),
    /// See [`check_in`].
    In(Value),
    /// See [`check_not_in`].
    NotIn(Value),
    /// See [`check_format`].
    Format(Regex),
    /// See [`check_length`].
    Length(Vec<LengthClause>),
    /// See [`check_struct`].
    Struct(StructSpec),
    /// See [`check_func`].
    Func(Predicate),
    /// See [`check_equals`].
    Equals(Value),
    /// See [`check_allow_nil`].
    AllowNil(bool),
    /// See [`check_subset_of`].
    SubsetOf(Value),
}

impl Check {
    /// Wraps a closure as a `func` check.
    pub fn func<F, V>(f: F) -> Self
    where
        F: Fn((&FieldKey, Option<&Value>), &dyn Record) -> V + Send + Sync + 'static,
        V: Into<Verdict>,
    {
        Self::Func(Predicate::new(f))
    }

    /// The check family.
    #[must_use]
    pub fn kind(&self) -> CheckKind {
        match self {
            Self::Type(_) => CheckKind::Type,
            Self::Required(_) => CheckKind::Required,
            Self::Numericality(_) => CheckKind::Numericality,
            Self::In(_) => CheckKind::In,
            Self::NotIn(_) => CheckKind::NotIn,
            Self::Format(_) => CheckKind::Format,
            Self::Length(_) => CheckKind::Length,
            Self::Struct(_) => CheckKind::Struct,
            Self::Func(_) => CheckKind::Func,
            Self::Equals(_) => CheckKind::Equals,
            Self::AllowNil(_) => CheckKind::AllowNil,
            Self::SubsetOf(_) => CheckKind::SubsetOf,
        }
    }

    /// Runs the check against `field` of `record`.
    pub fn run(&self, record: &dyn Record, field: &FieldKey) -> CheckResult {
        match self {
            Self::Type(tag) => check_type(record, field, *tag),
            Self::Required(required) => check_required(record, field, *required),
            Self::Numericality(clauses) => check_numericality(record, field, clauses),
            Self::In(allowed) => check_in(record, field, allowed),
            Self::NotIn(forbidden) => check_not_in(record, field, forbidden),
            Self::Format(pattern) => check_format(record, field, pattern),
            Self::Length(clauses) => check_length(record, field, clauses),
            Self::Struct(expected) => check_struct(record, field, expected),
            Self::Func(predicate) => {
                check_func(record, field, |pair, record| predicate.call(pair, record))
            }
            Self::Equals(target) => check_equals(record, field, target),
            Self::AllowNil(allowed) => check_allow_nil(record, field, *allowed),
            Self::SubsetOf(allowed) => check_subset_of(record, field, allowed),
        }
    }

    /// Builds a check from its name (aliases included) and a declarative
    /// spec.
    ///
    /// | check | spec |
    /// |---|---|
    /// | `type` | atom or string naming a [`TypeTag`] |
    /// | `required`, `allow_nil` | boolean |
    /// | `numericality` | keyword list or map of comparator => number |
    /// | `length` | keyword list or map of comparator => count, or `[min, max]` for `in` |
    /// | `format`, `regex` | pattern source string |
    /// | `struct` | struct exemplar, module reference, atom or string |
    /// | `in`, `not_in`, `subset_of`, `equals`, `exactly` | any value |
    ///
    /// `func` cannot be expressed as data; use [`Check::func`].
    pub fn from_spec(name: &str, spec: &Value) -> Result<Self, CheckError> {
        let kind: CheckKind = name.parse()?;
        let check = match kind {
            CheckKind::Type => match spec {
                Value::Atom(tag) | Value::String(tag) => Self::Type(tag.parse()?),
                other => return Err(CheckError::malformed("type", "a type name", other)),
            },
            CheckKind::Required => Self::Required(boolean_spec("required", spec)?),
            CheckKind::AllowNil => Self::AllowNil(boolean_spec("allow_nil", spec)?),
            CheckKind::Numericality => {
                let clauses = clause_pairs("numericality", spec)?
                    .into_iter()
                    .map(|(comparator, threshold)| {
                        threshold
                            .as_number()
                            .map(|n| NumericClause::new(comparator, n))
                            .ok_or_else(|| {
                                CheckError::malformed("numericality", "a number", threshold)
                            })
                    })
                    .collect::<Result<_, _>>()?;
                Self::Numericality(clauses)
            }
            CheckKind::Length => {
                let clauses = clause_pairs("length", spec)?
                    .into_iter()
                    .map(|(comparator, bound)| {
                        length_bound(bound).map(|bound| LengthClause::new(comparator, bound))
                    })
                    .collect::<Result<_, _>>()?;
                Self::Length(clauses)
            }
            CheckKind::Format => match spec {
                Value::String(source) => Self::Format(Regex::new(source)?),
                other => return Err(CheckError::malformed("format", "a pattern string", other)),
            },
            CheckKind::Struct => match spec {
                Value::Struct(exemplar) => Self::Struct(StructSpec::Exemplar(exemplar.clone())),
                Value::Module(name) | Value::Atom(name) | Value::String(name) => {
                    Self::Struct(StructSpec::Named(name.clone()))
                }
                other => {
                    return Err(CheckError::malformed("struct", "a struct or type name", other));
                }
            },
            CheckKind::Func => return Err(CheckError::NotDeclarative("func")),
            CheckKind::In => Self::In(spec.clone()),
            CheckKind::NotIn => Self::NotIn(spec.clone()),
            CheckKind::Equals => Self::Equals(spec.clone()),
            CheckKind::SubsetOf => Self::SubsetOf(spec.clone()),
        };
        tracing::trace!(check = kind.name(), "built check from spec");
        Ok(check)
    }
}

fn boolean_spec(check: &'static str, spec: &Value) -> Result<bool, CheckError> {
    match spec {
        Value::Bool(b) => Ok(*b),
        other => Err(CheckError::malformed(check, "a boolean", other)),
    }
}

/// Splits a keyword list or map into ordered `(name, value)` pairs.
fn clause_pairs<'a>(
    check: &'static str,
    spec: &'a Value,
) -> Result<Vec<(&'a str, &'a Value)>, CheckError> {
    const EXPECTED: &str = "a keyword list or map of clauses";
    match spec {
        Value::Map(map) => Ok(map.iter().map(|(key, value)| (key.name(), value)).collect()),
        Value::List(items) => items
            .iter()
            .map(|item| match item {
                Value::Tuple(pair) => match pair.as_slice() {
                    [Value::Atom(name) | Value::String(name), value] => Ok((name.as_str(), value)),
                    _ => Err(CheckError::malformed(check, EXPECTED, item)),
                },
                _ => Err(CheckError::malformed(check, EXPECTED, item)),
            })
            .collect(),
        other => Err(CheckError::malformed(check, EXPECTED, other)),
    }
}

fn length_bound(bound: &Value) -> Result<LengthBound, CheckError> {
    const EXPECTED: &str = "a non-negative count or a [min, max] range";
    let count = |value: &Value| match value {
        Value::Integer(n) => usize::try_from(*n).ok(),
        _ => None,
    };
    match bound {
        Value::List(items) | Value::Tuple(items) => match items.as_slice() {
            [start, end] => match (count(start), count(end)) {
                (Some(start), Some(end)) => Ok(LengthBound::Range(start..=end)),
                _ => Err(CheckError::malformed("length", EXPECTED, bound)),
            },
            _ => Err(CheckError::malformed("length", EXPECTED, bound)),
        },
        other => count(other)
            .map(LengthBound::Count)
            .ok_or_else(|| CheckError::malformed("length", EXPECTED, other)),
    }
}
