//! Check results and construction errors
//!
//! Failing checks return data, never panics or `Err`s:
//!
//! - [`FieldError`] is the field-error mapping `field => message`.
//! - [`CheckResult`] is what every check returns: success, one error, or
//!   (for multi-clause checks) one outcome per clause in clause order.
//!
//! [`CheckError`] is reserved for building checks out of declarative data
//! (see [`Check::from_spec`](crate::checks::Check::from_spec)).

use std::borrow::Cow;
use std::fmt;

use super::value::FieldKey;

// ============================================================================
// FIELD ERROR
// ============================================================================

/// A single-entry mapping from a field to the reason it failed a check.
///
/// # Examples
///
/// ```
/// use nebula_check::foundation::{FieldError, FieldKey};
///
/// let age = FieldKey::atom("age");
/// let err = FieldError::new(&age, "numericality", "must be less than 4; got: 5");
/// assert_eq!(err.to_string(), "age: must be less than 4; got: 5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The field that failed.
    pub field: FieldKey,

    /// Name of the check that produced the error.
    ///
    /// Examples: "required", "numericality", "length"
    pub code: &'static str,

    /// Human-readable message.
    pub message: Cow<'static, str>,
}

impl FieldError {
    /// Creates an error for `field`.
    pub fn new(
        field: &FieldKey,
        code: &'static str,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            field: field.clone(),
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldError {}

// ============================================================================
// CHECK RESULT
// ============================================================================

/// Outcome of running one check against one field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum CheckResult {
    /// The check passed.
    Valid,
    /// The check failed.
    Invalid(FieldError),
    /// Per-clause outcomes of a multi-clause check, in clause order.
    ///
    /// Produced by `numericality` when at least one clause fails, and by
    /// `length` always.
    Clauses(Vec<Result<(), FieldError>>),
}

impl CheckResult {
    /// Returns true when nothing failed.
    ///
    /// A `Clauses` result with only successes is valid.
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Valid => true,
            Self::Invalid(_) => false,
            Self::Clauses(outcomes) => outcomes.iter().all(Result::is_ok),
        }
    }

    /// Returns every error, flattened, in order.
    pub fn errors(&self) -> Vec<&FieldError> {
        match self {
            Self::Valid => Vec::new(),
            Self::Invalid(error) => vec![error],
            Self::Clauses(outcomes) => outcomes.iter().filter_map(|o| o.as_ref().err()).collect(),
        }
    }

    /// Consumes the result, returning every error in order.
    pub fn into_errors(self) -> Vec<FieldError> {
        match self {
            Self::Valid => Vec::new(),
            Self::Invalid(error) => vec![error],
            Self::Clauses(outcomes) => outcomes.into_iter().filter_map(Result::err).collect(),
        }
    }
}

impl From<Result<(), FieldError>> for CheckResult {
    fn from(outcome: Result<(), FieldError>) -> Self {
        match outcome {
            Ok(()) => Self::Valid,
            Err(error) => Self::Invalid(error),
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => f.write_str("true"),
            Self::Invalid(error) => write!(f, "{error}"),
            Self::Clauses(outcomes) => {
                f.write_str("[")?;
                for (i, outcome) in outcomes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    match outcome {
                        Ok(()) => f.write_str("true")?,
                        Err(error) => write!(f, "{error}")?,
                    }
                }
                f.write_str("]")
            }
        }
    }
}

// ============================================================================
// CHECK ERROR
// ============================================================================

/// Failure to build a check from declarative data.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CheckError {
    /// The check name matches no check kind or alias.
    #[error("unknown check '{0}'")]
    UnknownCheck(String),

    /// The type tag matches no known type.
    #[error("unknown type '{0}'")]
    UnknownType(String),

    /// The format pattern does not compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The constraint spec has the wrong shape for the check.
    #[error("malformed spec for check '{check}': expected {expected}, got {got}")]
    MalformedSpec {
        check: &'static str,
        expected: &'static str,
        got: String,
    },

    /// The check needs a Rust closure and cannot be built from data.
    #[error("check '{0}' cannot be built from data")]
    NotDeclarative(&'static str),
}

impl CheckError {
    pub(crate) fn malformed(
        check: &'static str,
        expected: &'static str,
        got: &super::value::Value,
    ) -> Self {
        Self::MalformedSpec {
            check,
            expected,
            got: got.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err(msg: &'static str) -> FieldError {
        FieldError::new(&FieldKey::atom("a"), "length", msg)
    }

    #[test]
    fn clauses_are_valid_only_when_all_pass() {
        assert!(CheckResult::Clauses(vec![Ok(()), Ok(())]).is_valid());
        assert!(!CheckResult::Clauses(vec![Ok(()), Err(err("x"))]).is_valid());
        assert!(CheckResult::Clauses(vec![]).is_valid());
    }

    #[test]
    fn errors_are_flattened_in_order() {
        let result = CheckResult::Clauses(vec![Err(err("first")), Ok(()), Err(err("second"))]);
        let messages: Vec<_> = result.errors().iter().map(|e| e.message.as_ref()).collect();
        assert_eq!(messages, ["first", "second"]);
        assert_eq!(result.into_errors().len(), 2);
    }

    #[test]
    fn display_forms() {
        assert_eq!(CheckResult::Valid.to_string(), "true");
        assert_eq!(CheckResult::Invalid(err("is required")).to_string(), "a: is required");
        assert_eq!(
            CheckResult::Clauses(vec![Ok(()), Err(err("bad"))]).to_string(),
            "[true, a: bad]"
        );
    }

    #[test]
    fn construction_error_messages() {
        assert_eq!(CheckError::UnknownCheck("foo".into()).to_string(), "unknown check 'foo'");
        assert_eq!(
            CheckError::NotDeclarative("func").to_string(),
            "check 'func' cannot be built from data"
        );
    }
}
