//! The `func` check: caller-defined rules.
//!
//! The predicate receives the pair `(field, value)` and the whole record, so
//! it may look at other fields. Its return value is adapted into a
//! [`Verdict`]. Anything that is not an explicit failure counts as success,
//! which includes return values that were probably meant as errors (a bare
//! string, `:invalid`). Predicates should return `bool`, `Result` or a
//! [`Verdict`] to avoid surprises.

use std::fmt;
use std::sync::Arc;

use super::{CheckKind, report};
use crate::foundation::{CheckResult, FieldError, FieldKey, Record, Value};

/// What a predicate decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The value is accepted.
    Valid,
    /// The value is rejected with the generic message `not valid`.
    Invalid,
    /// The value is rejected with this message.
    InvalidWith(String),
}

impl From<bool> for Verdict {
    fn from(ok: bool) -> Self {
        if ok { Self::Valid } else { Self::Invalid }
    }
}

impl From<()> for Verdict {
    fn from((): ()) -> Self {
        Self::Valid
    }
}

impl From<Result<(), String>> for Verdict {
    fn from(result: Result<(), String>) -> Self {
        result.map_or_else(Self::InvalidWith, |()| Self::Valid)
    }
}

impl From<Result<(), &str>> for Verdict {
    fn from(result: Result<(), &str>) -> Self {
        result.map_or_else(|msg| Self::InvalidWith(msg.to_owned()), |()| Self::Valid)
    }
}

/// Adapts a dynamic return value:
///
/// | value | verdict |
/// |---|---|
/// | `false` | `Invalid` |
/// | `:error` | `Invalid` |
/// | `{:error, "msg"}` | `InvalidWith("msg")` |
/// | anything else | `Valid` |
impl From<Value> for Verdict {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(false) => Self::Invalid,
            Value::Atom(name) if name == "error" => Self::Invalid,
            Value::Tuple(items) => match items.as_slice() {
                [Value::Atom(tag), Value::String(message)] if tag == "error" => {
                    Self::InvalidWith(message.clone())
                }
                _ => Self::Valid,
            },
            _ => Self::Valid,
        }
    }
}

type PredicateFn = dyn Fn((&FieldKey, Option<&Value>), &dyn Record) -> Verdict + Send + Sync;

/// A shareable predicate for [`Check::Func`](super::Check::Func).
#[derive(Clone)]
pub struct Predicate(Arc<PredicateFn>);

impl Predicate {
    /// Wraps a closure. Its return value is adapted through [`Verdict`]'s
    /// `From` impls.
    pub fn new<F, V>(f: F) -> Self
    where
        F: Fn((&FieldKey, Option<&Value>), &dyn Record) -> V + Send + Sync + 'static,
        V: Into<Verdict>,
    {
        Self(Arc::new(
            move |pair: (&FieldKey, Option<&Value>), record: &dyn Record| -> Verdict {
                f(pair, record).into()
            },
        ))
    }

    /// Invokes the predicate.
    pub fn call(&self, pair: (&FieldKey, Option<&Value>), record: &dyn Record) -> Verdict {
        (self.0)(pair, record)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

/// Runs a caller-defined predicate on `field`.
///
/// The predicate runs even when the field is absent, receiving `None` as the
/// value.
///
/// # Examples
///
/// ```
/// use nebula_check::prelude::*;
///
/// let record = record! { min: 3, max: 1 };
/// let result = check_func(&record, &FieldKey::atom("max"), |(_, value), rec| {
///     let min = get(rec, &FieldKey::atom("min")).and_then(Value::as_number);
///     match (value.and_then(Value::as_number), min) {
///         (Some(max), Some(min)) if max >= min => Ok(()),
///         _ => Err("must not be below min"),
///     }
/// });
/// assert_eq!(result.errors()[0].message, "must not be below min");
/// ```
pub fn check_func<R, F, V>(record: &R, field: &FieldKey, predicate: F) -> CheckResult
where
    R: Record + ?Sized,
    F: FnOnce((&FieldKey, Option<&Value>), &R) -> V,
    V: Into<Verdict>,
{
    let value = record.lookup(field);
    let result = match predicate((field, value), record).into() {
        Verdict::Valid => CheckResult::Valid,
        Verdict::Invalid => CheckResult::Invalid(FieldError::new(field, "func", "not valid")),
        Verdict::InvalidWith(message) => {
            CheckResult::Invalid(FieldError::new(field, "func", message))
        }
    };
    report(CheckKind::Func, field, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::get;
    use pretty_assertions::assert_eq;

    type Rec = Vec<(FieldKey, Value)>;

    fn a() -> FieldKey {
        FieldKey::atom("a")
    }

    fn record() -> Rec {
        vec![(a(), Value::from(5)), (FieldKey::atom("b"), Value::from(10))]
    }

    #[test]
    fn true_passes_false_fails_generically() {
        assert!(check_func(&record(), &a(), |_, _: &Rec| true).is_valid());
        assert_eq!(
            check_func(&record(), &a(), |_, _: &Rec| false),
            CheckResult::Invalid(FieldError::new(&a(), "func", "not valid"))
        );
    }

    #[test]
    fn custom_message_is_verbatim() {
        let result = check_func(&record(), &a(), |_, _: &Rec| Err::<(), _>("too small".to_owned()));
        assert_eq!(
            result,
            CheckResult::Invalid(FieldError::new(&a(), "func", "too small"))
        );
    }

    #[test]
    fn predicate_sees_pair_and_record() {
        let result = check_func(&record(), &a(), |(key, value), rec: &Rec| {
            assert_eq!(key, &FieldKey::atom("a"));
            let other = get(rec, &FieldKey::atom("b")).and_then(Value::as_number);
            let mine = value.and_then(Value::as_number);
            matches!((mine, other), (Some(x), Some(y)) if x < y)
        });
        assert!(result.is_valid());
    }

    #[test]
    fn predicate_runs_for_absent_field() {
        let result = check_func(&record(), &FieldKey::atom("zzz"), |(_, value), _: &Rec| {
            value.is_some()
        });
        assert!(!result.is_valid());
    }

    #[test]
    fn dynamic_values_adapt() {
        assert_eq!(Verdict::from(Value::Bool(false)), Verdict::Invalid);
        assert_eq!(Verdict::from(Value::atom("error")), Verdict::Invalid);
        assert_eq!(
            Verdict::from(Value::tuple([Value::atom("error"), Value::from("nope")])),
            Verdict::InvalidWith("nope".into())
        );
        assert_eq!(Verdict::from(Value::Bool(true)), Verdict::Valid);
    }

    #[test]
    fn unit_return_is_success() {
        assert_eq!(Verdict::from(()), Verdict::Valid);
        assert!(check_func(&record(), &a(), |_, _: &Rec| ()).is_valid());
    }

    #[test]
    fn unrecognised_returns_count_as_success() {
        assert_eq!(Verdict::from(Value::from("error")), Verdict::Valid);
        assert_eq!(Verdict::from(Value::atom("invalid")), Verdict::Valid);
        assert_eq!(Verdict::from(Value::Nil), Verdict::Valid);
        assert_eq!(
            Verdict::from(Value::tuple([Value::atom("error"), Value::from(1)])),
            Verdict::Valid
        );
        assert_eq!(
            Verdict::from(Value::tuple([Value::atom("ok"), Value::from("x")])),
            Verdict::Valid
        );
    }

    #[test]
    fn shared_predicate() {
        let predicate = Predicate::new(|(_, value), _| value != Some(&Value::from(5)));
        let rec = record();
        let dynamic: &dyn Record = &rec;
        assert_eq!(predicate.call((&a(), get(dynamic, &a())), dynamic), Verdict::Invalid);
    }
}
