//! The `struct` check: nominal type equality.

use std::fmt;

use super::{CheckKind, report};
use crate::foundation::{CheckResult, FieldError, FieldKey, Record, StructValue, Value};

/// Expected nominal type, given by name or by an exemplar instance.
///
/// Only the type name of an exemplar is compared; its field values are
/// ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum StructSpec {
    /// A type name.
    Named(String),
    /// An instance whose type is expected.
    Exemplar(StructValue),
}

impl StructSpec {
    /// The expected type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Exemplar(exemplar) => exemplar.name(),
        }
    }
}

impl From<&str> for StructSpec {
    fn from(name: &str) -> Self {
        Self::Named(name.to_owned())
    }
}

impl From<StructValue> for StructSpec {
    fn from(exemplar: StructValue) -> Self {
        Self::Exemplar(exemplar)
    }
}

impl fmt::Display for StructSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Requires the value of `field` to be an instance of `expected`.
///
/// Passes when the field is absent.
///
/// # Examples
///
/// ```
/// use nebula_check::prelude::*;
///
/// let ann = StructValue::new("User").with_field("name", "ann");
/// let bob = StructValue::new("User").with_field("name", "bob");
/// let record = record! { owner: ann };
///
/// assert!(check_struct(&record, &FieldKey::atom("owner"), &StructSpec::from(bob)).is_valid());
/// assert!(!check_struct(&record, &FieldKey::atom("owner"), &StructSpec::from("Team")).is_valid());
/// ```
pub fn check_struct<R>(record: &R, field: &FieldKey, expected: &StructSpec) -> CheckResult
where
    R: Record + ?Sized,
{
    let result = match record.lookup(field) {
        None => CheckResult::Valid,
        Some(Value::Struct(instance)) if instance.name() == expected.type_name() => {
            CheckResult::Valid
        }
        Some(value) => CheckResult::Invalid(FieldError::new(
            field,
            "struct",
            format!("is not expected struct; expected: {expected}; got: {value}"),
        )),
    };
    report(CheckKind::Struct, field, result)
}
