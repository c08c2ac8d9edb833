//! The `type` check and its closed set of type tags.

use std::fmt;
use std::str::FromStr;

use super::{CheckKind, report};
use crate::foundation::{CheckError, CheckResult, FieldError, FieldKey, Record, Value};

/// Expected shape of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// [`Value::Integer`].
    Integer,
    /// [`Value::Float`] only.
    Float,
    /// Integer or float.
    Number,
    /// [`Value::String`].
    String,
    /// [`Value::Bool`].
    Boolean,
    /// [`Value::Atom`]. Nil and booleans are not atoms.
    Atom,
    /// [`Value::List`].
    List,
    /// [`Value::Map`] or [`Value::Struct`].
    Map,
    /// [`Value::Tuple`].
    Tuple,
    /// [`Value::Function`].
    Function,
    /// Any [`Value::Struct`].
    Struct,
    /// [`Value::Module`].
    Module,
    /// A list of `{:atom, value}` tuples.
    Keyword,
    /// A string holding a hyphenated UUID.
    Uuid,
}

impl TypeTag {
    /// Every tag, in declaration order.
    pub const ALL: [TypeTag; 14] = [
        Self::Integer,
        Self::Float,
        Self::Number,
        Self::String,
        Self::Boolean,
        Self::Atom,
        Self::List,
        Self::Map,
        Self::Tuple,
        Self::Function,
        Self::Struct,
        Self::Module,
        Self::Keyword,
        Self::Uuid,
    ];

    /// The tag's name as written in constraint specs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Atom => "atom",
            Self::List => "list",
            Self::Map => "map",
            Self::Tuple => "tuple",
            Self::Function => "function",
            Self::Struct => "struct",
            Self::Module => "module",
            Self::Keyword => "keyword",
            Self::Uuid => "uuid",
        }
    }

    /// Returns true when `value` has the shape this tag names.
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::Integer => matches!(value, Value::Integer(_)),
            Self::Float => matches!(value, Value::Float(_)),
            Self::Number => matches!(value, Value::Integer(_) | Value::Float(_)),
            Self::String => matches!(value, Value::String(_)),
            Self::Boolean => matches!(value, Value::Bool(_)),
            Self::Atom => matches!(value, Value::Atom(_)),
            Self::List => matches!(value, Value::List(_)),
            Self::Map => matches!(value, Value::Map(_) | Value::Struct(_)),
            Self::Tuple => matches!(value, Value::Tuple(_)),
            Self::Function => matches!(value, Value::Function(_)),
            Self::Struct => matches!(value, Value::Struct(_)),
            Self::Module => matches!(value, Value::Module(_)),
            Self::Keyword => value.is_keyword_list(),
            Self::Uuid => value.as_str().is_some_and(is_hyphenated_uuid),
        }
    }
}

fn is_hyphenated_uuid(s: &str) -> bool {
    s.len() == uuid::fmt::Hyphenated::LENGTH && uuid::Uuid::try_parse(s).is_ok()
}

impl FromStr for TypeTag {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.name() == s)
            .ok_or_else(|| CheckError::UnknownType(s.to_owned()))
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Requires the value of `field` to have the shape `expected`.
///
/// Passes when the field is absent; pair with
/// [`check_required`](super::check_required) to enforce presence.
pub fn check_type<R>(record: &R, field: &FieldKey, expected: TypeTag) -> CheckResult
where
    R: Record + ?Sized,
{
    let result = match record.lookup(field) {
        Some(value) if !expected.matches(value) => CheckResult::Invalid(FieldError::new(
            field,
            "type",
            format!("has wrong type; expected type: {expected}, got: {value}"),
        )),
        _ => CheckResult::Valid,
    };
    report(CheckKind::Type, field, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Callable, StructValue};
    use rstest::rstest;

    fn a(name: &str) -> FieldKey {
        FieldKey::atom(name)
    }

    #[rstest]
    #[case(TypeTag::Integer, Value::from(1), true)]
    #[case(TypeTag::Integer, Value::from(1.0), false)]
    #[case(TypeTag::Float, Value::from(1.0), true)]
    #[case(TypeTag::Float, Value::from(1), false)]
    #[case(TypeTag::Number, Value::from(1), true)]
    #[case(TypeTag::Number, Value::from(1.5), true)]
    #[case(TypeTag::Number, Value::from("1"), false)]
    #[case(TypeTag::String, Value::from("x"), true)]
    #[case(TypeTag::String, Value::atom("x"), false)]
    #[case(TypeTag::Boolean, Value::from(false), true)]
    #[case(TypeTag::Boolean, Value::Nil, false)]
    #[case(TypeTag::Atom, Value::atom("ok"), true)]
    #[case(TypeTag::Atom, Value::Nil, false)]
    #[case(TypeTag::Atom, Value::from(true), false)]
    #[case(TypeTag::List, Value::from(vec![1]), true)]
    #[case(TypeTag::List, Value::tuple([1]), false)]
    #[case(TypeTag::Map, Value::map([("a", 1)]), true)]
    #[case(TypeTag::Map, Value::from(StructValue::new("User")), true)]
    #[case(TypeTag::Tuple, Value::tuple([1, 2]), true)]
    #[case(TypeTag::Struct, Value::from(StructValue::new("User")), true)]
    #[case(TypeTag::Struct, Value::map([("a", 1)]), false)]
    #[case(TypeTag::Module, Value::module("User"), true)]
    #[case(TypeTag::Module, Value::atom("user"), false)]
    #[case(TypeTag::Keyword, Value::keyword([("a", 1)]), true)]
    #[case(TypeTag::Keyword, Value::List(vec![]), true)]
    #[case(TypeTag::Keyword, Value::from(vec![1]), false)]
    #[case(TypeTag::Uuid, Value::from("67e55044-10b1-426f-9247-bb680e5fe0c8"), true)]
    #[case(TypeTag::Uuid, Value::from("67e5504410b1426f9247bb680e5fe0c8"), false)]
    #[case(TypeTag::Uuid, Value::from("not-a-uuid"), false)]
    fn tag_matches(#[case] tag: TypeTag, #[case] value: Value, #[case] expected: bool) {
        assert_eq!(tag.matches(&value), expected, "{tag} vs {value}");
    }

    #[test]
    fn function_tag() {
        let f = Value::from(Callable::new(0, |_| Value::Nil));
        assert!(TypeTag::Function.matches(&f));
        assert!(!TypeTag::Function.matches(&Value::atom("f")));
    }

    #[test]
    fn tags_parse_from_names() {
        for tag in TypeTag::ALL {
            assert_eq!(tag.name().parse::<TypeTag>().ok(), Some(tag));
        }
        assert!(matches!(
            "decimal".parse::<TypeTag>(),
            Err(CheckError::UnknownType(name)) if name == "decimal"
        ));
    }

    #[test]
    fn absent_field_passes_any_tag() {
        let record: Vec<(FieldKey, Value)> = Vec::new();
        for tag in TypeTag::ALL {
            assert!(check_type(&record, &a("x"), tag).is_valid());
        }
    }

    #[test]
    fn mismatch_names_expected_type_and_value() {
        let record = vec![(a("x"), Value::from("5"))];
        let result = check_type(&record, &a("x"), TypeTag::Integer);
        assert_eq!(
            result,
            CheckResult::Invalid(FieldError::new(
                &a("x"),
                "type",
                r#"has wrong type; expected type: integer, got: "5""#
            ))
        );
    }

    #[test]
    fn stored_nil_is_checked() {
        let record = vec![(a("x"), Value::Nil)];
        assert!(!check_type(&record, &a("x"), TypeTag::Integer).is_valid());
    }
}
