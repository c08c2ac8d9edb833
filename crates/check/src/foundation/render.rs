//! Inspect-style rendering of values for error messages.
//!
//! Strings are quoted, atoms carry a leading colon, lists use brackets,
//! tuples braces and maps `%{...}`:
//!
//! ```
//! use nebula_check::foundation::Value;
//!
//! let v = Value::map([("name", Value::from("ann"))]);
//! assert_eq!(v.to_string(), r#"%{"name" => "ann"}"#);
//! assert_eq!(Value::from(vec![1, 2]).to_string(), "[1, 2]");
//! assert_eq!(Value::atom("ok").to_string(), ":ok");
//! ```

use std::fmt::{self, Display, Write as _};

use super::value::{FieldKey, Value};

/// Placeholder rendered for a field that has no entry in the record.
pub const ABSENT: &str = "(absent)";

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n:?}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Atom(name) => write!(f, ":{name}"),
            Self::List(items) => {
                f.write_char('[')?;
                write_seq(f, items)?;
                f.write_char(']')
            }
            Self::Tuple(items) => {
                f.write_char('{')?;
                write_seq(f, items)?;
                f.write_char('}')
            }
            Self::Map(map) => {
                f.write_str("%{")?;
                write_entries(f, map.iter())?;
                f.write_char('}')
            }
            Self::Struct(s) => {
                write!(f, "%{}{{", s.name())?;
                for (i, (key, value)) in s.fields().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_char('}')
            }
            Self::Module(name) => f.write_str(name),
            Self::Function(callable) => write!(f, "#Function<arity/{}>", callable.arity()),
        }
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_entries<'a>(
    f: &mut fmt::Formatter<'_>,
    entries: impl Iterator<Item = (&'a FieldKey, &'a Value)>,
) -> fmt::Result {
    for (i, (key, value)) in entries.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        match key {
            FieldKey::Atom(name) => write!(f, "{name}: {value}")?,
            FieldKey::Str(name) => write!(f, "{name:?} => {value}")?,
        }
    }
    Ok(())
}

/// Renders a looked-up value, using [`ABSENT`] for a missing entry.
pub(crate) fn render(value: Option<&Value>) -> String {
    value.map_or_else(|| ABSENT.to_owned(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Callable, StructValue};
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_scalars() {
        assert_eq!(Value::Nil.to_string(), "nil");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Integer(-4).to_string(), "-4");
        assert_eq!(Value::Float(1.0).to_string(), "1.0");
        assert_eq!(Value::from("a\"b").to_string(), r#""a\"b""#);
        assert_eq!(Value::module("Accounts.User").to_string(), "Accounts.User");
    }

    #[test]
    fn renders_containers() {
        let v = Value::tuple([Value::atom("error"), Value::from("boom")]);
        assert_eq!(v.to_string(), r#"{:error, "boom"}"#);

        let mut map = indexmap::IndexMap::new();
        map.insert(FieldKey::atom("a"), Value::from(1));
        map.insert(FieldKey::string("b"), Value::List(vec![]));
        assert_eq!(Value::Map(map).to_string(), r#"%{a: 1, "b" => []}"#);
    }

    #[test]
    fn renders_structs_and_functions() {
        let user = StructValue::new("User").with_field("name", "ann");
        assert_eq!(Value::from(user).to_string(), r#"%User{name: "ann"}"#);

        let f = Callable::new(2, |_| Value::Nil);
        assert_eq!(Value::from(f).to_string(), "#Function<arity/2>");
    }

    #[test]
    fn renders_absent_placeholder() {
        assert_eq!(render(None), ABSENT);
        assert_eq!(render(Some(&Value::Nil)), "nil");
    }
}
