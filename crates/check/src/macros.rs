//! Macros for building records with minimal boilerplate.

/// Builds an ordered-pairs record with atom keys.
///
/// Each value goes through `Value::from`, so plain Rust literals work.
///
/// # Examples
///
/// ```
/// use nebula_check::prelude::*;
///
/// let record = record! { name: "ann", age: 31, nickname: Value::Nil };
/// assert_eq!(get(&record, &FieldKey::atom("age")), Some(&Value::Integer(31)));
/// assert!(is_present(&record, &FieldKey::atom("nickname")));
///
/// let empty = record! {};
/// assert!(!is_present(&empty, &FieldKey::atom("name")));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        ::std::vec::Vec::<($crate::foundation::FieldKey, $crate::foundation::Value)>::new()
    };
    ($($key:ident : $value:expr),+ $(,)?) => {
        ::std::vec![
            $((
                $crate::foundation::FieldKey::atom(::std::stringify!($key)),
                $crate::foundation::Value::from($value),
            )),+
        ]
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::{FieldKey, Value};

    #[test]
    fn builds_pairs_in_order() {
        let record = record! { b: 1, a: "x", };
        assert_eq!(
            record,
            vec![
                (FieldKey::atom("b"), Value::Integer(1)),
                (FieldKey::atom("a"), Value::from("x")),
            ]
        );
    }
}
