//! # nebula-check
//!
//! Field-addressed value checks for Nebula parameter contracts.
//!
//! Given a record (a map or a list of `(key, value)` pairs) and a constraint,
//! each check decides whether one field satisfies the constraint. Failures
//! are data: a [`FieldError`](foundation::FieldError) mapping the field to a
//! message, or for multi-clause checks one outcome per clause.
//!
//! ## Quick Start
//!
//! ```rust
//! use nebula_check::prelude::*;
//!
//! let record = record! { age: 5, name: "ann", nickname: Value::Nil };
//! let age = FieldKey::atom("age");
//!
//! assert!(check_required(&record, &age, true).is_valid());
//! assert!(check_type(&record, &age, TypeTag::Integer).is_valid());
//!
//! let result = check_numericality(
//!     &record,
//!     &age,
//!     &[NumericClause::new("gte", 3), NumericClause::new("lt", 4)],
//! );
//! assert_eq!(result.to_string(), "[true, age: must be less than 4; got: 5]");
//!
//! assert!(!check_allow_nil(&record, &FieldKey::atom("nickname"), false).is_valid());
//! ```
//!
//! ## Absence
//!
//! A missing key is distinct from a stored nil. Only `required` and `in`
//! treat a missing key as a failure; every other check skips it, so presence
//! must be enforced with an explicit `required` check.
//!
//! ## Built-in Checks
//!
//! See [`checks`] for the full table: `required`, `type`, `numericality`,
//! `in`, `not_in`, `format`, `length`, `struct`, `func`, `equals`,
//! `allow_nil` and `subset_of`.

pub mod checks;
pub mod foundation;
#[cfg(feature = "serde")]
pub mod json;
mod macros;
pub mod prelude;
