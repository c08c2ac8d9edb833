//! JSON interop.
//!
//! - [`Value`] converts from `serde_json::Value`, so JSON documents can be
//!   checked directly. Object keys become string field keys.
//! - [`FieldError`] and [`CheckResult`] serialize to their canonical shapes:
//!   `{"field": "message"}`, `true`, or an array of those for per-clause
//!   results.
//!
//! # Examples
//!
//! ```
//! use nebula_check::prelude::*;
//! use serde_json::json;
//!
//! let record = Value::from(json!({"age": 5}));
//! let age = FieldKey::string("age");
//! let clauses = [NumericClause::new("gte", 3), NumericClause::new("lt", 4)];
//! let result = check_numericality(&record, &age, &clauses);
//! assert_eq!(result.to_json_value(), json!([true, {"age": "must be less than 4; got: 5"}]));
//! ```

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::foundation::{CheckResult, FieldError, FieldKey, Value};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Nil,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => n.as_f64().map_or(Self::Nil, Self::Float),
            },
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Map(
                map.into_iter()
                    .map(|(k, v)| (FieldKey::Str(k), Self::from(v)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.field.name(), self.message.as_ref())?;
        map.end()
    }
}

/// Serializes one clause outcome as `true` or its error mapping.
struct Outcome<'a>(&'a Result<(), FieldError>);

impl Serialize for Outcome<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Ok(()) => serializer.serialize_bool(true),
            Err(error) => error.serialize(serializer),
        }
    }
}

impl Serialize for CheckResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Valid => serializer.serialize_bool(true),
            Self::Invalid(error) => error.serialize(serializer),
            Self::Clauses(outcomes) => {
                let mut seq = serializer.serialize_seq(Some(outcomes.len()))?;
                for outcome in outcomes {
                    seq.serialize_element(&Outcome(outcome))?;
                }
                seq.end()
            }
        }
    }
}

impl FieldError {
    /// Converts the error to its `{"field": "message"}` JSON form.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let mut map = serde_json::Map::with_capacity(1);
        map.insert(
            self.field.name().to_owned(),
            serde_json::Value::String(self.message.to_string()),
        );
        serde_json::Value::Object(map)
    }
}

impl CheckResult {
    /// Converts the result to JSON: `true`, an error mapping, or an array of
    /// those.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let outcome = |o: &Result<(), FieldError>| match o {
            Ok(()) => serde_json::Value::Bool(true),
            Err(error) => error.to_json_value(),
        };
        match self {
            Self::Valid => serde_json::Value::Bool(true),
            Self::Invalid(error) => error.to_json_value(),
            Self::Clauses(outcomes) => {
                serde_json::Value::Array(outcomes.iter().map(outcome).collect())
            }
        }
    }
}
