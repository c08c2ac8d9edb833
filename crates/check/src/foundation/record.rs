//! Keyed lookup over the two record shapes.
//!
//! A record is either map-like (`HashMap`, `BTreeMap`, `IndexMap`, a
//! [`Value::Map`]) or a list of `(key, value)` pairs (`Vec`/slice of pairs, a
//! keyword-list [`Value`]). Checks are written against [`Record`] only.
//!
//! Lookup distinguishes a missing key (`None`) from a stored nil
//! (`Some(&Value::Nil)`).

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;

use super::value::{FieldKey, Value};

/// Keyed lookup with a presence test.
pub trait Record {
    /// Returns the value stored under `field`, or `None` when there is no
    /// entry for it.
    fn lookup(&self, field: &FieldKey) -> Option<&Value>;

    /// Returns true when `field` has an entry, including an entry storing nil.
    fn contains_field(&self, field: &FieldKey) -> bool {
        self.lookup(field).is_some()
    }
}

/// Looks up `field` in `record`.
pub fn get<'a, R>(record: &'a R, field: &FieldKey) -> Option<&'a Value>
where
    R: Record + ?Sized,
{
    record.lookup(field)
}

/// Returns true when `record` has an entry for `field`, whatever its value.
pub fn is_present<R>(record: &R, field: &FieldKey) -> bool
where
    R: Record + ?Sized,
{
    record.contains_field(field)
}

// ============================================================================
// MAP SHAPE
// ============================================================================

impl<S: BuildHasher> Record for HashMap<FieldKey, Value, S> {
    fn lookup(&self, field: &FieldKey) -> Option<&Value> {
        self.get(field)
    }

    fn contains_field(&self, field: &FieldKey) -> bool {
        self.contains_key(field)
    }
}

impl Record for BTreeMap<FieldKey, Value> {
    fn lookup(&self, field: &FieldKey) -> Option<&Value> {
        self.get(field)
    }

    fn contains_field(&self, field: &FieldKey) -> bool {
        self.contains_key(field)
    }
}

impl<S: BuildHasher> Record for IndexMap<FieldKey, Value, S> {
    fn lookup(&self, field: &FieldKey) -> Option<&Value> {
        self.get(field)
    }

    fn contains_field(&self, field: &FieldKey) -> bool {
        self.contains_key(field)
    }
}

// ============================================================================
// PAIRS SHAPE
// ============================================================================

impl Record for [(FieldKey, Value)] {
    fn lookup(&self, field: &FieldKey) -> Option<&Value> {
        self.iter().find(|(key, _)| key == field).map(|(_, value)| value)
    }
}

impl Record for Vec<(FieldKey, Value)> {
    fn lookup(&self, field: &FieldKey) -> Option<&Value> {
        self.as_slice().lookup(field)
    }
}

// ============================================================================
// DYNAMIC VALUE
// ============================================================================

/// A [`Value`] is a record when it is a map or a keyword list. Any other
/// value has no fields.
impl Record for Value {
    fn lookup(&self, field: &FieldKey) -> Option<&Value> {
        match self {
            Self::Map(map) => map.get(field),
            Self::List(items) => {
                let FieldKey::Atom(wanted) = field else {
                    return None;
                };
                if !self.is_keyword_list() {
                    return None;
                }
                items.iter().find_map(|item| match item {
                    Self::Tuple(pair) => match pair.as_slice() {
                        [Self::Atom(key), value] if key == wanted => Some(value),
                        _ => None,
                    },
                    _ => None,
                })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a(name: &str) -> FieldKey {
        FieldKey::atom(name)
    }

    #[test]
    fn stored_nil_is_present() {
        let record = vec![(a("x"), Value::Nil)];
        assert_eq!(get(&record, &a("x")), Some(&Value::Nil));
        assert!(is_present(&record, &a("x")));
        assert!(!is_present(&record, &a("y")));
        assert_eq!(get(&record, &a("y")), None);
    }

    #[test]
    fn string_and_atom_keys_are_distinct() {
        let mut record = HashMap::new();
        record.insert(FieldKey::string("x"), Value::from(1));
        assert!(is_present(&record, &FieldKey::string("x")));
        assert!(!is_present(&record, &a("x")));
    }

    #[test]
    fn pairs_shape_returns_first_match() {
        let record = vec![(a("x"), Value::from(1)), (a("x"), Value::from(2))];
        assert_eq!(get(&record, &a("x")), Some(&Value::Integer(1)));
    }

    #[test]
    fn borrowed_pair_slices_are_records() {
        let pairs = [(a("x"), Value::from(1)), (a("y"), Value::Nil)];
        let slice: &[(FieldKey, Value)] = &pairs;
        assert_eq!(get(slice, &a("x")), Some(&Value::Integer(1)));
        assert!(is_present(slice, &a("y")));
        assert!(!is_present(&slice[..1], &a("y")));
        assert!(crate::checks::check_required(slice, &a("y"), true).is_valid());
    }

    #[test]
    fn btree_and_index_maps() {
        let btree: BTreeMap<_, _> = [(a("x"), Value::from(true))].into_iter().collect();
        assert_eq!(get(&btree, &a("x")), Some(&Value::Bool(true)));

        let index: IndexMap<_, _> = [(a("x"), Value::Nil)].into_iter().collect();
        assert!(is_present(&index, &a("x")));
    }

    #[test]
    fn value_records() {
        let map = Value::map([("x", 1)]);
        assert_eq!(get(&map, &FieldKey::string("x")), Some(&Value::Integer(1)));

        let keyword = Value::keyword([("x", Value::Nil)]);
        assert!(is_present(&keyword, &a("x")));
        assert!(!is_present(&keyword, &FieldKey::string("x")));
    }

    #[test]
    fn unsupported_shapes_have_no_fields() {
        assert!(!is_present(&Value::from(vec![1, 2]), &a("x")));
        assert!(!is_present(&Value::from("x"), &a("x")));
        assert_eq!(get(&Value::Nil, &a("x")), None);
    }

    #[test]
    fn works_through_trait_objects() {
        let record = vec![(a("x"), Value::from(1))];
        let dynamic: &dyn Record = &record;
        assert!(is_present(dynamic, &a("x")));
    }
}
