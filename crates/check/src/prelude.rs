//! Prelude module for convenient imports.
//!
//! Provides a single `use nebula_check::prelude::*;` import that brings in
//! the value model, record access, results and every check.

// ============================================================================
// FOUNDATION: Values, records, results
// ============================================================================

pub use crate::foundation::{
    Callable, CheckError, CheckResult, FieldError, FieldKey, Number, Record, StructValue, Value,
    get, is_present,
};

// ============================================================================
// CHECKS
// ============================================================================

pub use crate::checks::{
    Check, CheckKind, LengthBound, LengthClause, LengthComparator, NumberComparator,
    NumericClause, Predicate, StructSpec, TypeTag, Verdict, check_allow_nil, check_equals,
    check_exactly, check_format, check_func, check_in, check_length, check_not_in,
    check_numericality, check_regex, check_required, check_struct, check_subset_of, check_type,
};

pub use crate::record;
