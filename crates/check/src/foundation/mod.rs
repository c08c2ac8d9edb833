//! Core types of the check engine
//!
//! - **Values**: [`Value`], [`FieldKey`], [`StructValue`], [`Callable`], [`Number`]
//! - **Records**: the [`Record`] trait with [`get`] and [`is_present`]
//! - **Results**: [`CheckResult`], [`FieldError`], [`CheckError`]
//!
//! Everything here is plain data. Checks borrow records read-only, so a
//! record can be checked from several threads at once.

mod error;
mod record;
pub mod render;
mod value;

pub use error::{CheckError, CheckResult, FieldError};
pub use record::{Record, get, is_present};
pub use value::{Callable, FieldKey, Number, StructValue, Value};
