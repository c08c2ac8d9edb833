//! Dynamic values and field identifiers
//!
//! Records hold [`Value`]s keyed by [`FieldKey`]s. Equality on [`Value`] is
//! strict: an integer never equals a float, whatever their magnitude. Numeric
//! comparison clauses go through [`Number`] instead, which compares across
//! the two representations.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

// ============================================================================
// FIELD KEY
// ============================================================================

/// Identifier of a field in a record.
///
/// String and atom identifiers are never coerced into each other:
/// `FieldKey::string("a") != FieldKey::atom("a")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKey {
    /// String-like identifier.
    Str(String),
    /// Symbolic identifier.
    Atom(String),
}

impl FieldKey {
    /// Creates a string identifier.
    pub fn string(name: impl Into<String>) -> Self {
        Self::Str(name.into())
    }

    /// Creates an atom identifier.
    pub fn atom(name: impl Into<String>) -> Self {
        Self::Atom(name.into())
    }

    /// Returns the textual name, regardless of the identifier kind.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Str(name) | Self::Atom(name) => name,
        }
    }

    /// Returns true for atom identifiers.
    #[must_use]
    pub fn is_atom(&self) -> bool {
        matches!(self, Self::Atom(_))
    }
}

impl From<&str> for FieldKey {
    fn from(name: &str) -> Self {
        Self::Str(name.to_owned())
    }
}

impl From<String> for FieldKey {
    fn from(name: String) -> Self {
        Self::Str(name)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// VALUE
// ============================================================================

/// A dynamically typed value stored in a record.
///
/// `Display` renders the inspect form used in error messages
/// (see [`crate::foundation::render`]).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent-equivalent stored value.
    Nil,
    /// Boolean.
    Bool(bool),
    /// Integer.
    Integer(i64),
    /// Floating point number.
    Float(f64),
    /// Text, measured in characters.
    String(String),
    /// Symbolic constant.
    Atom(String),
    /// Variable-length sequence.
    List(Vec<Value>),
    /// Fixed-size sequence.
    Tuple(Vec<Value>),
    /// Map keyed by field identifiers. Key order is irrelevant for equality.
    Map(IndexMap<FieldKey, Value>),
    /// Instance of a nominal record type.
    Struct(StructValue),
    /// Reference to a named module or type.
    Module(String),
    /// Function value.
    Function(Callable),
}

impl Value {
    /// Creates an atom.
    pub fn atom(name: impl Into<String>) -> Self {
        Self::Atom(name.into())
    }

    /// Creates a module reference.
    pub fn module(name: impl Into<String>) -> Self {
        Self::Module(name.into())
    }

    /// Creates a tuple from its elements.
    pub fn tuple<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::Tuple(items.into_iter().map(Into::into).collect())
    }

    /// Creates a map from `(key, value)` pairs.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<FieldKey>,
        V: Into<Value>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Creates a keyword list: a list of `{:key, value}` tuples.
    pub fn keyword<I, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, V)>,
        V: Into<Value>,
    {
        Self::List(
            entries
                .into_iter()
                .map(|(k, v)| Self::Tuple(vec![Self::atom(k), v.into()]))
                .collect(),
        )
    }

    /// Returns true for a stored nil.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns the numeric view of integers and floats.
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Integer(n) => Some(Number::Int(*n)),
            Self::Float(n) => Some(Number::Float(*n)),
            _ => None,
        }
    }

    /// Returns the text of a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true for a list whose elements are all two-element tuples
    /// keyed by an atom. The empty list qualifies.
    #[must_use]
    pub fn is_keyword_list(&self) -> bool {
        match self {
            Self::List(items) => items.iter().all(|item| {
                matches!(item, Self::Tuple(pair) if matches!(pair.as_slice(), [Self::Atom(_), _]))
            }),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Integer(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Integer(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

impl From<IndexMap<FieldKey, Value>> for Value {
    fn from(map: IndexMap<FieldKey, Value>) -> Self {
        Self::Map(map)
    }
}

impl From<StructValue> for Value {
    fn from(s: StructValue) -> Self {
        Self::Struct(s)
    }
}

impl From<Callable> for Value {
    fn from(f: Callable) -> Self {
        Self::Function(f)
    }
}

// ============================================================================
// STRUCT VALUE
// ============================================================================

/// An instance of a nominal record type.
#[derive(Debug, Clone, PartialEq)]
pub struct StructValue {
    name: String,
    fields: IndexMap<String, Value>,
}

impl StructValue {
    /// Creates an instance of `name` with no fields set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Sets a field.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// The nominal type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field values, in insertion order.
    #[must_use]
    pub fn fields(&self) -> &IndexMap<String, Value> {
        &self.fields
    }

    /// Looks up one field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

// ============================================================================
// CALLABLE
// ============================================================================

type CallableFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A function value. Two callables are equal only when they share the same
/// underlying closure.
#[derive(Clone)]
pub struct Callable {
    arity: usize,
    inner: Arc<CallableFn>,
}

impl Callable {
    /// Wraps a closure taking `arity` arguments.
    pub fn new<F>(arity: usize, f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            arity,
            inner: Arc::new(f),
        }
    }

    /// Number of arguments the function expects.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Invokes the function.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.inner)(args)
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// NUMBER
// ============================================================================

/// A numeric threshold or operand.
///
/// Unlike [`Value`], equality and ordering compare across integer and float:
/// `Number::Int(5) == Number::Float(5.0)`.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// Integer.
    Int(i64),
    /// Floating point.
    Float(f64),
}

impl Number {
    /// Returns the value as a float.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(n) => n as f64,
            Self::Float(n) => n,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(&b)),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(&b),
            (Self::Int(a), Self::Float(b)) => cmp_int_float(a, b),
            (Self::Float(a), Self::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
        }
    }
}

/// Compares an integer with a float without rounding the integer.
fn cmp_int_float(int: i64, float: f64) -> Option<Ordering> {
    // 2^63, the first float above every i64.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if float.is_nan() {
        return None;
    }
    if float >= LIMIT {
        return Some(Ordering::Less);
    }
    if float < -LIMIT {
        return Some(Ordering::Greater);
    }
    // -2^63 <= whole < 2^63, so the cast is exact.
    let whole = float.trunc();
    match int.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(float - whole)),
        unequal => Some(unequal),
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n:?}"),
        }
    }
}
