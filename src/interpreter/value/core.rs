use std::{cmp::Ordering, rc::Rc};

use indexmap::IndexMap;

use crate::{
    ast::LiteralValue,
    error::EvalError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{map_key::MapKey, number::Number},
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the types that can appear while evaluating an
/// expression. Values are always fully constructed before use; there is no
/// partially-built intermediate state, and equality and comparison never
/// mutate their operands.
#[derive(Debug, Clone)]
pub enum Value {
    /// The null value.
    Null,
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators, logical operations, and presence
    /// tests, and required as the condition of `?:` and the operands of
    /// `&&`/`||`.
    Bool(bool),
    /// A numeric value carrying an integral/non-integral form tag.
    Number(Number),
    /// A string value.
    String(String),
    /// A bytes value, stored as decoded text.
    Bytes(String),
    /// An ordered list of values.
    List(Rc<Vec<Self>>),
    /// A mapping from keys to values. Insertion order is preserved for
    /// enumeration but carries no semantic weight.
    Map(Rc<IndexMap<MapKey, Self>>),
    /// A struct: ordered named fields plus an optional type tag.
    Struct(Rc<StructValue>),
}

/// The payload of a [`Value::Struct`].
#[derive(Debug, Clone, PartialEq)]
pub struct StructValue {
    /// The struct's type tag, if the literal named one.
    pub type_name: Option<String>,
    /// The struct's fields, in declaration order.
    pub fields:    IndexMap<String, Value>,
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Number(Number::from(v))
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::Number(Number::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(Number::from(v))
    }
}

impl From<Number> for Value {
    fn from(v: Number) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(v))
    }
}

impl From<IndexMap<MapKey, Self>> for Value {
    fn from(v: IndexMap<MapKey, Self>) -> Self {
        Self::Map(Rc::new(v))
    }
}

impl From<StructValue> for Value {
    fn from(v: StructValue) -> Self {
        Self::Struct(Rc::new(v))
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Null => Self::Null,
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::Int(i) => (*i).into(),
            LiteralValue::UInt(u) => (*u).into(),
            LiteralValue::Double(d) => (*d).into(),
            LiteralValue::String(s) => Self::String(s.clone()),
            LiteralValue::Bytes(b) => Self::Bytes(b.clone()),
        }
    }
}

impl Value {
    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for conditions in `?:` expressions and logical operations.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: The boolean value.
    /// - `Err(EvalError::TypeMismatch)`: If not boolean.
    pub fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            other => Err(EvalError::TypeMismatch { details: format!("expected bool, found {}",
                                                                    other.kind()),
                                                   line }),
        }
    }

    /// Converts the value to a [`Number`], or returns an error if not
    /// numeric.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(Number)`: The numeric value.
    /// - `Err(EvalError::TypeMismatch)`: If not numeric.
    pub fn as_number(&self, line: usize) -> EvalResult<Number> {
        match self {
            Self::Number(n) => Ok(*n),
            other => Err(EvalError::TypeMismatch { details: format!("expected a number, found {}",
                                                                    other.kind()),
                                                   line }),
        }
    }

    /// Borrows the value's elements, or returns an error if not a list.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(&Vec<Value>)`: If the value is a list.
    /// - `Err(EvalError::TypeMismatch)`: If not a list.
    pub fn as_list(&self, line: usize) -> EvalResult<&Vec<Self>> {
        match self {
            Self::List(v) => Ok(v),
            other => Err(EvalError::TypeMismatch { details: format!("expected a list, found {}",
                                                                    other.kind()),
                                                   line }),
        }
    }

    /// The kind of this value, as reported in error messages and by the
    /// standard registry's type classifier.
    ///
    /// ## Example
    /// ```
    /// use sieva::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from(2u64).kind(), "uint");
    /// assert_eq!(Value::Null.kind(), "null");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(n) => n.type_name(),
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Struct(_) => "struct",
        }
    }

    /// Returns `true` if the value is [`Bool`](Self::Bool) `true`.
    #[must_use]
    pub const fn is_true(&self) -> bool {
        matches!(self, Self::Bool(true))
    }
}

/// Orders two values under the engine's single total-order comparator.
///
/// The comparator is used by `<`, `<=`, `>`, `>=` and by the standard
/// registry's `max`/`min`. It is stricter than deep equality:
///
/// - `null` orders before any non-null value and equals only `null`;
/// - numbers compare by value, regardless of form tag;
/// - strings compare lexicographically;
/// - booleans order `false` before `true`;
/// - lists compare element-wise in order, then by length when all compared
///   elements are equal.
///
/// Any other type pairing has no order and yields `None`.
///
/// ## Example
/// ```
/// use std::cmp::Ordering;
///
/// use sieva::interpreter::value::core::{Value, total_order};
///
/// let a = Value::from(vec![Value::from(1i64), Value::from(2i64)]);
/// let b = Value::from(vec![Value::from(1i64), Value::from(2i64), Value::from(3i64)]);
///
/// assert_eq!(total_order(&a, &b), Some(Ordering::Less));
/// assert_eq!(total_order(&Value::Null, &a), Some(Ordering::Less));
/// assert_eq!(total_order(&Value::from(true), &Value::from(1i64)), None);
/// ```
#[must_use]
pub fn total_order(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Null, Value::Null) => Some(Ordering::Equal),
        (Value::Null, _) => Some(Ordering::Less),
        (_, Value::Null) => Some(Ordering::Greater),
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::List(a), Value::List(b)) => {
            for (x, y) in a.iter().zip(b.iter()) {
                match total_order(x, y)? {
                    Ordering::Equal => {},
                    other => return Some(other),
                }
            }
            Some(a.len().cmp(&b.len()))
        },
        _ => None,
    }
}

impl PartialEq for Value {
    /// Deep structural equality. It never raises: type mismatches (other
    /// than the numeric case, which compares by value across form tags)
    /// simply yield `false`. Map and struct comparison ignores key order.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) | (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Struct(a), Self::Struct(b)) => a == b,
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) | Self::Bytes(s) => write!(f, "{s}"),
            Self::List(elements) => {
                write!(f, "[")?;

                for (index, value) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Map(entries) => {
                write!(f, "{{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
            Self::Struct(s) => {
                if let Some(name) = &s.type_name {
                    write!(f, "{name}")?;
                }
                write!(f, "{{")?;
                for (index, (field, value)) in s.fields.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{field}: {value}")?;
                }
                write!(f, "}}")
            },
        }
    }
}
