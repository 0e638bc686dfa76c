use ordered_float::OrderedFloat;

use crate::interpreter::value::core::Value;

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
const MAX_SAFE_INT: f64 = 9_007_199_254_740_991.0;

/// Enum representing values allowed as map keys.
///
/// `MapKey` is the hashable projection of a [`Value`]: null, booleans,
/// numbers, strings, and bytes may key a map; lists, maps, and structs may
/// not. Numeric keys are normalized so that numerically-equal values (`1`,
/// `1u`, `1.0`) produce the same key, keeping map equality consistent with
/// value equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MapKey {
    /// The `null` key.
    Null,
    /// A boolean key such as `true`.
    Bool(bool),
    /// An integral numeric key such as `42`.
    Int(i64),
    /// A non-integral numeric key such as `1.5`.
    Double(OrderedFloat<f64>),
    /// A string key such as `"name"`.
    String(String),
    /// A bytes key.
    Bytes(String),
}

impl MapKey {
    /// Projects a value into a map key, or `None` when the value's type
    /// cannot key a map.
    ///
    /// ## Example
    /// ```
    /// use sieva::interpreter::value::{core::Value, map_key::MapKey};
    ///
    /// assert_eq!(MapKey::from_value(&Value::from(1i64)), Some(MapKey::Int(1)));
    /// // Numerically-equal keys normalize to the same representation.
    /// assert_eq!(MapKey::from_value(&Value::from(1.0)), Some(MapKey::Int(1)));
    /// assert_eq!(MapKey::from_value(&Value::from(vec![Value::Null])), None);
    /// ```
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(Self::Null),
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Number(n) => Some(Self::from_numeric(n.value())),
            Value::String(s) => Some(Self::String(s.clone())),
            Value::Bytes(b) => Some(Self::Bytes(b.clone())),
            Value::List(_) | Value::Map(_) | Value::Struct(_) => None,
        }
    }

    /// Normalizes a numeric key: integral values within the exactly
    /// representable range become `Int`, everything else stays `Double`.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    fn from_numeric(value: f64) -> Self {
        if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INT {
            Self::Int(value as i64)
        } else {
            Self::Double(OrderedFloat(value))
        }
    }
}

impl From<&str> for MapKey {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl std::fmt::Display for MapKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Double(d) => write!(f, "{d}"),
            Self::String(s) | Self::Bytes(s) => write!(f, "{s}"),
        }
    }
}
