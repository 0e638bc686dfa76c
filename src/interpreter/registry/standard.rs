use std::cmp::Ordering;

use regex::Regex;

use crate::{
    error::RegistryError,
    interpreter::{
        registry::{FunctionRegistry, RegistryResult},
        value::{
            core::{Value, total_order},
            number::{Number, NumberForm},
        },
    },
};

/// Type alias for free-function handlers.
///
/// A handler receives the evaluated argument values (arity already checked)
/// and returns the result.
type FunctionImpl = fn(&[Value]) -> RegistryResult<Value>;

/// Type alias for method handlers.
///
/// A handler receives the evaluated target and argument values.
type MethodImpl = fn(&Value, &[Value]) -> RegistryResult<Value>;

/// Specifies the allowed number of arguments for a registry entry.
#[derive(Clone, Copy)]
enum Arity {
    /// The entry must receive exactly this many arguments.
    Exact(usize),
    /// The entry accepts this many arguments or more.
    AtLeast(usize),
}

impl Arity {
    /// Tests whether the given argument count satisfies this constraint.
    const fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::AtLeast(m) => n >= *m,
        }
    }

    /// Human-readable form used in invalid-argument errors.
    fn describe(&self) -> String {
        match self {
            Self::Exact(m) => format!("exactly {m} argument(s)"),
            Self::AtLeast(m) => format!("at least {m} argument(s)"),
        }
    }
}

/// Defines the standard free functions as a lookup table plus a public name
/// list.
macro_rules! standard_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct FunctionDef {
            name:  &'static str,
            arity: Arity,
            func:  FunctionImpl,
        }
        static FUNCTION_TABLE: &[FunctionDef] = &[
            $(
                FunctionDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of the free functions the standard registry provides.
        pub const STANDARD_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

/// Defines the standard methods as a lookup table plus a public name list.
macro_rules! standard_methods {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct MethodDef {
            name:  &'static str,
            arity: Arity,
            func:  MethodImpl,
        }
        static METHOD_TABLE: &[MethodDef] = &[
            $(
                MethodDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of the methods the standard registry provides.
        pub const STANDARD_METHODS: &[&str] = &[
            $($name,)*
        ];
    };
}

standard_functions! {
    "size"    => { arity: Arity::Exact(1), func: size },
    "int"     => { arity: Arity::Exact(1), func: to_int },
    "uint"    => { arity: Arity::Exact(1), func: to_uint },
    "double"  => { arity: Arity::Exact(1), func: to_double },
    "string"  => { arity: Arity::Exact(1), func: to_string },
    "bool"    => { arity: Arity::Exact(1), func: to_bool },
    "type"    => { arity: Arity::Exact(1), func: type_of },
    "matches" => { arity: Arity::Exact(2), func: |args| matches_impl("matches", &args[0], &args[1]) },
    "max"     => { arity: Arity::AtLeast(1), func: |args| extremum("max", args, Ordering::Greater) },
    "min"     => { arity: Arity::AtLeast(1), func: |args| extremum("min", args, Ordering::Less) },
}

standard_methods! {
    "size"       => { arity: Arity::Exact(0), func: |target, _| size_of("size", target) },
    "contains"   => { arity: Arity::Exact(1), func: contains },
    "startsWith" => { arity: Arity::Exact(1), func: starts_with },
    "endsWith"   => { arity: Arity::Exact(1), func: ends_with },
    "lower"      => { arity: Arity::Exact(0), func: lower },
    "upper"      => { arity: Arity::Exact(0), func: upper },
    "trim"       => { arity: Arity::Exact(0), func: trim },
    "replace"    => { arity: Arity::Exact(2), func: replace },
    "split"      => { arity: Arity::Exact(1), func: split },
    "matches"    => { arity: Arity::Exact(1), func: |target, args| matches_impl("matches", target, &args[0]) },
}

/// The reference [`FunctionRegistry`] implementation.
///
/// Free functions: `size`, the `int`/`uint`/`double`/`string`/`bool`
/// conversions, the `type` classifier, `matches` (regex search, not
/// full-match), and variadic `max`/`min` using the same total-order
/// comparator as the relational operators. Methods: `size` on any sized
/// value and the string utilities `contains`, `startsWith`, `endsWith`,
/// `lower`, `upper`, `trim`, `replace`, `split`, and `matches`.
///
/// The registry is stateless; hosts extend it by wrapping (see
/// [`FunctionRegistry`]).
///
/// ## Example
/// ```
/// use sieva::interpreter::{
///     registry::{FunctionRegistry, standard::StandardRegistry},
///     value::core::Value,
/// };
///
/// let registry = StandardRegistry;
///
/// assert_eq!(registry.call_function("type", &[Value::from(1u64)]).unwrap(),
///            Value::from("uint"));
/// assert_eq!(registry.call_method(&Value::from("Policy"), "lower", &[]).unwrap(),
///            Value::from("policy"));
/// ```
pub struct StandardRegistry;

impl FunctionRegistry for StandardRegistry {
    fn call_function(&self, name: &str, args: &[Value]) -> RegistryResult<Value> {
        let Some(def) = FUNCTION_TABLE.iter().find(|def| def.name == name) else {
            return Err(RegistryError::UnknownFunction { name: name.to_owned(), });
        };

        if !def.arity.check(args.len()) {
            return Err(RegistryError::InvalidArguments { name:    name.to_owned(),
                                                         details: format!("expected {}",
                                                                          def.arity.describe()), });
        }

        (def.func)(args)
    }

    fn call_method(&self, target: &Value, name: &str, args: &[Value]) -> RegistryResult<Value> {
        let Some(def) = METHOD_TABLE.iter().find(|def| def.name == name) else {
            return Err(RegistryError::UnknownMethod { name: name.to_owned(), });
        };

        if !def.arity.check(args.len()) {
            return Err(RegistryError::InvalidArguments { name:    name.to_owned(),
                                                         details: format!("expected {}",
                                                                          def.arity.describe()), });
        }

        (def.func)(target, args)
    }
}

/// Builds the invalid-arguments error shared by the handlers below.
fn invalid(name: &str, details: String) -> RegistryError {
    RegistryError::InvalidArguments { name: name.to_owned(),
                                      details }
}

/// Requires a string value, used for both targets and arguments.
fn expect_string<'a>(name: &str, value: &'a Value) -> RegistryResult<&'a str> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(invalid(name, format!("expected a string, found {}", other.kind()))),
    }
}

/// `size(x)`: string length in characters, list/map/struct element count,
/// and 0 for null.
#[allow(clippy::cast_possible_wrap)]
fn size_of(name: &str, value: &Value) -> RegistryResult<Value> {
    let count = match value {
        Value::Null => 0,
        Value::String(s) | Value::Bytes(s) => s.chars().count(),
        Value::List(items) => items.len(),
        Value::Map(entries) => entries.len(),
        Value::Struct(s) => s.fields.len(),
        other => {
            return Err(invalid(name, format!("{} has no size", other.kind())));
        },
    };
    Ok(Value::from(count as i64))
}

fn size(args: &[Value]) -> RegistryResult<Value> {
    size_of("size", &args[0])
}

/// Parses a string into a numeric value for the conversion functions.
fn parse_numeric(name: &str, text: &str) -> RegistryResult<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| invalid(name, format!("cannot parse '{text}' as a number")))
}

/// `int(x)`: numeric values truncate toward zero; strings are parsed.
fn to_int(args: &[Value]) -> RegistryResult<Value> {
    let value = match &args[0] {
        Value::Number(n) => n.value(),
        Value::String(s) => parse_numeric("int", s)?,
        other => {
            return Err(invalid("int", format!("cannot convert {} to int", other.kind())));
        },
    };
    Ok(Number::new(value.trunc(), NumberForm::Int).into())
}

/// `uint(x)`: like `int(x)` but rejects negative inputs. This conversion is
/// the only place unsignedness is enforced.
fn to_uint(args: &[Value]) -> RegistryResult<Value> {
    let value = match &args[0] {
        Value::Number(n) => n.value(),
        Value::String(s) => parse_numeric("uint", s)?,
        other => {
            return Err(invalid("uint", format!("cannot convert {} to uint", other.kind())));
        },
    };

    if value < 0.0 {
        return Err(invalid("uint", format!("cannot convert negative value {value} to uint")));
    }

    Ok(Number::new(value.trunc(), NumberForm::UInt).into())
}

/// `double(x)`: numeric values keep their value and become non-integral;
/// strings are parsed.
fn to_double(args: &[Value]) -> RegistryResult<Value> {
    let value = match &args[0] {
        Value::Number(n) => n.value(),
        Value::String(s) => parse_numeric("double", s)?,
        other => {
            return Err(invalid("double", format!("cannot convert {} to double", other.kind())));
        },
    };
    Ok(Number::new(value, NumberForm::Double).into())
}

/// `string(x)`: stringifies any value.
fn to_string(args: &[Value]) -> RegistryResult<Value> {
    Ok(Value::String(args[0].to_string()))
}

/// `bool(x)`: booleans pass through; the strings `"true"` and `"false"`
/// convert.
fn to_bool(args: &[Value]) -> RegistryResult<Value> {
    match &args[0] {
        Value::Bool(b) => Ok(Value::Bool(*b)),
        Value::String(s) if s == "true" => Ok(Value::Bool(true)),
        Value::String(s) if s == "false" => Ok(Value::Bool(false)),
        other => Err(invalid("bool", format!("cannot convert {other} to bool"))),
    }
}

/// `type(x)`: the simple type-name classifier. Tagged structs report their
/// type tag.
fn type_of(args: &[Value]) -> RegistryResult<Value> {
    let name = match &args[0] {
        Value::Struct(s) => s.type_name.clone().unwrap_or_else(|| "struct".to_owned()),
        other => other.kind().to_owned(),
    };
    Ok(Value::String(name))
}

/// `matches(text, pattern)`: regex search; the pattern may match anywhere
/// in the text, not only the whole of it.
fn matches_impl(name: &str, target: &Value, pattern: &Value) -> RegistryResult<Value> {
    let text = expect_string(name, target)?;
    let pattern = expect_string(name, pattern)?;

    let regex =
        Regex::new(pattern).map_err(|e| invalid(name, format!("invalid pattern: {e}")))?;

    Ok(Value::Bool(regex.is_match(text)))
}

/// Variadic `max`/`min` using the total-order comparator. The arity table
/// guarantees at least one argument.
fn extremum(name: &str, args: &[Value], keep: Ordering) -> RegistryResult<Value> {
    let mut best = &args[0];

    for candidate in &args[1..] {
        match total_order(candidate, best) {
            Some(ordering) if ordering == keep => best = candidate,
            Some(_) => {},
            None => {
                return Err(invalid(name,
                                   format!("{} and {} are not comparable",
                                           candidate.kind(),
                                           best.kind())));
            },
        }
    }

    Ok(best.clone())
}

/// `s.contains(sub)`: literal substring containment.
fn contains(target: &Value, args: &[Value]) -> RegistryResult<Value> {
    let text = expect_string("contains", target)?;
    let needle = expect_string("contains", &args[0])?;
    Ok(Value::Bool(text.contains(needle)))
}

/// `s.startsWith(prefix)`.
fn starts_with(target: &Value, args: &[Value]) -> RegistryResult<Value> {
    let text = expect_string("startsWith", target)?;
    let prefix = expect_string("startsWith", &args[0])?;
    Ok(Value::Bool(text.starts_with(prefix)))
}

/// `s.endsWith(suffix)`.
fn ends_with(target: &Value, args: &[Value]) -> RegistryResult<Value> {
    let text = expect_string("endsWith", target)?;
    let suffix = expect_string("endsWith", &args[0])?;
    Ok(Value::Bool(text.ends_with(suffix)))
}

/// `s.lower()`: case conversion to lowercase.
fn lower(target: &Value, _args: &[Value]) -> RegistryResult<Value> {
    Ok(Value::String(expect_string("lower", target)?.to_lowercase()))
}

/// `s.upper()`: case conversion to uppercase.
fn upper(target: &Value, _args: &[Value]) -> RegistryResult<Value> {
    Ok(Value::String(expect_string("upper", target)?.to_uppercase()))
}

/// `s.trim()`: strips leading and trailing whitespace.
fn trim(target: &Value, _args: &[Value]) -> RegistryResult<Value> {
    Ok(Value::String(expect_string("trim", target)?.trim().to_owned()))
}

/// `s.replace(old, new)`: replaces every literal occurrence of `old`.
fn replace(target: &Value, args: &[Value]) -> RegistryResult<Value> {
    let text = expect_string("replace", target)?;
    let old = expect_string("replace", &args[0])?;
    let new = expect_string("replace", &args[1])?;
    Ok(Value::String(text.replace(old, new)))
}

/// `s.split(sep)`: splits on a literal separator, yielding a list of
/// strings.
fn split(target: &Value, args: &[Value]) -> RegistryResult<Value> {
    let text = expect_string("split", target)?;
    let separator = expect_string("split", &args[0])?;

    let parts: Vec<Value> = text.split(separator)
                                .map(|part| Value::String(part.to_owned()))
                                .collect();
    Ok(parts.into())
}
