use crate::{error::RegistryError, interpreter::value::core::Value};

/// The standard registry implementation.
///
/// Supplies conversions, the type classifier, size-of, regex search,
/// variadic `max`/`min`, and the string utilities.
pub mod standard;

/// Result type used by function registries.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Host capability providing named free-function and method dispatch.
///
/// The interpreter routes every non-macro call here with its arguments
/// already evaluated, and performs no type introspection of its own beyond
/// that: all argument type checking is the registry's responsibility. A
/// registry is free to raise [`RegistryError`] for unknown names and
/// invalid argument shapes; the interpreter propagates those verbatim,
/// adding only the call site's line.
///
/// Custom behavior composes by wrapping a base implementation and
/// delegating unhandled names to it:
///
/// ```
/// use sieva::interpreter::{
///     registry::{FunctionRegistry, RegistryResult, standard::StandardRegistry},
///     value::core::Value,
/// };
///
/// struct Extended(StandardRegistry);
///
/// impl FunctionRegistry for Extended {
///     fn call_function(&self, name: &str, args: &[Value]) -> RegistryResult<Value> {
///         match name {
///             "answer" => Ok(Value::from(42i64)),
///             _ => self.0.call_function(name, args),
///         }
///     }
///
///     fn call_method(&self, target: &Value, name: &str, args: &[Value]) -> RegistryResult<Value> {
///         self.0.call_method(target, name, args)
///     }
/// }
///
/// let registry = Extended(StandardRegistry);
/// assert_eq!(registry.call_function("answer", &[]).unwrap(), Value::from(42i64));
/// assert_eq!(registry.call_function("size", &[Value::from("abc")]).unwrap(),
///            Value::from(3i64));
/// ```
pub trait FunctionRegistry {
    /// Dispatches a free function call on already-evaluated arguments.
    ///
    /// # Errors
    /// Raises [`RegistryError::UnknownFunction`] for names this registry
    /// does not provide and [`RegistryError::InvalidArguments`] for
    /// argument shapes it rejects.
    fn call_function(&self, name: &str, args: &[Value]) -> RegistryResult<Value>;

    /// Dispatches a method call on an evaluated target and arguments.
    ///
    /// # Errors
    /// Raises [`RegistryError::UnknownMethod`] for names this registry does
    /// not provide and [`RegistryError::InvalidArguments`] for argument
    /// shapes it rejects.
    fn call_method(&self, target: &Value, name: &str, args: &[Value]) -> RegistryResult<Value>;
}
