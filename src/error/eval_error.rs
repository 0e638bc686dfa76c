use crate::error::RegistryError;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can be raised during evaluation.
///
/// Every error aborts the evaluation immediately; no partial result is ever
/// returned. The one deliberate non-error outcome is the presence test,
/// where an absent field or variable yields `false` instead of raising.
pub enum EvalError {
    /// Tried to read an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator was applied to operands of unsupported types.
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted modulo by zero.
    ModuloByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to index a list or string outside its bounds.
    IndexOutOfBounds {
        /// The index that was requested.
        index:  i64,
        /// The number of elements in the indexed value.
        length: usize,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// Indexed a map with a key it does not contain.
    UnknownKey {
        /// The missing key, rendered as text.
        key:  String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Selected a field a map or struct does not contain.
    UnknownField {
        /// The missing field name.
        field: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A map or struct literal repeated a key.
    DuplicateKey {
        /// The repeated key, rendered as text.
        key:  String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Two values have no relative order.
    NotComparable {
        /// Details naming the operand types.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A macro call did not have the required shape.
    MalformedMacro {
        /// Details about the violation.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A registry call failed; the underlying error is kept verbatim.
    Registry {
        /// The error raised by the function registry.
        error: RegistryError,
        /// The source line of the call site.
        line:  usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },

            Self::TypeMismatch { details, line } => {
                write!(f, "Error on line {line}: Type mismatch: {details}.")
            },

            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),

            Self::ModuloByZero { line } => write!(f, "Error on line {line}: Modulo by zero."),

            Self::IndexOutOfBounds { index, length, line } => write!(f,
                                                                     "Error on line {line}: Index {index} out of bounds for length {length}."),

            Self::UnknownKey { key, line } => {
                write!(f, "Error on line {line}: No such key: {key}.")
            },

            Self::UnknownField { field, line } => {
                write!(f, "Error on line {line}: No such field: '{field}'.")
            },

            Self::DuplicateKey { key, line } => {
                write!(f, "Error on line {line}: Duplicate key: {key}.")
            },

            Self::NotComparable { details, line } => {
                write!(f, "Error on line {line}: Values are not comparable: {details}.")
            },

            Self::MalformedMacro { details, line } => {
                write!(f, "Error on line {line}: Malformed macro call: {details}.")
            },

            Self::Registry { error, line } => write!(f, "Error on line {line}: {error}"),
        }
    }
}

impl std::error::Error for EvalError {}
