#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents errors raised by function/method dispatch.
///
/// A registry is free to raise these for names it does not know and for
/// argument shapes it rejects. They carry no source position; the
/// interpreter wraps them in
/// [`EvalError::Registry`](crate::error::EvalError::Registry) together with
/// the line of the call site.
pub enum RegistryError {
    /// Called a free function the registry does not provide.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// Called a method the registry does not provide.
    UnknownMethod {
        /// The name of the method.
        name: String,
    },
    /// A function or method was called with arguments it cannot accept.
    InvalidArguments {
        /// The name of the function or method.
        name:    String,
        /// Details about why the arguments were rejected.
        details: String,
    },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFunction { name } => write!(f, "Unknown function '{name}'."),
            Self::UnknownMethod { name } => write!(f, "Unknown method '{name}'."),
            Self::InvalidArguments { name, details } => {
                write!(f, "Invalid arguments to '{name}': {details}.")
            },
        }
    }
}

impl std::error::Error for RegistryError {}
