/// Syntax errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Syntax errors include unterminated literals, unexpected characters,
/// unexpected or missing tokens, and trailing input. Every variant carries
/// the offending 1-based line and column.
pub mod syntax_error;

/// Evaluation errors.
///
/// Contains all error types that can be raised while walking an AST:
/// undefined variables, operator type mismatches, division by zero,
/// out-of-bounds indexing, missing keys and fields, incomparable types, and
/// malformed macro invocations.
pub mod eval_error;

/// Registry errors.
///
/// Errors raised by function/method dispatch: unknown names and invalid
/// argument shapes. They carry no source position of their own; the
/// interpreter wraps them with the call site's line.
pub mod registry_error;

pub use eval_error::EvalError;
pub use registry_error::RegistryError;
pub use syntax_error::SyntaxError;
