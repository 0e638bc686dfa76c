#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant carries the 1-based line and column of the offending
/// position. Parsing stops at the first error; no recovery is attempted and
/// no partial tree is ever returned.
pub enum SyntaxError {
    /// Encountered a character that starts no token.
    UnexpectedCharacter {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A string or bytes literal was not closed before end of input (or, for
    /// single-line forms, before the end of the line).
    UnterminatedString {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// An integer literal does not fit its representation.
    NumberOutOfRange {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A specific token was expected but something else was found.
    ExpectedToken {
        /// Description of what was expected.
        expected: String,
        /// The token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Found extra tokens after a complete expression.
    TrailingTokens {
        /// The first extra token.
        token:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { line, column } => {
                write!(f, "Syntax error at {line}:{column}: Unexpected character.")
            },

            Self::UnterminatedString { line, column } => {
                write!(f, "Syntax error at {line}:{column}: Unterminated string literal.")
            },

            Self::NumberOutOfRange { line, column } => {
                write!(f, "Syntax error at {line}:{column}: Numeric literal out of range.")
            },

            Self::UnexpectedToken { token, line, column } => {
                write!(f, "Syntax error at {line}:{column}: Unexpected token '{token}'.")
            },

            Self::ExpectedToken { expected,
                                  found,
                                  line,
                                  column, } => {
                write!(f, "Syntax error at {line}:{column}: Expected {expected}, found '{found}'.")
            },

            Self::UnexpectedEndOfInput { line, column } => {
                write!(f, "Syntax error at {line}:{column}: Unexpected end of input.")
            },

            Self::TrailingTokens { token, line, column } => {
                write!(f, "Syntax error at {line}:{column}: Extra token '{token}' after expression.")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
