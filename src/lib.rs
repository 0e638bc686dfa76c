//! # sieva
//!
//! sieva is an embeddable expression-language engine written in Rust.
//! It tokenizes, parses, and evaluates a small non-Turing-complete
//! expression language over host-supplied data, intended for safely
//! evaluating user- or operator-authored conditions (policy rules,
//! filters, templated predicates) without granting general-purpose program
//! execution.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{collections::HashMap, sync::Arc};

use crate::{
    ast::Expr,
    error::{EvalError, SyntaxError},
    interpreter::{
        evaluator::core::Interpreter,
        parser::core::parse_source,
        registry::{FunctionRegistry, standard::StandardRegistry},
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent
/// the syntactic structure of source code as a tree. The AST is built by
/// the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression node types for all language constructs.
/// - Attaches source locations to AST nodes for error reporting.
/// - Keeps the node set closed so the interpreter can match exhaustively.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including source locations for debugging and
/// user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator,
///   registry).
/// - Attaches line and column information with detailed messages.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and the function registry to provide a complete engine
/// for expression evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, values, and
///   registry.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable conversion routines used by the evaluator,
/// such as turning runtime numbers into list positions and repetition
/// counts without silent surprises.
pub mod util;

/// An immutable pairing of a compiled AST with a bound function registry.
///
/// A `Program` is evaluable repeatedly against different bindings; the AST
/// is never mutated after construction, so a compiled program is safe to
/// share and reuse across independent evaluation calls, including from
/// multiple threads. Each evaluation owns its private variable environment;
/// the engine performs no internal locking.
///
/// ## Example
/// ```
/// use std::collections::HashMap;
///
/// use sieva::{compile, interpreter::value::core::Value};
///
/// let program = compile("[1, 2, 3].filter(x, x % 2 == 1)").unwrap();
/// let result = program.evaluate(&HashMap::new()).unwrap();
///
/// assert_eq!(result, Value::from(vec![Value::from(1i64), Value::from(3i64)]));
/// ```
pub struct Program {
    ast:      Expr,
    registry: Arc<dyn FunctionRegistry + Send + Sync>,
}

impl Program {
    /// Evaluates the program against the given variable bindings.
    ///
    /// The bindings seed a fresh environment owned by this call alone, so
    /// concurrent evaluations of the same program never share mutable
    /// state.
    ///
    /// # Errors
    /// Returns an [`EvalError`] when evaluation raises.
    pub fn evaluate(&self, bindings: &HashMap<String, Value>) -> Result<Value, EvalError> {
        let mut interpreter = Interpreter::with_bindings(self.registry.as_ref(), bindings.clone());
        interpreter.evaluate(&self.ast)
    }

    /// The program's compiled AST.
    #[must_use]
    pub const fn ast(&self) -> &Expr {
        &self.ast
    }
}

/// Compiles `source` into a reusable [`Program`] bound to the standard
/// registry.
///
/// # Errors
/// Returns a positioned [`SyntaxError`] when the source does not parse.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
///
/// use sieva::{compile, interpreter::value::core::Value};
///
/// let program = compile("size(\"abcd\") == 4").unwrap();
/// assert_eq!(program.evaluate(&HashMap::new()).unwrap(), Value::from(true));
///
/// assert!(compile("1 +").is_err());
/// ```
pub fn compile(source: &str) -> Result<Program, SyntaxError> {
    compile_with_registry(source, Arc::new(StandardRegistry))
}

/// Compiles `source` into a [`Program`] bound to a caller-supplied
/// registry.
///
/// # Errors
/// Returns a positioned [`SyntaxError`] when the source does not parse.
pub fn compile_with_registry(source: &str,
                             registry: Arc<dyn FunctionRegistry + Send + Sync>)
                             -> Result<Program, SyntaxError> {
    let ast = parse_source(source)?;
    Ok(Program { ast, registry })
}

/// Compiles and evaluates `source` in one step.
///
/// This convenience entry point uses the standard registry and is what the
/// CLI binary calls. Hosts evaluating an expression more than once should
/// [`compile`] it and reuse the [`Program`].
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
///
/// use sieva::{evaluate, interpreter::value::core::Value};
///
/// let mut bindings = HashMap::new();
/// bindings.insert("severity".to_owned(), Value::from(7i64));
///
/// let result = evaluate("severity >= 5 ? \"page\" : \"log\"", &bindings);
/// assert_eq!(result.unwrap(), Value::from("page"));
///
/// // Unknown variable: evaluation fails.
/// assert!(evaluate("missing + 1", &HashMap::new()).is_err());
/// ```
pub fn evaluate(source: &str,
                bindings: &HashMap<String, Value>)
                -> Result<Value, Box<dyn std::error::Error>> {
    let program = compile(source)?;
    Ok(program.evaluate(bindings)?)
}
