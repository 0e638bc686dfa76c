/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of positioned
/// tokens, each corresponding to a meaningful language element such as a
/// number, string, identifier, operator, or delimiter. A lookahead buffer
/// lets the parser inspect upcoming tokens without consuming them.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source locations.
/// - Handles all numeric and string literal forms, including escape
///   decoding.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;

/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent, precedence-climbing consumer of the
/// token stream. It builds an immutable AST in one pass, using bounded
/// lookahead to disambiguate the grammar's ambiguous forms (map versus
/// struct literals, qualified struct type names).
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Enforces operator precedence and the literal/collection/macro grammar.
/// - Reports syntax errors with exact source locations.
pub mod parser;

/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks an AST against a mutable variable environment,
/// producing a dynamically-typed value or raising a typed error, and
/// dispatches unrecognized function and method calls to the function
/// registry.
///
/// # Responsibilities
/// - Implements the operator, macro, and member-access semantics.
/// - Manages strictly scoped loop-variable rebinding.
/// - Reports evaluation errors such as type mismatches or division by zero.
pub mod evaluator;

/// The value module defines the runtime data types for evaluation.
///
/// This module declares the dynamically-typed `Value` union, the shared
/// numeric representation with its integral/non-integral tag, and the
/// hashable map-key projection, along with equality, ordering, and display
/// behavior.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported variants.
/// - Implements deep equality and the total-order comparator.
/// - Provides conversion accessors with positioned errors.
pub mod value;

/// The registry module defines the host function capability.
///
/// The function registry is the seam through which hosts supply free
/// functions and methods to the language. The interpreter consumes the
/// interface; the standard implementation provides conversions, string
/// utilities, and comparators, and hosts compose custom registries by
/// wrapping it.
pub mod registry;
