/// Core evaluation logic and interpreter state.
///
/// Contains the main evaluation engine: the `Interpreter` with its variable
/// environment and registry reference, per-node dispatch, collection literal
/// construction, call dispatch, and error propagation.
pub mod core;

/// Unary operator evaluation.
///
/// Handles logical NOT (boolean-only) and arithmetic negation
/// (numeric-only).
pub mod unary;

/// Binary operator evaluation.
///
/// Implements evaluation for all binary operations, including arithmetic,
/// comparisons, equality, membership, and the short-circuiting logical
/// connectives.
pub mod binary;

/// Member access evaluation.
///
/// Implements field selection (including presence tests and leading-dot
/// access against the top-level bindings) and indexing of lists, maps,
/// structs, and strings.
pub mod member;

/// Macro and comprehension evaluation.
///
/// Implements the five macro reducers and the generalized accumulator fold
/// they specialize, with strictly scoped loop-variable rebinding.
pub mod macros;
