/// Binary operator dispatch.
///
/// Routes each operator to its specialized handler once both operands have
/// been evaluated; the lazy logical connectives are handled separately in
/// [`logic`].
pub mod core;

/// Arithmetic evaluation: `+ - * / %` with the overloaded concatenation and
/// repetition forms.
pub mod arithmetic;

/// Ordering and equality evaluation.
pub mod comparison;

/// Short-circuiting `&&` and `||`.
pub mod logic;

/// The `in` membership operator.
pub mod membership;
