/// Runtime value representation.
///
/// Defines the `Value` enum and all supported value variants, deep
/// structural equality, the total-order comparator used by relational
/// operators, and display formatting.
pub mod core;

/// Numeric representation.
///
/// Defines the `Number` type: one shared numeric representation carrying an
/// integral/non-integral form tag. Signed, unsigned, and floating values are
/// distinguished only by that tag; there are no fixed-width integer domains.
pub mod number;

/// Map key representation.
///
/// Defines the `MapKey` type, the hashable projection of values that may key
/// a map. Numerically-equal keys are normalized to a single representation
/// so that map equality agrees with value equality.
pub mod map_key;
