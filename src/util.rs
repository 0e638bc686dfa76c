/// Numeric conversion helpers.
///
/// This module provides the checked conversions from runtime numeric values
/// to machine positions and counts used by indexing and repetition. These
/// keep truncation and bounds policy in one place so the evaluator code
/// stays simple.
pub mod num;
