use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Converts a numeric value to a position within a sequence of `length`
/// elements.
///
/// A non-integral index truncates toward zero before the bounds check, so
/// `list[1.9]` addresses position 1. Non-numeric values raise a type
/// mismatch; negative, non-finite, or too-large positions raise an
/// out-of-bounds error.
///
/// ## Parameters
/// - `value`: The index value.
/// - `length`: The number of addressable elements.
/// - `line`: Source code line number for error reporting.
///
/// ## Returns
/// - `Ok(usize)`: The in-bounds position.
/// - `Err(EvalError::TypeMismatch | IndexOutOfBounds)`: Otherwise.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn value_to_index(value: &Value, length: usize, line: usize) -> EvalResult<usize> {
    let number = value.as_number(line)?;
    let truncated = number.value().trunc();

    if truncated.is_finite() && truncated >= 0.0 && truncated < length as f64 {
        Ok(truncated as usize)
    } else {
        Err(EvalError::IndexOutOfBounds { index: truncated as i64,
                                          length,
                                          line })
    }
}

/// Converts a numeric value to a repetition count.
///
/// Counts truncate toward zero like indices; negative or non-finite counts
/// raise a type mismatch.
///
/// ## Parameters
/// - `value`: The count value.
/// - `line`: Source code line number for error reporting.
///
/// ## Returns
/// - `Ok(usize)`: The non-negative count.
/// - `Err(EvalError::TypeMismatch)`: Otherwise.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub fn value_to_count(value: &Value, line: usize) -> EvalResult<usize> {
    let number = value.as_number(line)?;
    let truncated = number.value().trunc();

    if truncated.is_finite() && truncated >= 0.0 {
        Ok(truncated as usize)
    } else {
        Err(EvalError::TypeMismatch { details: "repetition count must be a non-negative number"
                                          .to_owned(),
                                      line })
    }
}
