use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
    util::num::value_to_count,
};

/// Builds the type-mismatch error for an unsupported operand pairing.
fn mismatch(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalError {
    EvalError::TypeMismatch { details: format!("cannot apply '{op}' to {} and {}",
                                               left.kind(),
                                               right.kind()),
                              line }
}

impl Interpreter<'_> {
    /// Evaluates an arithmetic operator.
    ///
    /// - `+` is overloaded: string concatenation when either operand is a
    ///   string (the other is stringified), list concatenation when both are
    ///   lists, numeric addition otherwise.
    /// - `-` is numeric-only.
    /// - `*` is numeric, or string/list repetition by a count.
    /// - `/` is numeric-only, always yields a non-integral result, and
    ///   raises on a zero divisor.
    /// - `%` is numeric-only and raises on a zero divisor.
    ///
    /// All other operand combinations raise a type mismatch.
    pub(crate) fn eval_arithmetic(op: BinaryOperator,
                                  left: &Value,
                                  right: &Value,
                                  line: usize)
                                  -> EvalResult<Value> {
        match op {
            BinaryOperator::Add => Self::eval_add(left, right, line),
            BinaryOperator::Sub => match (left, right) {
                (Value::Number(a), Value::Number(b)) => Ok(a.sub(*b).into()),
                _ => Err(mismatch(op, left, right, line)),
            },
            BinaryOperator::Mul => Self::eval_mul(left, right, line),
            BinaryOperator::Div => match (left, right) {
                (Value::Number(a), Value::Number(b)) => {
                    if b.value() == 0.0 {
                        return Err(EvalError::DivisionByZero { line });
                    }
                    Ok(a.div(*b).into())
                },
                _ => Err(mismatch(op, left, right, line)),
            },
            BinaryOperator::Mod => match (left, right) {
                (Value::Number(a), Value::Number(b)) => {
                    if b.value() == 0.0 {
                        return Err(EvalError::ModuloByZero { line });
                    }
                    Ok(a.rem(*b).into())
                },
                _ => Err(mismatch(op, left, right, line)),
            },
            _ => unreachable!("eval_arithmetic called with non-arithmetic operator"),
        }
    }

    /// Evaluates the overloaded `+` operator.
    fn eval_add(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(a.add(*b).into()),

            (Value::String(a), b) => Ok(Value::String(format!("{a}{b}"))),
            (a, Value::String(b)) => Ok(Value::String(format!("{a}{b}"))),

            (Value::List(a), Value::List(b)) => {
                let mut elements = a.as_ref().clone();
                elements.extend(b.iter().cloned());
                Ok(elements.into())
            },

            _ => Err(mismatch(BinaryOperator::Add, left, right, line)),
        }
    }

    /// Evaluates the overloaded `*` operator.
    ///
    /// Repetition counts are truncated toward zero and must be
    /// non-negative.
    fn eval_mul(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(a.mul(*b).into()),

            (Value::String(text), count @ Value::Number(_))
            | (count @ Value::Number(_), Value::String(text)) => {
                let count = value_to_count(count, line)?;
                Ok(Value::String(text.repeat(count)))
            },

            (Value::List(items), count @ Value::Number(_))
            | (count @ Value::Number(_), Value::List(items)) => {
                let count = value_to_count(count, line)?;
                let mut elements = Vec::with_capacity(items.len().saturating_mul(count));
                for _ in 0..count {
                    elements.extend(items.iter().cloned());
                }
                Ok(elements.into())
            },

            _ => Err(mismatch(BinaryOperator::Mul, left, right, line)),
        }
    }
}
