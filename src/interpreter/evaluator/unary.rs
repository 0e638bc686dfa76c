use crate::{
    ast::UnaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates a unary operator applied to an already-evaluated operand.
    ///
    /// `!` requires a boolean operand and `-` requires a numeric one; any
    /// other operand type raises a type mismatch. Negating an unsigned
    /// integral value produces a signed integral result.
    ///
    /// # Parameters
    /// - `op`: The unary operator.
    /// - `value`: The evaluated operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed value.
    ///
    /// # Example
    /// ```
    /// use sieva::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let value = Interpreter::eval_unary(UnaryOperator::Not, &Value::from(false), 1).unwrap();
    /// assert_eq!(value, Value::from(true));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Not => Ok(Value::Bool(!value.as_bool(line)?)),
            UnaryOperator::Negate => Ok(value.as_number(line)?.neg().into()),
        }
    }
}
