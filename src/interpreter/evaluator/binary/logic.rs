use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates `&&` or `||` with short-circuit semantics.
    ///
    /// The left operand is evaluated first and must be boolean. When it
    /// alone determines the result (`false && ...`, `true || ...`), the
    /// right operand expression is never evaluated; otherwise the right
    /// operand is evaluated and must itself be boolean.
    ///
    /// # Parameters
    /// - `op`: `And` or `Or`.
    /// - `left`: Left operand expression.
    /// - `right`: Right operand expression.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The boolean result.
    pub(crate) fn eval_logical(&mut self,
                               op: BinaryOperator,
                               left: &Expr,
                               right: &Expr,
                               line: usize)
                               -> EvalResult<Value> {
        let left_value = self.evaluate(left)?.as_bool(line)?;

        match op {
            BinaryOperator::And if !left_value => Ok(Value::Bool(false)),
            BinaryOperator::Or if left_value => Ok(Value::Bool(true)),
            BinaryOperator::And | BinaryOperator::Or => {
                Ok(Value::Bool(self.evaluate(right)?.as_bool(line)?))
            },
            _ => unreachable!("eval_logical used with non-logical operator"),
        }
    }
}
