use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates a binary operator node.
    ///
    /// The logical connectives are routed first because they must not
    /// evaluate their right operand eagerly; every other operator evaluates
    /// both operands and dispatches on the operator class.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand expression.
    /// - `right`: Right operand expression.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    pub(crate) fn eval_binary_op(&mut self,
                                 op: BinaryOperator,
                                 left: &Expr,
                                 right: &Expr,
                                 line: usize)
                                 -> EvalResult<Value> {
        if matches!(op, BinaryOperator::And | BinaryOperator::Or) {
            return self.eval_logical(op, left, right, line);
        }

        let left_value = self.evaluate(left)?;
        let right_value = self.evaluate(right)?;
        Self::eval_binary(op, &left_value, &right_value, line)
    }

    /// Evaluates a strict binary operation between two values.
    ///
    /// This function routes the operation to specialized handlers depending
    /// on the operator: arithmetic, equality (which never raises), ordering
    /// (the total-order comparator), and membership.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use sieva::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let left = Value::from(3i64);
    /// let right = Value::from(4i64);
    ///
    /// let result = Interpreter::eval_binary(BinaryOperator::Add, &left, &right, 1);
    /// assert_eq!(result.unwrap(), Value::from(7i64));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, In, Less, LessEqual, Mod, Mul, NotEqual,
            Or, Sub,
        };

        match op {
            Add | Sub | Mul | Div | Mod => Self::eval_arithmetic(op, left, right, line),

            Equal | NotEqual => Ok(Self::eval_equality(op, left, right)),

            Less | LessEqual | Greater | GreaterEqual => {
                Self::eval_ordering(op, left, right, line)
            },

            In => Self::eval_membership(left, right, line),

            And | Or => unreachable!("logical operators are evaluated lazily"),
        }
    }
}
