use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::{Value, total_order},
    },
};

impl Interpreter<'_> {
    /// Evaluates `==` or `!=` between two values.
    ///
    /// Equality is deep and structural and never raises: lists are equal iff
    /// they have the same length and element-wise deep-equal members;
    /// maps and structs iff they have the same key set with deep-equal
    /// values per key (key order is irrelevant); numbers compare by value
    /// across form tags; every other type mismatch yields `false`.
    ///
    /// # Example
    /// ```
    /// use sieva::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let result = Interpreter::eval_equality(BinaryOperator::Equal,
    ///                                         &Value::from(1i64),
    ///                                         &Value::from(1.0));
    /// assert_eq!(result, Value::from(true));
    /// ```
    #[must_use]
    pub fn eval_equality(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        let is_equal = left == right;
        Value::Bool(match op {
                        BinaryOperator::Equal => is_equal,
                        BinaryOperator::NotEqual => !is_equal,
                        _ => unreachable!("eval_equality used with non-equality operator"),
                    })
    }

    /// Evaluates `<`, `<=`, `>`, or `>=` between two values.
    ///
    /// Ordering uses the single total-order comparator shared with the
    /// standard registry's `max`/`min`: null before any non-null value,
    /// numerics by value, strings lexicographically, booleans false before
    /// true, lists element-wise then by length. Any other type pairing
    /// raises a not-comparable error.
    ///
    /// # Example
    /// ```
    /// use sieva::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let result =
    ///     Interpreter::eval_ordering(BinaryOperator::Less, &Value::from("a"), &Value::from("b"), 1);
    /// assert_eq!(result.unwrap(), Value::from(true));
    /// ```
    pub fn eval_ordering(op: BinaryOperator,
                         left: &Value,
                         right: &Value,
                         line: usize)
                         -> EvalResult<Value> {
        let Some(ordering) = total_order(left, right) else {
            return Err(EvalError::NotComparable { details: format!("{} and {}",
                                                                   left.kind(),
                                                                   right.kind()),
                                                  line });
        };

        Ok(Value::Bool(match op {
                           BinaryOperator::Less => ordering == Ordering::Less,
                           BinaryOperator::LessEqual => ordering != Ordering::Greater,
                           BinaryOperator::Greater => ordering == Ordering::Greater,
                           BinaryOperator::GreaterEqual => ordering != Ordering::Less,
                           _ => unreachable!("eval_ordering used with non-relational operator"),
                       }))
    }
}
