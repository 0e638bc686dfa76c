use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::{core::Value, map_key::MapKey},
    },
};

impl Interpreter<'_> {
    /// Evaluates the `in` membership operator.
    ///
    /// - list: membership by deep equality over the elements;
    /// - map: key presence (a left operand that cannot be a key is simply
    ///   not present);
    /// - struct: field-name presence, so only a string left operand can
    ///   match;
    /// - string: substring containment, requiring a string left operand.
    ///
    /// Any other right-operand type raises a type mismatch.
    ///
    /// # Example
    /// ```
    /// use sieva::interpreter::{evaluator::core::Interpreter, value::core::Value};
    ///
    /// let list = Value::from(vec![Value::from(1i64), Value::from(2i64)]);
    /// let result = Interpreter::eval_membership(&Value::from(2i64), &list, 1);
    /// assert_eq!(result.unwrap(), Value::from(true));
    /// ```
    pub fn eval_membership(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        match right {
            Value::List(items) => Ok(Value::Bool(items.iter().any(|item| item == left))),

            Value::Map(entries) => {
                let present =
                    MapKey::from_value(left).is_some_and(|key| entries.contains_key(&key));
                Ok(Value::Bool(present))
            },

            Value::Struct(value) => Ok(Value::Bool(match left {
                                                       Value::String(name) => {
                                                           value.fields.contains_key(name)
                                                       },
                                                       _ => false,
                                                   })),

            Value::String(text) => match left {
                Value::String(substring) => Ok(Value::Bool(text.contains(substring.as_str()))),
                other => {
                    Err(EvalError::TypeMismatch { details: format!("cannot test membership of {} in a string",
                                                                   other.kind()),
                                                  line })
                },
            },

            other => {
                Err(EvalError::TypeMismatch { details: format!("'in' requires a list, map, struct, or string, found {}",
                                                               other.kind()),
                                              line })
            },
        }
    }
}
