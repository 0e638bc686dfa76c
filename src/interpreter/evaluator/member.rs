use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::{core::Value, map_key::MapKey},
    },
    util::num::value_to_index,
};

impl Interpreter<'_> {
    /// Evaluates a field selection.
    ///
    /// With no operand the selection targets the top-level variable
    /// bindings (`.field` and plain presence tests on variables). The
    /// target must otherwise be a map or struct; selecting from anything
    /// else, including null, raises.
    ///
    /// In presence-test mode the result is a boolean: `true` when the
    /// field, key, or variable exists and `false` when it does not. This is
    /// the single place where absence is treated as data rather than
    /// failure. In normal mode absence raises.
    ///
    /// # Parameters
    /// - `operand`: The selected expression, or `None` for the environment.
    /// - `field`: The field name.
    /// - `test`: Whether this is a presence test.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The field's value, or a boolean in presence-test mode.
    pub(crate) fn eval_select(&mut self,
                              operand: Option<&Expr>,
                              field: &str,
                              test: bool,
                              line: usize)
                              -> EvalResult<Value> {
        let Some(expr) = operand else {
            return match self.env.get(field) {
                Some(_) if test => Ok(Value::Bool(true)),
                Some(value) => Ok(value.clone()),
                None if test => Ok(Value::Bool(false)),
                None => Err(EvalError::UnknownVariable { name: field.to_owned(),
                                                         line }),
            };
        };

        let target = self.evaluate(expr)?;
        match target {
            Value::Null => {
                if test {
                    Ok(Value::Bool(false))
                } else {
                    Err(EvalError::TypeMismatch { details: format!("cannot select field '{field}' from null"),
                                                  line })
                }
            },

            Value::Map(entries) => match entries.get(&MapKey::from(field)) {
                Some(_) if test => Ok(Value::Bool(true)),
                Some(value) => Ok(value.clone()),
                None if test => Ok(Value::Bool(false)),
                None => Err(EvalError::UnknownField { field: field.to_owned(),
                                                      line }),
            },

            Value::Struct(value) => match value.fields.get(field) {
                Some(_) if test => Ok(Value::Bool(true)),
                Some(field_value) => Ok(field_value.clone()),
                None if test => Ok(Value::Bool(false)),
                None => Err(EvalError::UnknownField { field: field.to_owned(),
                                                      line }),
            },

            other => {
                Err(EvalError::TypeMismatch { details: format!("cannot select field '{field}' from {}",
                                                               other.kind()),
                                              line })
            },
        }
    }

    /// Evaluates an indexing expression.
    ///
    /// - Lists bound-check an integer position; a non-integral numeric
    ///   index truncates toward zero first.
    /// - Maps require exact key presence and raise on an absent key.
    /// - Structs are indexed by field-name string.
    /// - Strings index by integer position and yield a single-character
    ///   string.
    ///
    /// # Parameters
    /// - `operand`: The expression being indexed.
    /// - `index`: The index expression.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The element at the given position or key.
    pub(crate) fn eval_index(&mut self,
                             operand: &Expr,
                             index: &Expr,
                             line: usize)
                             -> EvalResult<Value> {
        let target = self.evaluate(operand)?;
        let index_value = self.evaluate(index)?;

        match target {
            Value::List(items) => {
                let position = value_to_index(&index_value, items.len(), line)?;
                Ok(items[position].clone())
            },

            Value::Map(entries) => {
                let Some(key) = MapKey::from_value(&index_value) else {
                    return Err(EvalError::TypeMismatch { details: format!("{} cannot be used as a map key",
                                                                          index_value.kind()),
                                                         line });
                };
                entries.get(&key)
                       .cloned()
                       .ok_or_else(|| EvalError::UnknownKey { key: key.to_string(),
                                                              line })
            },

            Value::Struct(value) => match &index_value {
                Value::String(field) => {
                    value.fields
                         .get(field)
                         .cloned()
                         .ok_or_else(|| EvalError::UnknownField { field: field.clone(),
                                                                  line })
                },
                other => {
                    Err(EvalError::TypeMismatch { details: format!("struct index must be a string, found {}",
                                                                   other.kind()),
                                                  line })
                },
            },

            Value::String(text) => {
                let characters: Vec<char> = text.chars().collect();
                let position = value_to_index(&index_value, characters.len(), line)?;
                Ok(Value::String(characters[position].to_string()))
            },

            other => Err(EvalError::TypeMismatch { details: format!("cannot index {}",
                                                                    other.kind()),
                                                   line }),
        }
    }
}
