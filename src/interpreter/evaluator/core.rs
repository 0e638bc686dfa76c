use std::collections::HashMap;

use indexmap::IndexMap;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        registry::FunctionRegistry,
        value::{
            core::{StructValue, Value},
            map_key::MapKey,
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Walks an AST against a variable environment, producing a value or a
/// typed error.
///
/// The interpreter holds one mutable variable environment and one function
/// registry reference for its lifetime. Execution is fully synchronous:
/// an evaluation either runs to completion or raises. The environment is
/// owned exclusively by this interpreter; macro and comprehension evaluation
/// temporarily rebind loop names and restore the prior binding on every
/// exit path, so no evaluation can leak state into an outer variable.
///
/// ## Usage
///
/// ```
/// use sieva::interpreter::{
///     evaluator::core::Interpreter,
///     parser::core::parse_source,
///     registry::standard::StandardRegistry,
///     value::core::Value,
/// };
///
/// let registry = StandardRegistry;
/// let mut interpreter = Interpreter::new(&registry);
/// interpreter.define("x", Value::from(20i64));
///
/// let ast = parse_source("x + 22").unwrap();
/// assert_eq!(interpreter.evaluate(&ast).unwrap(), Value::from(42i64));
/// ```
pub struct Interpreter<'r> {
    pub(crate) env: HashMap<String, Value>,
    registry:       &'r dyn FunctionRegistry,
}

impl<'r> Interpreter<'r> {
    /// Creates an interpreter with an empty variable environment.
    #[must_use]
    pub fn new(registry: &'r dyn FunctionRegistry) -> Self {
        Self { env: HashMap::new(),
               registry }
    }

    /// Creates an interpreter whose environment starts from `bindings`.
    #[must_use]
    pub fn with_bindings(registry: &'r dyn FunctionRegistry,
                         bindings: HashMap<String, Value>)
                         -> Self {
        Self { env: bindings,
               registry }
    }

    /// Binds `name` to `value` in the top-level environment.
    pub fn define(&mut self, name: &str, value: Value) {
        self.env.insert(name.to_owned(), value);
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The
    /// evaluator dispatches on the expression variant; every error aborts
    /// the evaluation immediately and no partial result is returned.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed [`Value`].
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Ident { name, line } => self.eval_ident(name, *line),
            Expr::Select { operand,
                           field,
                           test,
                           line, } => self.eval_select(operand.as_deref(), field, *test, *line),
            Expr::Index { operand, index, line } => self.eval_index(operand, index, *line),
            Expr::Call { target,
                         name,
                         args,
                         is_macro,
                         line, } => {
                if *is_macro {
                    self.eval_macro(target.as_deref(), name, args, *line)
                } else {
                    self.eval_call(target.as_deref(), name, args, *line)
                }
            },
            Expr::List { elements, .. } => self.eval_list(elements),
            Expr::Map { entries, line } => self.eval_map(entries, *line),
            Expr::Struct { type_name,
                           fields,
                           line, } => self.eval_struct(type_name.clone(), fields, *line),
            Expr::Comprehension { var,
                                  range,
                                  accu,
                                  init,
                                  condition,
                                  step,
                                  result,
                                  .. } => {
                self.eval_comprehension(var, range, accu, init, condition, step, result)
            },
            Expr::Unary { op, expr, line } => {
                let value = self.evaluate(expr)?;
                Self::eval_unary(*op, &value, *line)
            },
            Expr::Binary { left, op, right, line } => self.eval_binary_op(*op, left, right, *line),
            Expr::Conditional { condition,
                                then_branch,
                                else_branch,
                                line, } => {
                if self.evaluate(condition)?.as_bool(*line)? {
                    self.evaluate(then_branch)
                } else {
                    self.evaluate(else_branch)
                }
            },
        }
    }

    /// Looks a variable up in the environment.
    fn eval_ident(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.env
            .get(name)
            .cloned()
            .ok_or_else(|| EvalError::UnknownVariable { name: name.to_owned(),
                                                        line })
    }

    /// Evaluates a non-macro call.
    ///
    /// Every argument is evaluated first, then the target (when present),
    /// and the call is dispatched through the registry: with a target as a
    /// method call on the evaluated target, without one as a free function
    /// call. Registry failures are wrapped with the call site's line and
    /// otherwise kept verbatim.
    fn eval_call(&mut self,
                 target: Option<&Expr>,
                 name: &str,
                 args: &[Expr],
                 line: usize)
                 -> EvalResult<Value> {
        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.evaluate(arg)?);
        }

        let result = match target {
            Some(expr) => {
                let target_value = self.evaluate(expr)?;
                self.registry.call_method(&target_value, name, &values)
            },
            None => self.registry.call_function(name, &values),
        };

        result.map_err(|error| EvalError::Registry { error, line })
    }

    /// Evaluates a list literal.
    fn eval_list(&mut self, elements: &[Expr]) -> EvalResult<Value> {
        let mut values = Vec::with_capacity(elements.len());
        for element in elements {
            values.push(self.evaluate(element)?);
        }
        Ok(values.into())
    }

    /// Evaluates a map literal.
    ///
    /// Keys must be of a keyable type (null, bool, number, string, bytes)
    /// and unique; a repeated key raises. Insertion order is preserved.
    fn eval_map(&mut self, entries: &[(Expr, Expr)], line: usize) -> EvalResult<Value> {
        let mut map = IndexMap::with_capacity(entries.len());

        for (key_expr, value_expr) in entries {
            let key_value = self.evaluate(key_expr)?;
            let Some(key) = MapKey::from_value(&key_value) else {
                return Err(EvalError::TypeMismatch { details:
                                                         format!("{} cannot be used as a map key",
                                                                 key_value.kind()),
                                                     line });
            };
            let value = self.evaluate(value_expr)?;

            if map.insert(key.clone(), value).is_some() {
                return Err(EvalError::DuplicateKey { key: key.to_string(),
                                                     line });
            }
        }

        Ok(map.into())
    }

    /// Evaluates a struct literal.
    fn eval_struct(&mut self,
                   type_name: Option<String>,
                   fields: &[(String, Expr)],
                   line: usize)
                   -> EvalResult<Value> {
        let mut evaluated = IndexMap::with_capacity(fields.len());

        for (name, value_expr) in fields {
            let value = self.evaluate(value_expr)?;
            if evaluated.insert(name.clone(), value).is_some() {
                return Err(EvalError::DuplicateKey { key: name.clone(),
                                                     line });
            }
        }

        Ok(StructValue { type_name,
                         fields: evaluated }.into())
    }

    /// Re-establishes the binding state captured before a rebinding scope.
    ///
    /// `saved` is the prior value of the name (or `None` when it was
    /// unbound); after this call the environment is exactly as it was
    /// before the scope started.
    pub(crate) fn restore_binding(&mut self, name: &str, saved: Option<Value>) {
        match saved {
            Some(value) => {
                self.env.insert(name.to_owned(), value);
            },
            None => {
                self.env.remove(name);
            },
        }
    }
}
