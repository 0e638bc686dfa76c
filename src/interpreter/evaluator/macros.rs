use std::rc::Rc;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates a macro call.
    ///
    /// Macros do not evaluate their arguments eagerly: the first argument
    /// must be a bare identifier naming the loop variable, and the second is
    /// kept as an unevaluated sub-expression, re-evaluated once per
    /// iteration. The target is evaluated exactly once and must be a list.
    ///
    /// The loop variable is rebound for each element; whatever binding (or
    /// absence of one) existed before the macro is restored on every exit
    /// path (normal completion, short-circuit, or raised error), so no
    /// macro evaluation can clobber an outer variable of the same name.
    ///
    /// # Parameters
    /// - `target`: The target expression (the list being iterated).
    /// - `name`: The macro name.
    /// - `args`: The unevaluated argument expressions.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The macro's result value.
    pub(crate) fn eval_macro(&mut self,
                             target: Option<&Expr>,
                             name: &str,
                             args: &[Expr],
                             line: usize)
                             -> EvalResult<Value> {
        let Some(target) = target else {
            return Err(EvalError::MalformedMacro { details:
                                                       format!("{name}() requires a target"),
                                                   line });
        };

        let [first, body] = args else {
            return Err(EvalError::MalformedMacro { details: format!("{name}() takes a loop variable and one expression"),
                                                   line });
        };
        let Expr::Ident { name: var, .. } = first else {
            return Err(EvalError::MalformedMacro { details: format!("the first argument of {name}() must be an identifier"),
                                                   line });
        };

        let target_value = self.evaluate(target)?;
        let Value::List(items) = target_value else {
            return Err(EvalError::TypeMismatch { details: format!("{name}() requires a list, found {}",
                                                                  target_value.kind()),
                                                 line });
        };

        let var = var.clone();
        let saved = self.env.remove(&var);
        let result = self.fold_macro(name, &var, &items, body, line);
        self.restore_binding(&var, saved);
        result
    }

    /// Runs one of the five macro reducers, all specializing a single
    /// accumulator fold.
    ///
    /// - `map` collects one transformed element per source element.
    /// - `filter` keeps elements whose predicate evaluates to exactly
    ///   boolean `true`.
    /// - `all` is vacuously `true` on an empty list and short-circuits to
    ///   `false` at the first non-`true` predicate result.
    /// - `exists` short-circuits to `true` at the first `true` predicate,
    ///   else `false`.
    /// - `existsOne` counts `true` predicates, short-circuiting to `false`
    ///   the instant the count exceeds one, and otherwise reports whether
    ///   the final count equals exactly one.
    fn fold_macro(&mut self,
                  name: &str,
                  var: &str,
                  items: &Rc<Vec<Value>>,
                  body: &Expr,
                  line: usize)
                  -> EvalResult<Value> {
        match name {
            "map" => {
                let mut out = Vec::with_capacity(items.len());
                for item in items.iter() {
                    self.env.insert(var.to_owned(), item.clone());
                    out.push(self.evaluate(body)?);
                }
                Ok(out.into())
            },

            "filter" => {
                let mut kept = Vec::new();
                for item in items.iter() {
                    self.env.insert(var.to_owned(), item.clone());
                    if self.evaluate(body)?.is_true() {
                        kept.push(item.clone());
                    }
                }
                Ok(kept.into())
            },

            "all" => {
                for item in items.iter() {
                    self.env.insert(var.to_owned(), item.clone());
                    if !self.evaluate(body)?.is_true() {
                        return Ok(Value::Bool(false));
                    }
                }
                Ok(Value::Bool(true))
            },

            "exists" => {
                for item in items.iter() {
                    self.env.insert(var.to_owned(), item.clone());
                    if self.evaluate(body)?.is_true() {
                        return Ok(Value::Bool(true));
                    }
                }
                Ok(Value::Bool(false))
            },

            "existsOne" => {
                let mut matches = 0usize;
                for item in items.iter() {
                    self.env.insert(var.to_owned(), item.clone());
                    if self.evaluate(body)?.is_true() {
                        matches += 1;
                        if matches > 1 {
                            return Ok(Value::Bool(false));
                        }
                    }
                }
                Ok(Value::Bool(matches == 1))
            },

            other => Err(EvalError::MalformedMacro { details: format!("unknown macro '{other}'"),
                                                     line }),
        }
    }

    /// Evaluates the generalized comprehension fold.
    ///
    /// The initializer is evaluated into the accumulator binding; then, for
    /// each range element, the loop variable is rebound, the condition is
    /// evaluated, and, only when the condition is `true`, the step
    /// expression recomputes the accumulator. Finally the result expression
    /// is evaluated against the last accumulator value.
    ///
    /// Both the loop-variable and accumulator bindings are restored after
    /// completion, including when any sub-expression raises.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn eval_comprehension(&mut self,
                                     var: &str,
                                     range: &Expr,
                                     accu: &str,
                                     init: &Expr,
                                     condition: &Expr,
                                     step: &Expr,
                                     result: &Expr)
                                     -> EvalResult<Value> {
        let init_value = self.evaluate(init)?;

        let range_value = self.evaluate(range)?;
        let Value::List(items) = range_value else {
            return Err(EvalError::TypeMismatch { details: format!("comprehension range must be a list, found {}",
                                                                  range_value.kind()),
                                                 line: range.line_number() });
        };

        let saved_var = self.env.remove(var);
        let saved_accu = self.env.remove(accu);
        self.env.insert(accu.to_owned(), init_value);

        let outcome = self.fold_comprehension(var, accu, &items, condition, step, result);

        self.restore_binding(var, saved_var);
        self.restore_binding(accu, saved_accu);
        outcome
    }

    /// The comprehension loop body, separated out so the caller can restore
    /// bindings on both the success and error paths.
    fn fold_comprehension(&mut self,
                          var: &str,
                          accu: &str,
                          items: &Rc<Vec<Value>>,
                          condition: &Expr,
                          step: &Expr,
                          result: &Expr)
                          -> EvalResult<Value> {
        for item in items.iter() {
            self.env.insert(var.to_owned(), item.clone());

            let condition_value = self.evaluate(condition)?;
            if condition_value.as_bool(condition.line_number())? {
                let next = self.evaluate(step)?;
                self.env.insert(accu.to_owned(), next);
            }
        }

        self.evaluate(result)
    }
}
