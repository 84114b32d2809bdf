//! Tree-walking interpreter.
//!
//! Evaluation is a direct recursive reduction of an [`Expr`] against an
//! [`Environment`]. Each recursive step goes through
//! `ensure_sufficient_stack`, and closure calls are counted on a
//! [`CallStack`] so runaway recursion ends in a `StackOverflow` error.

mod builder;

use spark_ir::{Application, Expr, Name, StringInterner};
use spark_stack::ensure_sufficient_stack;

use crate::diagnostics::{CallFrame, CallStack};
use crate::errors::{arity_mismatch, not_callable, unbound_identifier};
use crate::{apply_primitive, Binding, Closure, Environment, EvalResult, Value};

pub use builder::{InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};

/// Evaluator state for one program run.
pub struct Interpreter<'a> {
    pub(crate) interner: &'a StringInterner,
    pub(crate) call_stack: CallStack,
}

impl<'a> Interpreter<'a> {
    /// Interpreter with the default call-depth limit.
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    /// Current number of closure calls in progress.
    #[cfg(test)]
    pub(crate) fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }

    /// Evaluate `expr` in `env`.
    pub fn eval(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr, env))
    }

    fn eval_inner(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        match expr {
            Expr::Number(n) => Ok(Value::Number(*n)),
            Expr::Str(s) => Ok(Value::Str(s.clone())),
            Expr::Ident(name) => self.eval_ident(*name, env),
            Expr::If(cond) => {
                let branch = if self.eval(&cond.test, env)?.is_truthy() {
                    &cond.then_branch
                } else {
                    &cond.else_branch
                };
                self.eval(branch, env)
            }
            Expr::Lambda(lambda) => Ok(Value::closure(
                lambda.params.clone(),
                lambda.body.clone(),
                env.clone(),
            )),
            Expr::Apply(app) => self.eval_application(app, env),
        }
    }

    fn eval_ident(&self, name: Name, env: &Environment) -> EvalResult {
        match env.lookup(name) {
            Some(value) => Ok(value.clone()),
            None => Err(unbound_identifier(
                self.interner.lookup(name),
                env.describe(self.interner),
            )),
        }
    }

    #[tracing::instrument(level = "trace", skip_all)]
    fn eval_application(&mut self, app: &Application, env: &Environment) -> EvalResult {
        let callee = self.eval(&app.callee, env)?;
        match &callee {
            Value::Closure(closure) => {
                if closure.params.len() != app.args.len() {
                    return Err(arity_mismatch("proc", closure.params.len(), app.args.len()));
                }
                let args = self.eval_args(&app.args, env)?;
                self.call_closure(closure, args)
            }
            Value::Primitive(op) => {
                let args = self.eval_args(&app.args, env)?;
                apply_primitive(*op, &args, self.interner)
            }
            other => Err(not_callable(other.type_name())),
        }
    }

    /// Arguments left to right, in the caller's environment.
    fn eval_args(
        &mut self,
        args: &[Expr],
        env: &Environment,
    ) -> Result<Vec<Value>, crate::EvalError> {
        args.iter().map(|arg| self.eval(arg, env)).collect()
    }

    /// Bind `args` to the closure's parameters in its captured environment
    /// and evaluate the body.
    fn call_closure(&mut self, closure: &Closure, args: Vec<Value>) -> EvalResult {
        self.call_stack.push(CallFrame::new(closure.params.clone()))?;

        let bindings = closure
            .params
            .iter()
            .zip(args)
            .map(|(&name, value)| Binding::new(name, value))
            .collect();
        let call_env = closure.env.extend(bindings);
        let result = self.eval(&closure.body, &call_env);

        let result = result.map_err(|err| self.call_stack.attach_backtrace(err, self.interner));
        self.call_stack.pop();
        result
    }

    /// Apply a function value to already evaluated arguments.
    pub fn call(&mut self, callee: &Value, args: Vec<Value>) -> EvalResult {
        match callee {
            Value::Closure(closure) => {
                if closure.params.len() != args.len() {
                    return Err(arity_mismatch("proc", closure.params.len(), args.len()));
                }
                self.call_closure(closure, args)
            }
            Value::Primitive(op) => apply_primitive(*op, &args, self.interner),
            other => Err(not_callable(other.type_name())),
        }
    }
}

/// Evaluate `expr` in `env` with a default interpreter.
pub fn interp(expr: &Expr, env: &Environment, interner: &StringInterner) -> EvalResult {
    Interpreter::new(interner).eval(expr, env)
}
