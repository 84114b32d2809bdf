//! Spark Eval - tree-walking evaluator for Spark programs.
//!
//! # Architecture
//!
//! - [`Environment`]: persistent chain of binding frames. Extending never
//!   touches an existing frame, so closures can share captured environments.
//! - [`Value`]: runtime values, including closures over an `Environment`.
//! - [`apply_primitive`]: dispatch for the built-in operators.
//! - [`Interpreter`]: recursive reduction of an [`Expr`](spark_ir::Expr)
//!   against an environment, with a bounded call stack.
//! - [`EvalError`] / [`EvalErrorKind`]: typed runtime failures.

mod diagnostics;
mod environment;
pub mod errors;
mod interpreter;
mod primitives;
mod value;

pub use diagnostics::{CallFrame, CallStack};
pub use environment::{Binding, Environment};
pub use errors::{
    BacktraceFrame, ErrorCategory, EvalBacktrace, EvalError, EvalErrorKind, EvalResult,
};
pub use interpreter::{interp, Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use primitives::{apply_primitive, top_env, PRIMITIVE_OPERATORS};
pub use value::{Closure, Value};
