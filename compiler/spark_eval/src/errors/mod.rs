//! Runtime error types for the evaluator.
//!
//! `EvalErrorKind` carries the structured data for each failure. The
//! factory functions below are the public way to build errors; they fill in
//! both `kind` and the rendered `message`.
//!
//! Every error is fatal to the current evaluation. The language has no
//! handler construct, so errors only ever propagate outward.

use std::fmt;

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq)]
pub enum EvalErrorKind {
    /// No binding for an identifier. `env` lists the names that were searched.
    UnboundIdentifier { name: String, env: String },
    /// Function called with the wrong number of arguments.
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    /// Primitive applied to the wrong kind of value.
    TypeMismatch {
        op: String,
        expected: String,
        got: String,
    },
    DivisionByZero,
    IntegerOverflow { operation: String },
    /// Raised by the `error` primitive.
    UserError { payload: Value },
    /// Application of something that is not a function.
    NotCallable { type_name: &'static str },
    /// Call depth limit reached.
    StackOverflow { depth: usize },
    /// An invariant of the interpreter itself was violated.
    Internal { message: String },
}

/// The error taxonomy callers switch on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    UnboundIdentifier,
    ArityMismatch,
    TypeMismatch,
    /// Valid kinds of input with invalid values (division by zero, overflow).
    Domain,
    User,
    NotCallable,
    StackOverflow,
    Internal,
}

impl ErrorCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnboundIdentifier => "UnboundIdentifierError",
            Self::ArityMismatch => "ArityMismatchError",
            Self::TypeMismatch => "TypeMismatchError",
            Self::Domain => "DomainError",
            Self::User => "UserError",
            Self::NotCallable => "RuntimeError",
            Self::StackOverflow => "StackOverflow",
            Self::Internal => "InternalError",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EvalErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnboundIdentifier { .. } => ErrorCategory::UnboundIdentifier,
            Self::ArityMismatch { .. } => ErrorCategory::ArityMismatch,
            Self::TypeMismatch { .. } => ErrorCategory::TypeMismatch,
            Self::DivisionByZero | Self::IntegerOverflow { .. } => ErrorCategory::Domain,
            Self::UserError { .. } => ErrorCategory::User,
            Self::NotCallable { .. } => ErrorCategory::NotCallable,
            Self::StackOverflow { .. } => ErrorCategory::StackOverflow,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundIdentifier { name, env } => {
                write!(f, "unbound identifier `{name}` in environment {env}")
            }
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "{name} expects {expected} {arg_word}, got {got}")
            }
            Self::TypeMismatch { op, expected, got } => {
                write!(f, "type mismatch in `{op}`: expected {expected}, got {got}")
            }
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IntegerOverflow { operation } => {
                write!(f, "integer overflow in `{operation}`")
            }
            Self::UserError { payload } => write!(f, "user error: {payload}"),
            Self::NotCallable { type_name } => {
                write!(f, "cannot apply a non-function value ({type_name})")
            }
            Self::StackOverflow { depth } => {
                write!(f, "maximum call depth exceeded (limit: {depth})")
            }
            Self::Internal { message } => write!(f, "internal error: {message}"),
        }
    }
}

/// A single frame in an evaluation backtrace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    /// Rendered callee, e.g. `(proc (n acc))`.
    pub name: String,
}

/// Snapshot of the call stack at an error site, most recent call first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return Ok(());
        }
        writeln!(f, "call backtrace:")?;
        for (i, frame) in self.frames.iter().enumerate() {
            writeln!(f, "  {i}: {}", frame.name)?;
        }
        Ok(())
    }
}

/// Evaluation error.
#[derive(Clone, Debug)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()`.
    pub message: String,
    /// Calls in progress when the error was raised.
    pub backtrace: Option<EvalBacktrace>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            backtrace: None,
        }
    }

    /// Attach a backtrace to this error.
    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        self.backtrace = Some(backtrace);
        self
    }

    #[inline]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    #[inline]
    pub fn is_domain_error(&self) -> bool {
        self.category() == ErrorCategory::Domain
    }

    /// The payload of an `error` call, if this is a user error.
    pub fn user_payload(&self) -> Option<&Value> {
        match &self.kind {
            EvalErrorKind::UserError { payload } => Some(payload),
            _ => None,
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category(), self.message)
    }
}

impl std::error::Error for EvalError {}

// Lookup

#[cold]
pub fn unbound_identifier(name: &str, env: String) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundIdentifier {
        name: name.to_string(),
        env,
    })
}

// Application

#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn not_callable(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable { type_name })
}

#[cold]
pub fn recursion_limit_exceeded(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth })
}

// Primitives

#[cold]
pub fn type_mismatch(op: &str, expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        op: op.to_string(),
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

#[cold]
pub fn user_error(payload: Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UserError { payload })
}

// Interpreter bugs

#[cold]
pub fn internal_error(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Internal {
        message: message.into(),
    })
}

#[cfg(test)]
mod tests;
