//! Runtime values for the Spark interpreter.
//!
//! Strings and closures are reference counted with `Arc`, so cloning a
//! value is cheap and values can be shared across threads. Nothing inside a
//! value is ever mutated after creation.

use std::fmt;
use std::sync::Arc;

use spark_ir::{write_string_literal, Expr, Name};

use crate::Environment;

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    /// Integer.
    Number(i64),
    /// Boolean.
    Bool(bool),
    /// String.
    Str(Arc<str>),
    /// User function paired with its defining environment.
    Closure(Arc<Closure>),
    /// Built-in operator, identified by name.
    Primitive(Name),
}

/// A function value.
///
/// `env` is the environment that was current when the function literal was
/// evaluated; calls extend it, never the caller's environment.
pub struct Closure {
    pub params: Arc<[Name]>,
    pub body: Arc<Expr>,
    pub env: Environment,
}

impl Value {
    #[inline]
    pub fn string(s: &str) -> Self {
        Value::Str(Arc::from(s))
    }

    pub fn closure(params: Arc<[Name]>, body: Arc<Expr>, env: Environment) -> Self {
        Value::Closure(Arc::new(Closure { params, body, env }))
    }

    /// Only `false` is falsy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false))
    }

    /// Whether both values have the same variant.
    #[inline]
    pub fn same_tag(&self, other: &Value) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Bool(_) => "boolean",
            Value::Str(_) => "string",
            Value::Closure(_) => "closure",
            Value::Primitive(_) => "primitive",
        }
    }

    /// Printable form used by the driver: numbers in decimal, strings
    /// quoted, booleans as `true`/`false`, functions as opaque markers.
    pub fn serialize(&self) -> String {
        self.to_string()
    }
}

/// Structural equality within a variant; values of different variants are
/// never equal. Closures compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Closure(a), Value::Closure(b)) => Arc::ptr_eq(a, b),
            (Value::Primitive(a), Value::Primitive(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => write_string_literal(f, s),
            Value::Closure(_) => f.write_str("#<procedure>"),
            Value::Primitive(_) => f.write_str("#<primop>"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Closure(c) => fmt::Debug::fmt(&**c, f),
            Value::Primitive(op) => f.debug_tuple("Primitive").field(op).finish(),
        }
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("params", &self.params)
            .field("env_bindings", &self.env.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
