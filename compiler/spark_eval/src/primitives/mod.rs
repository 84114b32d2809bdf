//! Built-in operators and the top-level environment.
//!
//! Primitives are ordinary values (`Value::Primitive`) bound by name in
//! [`top_env`], so they can be shadowed, passed around and stored in
//! closures like any other value.

use spark_ir::{Name, StringInterner};

use crate::errors::{
    arity_mismatch, division_by_zero, integer_overflow, internal_error, type_mismatch, user_error,
};
use crate::{Binding, Environment, EvalResult, Value};

/// Names of the built-in operators, in binding order.
pub const PRIMITIVE_OPERATORS: [&str; 7] = ["+", "-", "*", "/", "<=", "equal", "error"];

/// The environment every program starts in: `true`, `false` and the
/// primitive operators.
pub fn top_env(interner: &StringInterner) -> Environment {
    let mut bindings = Vec::with_capacity(PRIMITIVE_OPERATORS.len() + 2);
    bindings.push(Binding::new(interner.intern("true"), Value::Bool(true)));
    bindings.push(Binding::new(interner.intern("false"), Value::Bool(false)));
    for op in PRIMITIVE_OPERATORS {
        let name = interner.intern(op);
        bindings.push(Binding::new(name, Value::Primitive(name)));
    }
    tracing::debug!(bindings = bindings.len(), "built top-level environment");
    Environment::new().extend(bindings)
}

/// Apply the primitive named `op` to already evaluated arguments.
pub fn apply_primitive(op: Name, args: &[Value], interner: &StringInterner) -> EvalResult {
    let op_str = interner.lookup(op);
    match op_str {
        "+" => arithmetic(op_str, args, i64::checked_add),
        "-" => arithmetic(op_str, args, i64::checked_sub),
        "*" => arithmetic(op_str, args, i64::checked_mul),
        "/" => {
            let (a, b) = numbers(op_str, args)?;
            if b == 0 {
                return Err(division_by_zero());
            }
            // Truncates toward zero; only `i64::MIN / -1` overflows.
            a.checked_div(b)
                .map(Value::Number)
                .ok_or_else(|| integer_overflow(op_str))
        }
        "<=" => {
            let (a, b) = numbers(op_str, args)?;
            Ok(Value::Bool(a <= b))
        }
        "equal" => {
            let [a, b] = exact::<2>(op_str, args)?;
            if !a.same_tag(b) {
                return Err(type_mismatch(op_str, a.type_name(), b.type_name()));
            }
            Ok(Value::Bool(a == b))
        }
        "error" => {
            let [payload] = exact::<1>(op_str, args)?;
            Err(user_error(payload.clone()))
        }
        _ => Err(internal_error(format!("unknown primitive `{op_str}`"))),
    }
}

fn arithmetic(op: &str, args: &[Value], f: fn(i64, i64) -> Option<i64>) -> EvalResult {
    let (a, b) = numbers(op, args)?;
    f(a, b).map(Value::Number).ok_or_else(|| integer_overflow(op))
}

/// Two number arguments.
fn numbers(op: &str, args: &[Value]) -> Result<(i64, i64), crate::EvalError> {
    let [a, b] = exact::<2>(op, args)?;
    Ok((expect_number(op, a)?, expect_number(op, b)?))
}

fn expect_number(op: &str, value: &Value) -> Result<i64, crate::EvalError> {
    match value {
        Value::Number(n) => Ok(*n),
        other => Err(type_mismatch(op, "number", other.type_name())),
    }
}

fn exact<'v, const N: usize>(
    op: &str,
    args: &'v [Value],
) -> Result<&'v [Value; N], crate::EvalError> {
    <&[Value; N]>::try_from(args).map_err(|_| arity_mismatch(op, N, args.len()))
}
