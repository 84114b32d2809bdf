use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_message_matches_kind_display() {
    let err = division_by_zero();
    assert_eq!(err.message, err.kind.to_string());
    assert_eq!(err.message, "division by zero");
}

#[test]
fn test_arity_message_pluralizes() {
    assert_eq!(
        arity_mismatch("error", 1, 2).message,
        "error expects 1 argument, got 2"
    );
    assert_eq!(
        arity_mismatch("proc", 2, 1).message,
        "proc expects 2 arguments, got 1"
    );
}

#[test]
fn test_categories() {
    assert_eq!(
        unbound_identifier("x", "[]".into()).category(),
        ErrorCategory::UnboundIdentifier
    );
    assert_eq!(
        arity_mismatch("proc", 2, 1).category(),
        ErrorCategory::ArityMismatch
    );
    assert_eq!(
        type_mismatch("+", "number", "string").category(),
        ErrorCategory::TypeMismatch
    );
    assert_eq!(division_by_zero().category(), ErrorCategory::Domain);
    assert_eq!(integer_overflow("*").category(), ErrorCategory::Domain);
    assert_eq!(user_error(Value::Number(1)).category(), ErrorCategory::User);
    assert_eq!(not_callable("number").category(), ErrorCategory::NotCallable);
    assert_eq!(
        recursion_limit_exceeded(10).category(),
        ErrorCategory::StackOverflow
    );
    assert_eq!(internal_error("bad").category(), ErrorCategory::Internal);
}

#[test]
fn test_domain_errors() {
    assert!(division_by_zero().is_domain_error());
    assert!(integer_overflow("+").is_domain_error());
    assert!(!type_mismatch("+", "number", "string").is_domain_error());
}

#[test]
fn test_user_error_payload() {
    let err = user_error(Value::string("boom"));
    assert_eq!(err.user_payload(), Some(&Value::string("boom")));
    assert_eq!(err.to_string(), "UserError: user error: \"boom\"");
    assert_eq!(division_by_zero().user_payload(), None);
}

#[test]
fn test_unbound_message_includes_environment() {
    let err = unbound_identifier("y", "[x, true]".into());
    assert_eq!(
        err.to_string(),
        "UnboundIdentifierError: unbound identifier `y` in environment [x, true]"
    );
}

#[test]
fn test_backtrace_display() {
    let backtrace = EvalBacktrace::new(vec![
        BacktraceFrame {
            name: "(proc (n))".into(),
        },
        BacktraceFrame {
            name: "(proc (self n))".into(),
        },
    ]);
    assert_eq!(backtrace.len(), 2);
    assert_eq!(
        backtrace.to_string(),
        "call backtrace:\n  0: (proc (n))\n  1: (proc (self n))\n"
    );
    assert_eq!(EvalBacktrace::default().to_string(), "");
}

#[test]
fn test_with_backtrace() {
    let err = division_by_zero().with_backtrace(EvalBacktrace::default());
    assert!(err.backtrace.is_some_and(|bt| bt.is_empty()));
}
