use super::*;
use pretty_assertions::assert_eq;
use spark_ir::StringInterner;

fn identity_closure(interner: &StringInterner) -> Value {
    let x = interner.intern("x");
    Value::closure(
        Arc::from(vec![x]),
        Arc::new(Expr::Ident(x)),
        Environment::new(),
    )
}

#[test]
fn test_truthiness() {
    let interner = StringInterner::new();
    assert!(!Value::Bool(false).is_truthy());
    assert!(Value::Bool(true).is_truthy());
    assert!(Value::Number(0).is_truthy());
    assert!(Value::string("").is_truthy());
    assert!(identity_closure(&interner).is_truthy());
    assert!(Value::Primitive(interner.intern("+")).is_truthy());
}

#[test]
fn test_equality_is_structural_within_tag() {
    assert_eq!(Value::Number(3), Value::Number(3));
    assert_ne!(Value::Number(3), Value::Number(4));
    assert_eq!(Value::string("abc"), Value::string("abc"));
    assert_ne!(Value::Number(3), Value::string("3"));
    assert_ne!(Value::Bool(true), Value::Number(1));
}

#[test]
fn test_closures_compare_by_identity() {
    let interner = StringInterner::new();
    let a = identity_closure(&interner);
    let b = identity_closure(&interner);
    assert_eq!(a, a.clone());
    assert_ne!(a, b);
}

#[test]
fn test_same_tag() {
    assert!(Value::Number(1).same_tag(&Value::Number(2)));
    assert!(!Value::Number(1).same_tag(&Value::Bool(true)));
}

#[test]
fn test_serialize() {
    let interner = StringInterner::new();
    assert_eq!(Value::Number(-70).serialize(), "-70");
    assert_eq!(Value::Bool(true).serialize(), "true");
    assert_eq!(Value::Bool(false).serialize(), "false");
    assert_eq!(Value::string("Hello, world!").serialize(), "\"Hello, world!\"");
    assert_eq!(identity_closure(&interner).serialize(), "#<procedure>");
    assert_eq!(
        Value::Primitive(interner.intern("+")).serialize(),
        "#<primop>"
    );
}

#[test]
fn test_serialize_string_escapes() {
    assert_eq!(
        Value::string("tab\there \"q\" \\ nl\n").serialize(),
        "\"tab\\there \\\"q\\\" \\\\ nl\\n\""
    );
    assert_eq!(Value::string("cr\r nul\0 é").serialize(), "\"cr\r nul\0 é\"");
}

#[test]
fn test_type_names() {
    let interner = StringInterner::new();
    assert_eq!(Value::Number(1).type_name(), "number");
    assert_eq!(identity_closure(&interner).type_name(), "closure");
}

#[test]
fn test_closure_debug_does_not_dump_environment() {
    let interner = StringInterner::new();
    let debug = format!("{:?}", identity_closure(&interner));
    assert!(debug.starts_with("Closure"));
    assert!(debug.contains("env_bindings: 0"));
}
