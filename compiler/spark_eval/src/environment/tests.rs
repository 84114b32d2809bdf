use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_empty_environment() {
    let interner = StringInterner::new();
    let env = Environment::new();
    assert!(env.is_empty());
    assert_eq!(env.depth(), 0);
    assert_eq!(env.lookup(interner.intern("x")), None);
}

#[test]
fn test_extend_and_lookup() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let y = interner.intern("y");

    let env = Environment::new().extend(vec![
        Binding::new(x, Value::Number(1)),
        Binding::new(y, Value::Number(2)),
    ]);
    assert_eq!(env.lookup(x), Some(&Value::Number(1)));
    assert_eq!(env.lookup(y), Some(&Value::Number(2)));
    assert_eq!(env.len(), 2);
    assert_eq!(env.depth(), 1);
}

#[test]
fn test_new_frame_shadows_outer_binding() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let outer = Environment::new().extend(vec![Binding::new(x, Value::Number(1))]);
    let inner = outer.extend(vec![Binding::new(x, Value::Number(2))]);

    assert_eq!(inner.lookup(x), Some(&Value::Number(2)));
    assert_eq!(inner.len(), 2);
}

#[test]
fn test_extend_leaves_original_untouched() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let y = interner.intern("y");

    let base = Environment::new().extend(vec![Binding::new(x, Value::Number(5))]);
    let extended = base.extend(vec![Binding::new(y, Value::Number(6))]);

    assert_eq!(base.lookup(y), None);
    assert_eq!(base.len(), 1);
    assert_eq!(extended.lookup(x), Some(&Value::Number(5)));
}

#[test]
fn test_siblings_share_parent() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let base = Environment::new().extend(vec![Binding::new(x, Value::Number(0))]);
    let a = base.extend(vec![Binding::new(x, Value::Number(1))]);
    let b = base.extend(vec![Binding::new(x, Value::Number(2))]);

    assert_eq!(a.lookup(x), Some(&Value::Number(1)));
    assert_eq!(b.lookup(x), Some(&Value::Number(2)));
    assert_eq!(base.lookup(x), Some(&Value::Number(0)));
}

#[test]
fn test_bindings_iterate_newest_first() {
    let interner = StringInterner::new();
    let a = interner.intern("a");
    let b = interner.intern("b");
    let c = interner.intern("c");

    let env = Environment::new()
        .extend(vec![
            Binding::new(a, Value::Number(1)),
            Binding::new(b, Value::Number(2)),
        ])
        .extend(vec![Binding::new(c, Value::Number(3))]);

    let names: Vec<Name> = env.bindings().map(|binding| binding.name).collect();
    assert_eq!(names, vec![c, a, b]);
}

#[test]
fn test_ptr_eq() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let env = Environment::new().extend(vec![Binding::new(x, Value::Number(1))]);
    let same = env.clone();
    let other = Environment::new().extend(vec![Binding::new(x, Value::Number(1))]);

    assert!(env.ptr_eq(&same));
    assert!(!env.ptr_eq(&other));
    assert!(Environment::new().ptr_eq(&Environment::new()));
}

#[test]
fn test_describe() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let y = interner.intern("y");

    let env = Environment::new()
        .extend(vec![Binding::new(x, Value::Number(1))])
        .extend(vec![Binding::new(y, Value::Number(2))]);
    assert_eq!(env.describe(&interner), "[y, x]");
    assert_eq!(Environment::new().describe(&interner), "[]");
}

#[test]
fn test_describe_truncates() {
    let interner = StringInterner::new();
    let bindings = (0..40)
        .map(|i| Binding::new(interner.intern(&format!("v{i}")), Value::Number(i)))
        .collect();
    let env = Environment::new().extend(bindings);
    assert!(env.describe(&interner).ends_with(", ... 8 more]"));
}

#[test]
fn test_long_chain_drops_without_overflow() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let mut env = Environment::new();
    for i in 0..200_000 {
        env = env.extend(vec![Binding::new(x, Value::Number(i))]);
    }
    assert_eq!(env.lookup(x), Some(&Value::Number(199_999)));
    drop(env);
}

#[test]
fn test_environment_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Environment>();
    assert_send_sync::<Value>();
}
