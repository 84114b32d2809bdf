use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_intern_same_text_same_name() {
    let interner = StringInterner::new();
    let a = interner.intern("counter");
    let b = interner.intern("counter");
    assert_eq!(a, b);
}

#[test]
fn test_intern_different_text_different_name() {
    let interner = StringInterner::new();
    assert_ne!(interner.intern("x"), interner.intern("y"));
}

#[test]
fn test_lookup_roundtrip() {
    let interner = StringInterner::new();
    let name = interner.intern("hello-world");
    assert_eq!(interner.lookup(name), "hello-world");
}

#[test]
fn test_empty_string_is_pre_interned() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
}

#[test]
fn test_keywords_are_pre_interned() {
    let interner = StringInterner::new();
    let before = interner.len();
    interner.intern("proc");
    interner.intern("equal");
    assert_eq!(interner.len(), before);
    assert!(!interner.is_empty());
}

#[test]
fn test_get_does_not_intern() {
    let interner = StringInterner::new();
    assert_eq!(interner.get("never-seen"), None);
    let name = interner.intern("never-seen");
    assert_eq!(interner.get("never-seen"), Some(name));
}

#[test]
fn test_lookup_unknown_name_is_empty() {
    let interner = StringInterner::new();
    assert_eq!(interner.lookup(Name::from_raw(u32::MAX)), "");
}

#[test]
fn test_shared_interner_clones_share_table() {
    let shared = SharedInterner::new();
    let other = shared.clone();
    let name = shared.intern("shared");
    assert_eq!(other.get("shared"), Some(name));
    assert_eq!(StringLookup::lookup(&*other, name), "shared");
}

#[test]
fn test_intern_error_display() {
    let err = InternError::Overflow { count: 5 };
    assert!(err.to_string().contains("exceeded capacity"));
}
