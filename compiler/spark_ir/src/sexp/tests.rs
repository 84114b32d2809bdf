use super::*;
use crate::StringInterner;
use pretty_assertions::assert_eq;

#[test]
fn test_display_atoms() {
    let interner = StringInterner::new();
    assert_eq!(Sexp::Int(-70).display(&interner).to_string(), "-70");
    assert_eq!(
        Sexp::Str("say \"hi\"".into()).display(&interner).to_string(),
        r#""say \"hi\"""#
    );
    let sym = Sexp::Symbol(interner.intern("equal"));
    assert_eq!(sym.display(&interner).to_string(), "equal");
}

#[test]
fn test_display_nested_list() {
    let interner = StringInterner::new();
    let tree = Sexp::list([
        Sexp::Symbol(interner.intern("if")),
        Sexp::Symbol(interner.intern("true")),
        Sexp::list([
            Sexp::Symbol(interner.intern("+")),
            Sexp::Int(1),
            Sexp::Int(2),
        ]),
        Sexp::Int(2),
    ]);
    assert_eq!(tree.display(&interner).to_string(), "(if true (+ 1 2) 2)");
}

#[test]
fn test_display_empty_list() {
    let interner = StringInterner::new();
    assert_eq!(Sexp::List(vec![]).display(&interner).to_string(), "()");
}

#[test]
fn test_accessors() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    assert_eq!(Sexp::Symbol(x).as_symbol(), Some(x));
    assert_eq!(Sexp::Int(1).as_symbol(), None);
    assert_eq!(Sexp::list([Sexp::Int(1)]).as_list(), Some(&[Sexp::Int(1)][..]));
    assert_eq!(Sexp::Str(String::new()).as_list(), None);
}

fn nested(depth: usize) -> Sexp {
    let mut tree = Sexp::Int(1);
    for _ in 0..depth {
        tree = Sexp::List(vec![tree]);
    }
    tree
}

#[test]
fn test_deep_tree_drops_without_recursion() {
    drop(nested(200_000));
}

#[test]
fn test_deep_tree_displays_without_recursion() {
    let interner = StringInterner::new();
    let depth = 200_000;
    let rendered = nested(depth).display(&interner).to_string();
    assert_eq!(rendered.len(), 2 * depth + 1);
    assert!(rendered.starts_with("((("));
    assert!(rendered.ends_with("1)))"));
}

#[test]
fn test_string_literal_escapes_only_reader_escapes() {
    let mut out = String::new();
    write_string_literal(&mut out, "a\"b\\c\nd\te\rf\0g\u{1F600}").expect("write to String");
    assert_eq!(out, "\"a\\\"b\\\\c\\nd\\te\rf\0g\u{1F600}\"");
}
