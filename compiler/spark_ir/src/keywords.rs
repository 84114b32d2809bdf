//! Pre-interned reserved words.
//!
//! Interned once per interner so the parser can recognize special forms by
//! `Name` comparison instead of string comparison.

use crate::{Name, StringInterner};

/// The reserved words of the surface syntax.
///
/// ```text
/// (if test then else)
/// (proc (a b) go body)
/// (let (a = 1) (b = 2) body)
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Keywords {
    pub if_: Name,
    pub proc: Name,
    pub go: Name,
    pub let_: Name,
    pub equals: Name,
}

impl Keywords {
    pub fn new(interner: &StringInterner) -> Self {
        Self {
            if_: interner.intern("if"),
            proc: interner.intern("proc"),
            go: interner.intern("go"),
            let_: interner.intern("let"),
            equals: interner.intern("="),
        }
    }

    /// Reserved words can never be identifiers or parameter names.
    #[inline]
    pub fn is_reserved(&self, name: Name) -> bool {
        name == self.if_
            || name == self.proc
            || name == self.go
            || name == self.let_
            || name == self.equals
    }
}
