//! Reader output: the untyped atom/list tree.
//!
//! The reader turns source text into `Sexp`; the structural parser turns
//! `Sexp` into [`Expr`](crate::Expr). Nothing in the interpreter core ever
//! sees raw text.

use std::fmt;

use crate::{Name, StringLookup};

/// An atom or an ordered list of trees.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sexp {
    /// Integer atom.
    Int(i64),
    /// String atom (already unescaped).
    Str(String),
    /// Symbol token.
    Symbol(Name),
    /// Parenthesized sequence.
    List(Vec<Sexp>),
}

impl Sexp {
    /// Convenience constructor for a list.
    pub fn list(items: impl IntoIterator<Item = Sexp>) -> Self {
        Sexp::List(items.into_iter().collect())
    }

    /// The symbol, if this tree is a bare symbol.
    #[inline]
    pub fn as_symbol(&self) -> Option<Name> {
        match self {
            Sexp::Symbol(name) => Some(*name),
            _ => None,
        }
    }

    /// The elements, if this tree is a list.
    #[inline]
    pub fn as_list(&self) -> Option<&[Sexp]> {
        match self {
            Sexp::List(items) => Some(items),
            _ => None,
        }
    }

    /// Render back to source-like text, resolving symbols through `interner`.
    pub fn display<'a, I: StringLookup + ?Sized>(&'a self, interner: &'a I) -> SexpDisplay<'a, I> {
        SexpDisplay {
            sexp: self,
            interner,
        }
    }
}

/// `Display` adapter returned by [`Sexp::display`].
pub struct SexpDisplay<'a, I: ?Sized> {
    sexp: &'a Sexp,
    interner: &'a I,
}

/// Pending output while rendering a tree.
enum Step<'a> {
    Tree(&'a Sexp),
    Text(&'static str),
}

/// Renders with an explicit worklist, so nesting depth is bounded by
/// memory rather than by the call stack.
impl<I: StringLookup + ?Sized> fmt::Display for SexpDisplay<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut work = vec![Step::Tree(self.sexp)];
        while let Some(step) = work.pop() {
            match step {
                Step::Text(text) => f.write_str(text)?,
                Step::Tree(Sexp::Int(n)) => write!(f, "{n}")?,
                Step::Tree(Sexp::Str(s)) => write_string_literal(f, s)?,
                Step::Tree(Sexp::Symbol(name)) => f.write_str(self.interner.lookup(*name))?,
                Step::Tree(Sexp::List(items)) => {
                    f.write_str("(")?;
                    work.push(Step::Text(")"));
                    for (i, item) in items.iter().enumerate().rev() {
                        work.push(Step::Tree(item));
                        if i > 0 {
                            work.push(Step::Text(" "));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// Drain nested lists onto a worklist so deep trees do not recurse
/// through `Drop`.
impl Drop for Sexp {
    fn drop(&mut self) {
        let Sexp::List(items) = self else {
            return;
        };
        if !items.iter().any(|item| matches!(item, Sexp::List(inner) if !inner.is_empty())) {
            return;
        }
        let mut pending = std::mem::take(items);
        while let Some(mut item) = pending.pop() {
            if let Sexp::List(children) = &mut item {
                pending.append(children);
            }
        }
    }
}

/// Write `s` as a double-quoted literal the reader accepts.
///
/// Only `"`, `\`, newline and tab are escaped; every other character is
/// written as is.
pub fn write_string_literal<W: fmt::Write + ?Sized>(out: &mut W, s: &str) -> fmt::Result {
    out.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\t' => out.write_str("\\t")?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}

#[cfg(test)]
mod tests;
