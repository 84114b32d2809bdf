//! Spark structural parser.
//!
//! Converts reader trees ([`Sexp`]) into syntax trees ([`Expr`]). Special
//! forms are recognized by their leading keyword and fixed shape:
//!
//! | form | shape |
//! |---|---|
//! | conditional | `(if test then else)` |
//! | function literal | `(proc (p ...) go body)` |
//! | binding block | `(let (x = e) ... body)` |
//!
//! Every other non-empty list is an application. Binding blocks are
//! rewritten here into an immediately applied function literal, so the
//! evaluator never sees them.

mod error;
mod parser;

pub use error::{ParseError, ParseErrorKind};
pub use parser::Parser;

use spark_ir::{Expr, Sexp, StringInterner};

/// Parse one reader tree into a syntax tree.
pub fn parse(tree: &Sexp, interner: &StringInterner) -> Result<Expr, ParseError> {
    Parser::new(interner).parse(tree)
}
