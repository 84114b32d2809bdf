//! Spark reader.
//!
//! Turns source text into [`Sexp`] trees: balanced `( )` / `[ ]` lists,
//! integers, double-quoted strings and symbols. `;` starts a line comment.
//!
//! This is the only place that looks at characters. The structural parser
//! and the evaluator only ever see the resulting trees.

mod error;
mod raw_token;
mod reader;

pub use error::{ReadError, ReadErrorKind};
pub use reader::{read, read_all};

pub use spark_ir::Sexp;
