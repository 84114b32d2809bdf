//! Spark IR - shared data types for the Spark interpreter.
//!
//! # Contents
//!
//! - [`Name`] / [`StringInterner`]: interned identifiers. Two names are equal
//!   exactly when their text is equal.
//! - [`Keywords`]: the pre-interned reserved words of the surface syntax.
//! - [`Sexp`]: the atom/list tree handed over by the reader.
//! - [`Expr`]: the typed syntax tree produced by the structural parser and
//!   consumed by the evaluator.

pub mod ast;
mod interner;
mod keywords;
mod name;
pub mod sexp;

pub use ast::{Application, Conditional, Expr, Lambda};
pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use keywords::Keywords;
pub use name::Name;
pub use sexp::{write_string_literal, Sexp};
