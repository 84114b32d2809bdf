//! Parse error types.
//!
//! A `ParseError` pairs a structured kind with the rendered sub-tree that
//! could not be parsed, so the caller can show the offending input verbatim.

use thiserror::Error;

/// The shape problem found in the input tree.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// `()` has no callee.
    #[error("empty list is not an expression")]
    EmptyApplication,
    /// `if` with the wrong number of operands.
    #[error("`if` expects 3 operands (test, then, else), found {found}")]
    MalformedIf { found: usize },
    /// Function literal not of the form `(proc (params...) go body)`.
    #[error("malformed `proc`: {reason}")]
    MalformedProc { reason: &'static str },
    /// Binding block not of the form `(let (name = expr) ... body)`.
    #[error("malformed `let`: {reason}")]
    MalformedLet { reason: &'static str },
    /// The same name bound twice in one parameter list or binding block.
    #[error("duplicate parameter `{name}`")]
    DuplicateParameter { name: String },
    /// A reserved word used as an identifier or parameter.
    #[error("`{name}` is a reserved word")]
    ReservedKeyword { name: String },
}

/// Parse failure with the offending tree.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("parse error: {kind} in `{tree}`")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// The offending sub-tree, rendered back to source text.
    pub tree: String,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, tree: impl Into<String>) -> Self {
        Self {
            kind,
            tree: tree.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_includes_tree() {
        let err = ParseError::new(ParseErrorKind::MalformedIf { found: 2 }, "(if true 1)");
        assert_eq!(
            err.to_string(),
            "parse error: `if` expects 3 operands (test, then, else), found 2 in `(if true 1)`"
        );
    }

    #[test]
    fn test_kind_messages() {
        assert_eq!(
            ParseErrorKind::DuplicateParameter { name: "x".into() }.to_string(),
            "duplicate parameter `x`"
        );
        assert_eq!(
            ParseErrorKind::ReservedKeyword { name: "go".into() }.to_string(),
            "`go` is a reserved word"
        );
    }
}
