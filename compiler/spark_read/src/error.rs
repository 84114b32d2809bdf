//! Reader errors.

use thiserror::Error;

/// What went wrong while reading.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ReadErrorKind {
    #[error("empty input")]
    EmptyInput,
    #[error("unexpected end of input: `{open}` is never closed")]
    UnclosedDelimiter { open: char },
    #[error("unexpected closing `{close}`")]
    UnexpectedClose { close: char },
    #[error("mismatched delimiter: `{open}` closed by `{close}`")]
    MismatchedDelimiter { open: char, close: char },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("invalid escape sequence `\\{escape}` in string literal")]
    InvalidEscape { escape: char },
    #[error("integer literal `{literal}` does not fit in 64 bits")]
    IntegerOutOfRange { literal: String },
    #[error("unrecognized input `{text}`")]
    InvalidToken { text: String },
    #[error("expected a single expression, found more input")]
    TrailingInput,
}

/// A reader failure and the byte offset where it was detected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("read error at byte {offset}: {kind}")]
pub struct ReadError {
    pub kind: ReadErrorKind,
    pub offset: usize,
}

impl ReadError {
    #[cold]
    pub(crate) fn new(kind: ReadErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}
