//! Token stream to tree.
//!
//! Lists are assembled with an explicit stack, so nesting depth is bounded
//! by memory rather than by the call stack.

use logos::Logos;
use spark_ir::{Sexp, StringInterner};

use crate::error::{ReadError, ReadErrorKind};
use crate::raw_token::RawToken;

/// A list under construction.
struct OpenList {
    open: char,
    offset: usize,
    items: Vec<Sexp>,
}

/// Read exactly one expression from `src`.
pub fn read(src: &str, interner: &StringInterner) -> Result<Sexp, ReadError> {
    let mut data = read_spanned(src, interner)?.into_iter();
    match (data.next(), data.next()) {
        (None, _) => Err(ReadError::new(ReadErrorKind::EmptyInput, src.len())),
        (Some((sexp, _)), None) => Ok(sexp),
        (Some(_), Some((_, offset))) => Err(ReadError::new(ReadErrorKind::TrailingInput, offset)),
    }
}

/// Read every top-level expression in `src`, in order.
pub fn read_all(src: &str, interner: &StringInterner) -> Result<Vec<Sexp>, ReadError> {
    Ok(read_spanned(src, interner)?
        .into_iter()
        .map(|(sexp, _)| sexp)
        .collect())
}

/// Top-level expressions paired with their starting byte offsets.
fn read_spanned(src: &str, interner: &StringInterner) -> Result<Vec<(Sexp, usize)>, ReadError> {
    let mut lexer = RawToken::lexer(src);
    let mut open: Vec<OpenList> = Vec::new();
    let mut top: Vec<(Sexp, usize)> = Vec::new();

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();

        let atom = match token {
            Ok(RawToken::LParen | RawToken::LBracket) => {
                open.push(OpenList {
                    open: first_char(slice),
                    offset: span.start,
                    items: Vec::new(),
                });
                continue;
            }
            Ok(RawToken::RParen | RawToken::RBracket) => {
                let close = first_char(slice);
                let Some(list) = open.pop() else {
                    return Err(ReadError::new(
                        ReadErrorKind::UnexpectedClose { close },
                        span.start,
                    ));
                };
                if closing_for(list.open) != close {
                    return Err(ReadError::new(
                        ReadErrorKind::MismatchedDelimiter {
                            open: list.open,
                            close,
                        },
                        span.start,
                    ));
                }
                push_datum(&mut open, &mut top, Sexp::List(list.items), list.offset);
                continue;
            }
            Ok(RawToken::Int) => {
                let value = slice.parse::<i64>().map_err(|_| {
                    ReadError::new(
                        ReadErrorKind::IntegerOutOfRange {
                            literal: slice.to_owned(),
                        },
                        span.start,
                    )
                })?;
                Sexp::Int(value)
            }
            Ok(RawToken::Str) => Sexp::Str(unescape(slice, span.start)?),
            Ok(RawToken::Symbol) => Sexp::Symbol(interner.intern(slice)),
            Err(()) if slice.starts_with('"') => {
                return Err(ReadError::new(
                    ReadErrorKind::UnterminatedString,
                    span.start,
                ));
            }
            Err(()) => {
                return Err(ReadError::new(
                    ReadErrorKind::InvalidToken {
                        text: slice.to_owned(),
                    },
                    span.start,
                ));
            }
        };
        push_datum(&mut open, &mut top, atom, span.start);
    }

    if let Some(list) = open.pop() {
        return Err(ReadError::new(
            ReadErrorKind::UnclosedDelimiter { open: list.open },
            list.offset,
        ));
    }
    Ok(top)
}

fn push_datum(open: &mut [OpenList], top: &mut Vec<(Sexp, usize)>, datum: Sexp, offset: usize) {
    match open.last_mut() {
        Some(list) => list.items.push(datum),
        None => top.push((datum, offset)),
    }
}

fn first_char(slice: &str) -> char {
    slice.chars().next().unwrap_or('\0')
}

fn closing_for(open: char) -> char {
    if open == '[' {
        ']'
    } else {
        ')'
    }
}

/// Strip the quotes and decode escapes of a string token.
fn unescape(slice: &str, offset: usize) -> Result<String, ReadError> {
    let inner = &slice[1..slice.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(escape) => {
                return Err(ReadError::new(
                    ReadErrorKind::InvalidEscape { escape },
                    offset,
                ))
            }
            // The token regex never ends on a lone backslash.
            None => return Err(ReadError::new(ReadErrorKind::UnterminatedString, offset)),
        }
    }
    Ok(out)
}
