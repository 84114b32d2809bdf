//! Raw token definition.
//!
//! The logos-derived tokenizer output, before atoms are decoded.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r";[^\n]*")]
pub(crate) enum RawToken {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    #[regex(r"-?[0-9]+", priority = 3)]
    Int,

    #[regex(r#""([^"\\]|\\.)*""#)]
    Str,

    #[regex(r#"[^ \t\r\n\f()\[\];"]+"#, priority = 1)]
    Symbol,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(src: &str) -> Vec<Result<RawToken, ()>> {
        RawToken::lexer(src).collect()
    }

    #[test]
    fn test_delimiters_and_atoms() {
        assert_eq!(
            kinds(r#"(+ 1 "a") [x]"#),
            vec![
                Ok(RawToken::LParen),
                Ok(RawToken::Symbol),
                Ok(RawToken::Int),
                Ok(RawToken::Str),
                Ok(RawToken::RParen),
                Ok(RawToken::LBracket),
                Ok(RawToken::Symbol),
                Ok(RawToken::RBracket),
            ]
        );
    }

    #[test]
    fn test_negative_int_versus_minus_symbol() {
        assert_eq!(kinds("-70"), vec![Ok(RawToken::Int)]);
        assert_eq!(kinds("-"), vec![Ok(RawToken::Symbol)]);
        assert_eq!(kinds("1+"), vec![Ok(RawToken::Symbol)]);
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(kinds("; nothing here\n 5"), vec![Ok(RawToken::Int)]);
    }
}
