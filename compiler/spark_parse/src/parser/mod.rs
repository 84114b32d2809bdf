//! Shape-directed dispatch from `Sexp` to `Expr`.

use rustc_hash::FxHashSet;
use spark_ir::{Expr, Keywords, Name, Sexp, StringInterner};
use spark_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::error::{ParseError, ParseErrorKind};

/// Structural parser.
///
/// Holds the interner (to render offending trees in errors) and the
/// pre-interned keywords (to recognize special forms by `Name` comparison).
pub struct Parser<'a> {
    interner: &'a StringInterner,
    keywords: Keywords,
}

impl<'a> Parser<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        Self {
            interner,
            keywords: Keywords::new(interner),
        }
    }

    /// Parse one tree. Each recursive step works on a strict sub-tree.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn parse(&self, tree: &Sexp) -> Result<Expr, ParseError> {
        self.parse_sexp(tree)
    }

    fn parse_sexp(&self, tree: &Sexp) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| match tree {
            Sexp::Int(n) => Ok(Expr::number(*n)),
            Sexp::Str(s) => Ok(Expr::string(s)),
            Sexp::Symbol(name) => {
                self.check_not_reserved(*name, tree)?;
                Ok(Expr::ident(*name))
            }
            Sexp::List(items) => self.parse_list(tree, items),
        })
    }

    fn parse_list(&self, tree: &Sexp, items: &[Sexp]) -> Result<Expr, ParseError> {
        let Some((head, rest)) = items.split_first() else {
            return Err(self.error(ParseErrorKind::EmptyApplication, tree));
        };

        match head.as_symbol() {
            Some(kw) if kw == self.keywords.if_ => self.parse_if(tree, rest),
            Some(kw) if kw == self.keywords.proc => self.parse_proc(tree, rest),
            Some(kw) if kw == self.keywords.let_ => self.parse_let(tree, rest),
            _ => {
                let callee = self.parse_sexp(head)?;
                let args = rest
                    .iter()
                    .map(|arg| self.parse_sexp(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Expr::apply(callee, args))
            }
        }
    }

    /// `(if test then else)`
    fn parse_if(&self, tree: &Sexp, rest: &[Sexp]) -> Result<Expr, ParseError> {
        let [test, then_branch, else_branch] = rest else {
            return Err(self.error(ParseErrorKind::MalformedIf { found: rest.len() }, tree));
        };
        Ok(Expr::conditional(
            self.parse_sexp(test)?,
            self.parse_sexp(then_branch)?,
            self.parse_sexp(else_branch)?,
        ))
    }

    /// `(proc (p ...) go body)`
    fn parse_proc(&self, tree: &Sexp, rest: &[Sexp]) -> Result<Expr, ParseError> {
        let malformed = |reason| self.error(ParseErrorKind::MalformedProc { reason }, tree);

        let [params, separator, body] = rest else {
            return Err(malformed("expected `(proc (params...) go body)`"));
        };
        let Some(params) = params.as_list() else {
            return Err(malformed("parameters must be a list of symbols"));
        };
        if separator.as_symbol() != Some(self.keywords.go) {
            return Err(malformed("expected `go` after the parameter list"));
        }

        let names = params
            .iter()
            .map(|param| {
                param
                    .as_symbol()
                    .ok_or_else(|| malformed("parameters must be a list of symbols"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.check_params(&names, tree)?;

        Ok(Expr::lambda(names, self.parse_sexp(body)?))
    }

    /// `(let (x = e) ... body)`, rewritten to `((proc (x ...) go body) e ...)`.
    fn parse_let(&self, tree: &Sexp, rest: &[Sexp]) -> Result<Expr, ParseError> {
        let malformed = |reason| self.error(ParseErrorKind::MalformedLet { reason }, tree);

        let Some((body, clauses)) = rest.split_last() else {
            return Err(malformed("expected bindings and a body"));
        };
        if clauses.is_empty() {
            return Err(malformed("expected at least one `(name = expr)` binding"));
        }

        let mut names = Vec::with_capacity(clauses.len());
        let mut values = Vec::with_capacity(clauses.len());
        for clause in clauses {
            let Some([name, equals, value]) = clause.as_list() else {
                return Err(malformed("each binding must look like `(name = expr)`"));
            };
            let Some(name) = name.as_symbol() else {
                return Err(malformed("binding name must be a symbol"));
            };
            if equals.as_symbol() != Some(self.keywords.equals) {
                return Err(malformed("each binding must look like `(name = expr)`"));
            }
            names.push(name);
            values.push(self.parse_sexp(value)?);
        }
        self.check_params(&names, tree)?;

        trace!(bindings = names.len(), "desugaring let into application");
        let lambda = Expr::lambda(names, self.parse_sexp(body)?);
        Ok(Expr::apply(lambda, values))
    }

    /// Parameters must be distinct and must not be reserved words.
    fn check_params(&self, names: &[Name], tree: &Sexp) -> Result<(), ParseError> {
        let mut seen = FxHashSet::default();
        for &name in names {
            self.check_not_reserved(name, tree)?;
            if !seen.insert(name) {
                return Err(self.error(
                    ParseErrorKind::DuplicateParameter {
                        name: self.interner.lookup(name).to_owned(),
                    },
                    tree,
                ));
            }
        }
        Ok(())
    }

    fn check_not_reserved(&self, name: Name, tree: &Sexp) -> Result<(), ParseError> {
        if self.keywords.is_reserved(name) {
            return Err(self.error(
                ParseErrorKind::ReservedKeyword {
                    name: self.interner.lookup(name).to_owned(),
                },
                tree,
            ));
        }
        Ok(())
    }

    #[cold]
    fn error(&self, kind: ParseErrorKind, tree: &Sexp) -> ParseError {
        ParseError::new(kind, tree.display(self.interner).to_string())
    }
}
