//! Syntax tree for Spark expressions.
//!
//! A closed sum type: every consumer matches exhaustively, so adding an
//! expression kind is a compile error everywhere it is not yet handled.
//!
//! The tree is immutable once built and strictly owned top-down. The only
//! shared pieces are a lambda's parameter list and body, which closures
//! created from that lambda reference instead of copying.

use std::sync::Arc;

use crate::Name;

/// An expression node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    /// Integer literal.
    Number(i64),
    /// String literal.
    Str(Arc<str>),
    /// Identifier reference.
    Ident(Name),
    /// `(if test then else)`
    If(Box<Conditional>),
    /// `(proc (params...) go body)`
    Lambda(Lambda),
    /// `(callee args...)`
    Apply(Box<Application>),
}

/// Two-armed conditional. Exactly one arm is evaluated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conditional {
    pub test: Expr,
    pub then_branch: Expr,
    pub else_branch: Expr,
}

/// Function literal.
///
/// Parameters are distinct and kept in source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lambda {
    pub params: Arc<[Name]>,
    pub body: Arc<Expr>,
}

/// Function application; arguments in source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Application {
    pub callee: Expr,
    pub args: Vec<Expr>,
}

impl Expr {
    #[inline]
    pub fn number(n: i64) -> Self {
        Expr::Number(n)
    }

    #[inline]
    pub fn string(s: &str) -> Self {
        Expr::Str(Arc::from(s))
    }

    #[inline]
    pub fn ident(name: Name) -> Self {
        Expr::Ident(name)
    }

    pub fn conditional(test: Expr, then_branch: Expr, else_branch: Expr) -> Self {
        Expr::If(Box::new(Conditional {
            test,
            then_branch,
            else_branch,
        }))
    }

    pub fn lambda(params: Vec<Name>, body: Expr) -> Self {
        Expr::Lambda(Lambda {
            params: Arc::from(params),
            body: Arc::new(body),
        })
    }

    pub fn apply(callee: Expr, args: Vec<Expr>) -> Self {
        Expr::Apply(Box::new(Application { callee, args }))
    }

    /// Short tag for logging and diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Number(_) => "number literal",
            Expr::Str(_) => "string literal",
            Expr::Ident(_) => "identifier",
            Expr::If(_) => "conditional",
            Expr::Lambda(_) => "lambda",
            Expr::Apply(_) => "application",
        }
    }
}

/// Move sub-expressions onto a worklist so deep trees do not recurse
/// through `Drop`. Lambda bodies still shared with a closure are left to
/// their last owner.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.take_children(&mut pending);
        }
    }
}

impl Expr {
    fn take_children(&mut self, out: &mut Vec<Expr>) {
        match self {
            Expr::Number(_) | Expr::Str(_) | Expr::Ident(_) => {}
            Expr::If(cond) => {
                out.push(std::mem::replace(&mut cond.test, Expr::Number(0)));
                out.push(std::mem::replace(&mut cond.then_branch, Expr::Number(0)));
                out.push(std::mem::replace(&mut cond.else_branch, Expr::Number(0)));
            }
            Expr::Lambda(lambda) => {
                if let Some(body) = Arc::get_mut(&mut lambda.body) {
                    out.push(std::mem::replace(body, Expr::Number(0)));
                }
            }
            Expr::Apply(app) => {
                out.push(std::mem::replace(&mut app.callee, Expr::Number(0)));
                out.append(&mut app.args);
            }
        }
    }
}
