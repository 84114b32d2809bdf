//! `InterpreterBuilder` for configuring an [`Interpreter`].

use spark_ir::StringInterner;

use super::Interpreter;
use crate::diagnostics::CallStack;

/// Closure calls allowed in progress at once before evaluation fails with
/// `StackOverflow`.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Builder for [`Interpreter`] instances.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    max_call_depth: Option<usize>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        Self {
            interner,
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }

    /// Set the call-depth limit. `None` removes it; recursion is then
    /// bounded only by memory.
    #[must_use]
    pub fn max_call_depth(mut self, limit: Option<usize>) -> Self {
        self.max_call_depth = limit;
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            call_stack: CallStack::new(self.max_call_depth),
        }
    }
}
