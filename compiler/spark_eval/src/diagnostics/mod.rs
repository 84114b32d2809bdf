//! Call-stack tracking for the evaluator.
//!
//! `CallStack` records one frame per closure call in progress. Pushing past
//! the configured depth limit fails with a `StackOverflow` error instead of
//! letting the host stack run out, and errors raised inside calls get a
//! snapshot of the live frames attached as an `EvalBacktrace`.

use std::sync::Arc;

use spark_ir::{Name, StringInterner};

use crate::errors::{recursion_limit_exceeded, BacktraceFrame, EvalBacktrace, EvalError};

/// A closure call in progress, identified by its parameter list.
#[derive(Clone, Debug)]
pub struct CallFrame {
    pub params: Arc<[Name]>,
}

impl CallFrame {
    pub fn new(params: Arc<[Name]>) -> Self {
        Self { params }
    }

    /// Render as `(proc (a b))`.
    pub fn render(&self, interner: &StringInterner) -> String {
        let params: Vec<&str> = self.params.iter().map(|&p| interner.lookup(p)).collect();
        format!("(proc ({}))", params.join(" "))
    }
}

/// Live call stack.
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// `max_depth` of `None` means unlimited.
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a frame, checking the depth limit. On overflow nothing is pushed.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                tracing::debug!(limit = max, "call rejected: depth limit reached");
                return Err(recursion_limit_exceeded(max));
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(
            !self.frames.is_empty(),
            "CallStack::pop() called on empty stack"
        );
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Snapshot of the live frames, most recent first.
    pub fn capture(&self, interner: &StringInterner) -> EvalBacktrace {
        let frames = self
            .frames
            .iter()
            .rev()
            .map(|frame| BacktraceFrame {
                name: frame.render(interner),
            })
            .collect();
        EvalBacktrace::new(frames)
    }

    /// Attach a backtrace unless the error already carries one or no call
    /// is in progress.
    pub fn attach_backtrace(&self, err: EvalError, interner: &StringInterner) -> EvalError {
        if self.is_empty() || err.backtrace.is_some() {
            return err;
        }
        err.with_backtrace(self.capture(interner))
    }
}
