//! Persistent environment for lexical scoping.
//!
//! An environment is a chain of immutable frames. `extend` allocates a new
//! frame in front of the existing chain and returns a new handle; the old
//! handle and every closure that captured it keep seeing exactly the
//! bindings they saw before. Frames are shared with `Arc`, so handles are
//! cheap to clone and safe to use from several threads.
//!
//! # Shadowing
//!
//! Lookup scans the newest frame first, so a parameter shadows any outer
//! binding with the same name.

use std::fmt::Write as _;
use std::sync::Arc;

use spark_ir::{Name, StringInterner};

use crate::Value;

/// Longest environment listing included in an unbound-identifier error.
const DESCRIBE_LIMIT: usize = 32;

/// A name paired with its value. Never mutated after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Binding {
    pub name: Name,
    pub value: Value,
}

impl Binding {
    #[inline]
    pub fn new(name: Name, value: Value) -> Self {
        Self { name, value }
    }
}

/// One scope's bindings plus the enclosing chain.
struct Frame {
    bindings: Vec<Binding>,
    parent: Environment,
}

/// Handle to a chain of binding frames.
#[derive(Clone, Default)]
pub struct Environment {
    head: Option<Arc<Frame>>,
    /// Total number of bindings in the chain.
    len: usize,
}

impl Environment {
    /// The empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// A new environment with `bindings` in front of this one.
    ///
    /// `self` is left untouched.
    #[must_use]
    pub fn extend(&self, bindings: Vec<Binding>) -> Environment {
        let len = self.len + bindings.len();
        Environment {
            head: Some(Arc::new(Frame {
                bindings,
                parent: self.clone(),
            })),
            len,
        }
    }

    /// Find the value bound to `name`, newest frame first.
    pub fn lookup(&self, name: Name) -> Option<&Value> {
        self.bindings()
            .find(|binding| binding.name == name)
            .map(|binding| &binding.value)
    }

    /// All bindings in lookup order.
    pub fn bindings(&self) -> impl Iterator<Item = &Binding> + '_ {
        self.frames().flat_map(|frame| frame.bindings.iter())
    }

    fn frames(&self) -> impl Iterator<Item = &Frame> + '_ {
        std::iter::successors(self.head.as_deref(), |&frame| frame.parent.head.as_deref())
    }

    /// Total number of bindings, including shadowed ones.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of frames in the chain.
    pub(crate) fn depth(&self) -> usize {
        self.frames().count()
    }

    /// Whether both handles point at the same chain.
    #[cfg(test)]
    pub(crate) fn ptr_eq(&self, other: &Environment) -> bool {
        match (&self.head, &other.head) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    /// Render the bound names in lookup order, for diagnostics.
    pub fn describe(&self, interner: &StringInterner) -> String {
        let mut out = String::from("[");
        for (i, binding) in self.bindings().take(DESCRIBE_LIMIT).enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(interner.lookup(binding.name));
        }
        if self.len > DESCRIBE_LIMIT {
            let _ = write!(out, ", ... {} more", self.len - DESCRIBE_LIMIT);
        }
        out.push(']');
        out
    }
}

/// Unlink uniquely owned frames one at a time so long chains do not
/// recurse through `Drop`.
impl Drop for Environment {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(frame) = next {
            match Arc::try_unwrap(frame) {
                Ok(mut frame) => next = frame.parent.head.take(),
                Err(_) => break,
            }
        }
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("frames", &self.depth())
            .field("bindings", &self.len)
            .finish()
    }
}

#[cfg(test)]
mod tests;
