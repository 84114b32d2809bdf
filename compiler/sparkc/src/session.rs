//! Evaluation session: one interner, one top-level environment.

use spark_eval::{top_env, Environment, InterpreterBuilder, Value, DEFAULT_MAX_CALL_DEPTH};
use spark_ir::{SharedInterner, Sexp, StringInterner};

use crate::SparkError;

/// State shared by every program evaluated in one run of the driver.
///
/// Programs cannot define globals, so the top-level environment never
/// changes; each evaluation starts from it with an empty call stack.
pub struct Session {
    interner: SharedInterner,
    env: Environment,
    max_call_depth: Option<usize>,
}

impl Session {
    pub fn new() -> Self {
        let interner = SharedInterner::new();
        let env = top_env(&interner);
        Self {
            interner,
            env,
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }

    /// Set the call-depth limit; `None` disables it.
    #[must_use]
    pub fn with_max_call_depth(mut self, limit: Option<usize>) -> Self {
        self.max_call_depth = limit;
        self
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Evaluate a source text holding exactly one datum.
    pub fn eval_source(&self, src: &str) -> Result<Value, SparkError> {
        let tree = spark_read::read(src, &self.interner)?;
        self.eval_datum(&tree)
    }

    /// Evaluate every datum in `src` in order, stopping at the first error.
    pub fn eval_all(&self, src: &str) -> Result<Vec<Value>, SparkError> {
        self.read_all(src)?
            .iter()
            .map(|tree| self.eval_datum(tree))
            .collect()
    }

    /// Read every datum in `src` without evaluating anything.
    pub fn read_all(&self, src: &str) -> Result<Vec<Sexp>, SparkError> {
        Ok(spark_read::read_all(src, &self.interner)?)
    }

    /// Parse and evaluate one datum.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn eval_datum(&self, tree: &Sexp) -> Result<Value, SparkError> {
        let expr = spark_parse::parse(tree, &self.interner)?;
        tracing::trace!(kind = expr.kind_name(), "parsed");
        let value = InterpreterBuilder::new(&self.interner)
            .max_call_depth(self.max_call_depth)
            .build()
            .eval(&expr, &self.env)?;
        Ok(value)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
