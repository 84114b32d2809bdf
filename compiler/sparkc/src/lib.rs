//! Sparkc - driver for the Spark interpreter.
//!
//! Wires the pipeline together: source text is read into atom/list trees
//! (`spark_read`), parsed into syntax trees (`spark_parse`) and evaluated
//! against the top-level environment (`spark_eval`).
//!
//! [`top_interp`] runs a single program in a fresh [`Session`]. The `spark`
//! binary uses a `Session` directly for files and the REPL.

mod error;
mod session;

use std::sync::Once;

pub use error::SparkError;
pub use session::Session;
pub use spark_eval::{EvalError, Value, DEFAULT_MAX_CALL_DEPTH};

/// Read, parse and evaluate a single-datum program in a fresh session.
pub fn top_interp(src: &str) -> Result<Value, SparkError> {
    Session::new().eval_source(src)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call more than once. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=spark_eval=trace`. With `SPARK_TRACE_TREE` also set, spans are
/// rendered as an indented call tree.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var("SPARK_TRACE_TREE").is_ok() {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
