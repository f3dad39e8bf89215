//! Pastel tree-walking evaluator.
//!
//! Walks a parsed [`pastel_parser::Tree`] against a table of built-in and
//! user definitions. Failures come back as [`pastel_types::PastelError`]
//! values whose location stack grows as they travel outward.

pub mod builtins;
pub mod config;
pub mod definitions;
pub mod evaluator;
pub mod value;

pub use builtins::Builtin;
pub use config::{EvalConfig, DEFAULT_LOG_LIMIT};
pub use definitions::{Bindings, Definition, Definitions};
pub use evaluator::Evaluator;
pub use value::Value;

/// Evaluate `text` with a fresh evaluator.
pub fn evaluate_text(text: &str) -> pastel_types::PastelResult<Value> {
    Evaluator::new().evaluate_text(text)
}
