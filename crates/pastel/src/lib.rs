//! Pastel pipeline facade for the block editor.
//!
//! ```text
//! Pastel Source → Lexer → Parser → Evaluator → value | error
//! ```
//!
//! The editor validates code on every edit, publishes the parsed tree through
//! a [`TreeStore`], and regenerates source text from stored trees.

mod outcome;
mod session;
mod store;

pub use outcome::EvalOutcome;
pub use session::{Session, SESSION_CALLER};
pub use store::{ChangeListener, TreeStore, TREE_KEY};

pub use pastel_eval::{evaluate_text, EvalConfig, Evaluator, Value};
pub use pastel_lexer::{Token, TokenKind};
pub use pastel_parser::{analyze as parse, format_program, stringify, view_tree, Tree};
pub use pastel_types::{ErrorKind, Location, PastelError, PastelResult};

/// Evaluate `source` and package the result for the editor.
pub fn evaluate_to_result(source: &str, config: EvalConfig) -> EvalOutcome {
    let mut evaluator = Evaluator::with_config(config);
    let result = evaluator.evaluate_text(source);
    EvalOutcome::new(result, evaluator.log_output)
}

/// Validate `source` by evaluating it; on success return its tree.
pub fn check(source: &str) -> PastelResult<Tree> {
    let tree = parse(source)?;
    Evaluator::new().evaluate_tree(&tree)?;
    Ok(tree)
}
