//! One editor session: an evaluator plus the store it publishes into.

use crate::store::{TreeStore, TREE_KEY};
use pastel_eval::{EvalConfig, Evaluator, Value};
use pastel_parser::{analyze, format_program};
use pastel_types::PastelResult;

/// Caller tag used when a session publishes a checked tree.
pub const SESSION_CALLER: &str = "session";

#[derive(Debug, Default)]
pub struct Session {
    evaluator: Evaluator,
    store: TreeStore,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EvalConfig) -> Self {
        Self {
            evaluator: Evaluator::with_config(config),
            store: TreeStore::new(),
        }
    }

    pub fn store(&self) -> &TreeStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TreeStore {
        &mut self.store
    }

    /// `print` output of the most recent check.
    pub fn log_output(&self) -> &[String] {
        &self.evaluator.log_output
    }

    /// Evaluate `text`; when it succeeds, publish its tree and notify
    /// listeners with `caller`. A failing program leaves the store as is.
    pub fn check_code(&mut self, text: &str, caller: &str) -> PastelResult<Value> {
        let tree = analyze(text)?;
        let value = self.evaluator.evaluate_tree(&tree)?;
        self.store.set(TREE_KEY, tree);
        self.store.emit_change(caller);
        Ok(value)
    }

    /// Source text regenerated from the stored tree, if any.
    pub fn load_code(&self) -> Option<String> {
        self.store.get(TREE_KEY).map(format_program)
    }
}
