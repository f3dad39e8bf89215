//! Shared tree store.
//!
//! The editor keeps "the current tree" in a named slot. Whoever changes it
//! calls [`TreeStore::emit_change`] with its own tag; listeners get the tag
//! so they can skip changes they made themselves.

use pastel_parser::Tree;
use std::collections::BTreeMap;

/// Slot holding the current program.
pub const TREE_KEY: &str = "tree";

/// Change callback: `(caller, data)`.
pub type ChangeListener = Box<dyn FnMut(&str, &BTreeMap<String, Tree>)>;

/// Named tree slots plus change listeners.
#[derive(Default)]
pub struct TreeStore {
    data: BTreeMap<String, Tree>,
    listeners: Vec<ChangeListener>,
}

impl TreeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Tree> {
        self.data.get(key)
    }

    /// Store `tree` under `key`, returning what was there.
    ///
    /// Does not notify; call [`TreeStore::emit_change`] when done.
    pub fn set(&mut self, key: impl Into<String>, tree: Tree) -> Option<Tree> {
        self.data.insert(key.into(), tree)
    }

    pub fn add_change_listener(
        &mut self,
        listener: impl FnMut(&str, &BTreeMap<String, Tree>) + 'static,
    ) {
        self.listeners.push(Box::new(listener));
    }

    /// Notify every listener, in registration order.
    pub fn emit_change(&mut self, caller: &str) {
        log::debug!(target: "pastel::store", "change from {caller}");
        for listener in &mut self.listeners {
            listener(caller, &self.data);
        }
    }
}

impl std::fmt::Debug for TreeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeStore")
            .field("keys", &self.data.keys().collect::<Vec<_>>())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
