//! Definition table for the Pastel evaluator.

use pastel_parser::NodeId;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::builtins::{Builtin, BUILTINS};
use crate::value::Value;

/// Parameter bindings for one user-definition call.
///
/// Bindings never chain: a body sees its own parameters and the global
/// definitions, nothing from the caller.
pub type Bindings = BTreeMap<String, Value>;

/// What a name is bound to.
#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    /// A native function.
    Builtin(Builtin),
    /// A `define`d function. `body` points into the tree being evaluated.
    User { params: Vec<String>, body: NodeId },
}

impl Definition {
    /// Body of a user definition taking no parameters.
    pub fn constant_body(&self) -> Option<NodeId> {
        match self {
            Self::User { params, body } if params.is_empty() => Some(*body),
            _ => None,
        }
    }
}

/// Name → definition map, seeded with the built-ins.
///
/// The first definition of a name wins; later ones are ignored.
#[derive(Debug, Clone)]
pub struct Definitions {
    entries: BTreeMap<String, Definition>,
}

impl Definitions {
    /// Create a table holding only the built-ins.
    pub fn new() -> Self {
        let entries = BUILTINS
            .iter()
            .map(|(name, builtin)| (name.to_string(), Definition::Builtin(*builtin)))
            .collect();
        Self { entries }
    }

    /// Drop user definitions and restore the built-ins.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Bind `name` unless it is already bound. Returns `true` if bound now.
    pub fn define(&mut self, name: impl Into<String>, definition: Definition) -> bool {
        match self.entries.entry(name.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(definition);
                true
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Definition> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Names of user definitions, in sorted order.
    pub fn user_names(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, d)| matches!(d, Definition::User { .. }))
            .map(|(name, _)| name.as_str())
    }
}

impl Default for Definitions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pastel_parser::Tree;

    fn body() -> NodeId {
        Tree::empty().root()
    }

    #[test]
    fn test_seeded_with_builtins() {
        let defs = Definitions::new();
        assert_eq!(defs.get("+"), Some(&Definition::Builtin(Builtin::Add)));
        assert_eq!(defs.get("not"), Some(&Definition::Builtin(Builtin::Not)));
        assert_eq!(defs.user_names().count(), 0);
    }

    #[test]
    fn test_first_definition_wins() {
        let mut defs = Definitions::new();
        let first = Definition::User { params: vec![], body: body() };
        let second = Definition::User { params: vec!["n".into()], body: body() };
        assert!(defs.define("x", first.clone()));
        assert!(!defs.define("x", second));
        assert_eq!(defs.get("x"), Some(&first));
    }

    #[test]
    fn test_builtins_cannot_be_redefined() {
        let mut defs = Definitions::new();
        assert!(!defs.define("print", Definition::User { params: vec![], body: body() }));
        assert_eq!(defs.get("print"), Some(&Definition::Builtin(Builtin::Print)));
    }

    #[test]
    fn test_reset_drops_user_definitions() {
        let mut defs = Definitions::new();
        defs.define("x", Definition::User { params: vec![], body: body() });
        assert!(defs.contains("x"));
        defs.reset();
        assert!(!defs.contains("x"));
        assert!(defs.contains("+"));
    }

    #[test]
    fn test_constant_body() {
        assert_eq!(Definition::User { params: vec![], body: body() }.constant_body(), Some(body()));
        assert_eq!(Definition::User { params: vec!["a".into()], body: body() }.constant_body(), None);
        assert_eq!(Definition::Builtin(Builtin::Add).constant_body(), None);
    }
}
