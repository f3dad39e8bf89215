//! Pastel parser: converts a token stream into a node tree.
//!
//! Also renders trees back to source text, which the block editor uses to
//! regenerate code from its block graph.

mod parser;
mod printer;
mod tree;

pub use parser::{analyze, treefy, Parser};
pub use printer::{format_program, stringify, stringify_forms, view_tree};
pub use tree::{Node, NodeId, Tree};
