//! Tree to source text.

use std::fmt::Write;

use crate::tree::{Node, NodeId, Tree};

/// Render the subtree under `id` as Pastel source.
///
/// Containers print as their children in parentheses, separated by single
/// spaces. Leaves print their token text verbatim.
pub fn stringify(tree: &Tree, id: NodeId) -> String {
    let mut out = String::new();
    write_node(tree, id, &mut out);
    out
}

fn write_node(tree: &Tree, id: NodeId, out: &mut String) {
    match tree.node(id) {
        Node::Leaf(token) => out.push_str(&token.data),
        Node::Container(children) => {
            out.push('(');
            for (i, &child) in children.iter().enumerate() {
                if i != 0 {
                    out.push(' ');
                }
                write_node(tree, child, out);
            }
            out.push(')');
        }
    }
}

/// Render every top-level form, separated by single spaces.
///
/// Unlike [`stringify`] on the root, this does not wrap the program in an
/// extra pair of parentheses, so it re-parses to the same tree.
pub fn stringify_forms(tree: &Tree) -> String {
    join_forms(tree, " ")
}

/// Render a program for the code editor: one top-level form per paragraph.
pub fn format_program(tree: &Tree) -> String {
    join_forms(tree, "\n\n")
}

fn join_forms(tree: &Tree, separator: &str) -> String {
    tree.children(tree.root())
        .iter()
        .map(|&form| stringify(tree, form))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Debug dump of the whole tree, one node per line.
pub fn view_tree(tree: &Tree) -> String {
    let mut out = String::new();
    write_view(tree, tree.root(), "", &mut out);
    log::debug!(target: "pastel::parser", "tree:\n{out}");
    out
}

fn write_view(tree: &Tree, id: NodeId, indent: &str, out: &mut String) {
    match tree.node(id) {
        Node::Leaf(token) => {
            let _ = writeln!(out, "{indent}(token {}) {}", token.kind, token.data);
        }
        Node::Container(children) => {
            let _ = writeln!(out, "{indent}(container)");
            let deeper = format!("{indent}---");
            for &child in children {
                write_view(tree, child, &deeper, out);
            }
        }
    }
}
