//! Node arena for parsed Pastel source.
//!
//! Every node is either a leaf holding one token, or a container whose
//! children are an ordered list. Children own nothing; they are indices into
//! the [`Tree`], and each child records its parent index when attached.

use pastel_lexer::Token;
use pastel_types::Location;

/// Index of a node inside its [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A tree element.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A single token.
    Leaf(Token),
    /// A parenthesised group; child order is argument order.
    Container(Vec<NodeId>),
}

#[derive(Debug, Clone, PartialEq)]
struct Slot {
    node: Node,
    parent: Option<NodeId>,
}

/// A parsed Pastel program.
///
/// The root is always a container holding the top-level forms. Trees are
/// read-only once [`crate::treefy`] returns them.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    slots: Vec<Slot>,
}

impl Tree {
    /// An empty tree: a root container with no forms.
    pub fn empty() -> Self {
        let mut tree = Self { slots: Vec::new() };
        tree.push_container();
        tree
    }

    pub(crate) fn unrooted() -> Self {
        Self { slots: Vec::new() }
    }

    // ── Construction ─────────────────────────────────────────────────────────

    pub(crate) fn push_container(&mut self) -> NodeId {
        self.push(Node::Container(Vec::new()))
    }

    pub(crate) fn push_leaf(&mut self, token: Token) -> NodeId {
        self.push(Node::Leaf(token))
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(Slot { node, parent: None });
        id
    }

    /// Append `child` to the container `parent`.
    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(self.slots[child.0].parent.is_none(), "node attached twice");
        self.slots[child.0].parent = Some(parent);
        if let Node::Container(children) = &mut self.slots[parent.0].node {
            children.push(child);
        }
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    /// The root container.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the tree holds no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.slots[id.0].node
    }

    /// The token of a leaf, or `None` for a container.
    pub fn token(&self, id: NodeId) -> Option<&Token> {
        match self.node(id) {
            Node::Leaf(token) => Some(token),
            Node::Container(_) => None,
        }
    }

    /// The children of a container. Leaves have none.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.node(id) {
            Node::Leaf(_) => &[],
            Node::Container(children) => children,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slots[id.0].parent
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        matches!(self.node(id), Node::Leaf(_))
    }

    /// Number of leaves in the whole tree.
    pub fn leaf_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot.node, Node::Leaf(_)))
            .count()
    }

    /// First leaf in the subtree under `id`, depth-first.
    pub fn first_leaf(&self, id: NodeId) -> Option<NodeId> {
        match self.node(id) {
            Node::Leaf(_) => Some(id),
            Node::Container(children) => children.iter().find_map(|&c| self.first_leaf(c)),
        }
    }

    /// Best source location for `id`.
    ///
    /// A leaf reports its token's location and a container reports its first
    /// leaf's. A container with no leaves borrows from the nearest ancestor
    /// that has one.
    pub fn location(&self, id: NodeId) -> Location {
        let mut current = Some(id);
        while let Some(node) = current {
            if let Some(leaf) = self.first_leaf(node) {
                if let Some(token) = self.token(leaf) {
                    return token.location.clone();
                }
            }
            current = self.parent(node);
        }
        Location::line_start(1)
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::empty()
    }
}
