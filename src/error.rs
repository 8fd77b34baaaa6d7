use crate::node::NodeId;

/// A structural invariant of a [`Tree`][crate::Tree] that doesn't hold. Returned by
/// [`Tree::check_invariants`][crate::Tree::check_invariants].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// The root points back up at some other node.
    #[error("root {root} has parent {parent}")]
    RootHasParent {
        /// The tree's root.
        root: NodeId,
        /// Where its parent link points.
        parent: NodeId,
    },
    /// A node's parent link doesn't name the node holding it as a child.
    #[error("node {child} is a child of {holder} but its parent link is {parent:?}")]
    ParentMismatch {
        /// The child whose back link is wrong.
        child: NodeId,
        /// The node whose `left` or `right` is `child`.
        holder: NodeId,
        /// Where the back link points instead.
        parent: Option<NodeId>,
    },
    /// A key sits on the wrong side of one of its ancestors.
    #[error("node {node} is out of order with respect to one of its ancestors")]
    OutOfOrder {
        /// The misplaced node.
        node: NodeId,
    },
    /// A link names a slot that holds no node.
    #[error("link to node {node} does not name a live node")]
    DanglingLink {
        /// The freed slot.
        node: NodeId,
    },
    /// The links form a cycle or share a subtree.
    #[error("node {node} is reachable more than once")]
    Revisited {
        /// The first node seen twice.
        node: NodeId,
    },
    /// Some allocated node can't be reached from the root.
    #[error("{reachable} nodes are reachable from the root but {live} are allocated")]
    CountMismatch {
        /// Nodes found by walking down from the root.
        reachable: usize,
        /// Nodes held by the arena.
        live: usize,
    },
}
