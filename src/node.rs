//! Nodes and the read-only handles the tree hands out for them.

use std::fmt;

use crate::arena::Arena;
use crate::util::Children;

/// Identifies a node inside a [`Tree`][crate::Tree]. Ids are only meaningful for the tree that
/// produced them and may be reused once their node is deleted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single stored key. `left` and `right` are the owning edges of the tree; `parent` only
/// points back up and is rewritten whenever the node is moved.
#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    pub(crate) value: K,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<K> Node<K> {
    /// Construct a new childless `Node` with the given `value` hanging under `parent`.
    pub(crate) fn new(value: K, parent: Option<NodeId>) -> Self {
        Self {
            value,
            parent,
            left: None,
            right: None,
        }
    }

    pub(crate) fn children(&self) -> Children {
        Children::of(self.left, self.right)
    }
}

/// A borrowed view of one node in a [`Tree`][crate::Tree]. Returned by
/// [`Tree::find`][crate::Tree::find] and [`Tree::root`][crate::Tree::root] and used to walk the
/// tree in either direction.
///
/// # Examples
///
/// ```
/// use linked_bst::Tree;
///
/// let tree = Tree::from_values([5, 4, 7]);
/// let four = tree.find(&4).unwrap();
///
/// assert_eq!(four.value(), &4);
/// assert_eq!(four.parent().map(|p| *p.value()), Some(5));
/// assert_eq!(four.child_count(), 0);
/// assert_eq!(tree.root().unwrap().to_string(), "Val: 5\nLeft: 4\nRight: 7");
/// ```
pub struct NodeRef<'a, K> {
    arena: &'a Arena<K>,
    id: NodeId,
}

impl<'a, K> Clone for NodeRef<'a, K> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, K> Copy for NodeRef<'a, K> {}

impl<'a, K> PartialEq for NodeRef<'a, K> {
    /// Two handles are equal when they name the same node of the same tree.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.arena, other.arena) && self.id == other.id
    }
}
impl<'a, K> Eq for NodeRef<'a, K> {}

impl<'a, K> NodeRef<'a, K> {
    pub(crate) fn new(arena: &'a Arena<K>, id: NodeId) -> Self {
        Self { arena, id }
    }

    fn node(&self) -> &'a Node<K> {
        &self.arena[self.id]
    }

    fn related(&self, id: Option<NodeId>) -> Option<Self> {
        id.map(|id| Self::new(self.arena, id))
    }

    /// The id of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The key stored in this node.
    pub fn value(&self) -> &'a K {
        &self.node().value
    }

    /// The node holding this one as a child, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.related(self.node().parent)
    }

    /// The root of the subtree of smaller keys, if any.
    pub fn left(&self) -> Option<Self> {
        self.related(self.node().left)
    }

    /// The root of the subtree of larger keys, if any.
    pub fn right(&self) -> Option<Self> {
        self.related(self.node().right)
    }

    /// How many children this node has: 0, 1 or 2.
    pub fn child_count(&self) -> usize {
        self.node().children().count()
    }
}

/// Shows the node's own links by id rather than following them, so formatting never descends
/// into the rest of the tree.
impl<'a, K> fmt::Debug for NodeRef<'a, K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node();
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("value", &node.value)
            .field("parent", &node.parent)
            .field("left", &node.left)
            .field("right", &node.right)
            .finish()
    }
}

/// Shows the node's own value and the values of its immediate children. Meant for eyeballing, not
/// for parsing.
impl<'a, K> fmt::Display for NodeRef<'a, K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Val: {}\nLeft: ", self.value())?;
        write_child(f, self.left())?;
        f.write_str("\nRight: ")?;
        write_child(f, self.right())
    }
}

fn write_child<K>(f: &mut fmt::Formatter<'_>, child: Option<NodeRef<'_, K>>) -> fmt::Result
where
    K: fmt::Display,
{
    match child {
        Some(node) => fmt::Display::fmt(node.value(), f),
        None => f.write_str("None"),
    }
}
