//! A mutable, unbalanced BST whose nodes know their parents. Nodes are kept in an arena and link
//! to one another by [`NodeId`], so a node can point back up at its parent without any shared
//! ownership or raw pointers.
//!
//! # Examples
//!
//! ```
//! use linked_bst::Tree;
//!
//! let mut tree = Tree::from_values([5, 4, 7]);
//! assert_eq!(tree.len(), 3);
//! assert!(tree.contains(&4));
//! assert!(!tree.contains(&3));
//!
//! // Inserting a key that's already there does nothing.
//! tree.insert(4);
//! assert_eq!(tree.len(), 3);
//!
//! // 5 has two children so its in-order successor, 7, takes its place.
//! assert_eq!(tree.delete(&5), Some(5));
//! assert_eq!(tree.root().map(|root| *root.value()), Some(7));
//! assert_eq!(tree.len(), 2);
//!
//! // Deleting a missing key is a no-op.
//! assert_eq!(tree.delete(&5), None);
//! assert_eq!(tree.len(), 2);
//! ```

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use log::{debug, trace};

use crate::arena::Arena;
use crate::error::InvariantError;
use crate::node::{Node, NodeId, NodeRef};
use crate::util::Children;

/// A Binary Search Tree without any balancing. Keys are unique: inserting a key that is already
/// present leaves the tree untouched.
#[derive(Clone)]
pub struct Tree<K> {
    arena: Arena<K>,
    root: Option<NodeId>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("root", &self.root)
            .field("nodes", &self.preorder())
            .finish()
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// The root of the tree, or `None` when it's empty.
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        self.root.map(|id| NodeRef::new(&self.arena, id))
    }

    /// Whether the tree has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the nodes reachable from the root. This walks the whole tree so it's `O(n)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// assert_eq!(Tree::<i64>::new().len(), 0);
    /// assert_eq!(Tree::from_values([3, 1, 2, 1]).len(), 3);
    /// ```
    pub fn len(&self) -> usize {
        let Some(root) = self.root else {
            return 0;
        };

        // The root is counted up front, everything below it as it's popped.
        let mut count = 1;
        let mut pending: Vec<NodeId> = self.child_ids(root).collect();
        while let Some(id) = pending.pop() {
            count += 1;
            pending.extend(self.child_ids(id));
        }
        count
    }

    /// Every node, parents before children and left subtrees before right ones.
    fn preorder(&self) -> Vec<NodeRef<'_, K>> {
        let mut nodes = Vec::new();
        let mut pending: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = pending.pop() {
            let node = &self.arena[id];
            pending.extend(node.right);
            pending.extend(node.left);
            nodes.push(NodeRef::new(&self.arena, id));
        }
        nodes
    }

    fn child_ids(&self, id: NodeId) -> impl Iterator<Item = NodeId> {
        let node = &self.arena[id];
        node.left.into_iter().chain(node.right)
    }

    /// Follows left links from `id` until there are none. Used to find an in-order successor.
    fn minimum(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.arena[id].left {
            id = left;
        }
        id
    }
}

impl<K> Tree<K>
where
    K: Ord,
{
    /// Builds a tree by inserting each value in order. The order decides the shape of the tree
    /// (nothing rebalances it) but not which keys end up in it.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree = Tree::from_values([10, 5]);
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.value(), &10);
    /// assert_eq!(root.left().map(|n| *n.value()), Some(5));
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        values.into_iter().collect()
    }

    /// Inserts `value` into the tree. If the tree already holds an equal key nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1);
    /// assert!(tree.contains(&1));
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: K) {
        let Some(mut current) = self.root else {
            let root = self.arena.alloc(Node::new(value, None));
            trace!("inserted {} as the root", root);
            self.root = Some(root);
            return;
        };

        let (parent, ordering) = loop {
            let node = &self.arena[current];
            let ordering = value.cmp(&node.value);
            let next = match ordering {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => {
                    trace!("{} already holds this key", current);
                    return;
                }
            };
            match next {
                Some(child) => current = child,
                None => break (current, ordering),
            }
        };

        let leaf = self.arena.alloc(Node::new(value, Some(parent)));
        match ordering {
            Ordering::Less => self.arena[parent].left = Some(leaf),
            _ => self.arena[parent].right = Some(leaf),
        }
        trace!("inserted {} under {}", leaf, parent);

        if cfg!(debug_assertions) {
            let parent = &self.arena[parent];
            if let Some(left) = parent.left {
                assert!(parent.value > self.arena[left].value);
            }
            if let Some(right) = parent.right {
                assert!(parent.value < self.arena[right].value);
            }
        }
    }

    /// Potentially finds the node holding the given key. If no node has it, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree = Tree::from_values([2, 1]);
    ///
    /// assert_eq!(tree.find(&1).map(|n| *n.value()), Some(1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &K) -> Option<NodeRef<'_, K>> {
        self.find_id(value).map(|id| NodeRef::new(&self.arena, id))
    }

    /// Whether some node holds the given key.
    pub fn contains(&self, value: &K) -> bool {
        self.find(value).is_some()
    }

    fn find_id(&self, value: &K) -> Option<NodeId> {
        let mut current = self.root?;
        loop {
            let node = &self.arena[current];
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left?,
                Ordering::Equal => return Some(current),
                Ordering::Greater => node.right?,
            };
        }
    }

    /// Deletes the given key from the tree and returns it. If the tree doesn't hold the key,
    /// nothing happens and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree = Tree::from_values([10, 5]);
    ///
    /// assert_eq!(tree.delete(&10), Some(10));
    /// assert_eq!(tree.delete(&10), None);
    ///
    /// // 5 was 10's only child so it's the root now.
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.value(), &5);
    /// assert!(root.parent().is_none());
    /// ```
    pub fn delete(&mut self, value: &K) -> Option<K> {
        let target = self.find_id(value)?;
        Some(self.delete_node(target))
    }

    /// Unlinks the node `id` and returns the key it held. See [`Children`] for the three cases.
    fn delete_node(&mut self, id: NodeId) -> K {
        let node = &self.arena[id];
        let parent = node.parent;
        match node.children() {
            Children::Leaf => {
                trace!("deleting leaf {}", id);
                self.replace_child(parent, id, None);
                self.arena.free(id).value
            }
            Children::One(child) => {
                trace!("deleting {} and lifting its only child {}", id, child);
                self.replace_child(parent, id, Some(child));
                self.arena[child].parent = parent;
                self.arena.free(id).value
            }
            Children::Both { right } => {
                // The successor has no left child so this recursion stops at the next level.
                let successor = self.minimum(right);
                trace!("deleting {} by pulling up its successor {}", id, successor);
                let successor_value = self.delete_node(successor);
                std::mem::replace(&mut self.arena[id].value, successor_value)
            }
        }
    }

    /// Points whatever held `old`, either a child slot of `parent` or the root, at `new`.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            Some(parent) => {
                let parent = &mut self.arena[parent];
                if parent.left == Some(old) {
                    parent.left = new;
                } else {
                    parent.right = new;
                }
            }
            None => {
                debug!("root {} replaced by {:?}", old, new);
                self.root = new;
            }
        }
    }

    /// Walks the whole tree and reports the first broken invariant, if any:
    ///
    /// 1. The root has no parent.
    /// 2. Every child's parent link names the node holding it.
    /// 3. Every key is strictly between the bounds set by its ancestors.
    /// 4. Every allocated node is reachable from the root exactly once.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree = Tree::from_values([8, 3, 10, 1, 6, 14, 4, 7, 13]);
    /// tree.delete(&3);
    /// tree.delete(&8);
    ///
    /// assert_eq!(tree.check_invariants(), Ok(()));
    /// ```
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let Some(root) = self.root else {
            return match self.arena.live() {
                0 => Ok(()),
                live => Err(InvariantError::CountMismatch { reachable: 0, live }),
            };
        };
        let root_node = self
            .arena
            .get(root)
            .ok_or(InvariantError::DanglingLink { node: root })?;
        if let Some(parent) = root_node.parent {
            return Err(InvariantError::RootHasParent { root, parent });
        }

        let mut seen = HashSet::new();
        let mut pending: Vec<(NodeId, Option<&K>, Option<&K>)> = vec![(root, None, None)];
        while let Some((id, lower, upper)) = pending.pop() {
            if !seen.insert(id) {
                return Err(InvariantError::Revisited { node: id });
            }
            let node = self
                .arena
                .get(id)
                .ok_or(InvariantError::DanglingLink { node: id })?;

            let above_lower = lower.map_or(true, |lower| &node.value > lower);
            let below_upper = upper.map_or(true, |upper| &node.value < upper);
            if !(above_lower && below_upper) {
                return Err(InvariantError::OutOfOrder { node: id });
            }

            let children = [
                (node.left, lower, Some(&node.value)),
                (node.right, Some(&node.value), upper),
            ];
            for (child, lower, upper) in children {
                let Some(child) = child else {
                    continue;
                };
                let child_node = self
                    .arena
                    .get(child)
                    .ok_or(InvariantError::DanglingLink { node: child })?;
                if child_node.parent != Some(id) {
                    return Err(InvariantError::ParentMismatch {
                        child,
                        holder: id,
                        parent: child_node.parent,
                    });
                }
                pending.push((child, lower, upper));
            }
        }

        match (seen.len(), self.arena.live()) {
            (reachable, live) if reachable != live => {
                Err(InvariantError::CountMismatch { reachable, live })
            }
            _ => Ok(()),
        }
    }
}
