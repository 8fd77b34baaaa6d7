//! Slot storage for tree nodes.
//!
//! Nodes live in a growable `Vec` and refer to each other by [`NodeId`]. Freeing a node empties
//! its slot and pushes the index onto a free list so the next allocation can reuse it. Indices of
//! live nodes never move, which is what lets a child keep a plain index to its parent.

use std::ops::{Index, IndexMut};

use crate::node::{Node, NodeId};

#[derive(Clone)]
pub(crate) struct Arena<K> {
    slots: Vec<Option<Node<K>>>,
    free: Vec<NodeId>,
}

impl<K> Arena<K> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Stores `node` and returns its id, reusing a freed slot when there is one.
    pub(crate) fn alloc(&mut self, node: Node<K>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                debug_assert!(self.slots[id.index()].is_none());
                self.slots[id.index()] = Some(node);
                id
            }
            None => {
                let id = NodeId::new(self.slots.len());
                self.slots.push(Some(node));
                id
            }
        }
    }

    /// Empties the slot for `id` and hands back the node that was there.
    ///
    /// ## Panics
    ///
    /// When `id` is not live.
    pub(crate) fn free(&mut self, id: NodeId) -> Node<K> {
        let node = self.slots[id.index()]
            .take()
            .expect("Freeing a node requires a live node");
        self.free.push(id);
        node
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<K>> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    /// How many slots currently hold a node.
    pub(crate) fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}

impl<K> Index<NodeId> for Arena<K> {
    type Output = Node<K>;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.slots[id.index()]
            .as_ref()
            .expect("Links only ever name live nodes")
    }
}

impl<K> IndexMut<NodeId> for Arena<K> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        self.slots[id.index()]
            .as_mut()
            .expect("Links only ever name live nodes")
    }
}
