//! This crate exposes a mutable Binary Search Tree (BST) whose nodes keep
//! a link to their parent as well as to their children.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a
//! BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! This tree adds a third: every `Node` other than the root knows which
//! `Node` holds it as a child, and that `Node` really does hold it. Deletion
//! has to rewrite these parent links as it moves nodes around.
//!
//! Nothing here rebalances the tree, so its height depends entirely on the
//! order keys are inserted in. Inserting keys in sorted order produces a
//! tree that is really a linked list.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod arena;
mod error;
mod node;
mod tree;
mod util;


pub use error::InvariantError;
pub use node::{NodeId, NodeRef};
pub use tree::Tree;
