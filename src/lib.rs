//! This crate exposes a duplicate-aware Binary Search Tree (BST)
//! mostly for educational purposes.
//!
//! ## Counted Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! A plain BST either rejects duplicate keys or lets them pile up as extra
//! nodes. The tree in this crate does neither: every distinct key lives in
//! exactly one `Node` together with an occurrence count, so inserting a key
//! twice bumps a counter instead of growing the tree. Deleting removes one
//! occurrence at a time and only unlinks the node when its last occurrence
//! goes.
//!
//! The benefits of the BST invariants are many. For instance, searching for
//! keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree - which is exactly what [`counted::Tree::inorder`] does.

#![deny(missing_docs)]

pub mod counted;
