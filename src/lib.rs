//! This crate exposes binary trees mostly for educational purposes: an
//! ordered Binary Search Tree, a tree whose shape is given by a level-order
//! listing, and a small contact directory built on the former.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of key (the key that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). The trees here
//! never rebalance so the height is whatever the insertion order makes it:
//! sorted input gives a chain. BSTs also naturally support sorted iteration by
//! visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ## Positional trees
//!
//! [`positional::Tree`] drops the ordering. Its shape comes from a
//! level-order listing (see [`level_order`]) and it answers lowest common
//! ancestor queries.
//!
//! ## Logging
//!
//! Operations emit `trace` and `debug` records through the [`log`] facade.
//! Nothing is printed unless the application installs a logger.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod contacts;
mod error;
pub mod level_order;
pub mod ordered;
pub mod positional;
pub mod render;


pub use error::Error;
