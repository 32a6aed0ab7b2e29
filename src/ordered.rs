//! An ordered BST with exclusively owned children. Every node owns its two
//! child slots outright so there is no reference counting and no parent
//! pointer; deletion and lookup descend from the root instead.
//!
//! The tree never rebalances. Inserting keys in sorted order produces a chain
//! whose height equals its length.
//!
//! # Examples
//!
//! ```
//! use bintree::ordered::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! assert!(tree.insert(1, 2));
//! assert_eq!(tree.find(&1), Some(&2));
//!
//! // Keys are unique. A second insert is rejected and keeps the old value.
//! assert!(!tree.insert(1, 3));
//! assert_eq!(tree.find(&1), Some(&2));
//!
//! assert!(tree.delete(&1));
//! assert_eq!(tree.find(&1), None);
//!
//! // Deleting again finds nothing to delete.
//! assert!(!tree.delete(&1));
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use log::{debug, trace};

use crate::render::{self, RenderOptions, Structure};
use crate::Error;

type Link<K, V> = Option<Box<Node<K, V>>>;

/// A Binary Search Tree mapping unique keys to values. This can be used for
/// inserting, finding, and deleting keys and values, and for visiting them in
/// ascending key order.
pub struct Tree<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for Tree<K, V> {
    // Unbalanced trees can be as tall as they are long so the default recursive drop could
    // overflow the stack. Detach children onto a work list instead.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<K, V> Clone for Tree<K, V>
where
    K: Clone,
    V: Clone,
{
    // Copies bottom up from a work list, like `drop`.
    fn clone(&self) -> Self {
        enum Visit<'a, K, V> {
            Enter(&'a Node<K, V>),
            Exit(&'a Node<K, V>),
        }

        let mut built: Vec<Box<Node<K, V>>> = Vec::new();
        let mut pending: Vec<Visit<'_, K, V>> =
            self.root().map(Visit::Enter).into_iter().collect();
        while let Some(visit) = pending.pop() {
            match visit {
                Visit::Enter(node) => {
                    pending.push(Visit::Exit(node));
                    pending.extend(node.right().map(Visit::Enter));
                    pending.extend(node.left().map(Visit::Enter));
                }
                Visit::Exit(node) => {
                    // The right subtree finished last so its copy is on top.
                    let right = node.right.as_ref().and_then(|_| built.pop());
                    let left = node.left.as_ref().and_then(|_| built.pop());
                    built.push(Box::new(Node {
                        key: node.key.clone(),
                        value: node.value.clone(),
                        left,
                        right,
                    }));
                }
            }
        }

        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Tree<K, V> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts the given value under the given key and returns `true`. If the
    /// tree already has a node with an equal key nothing changes and `false`
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::ordered::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1, 2));
    /// assert!(!tree.insert(1, 3));
    /// assert_eq!(tree.find(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool
    where
        K: Ord,
    {
        let inserted = match self.root.as_deref_mut() {
            Some(root) => root.insert(key, value),
            None => {
                self.root = Some(Node::new_boxed(key, value));
                true
            }
        };

        if inserted {
            self.len += 1;
            trace!("inserted node, tree holds {} entries", self.len);
        } else {
            debug!("rejected insert of a duplicate key");
        }
        inserted
    }

    /// Like [`insert`][Tree::insert] but reports a duplicate key as an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{ordered::Tree, Error};
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.try_insert("a", 1), Ok(()));
    /// assert_eq!(tree.try_insert("a", 2), Err(Error::DuplicateKey));
    /// ```
    pub fn try_insert(&mut self, key: K, value: V) -> Result<(), Error>
    where
        K: Ord,
    {
        if self.insert(key, value) {
            Ok(())
        } else {
            Err(Error::DuplicateKey)
        }
    }

    /// Potentially finds the value associated with the given key in this
    /// tree. If no node has the corresponding key, `None` is returned.
    ///
    /// The key may be any borrowed form of the tree's key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::ordered::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(String::from("Bob"), 7);
    ///
    /// assert_eq!(tree.find("Bob"), Some(&7));
    /// assert_eq!(tree.find("Eve"), None);
    /// ```
    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.as_deref().and_then(|n| n.find(key))
    }

    /// Mutable version of [`find`][Tree::find]. The key itself cannot be
    /// changed so the ordering is preserved.
    pub fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.as_deref_mut().and_then(|n| n.find_mut(key))
    }

    /// Whether a node with the given key is in the tree.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Deletes the node with the given key and returns `true`. Returns
    /// `false`, leaving the tree untouched, if there is no such node.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::ordered::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert!(tree.delete(&1));
    /// assert!(!tree.delete(&1));
    /// assert_eq!(tree.find(&1), None);
    /// ```
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove(key).is_some()
    }

    /// Deletes the node with the given key and returns its value.
    ///
    /// A node with two children takes over the key and value of its in-order
    /// successor (the smallest node of its right subtree) which is then
    /// unlinked in its place.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::ordered::Tree;
    ///
    /// let mut tree: Tree<_, _> = [(2, "b"), (1, "a"), (3, "c")].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&2), Some("b"));
    /// assert_eq!(tree.remove(&2), None);
    /// assert_eq!(tree.keys(), vec![&1, &3]);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let removed = Node::remove(&mut self.root, key);
        if removed.is_some() {
            self.len -= 1;
            debug!("deleted node, tree holds {} entries", self.len);
        }
        removed
    }

    /// Collects every entry in ascending key order. The result reflects the
    /// tree at the time of the call.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::ordered::Tree;
    ///
    /// let tree: Tree<_, _> = [50, 30, 70, 20, 40, 60, 80]
    ///     .into_iter()
    ///     .map(|k| (k, ()))
    ///     .collect();
    ///
    /// let keys: Vec<_> = tree.traverse_in_order().into_iter().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, [20, 30, 40, 50, 60, 70, 80]);
    /// ```
    pub fn traverse_in_order(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }

    /// A lazy in-order iterator over the entries of the tree.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// All keys in ascending order.
    pub fn keys(&self) -> Vec<&K> {
        self.iter().map(|(k, _)| k).collect()
    }

    /// The entry with the smallest key.
    pub fn min(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some((&node.key, &node.value))
    }

    /// The entry with the largest key.
    pub fn max(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some((&node.key, &node.value))
    }

    /// The number of entries in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf. An
    /// empty tree has a height of 0.
    pub fn height(&self) -> usize {
        render::height(self.root())
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }

    /// Renders the shape of the tree, one key per line.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{ordered::Tree, render::RenderOptions};
    ///
    /// let tree: Tree<_, _> = [(2, ()), (1, ()), (3, ())].into_iter().collect();
    ///
    /// assert_eq!(
    ///     tree.render(&RenderOptions::default()),
    ///     "Root: 2\n    L--- 1\n    R--- 3\n"
    /// );
    /// ```
    pub fn render(&self, options: &RenderOptions) -> String
    where
        K: fmt::Display,
    {
        render::render(self.root(), options)
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for Tree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for Tree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a Tree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A `Node` has a key that is used for searching/sorting and a value that is
/// associated with that key. Either child may be missing.
pub struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> fmt::Debug for Node<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<K, V> Node<K, V> {
    fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
        })
    }

    /// The key of this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The value stored with the key.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// The root of the subtree holding the smaller keys.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the subtree holding the larger keys.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn insert(&mut self, key: K, value: V) -> bool
    where
        K: Ord,
    {
        let child = match key.cmp(&self.key) {
            Ordering::Less => &mut self.left,
            Ordering::Equal => return false,
            Ordering::Greater => &mut self.right,
        };

        match child {
            Some(node) => node.insert(key, value),
            None => {
                *child = Some(Self::new_boxed(key, value));
                true
            }
        }
    }

    fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match key.cmp(self.key.borrow()) {
            Ordering::Less => self.left().and_then(|n| n.find(key)),
            Ordering::Equal => Some(&self.value),
            Ordering::Greater => self.right().and_then(|n| n.find(key)),
        }
    }

    fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match key.cmp(self.key.borrow()) {
            Ordering::Less => self.left.as_deref_mut().and_then(|n| n.find_mut(key)),
            Ordering::Equal => Some(&mut self.value),
            Ordering::Greater => self.right.as_deref_mut().and_then(|n| n.find_mut(key)),
        }
    }

    /// Deletes the node with the given `key` from the subtree hanging off
    /// `link`, returning its value.
    fn remove<Q>(link: &mut Link<K, V>, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = link.as_deref_mut()?;
        match key.cmp(node.key.borrow()) {
            Ordering::Less => Self::remove(&mut node.left, key),
            Ordering::Greater => Self::remove(&mut node.right, key),
            Ordering::Equal => {
                // Two children: promote the successor's entry into this node.
                if node.left.is_some() {
                    if let Some((key, value)) = Self::take_smallest(&mut node.right) {
                        node.key = key;
                        return Some(mem::replace(&mut node.value, value));
                    }
                }

                // At most one child, which takes this node's slot.
                let removed = link.take()?;
                let Node {
                    value, left, right, ..
                } = *removed;
                *link = left.or(right);
                Some(value)
            }
        }
    }

    /// Unlinks the leftmost node of the subtree hanging off `link` and
    /// returns its entry. Its right child, if any, takes its slot.
    fn take_smallest(link: &mut Link<K, V>) -> Option<(K, V)> {
        let node = link.as_deref_mut()?;
        if node.left.is_some() {
            return Self::take_smallest(&mut node.left);
        }

        let smallest = link.take()?;
        let Node {
            key, value, right, ..
        } = *smallest;
        *link = right;
        Some((key, value))
    }
}

impl<K, V> Structure for Node<K, V> {
    type Label = K;

    fn label(&self) -> &K {
        &self.key
    }

    fn left(&self) -> Option<&Self> {
        Node::left(self)
    }

    fn right(&self) -> Option<&Self> {
        Node::right(self)
    }
}

/// In-order iterator over a [`Tree`]. Created by [`Tree::iter`].
///
/// It keeps the path of nodes whose left subtrees are being visited on an
/// explicit stack so depth is not limited by the call stack.
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn new(root: Option<&'a Node<K, V>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
