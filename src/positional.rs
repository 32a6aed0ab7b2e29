//! A binary tree whose shape is given explicitly instead of by key order.
//!
//! The tree is described by a level-order listing: index 0 is the root and
//! the children of the node at index `i` sit at `2 * i + 1` and `2 * i + 2`.
//! A `None` in the listing is a gap. It produces no node, and since nothing
//! can hang off a missing node the entries below it are never looked at.
//!
//! Nothing about the values is assumed beyond equality, which is all the
//! lowest common ancestor query needs.
//!
//! # Examples
//!
//! ```
//! use bintree::positional::Tree;
//!
//! //       3
//! //      / \
//! //     5   1
//! //    / \  / \
//! //   6  2  0  8
//! //     / \
//! //    7   4
//! let tree = Tree::build(&[
//!     Some(3), Some(5), Some(1), Some(6), Some(2), Some(0), Some(8),
//!     None, None, Some(7), Some(4),
//! ]);
//!
//! assert_eq!(tree.find_lowest_common_ancestor(&5, &1), Some(&3));
//! assert_eq!(tree.find_lowest_common_ancestor(&5, &4), Some(&5));
//! assert_eq!(tree.find_lowest_common_ancestor(&6, &4), Some(&5));
//! assert_eq!(tree.find_lowest_common_ancestor(&6, &42), None);
//! ```

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};

use crate::level_order;
use crate::render::{self, RenderOptions, Structure};
use crate::Error;

type Link<T> = Option<Box<Node<T>>>;

/// A binary tree built from a level-order listing.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a tree from a level-order listing where `None` marks a gap.
    /// An empty listing, or one starting with a gap, gives an empty tree.
    pub fn build(values: &[Option<T>]) -> Self
    where
        T: Clone,
    {
        Self::from_level_order(values.to_vec())
    }

    /// Same as [`build`][Tree::build] but takes ownership of the values.
    pub fn from_level_order(mut values: Vec<Option<T>>) -> Self {
        let mut len = 0;
        let root = Node::place(&mut values, 0, &mut len);
        debug!(
            "built positional tree with {} nodes from {} slots",
            len,
            values.len()
        );
        Self { root, len }
    }

    /// Finds the deepest node that has both `a` and `b` in its subtree,
    /// counting a node as part of its own subtree. Returns `None` when the
    /// tree is empty or either value is missing.
    ///
    /// Values are expected to be unique. If one appears more than once, the
    /// answer settles on whichever copy is reached first on each path and is
    /// not meaningful.
    pub fn find_lowest_common_ancestor(&self, a: &T, b: &T) -> Option<&T>
    where
        T: PartialEq,
    {
        let search = self.root()?.lowest_common_ancestor(a, b);
        if !(search.saw_a && search.saw_b) {
            trace!("lowest common ancestor query for a missing value");
            return None;
        }

        search.ancestor.map(Node::value)
    }

    /// Whether some node holds a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut pending: Vec<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = pending.pop() {
            if node.value == *value {
                return true;
            }
            pending.extend(node.left());
            pending.extend(node.right());
        }
        false
    }

    /// Collects the values left subtree first, then the node, then its right
    /// subtree.
    pub fn traverse_in_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len);
        let mut spine = Vec::new();
        let mut node = self.root();
        loop {
            while let Some(n) = node {
                spine.push(n);
                node = n.left();
            }
            match spine.pop() {
                Some(n) => {
                    values.push(&n.value);
                    node = n.right();
                }
                None => return values,
            }
        }
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        render::height(self.root())
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Renders the shape of the tree, one value per line.
    pub fn render(&self, options: &RenderOptions) -> String
    where
        T: fmt::Display,
    {
        render::render(self.root(), options)
    }
}

/// Parses a textual level-order listing, see [`level_order::parse`].
///
/// ```
/// use bintree::positional::Tree;
///
/// let tree: Tree<i32> = "[1, null, 2]".parse().unwrap();
/// assert_eq!(tree.traverse_in_order(), vec![&1, &2]);
/// ```
impl<T: FromStr> FromStr for Tree<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        level_order::parse(s).map(Self::from_level_order)
    }
}

/// A node of a [`Tree`]. Either child may be missing.
#[derive(Clone, Debug)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    /// The value held by this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Builds the subtree rooted at `index`. Every index is reached through
    /// exactly one parent so each slot is taken at most once.
    fn place(slots: &mut [Option<T>], index: usize, len: &mut usize) -> Link<T> {
        let value = slots.get_mut(index)?.take()?;
        *len += 1;
        let left = Self::place(slots, 2 * index + 1, len);
        let right = Self::place(slots, 2 * index + 2, len);
        Some(Box::new(Self { value, left, right }))
    }

    /// Searches the whole subtree. A node matching either value is its own
    /// answer; otherwise the node is the answer when both sides found one.
    /// The subtree below a match is still visited so that presence of both
    /// values is known after a single pass.
    fn lowest_common_ancestor(&self, a: &T, b: &T) -> Search<'_, T>
    where
        T: PartialEq,
    {
        let left = self.left().map(|n| n.lowest_common_ancestor(a, b));
        let right = self.right().map(|n| n.lowest_common_ancestor(a, b));
        let (left, right) = (left.unwrap_or_default(), right.unwrap_or_default());

        let is_a = self.value == *a;
        let is_b = self.value == *b;
        let ancestor = match (left.ancestor, right.ancestor) {
            _ if is_a || is_b => Some(self),
            (Some(_), Some(_)) => Some(self),
            (found, None) | (None, found) => found,
        };

        Search {
            ancestor,
            saw_a: is_a || left.saw_a || right.saw_a,
            saw_b: is_b || left.saw_b || right.saw_b,
        }
    }
}

/// What a lowest common ancestor search learned about one subtree.
struct Search<'a, T> {
    ancestor: Option<&'a Node<T>>,
    saw_a: bool,
    saw_b: bool,
}

impl<T> Default for Search<'_, T> {
    fn default() -> Self {
        Self {
            ancestor: None,
            saw_a: false,
            saw_b: false,
        }
    }
}

impl<T> Structure for Node<T> {
    type Label = T;

    fn label(&self) -> &T {
        &self.value
    }

    fn left(&self) -> Option<&Self> {
        Node::left(self)
    }

    fn right(&self) -> Option<&Self> {
        Node::right(self)
    }
}
