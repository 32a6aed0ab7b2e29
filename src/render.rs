//! Indented rendering of a tree's shape.
//!
//! Each node is written on its own line, indented by its depth and prefixed
//! by which side of its parent it hangs from:
//!
//! ```text
//! Root: 50
//!     L--- 30
//!         L--- 20
//!         R--- 40
//!     R--- 70
//! ```
//!
//! A node's children are only written when it has at least one, and a
//! missing child writes nothing.

use std::fmt::{self, Write};

/// A binary node that can be walked without knowing how it is ordered.
pub trait Structure {
    /// What gets printed for a node.
    type Label: ?Sized;

    /// The printable part of this node.
    fn label(&self) -> &Self::Label;

    /// The left child, if any.
    fn left(&self) -> Option<&Self>;

    /// The right child, if any.
    fn right(&self) -> Option<&Self>;
}

/// How [`render`] lays out each line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces added per level of depth.
    pub indent: usize,
    /// Written before the root's label.
    pub root_prefix: String,
    /// Written before a left child's label.
    pub left_prefix: String,
    /// Written before a right child's label.
    pub right_prefix: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: 4,
            root_prefix: String::from("Root: "),
            left_prefix: String::from("L--- "),
            right_prefix: String::from("R--- "),
        }
    }
}

/// Renders the tree rooted at `root`. An empty tree renders as an empty
/// string; otherwise every line ends with a newline.
pub fn render<N>(root: Option<&N>, options: &RenderOptions) -> String
where
    N: Structure,
    N::Label: fmt::Display,
{
    let mut out = String::new();
    // Pre-order with an explicit stack. The right child is pushed first so
    // the left one is written first.
    let mut pending: Vec<(&N, usize, &str)> = root
        .map(|n| (n, 0, options.root_prefix.as_str()))
        .into_iter()
        .collect();

    while let Some((node, depth, prefix)) = pending.pop() {
        writeln!(
            out,
            "{:width$}{}{}",
            "",
            prefix,
            node.label(),
            width = depth * options.indent
        )
        .expect("writing to a String cannot fail");

        if let Some(right) = node.right() {
            pending.push((right, depth + 1, options.right_prefix.as_str()));
        }
        if let Some(left) = node.left() {
            pending.push((left, depth + 1, options.left_prefix.as_str()));
        }
    }

    out
}

/// The number of nodes on the longest path from `root` down to a leaf.
pub(crate) fn height<N: Structure>(root: Option<&N>) -> usize {
    let mut tallest = 0;
    let mut pending: Vec<(&N, usize)> = root.map(|n| (n, 1)).into_iter().collect();
    while let Some((node, depth)) = pending.pop() {
        tallest = tallest.max(depth);
        pending.extend(node.left().map(|n| (n, depth + 1)));
        pending.extend(node.right().map(|n| (n, depth + 1)));
    }
    tallest
}
