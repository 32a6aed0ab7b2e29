/// Errors reported by the fallible operations of this crate.
///
/// Most queries report a missing key as `None`/`false` instead; only
/// [`try_insert`][crate::ordered::Tree::try_insert] and
/// [`level_order::parse`][crate::level_order::parse] return these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The tree already holds a node with an equal key.
    #[error("key already present in the tree")]
    DuplicateKey,
    /// An entry of a level-order listing is neither a value nor a gap marker.
    #[error("invalid level-order entry {entry:?} at index {index}")]
    InvalidEntry {
        /// Position of the entry in the listing.
        index: usize,
        /// The entry as written.
        entry: String,
    },
}
