//! Textual level-order listings such as `[3, 5, 1, null, 4]`.

use std::str::FromStr;

use crate::Error;

/// Words accepted as a gap, compared ignoring case. `_` is accepted too.
const GAP_WORDS: [&str; 2] = ["null", "none"];

/// Parses a comma separated level-order listing into the form taken by
/// [`positional::Tree::build`][crate::positional::Tree::build].
///
/// Surrounding brackets are optional and whitespace around entries is
/// ignored. `null`, `None` and `_` mark gaps. An empty listing parses to an
/// empty vector.
///
/// # Examples
///
/// ```
/// use bintree::{level_order, Error};
///
/// let values = level_order::parse::<i32>("[3, 5, null, 7]");
/// assert_eq!(values, Ok(vec![Some(3), Some(5), None, Some(7)]));
///
/// assert_eq!(level_order::parse::<i32>("[]"), Ok(vec![]));
/// assert_eq!(
///     level_order::parse::<i32>("1, two"),
///     Err(Error::InvalidEntry { index: 1, entry: String::from("two") })
/// );
/// ```
pub fn parse<T: FromStr>(listing: &str) -> Result<Vec<Option<T>>, Error> {
    let trimmed = listing.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(trimmed)
        .trim();
    if inner.is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .map(str::trim)
        .enumerate()
        .map(|(index, entry)| parse_entry(index, entry))
        .collect()
}

fn parse_entry<T: FromStr>(index: usize, entry: &str) -> Result<Option<T>, Error> {
    if entry == "_" || GAP_WORDS.iter().any(|gap| entry.eq_ignore_ascii_case(gap)) {
        return Ok(None);
    }

    entry.parse().map(Some).map_err(|_| Error::InvalidEntry {
        index,
        entry: entry.to_owned(),
    })
}
