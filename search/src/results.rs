//! Search result types.

/// A matched item with the character positions that matched, for highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit<'a, T> {
    pub item: &'a T,
    /// Position of `item` in the searched slice.
    pub index: usize,
    /// Matched character indices within the item's text, ascending, no duplicates.
    pub positions: Vec<usize>,
}
