use alloc::vec::Vec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    Auto,
}

/// A single row to materialize.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VirtualItem {
    pub index: usize,
    /// Distance from the top of the content to the top of this row (`index * item_height`).
    pub offset_top: f64,
}

/// An inclusive, non-empty index span `[start_index, end_index]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexSpan {
    pub start_index: usize,
    pub end_index: usize, // inclusive
}

impl IndexSpan {
    /// Number of indexes in the span (always at least one).
    pub fn count(&self) -> usize {
        self.end_index - self.start_index + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start_index..=self.end_index).contains(&index)
    }

    /// Returns `true` when every index of `other` is also in `self`.
    pub fn covers(&self, other: &Self) -> bool {
        self.start_index <= other.start_index && other.end_index <= self.end_index
    }
}

/// The rows to materialize for one scroll position.
///
/// `span` is `None` exactly when `items` is empty (for example when the list has no items), so
/// an empty range never exposes meaningless bounds.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub span: Option<IndexSpan>,
    pub items: Vec<VirtualItem>,
    pub total_height: f64,
}

impl VisibleRange {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn start_index(&self) -> Option<usize> {
        self.span.map(|s| s.start_index)
    }

    pub fn end_index(&self) -> Option<usize> {
        self.span.map(|s| s.end_index)
    }
}

/// Everything a rendering layer needs to draw one frame.
///
/// Rows are meant to be positioned absolutely at [`VirtualItem::offset_top`] inside a container
/// sized to `total_height`. While `is_scrolling` is `true`, a renderer may substitute cheap
/// placeholder content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListFrame<'a> {
    pub total_height: f64,
    pub items: &'a [VirtualItem],
    pub is_scrolling: bool,
    pub span: Option<IndexSpan>,
}

impl ListFrame<'_> {
    pub fn start_index(&self) -> Option<usize> {
        self.span.map(|s| s.start_index)
    }

    pub fn end_index(&self) -> Option<usize> {
        self.span.map(|s| s.end_index)
    }
}
