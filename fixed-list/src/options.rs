use crate::Align;

/// Rows rendered beyond each edge of the viewport unless configured otherwise.
pub const DEFAULT_OVERSCAN: usize = 3;

/// Idle time after the last scroll signal before `is_scrolling` clears, unless configured
/// otherwise.
pub const DEFAULT_SCROLLING_QUIET_PERIOD_MS: u64 = 150;

/// Configuration for a fixed-row-height vertical list.
///
/// This is a small `Copy` value: callers are expected to build a fresh one per render and hand it
/// to [`crate::compute_range`] or a [`crate::RangeMemo`]. Nothing in this crate mutates it.
///
/// Lengths (`item_height`, `viewport_height`, offsets) live in a caller-chosen unit, typically
/// logical pixels. Malformed values never panic: a non-positive or non-finite `item_height`
/// degrades to an empty list, and a negative or NaN `viewport_height` is treated as `0`.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`, and `overscan` /
/// `scrolling_quiet_period_ms` may be omitted (they fall back to their defaults).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListConfig {
    pub items_count: usize,
    pub item_height: f64,
    pub viewport_height: f64,
    /// Extra rows materialized above and below the visible rows.
    #[cfg_attr(feature = "serde", serde(default = "default_overscan"))]
    pub overscan: usize,
    /// Debounce window for the "is scrolling" flag.
    #[cfg_attr(
        feature = "serde",
        serde(default = "default_scrolling_quiet_period_ms")
    )]
    pub scrolling_quiet_period_ms: u64,
}

#[cfg(feature = "serde")]
fn default_overscan() -> usize {
    DEFAULT_OVERSCAN
}

#[cfg(feature = "serde")]
fn default_scrolling_quiet_period_ms() -> u64 {
    DEFAULT_SCROLLING_QUIET_PERIOD_MS
}

impl ListConfig {
    /// Creates a config with the default overscan and quiet period.
    pub fn new(items_count: usize, item_height: f64, viewport_height: f64) -> Self {
        Self {
            items_count,
            item_height,
            viewport_height,
            overscan: DEFAULT_OVERSCAN,
            scrolling_quiet_period_ms: DEFAULT_SCROLLING_QUIET_PERIOD_MS,
        }
    }

    pub fn with_items_count(mut self, items_count: usize) -> Self {
        self.items_count = items_count;
        self
    }

    pub fn with_item_height(mut self, item_height: f64) -> Self {
        self.item_height = item_height;
        self
    }

    pub fn with_viewport_height(mut self, viewport_height: f64) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_scrolling_quiet_period_ms(mut self, quiet_period_ms: u64) -> Self {
        self.scrolling_quiet_period_ms = quiet_period_ms;
        self
    }

    /// Returns `true` when `item_height` is strictly positive and finite.
    pub fn has_valid_item_height(&self) -> bool {
        self.item_height.is_finite() && self.item_height > 0.0
    }

    /// Returns `true` when the config can produce at least one row.
    pub fn is_renderable(&self) -> bool {
        self.items_count > 0 && self.has_valid_item_height()
    }

    /// Height of the whole scrollable content (`items_count * item_height`).
    ///
    /// Returns `0.0` when `item_height` is invalid.
    pub fn total_height(&self) -> f64 {
        if !self.has_valid_item_height() {
            return 0.0;
        }
        self.items_count as f64 * self.item_height
    }

    /// Top offset of the row at `index` (`index * item_height`).
    ///
    /// Indexes past the end are not clamped; this is plain arithmetic.
    pub fn item_offset(&self, index: usize) -> f64 {
        if !self.has_valid_item_height() {
            return 0.0;
        }
        index as f64 * self.item_height
    }

    /// Returns the index of the row covering `offset`, clamped to the last row.
    ///
    /// Returns `None` for an empty (or degenerate) list.
    pub fn index_at_offset(&self, offset: f64) -> Option<usize> {
        if !self.is_renderable() {
            return None;
        }
        let index = floor_index(non_negative(offset) / self.item_height);
        Some(index.min(self.items_count - 1))
    }

    /// The largest scroll offset a host can reach: `total_height - viewport_height`, never
    /// negative.
    pub fn max_scroll_offset(&self) -> f64 {
        let view = non_negative(self.viewport_height);
        let max = self.total_height() - view;
        if max > 0.0 { max } else { 0.0 }
    }

    pub fn clamp_scroll_offset(&self, offset: f64) -> f64 {
        non_negative(offset).min(self.max_scroll_offset())
    }

    /// Computes the scroll offset that brings `index` into view with the given alignment.
    ///
    /// `current_offset` is only consulted for [`Align::Auto`], which keeps the current offset when
    /// the row is already fully visible and otherwise scrolls the minimum distance. The result is
    /// clamped to `[0, max_scroll_offset()]`.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align, current_offset: f64) -> f64 {
        if !self.is_renderable() {
            return 0.0;
        }
        let index = index.min(self.items_count - 1);
        let start = self.item_offset(index);
        let end = start + self.item_height;
        let view = non_negative(self.viewport_height);

        let target = match align {
            Align::Start => start,
            Align::End => end - view,
            Align::Center => start + self.item_height / 2.0 - view / 2.0,
            Align::Auto => {
                let cur = non_negative(current_offset);
                let cur_end = cur + view;
                if start >= cur && end <= cur_end {
                    cur
                } else if start < cur {
                    start
                } else {
                    end - view
                }
            }
        };

        self.clamp_scroll_offset(target)
    }
}

/// Maps negative, `-0.0` and NaN inputs to `0.0`.
pub(crate) fn non_negative(value: f64) -> f64 {
    if value > 0.0 { value } else { 0.0 }
}

/// `floor` for non-negative inputs; saturates at `usize::MAX`.
pub(crate) fn floor_index(value: f64) -> usize {
    // Float-to-int `as` truncates toward zero and saturates, which is `floor` for `value >= 0`.
    value as usize
}

/// `ceil` for non-negative inputs; saturates at `usize::MAX`.
pub(crate) fn ceil_index(value: f64) -> usize {
    let floor = floor_index(value);
    if (floor as f64) < value {
        floor.saturating_add(1)
    } else {
        floor
    }
}
