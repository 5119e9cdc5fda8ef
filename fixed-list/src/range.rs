use alloc::vec::Vec;

use crate::options::{ceil_index, floor_index, non_negative};
use crate::{IndexSpan, ListConfig, VirtualItem, VisibleRange};

/// Returns the rows intersecting `[scroll_offset, scroll_offset + viewport_height]`, before
/// overscan is applied.
///
/// The start is floored and the end is ceiled, so a row that is only partially visible at either
/// edge is always included.
pub fn unexpanded_span(scroll_offset: f64, config: &ListConfig) -> Option<IndexSpan> {
    span_with_overscan(scroll_offset, config, 0)
}

/// Returns the inclusive span of rows to materialize (visible rows plus `config.overscan` on each
/// side), clamped to `[0, items_count - 1]`.
///
/// Returns `None` when there is nothing to render: an empty list, or an invalid `item_height`.
pub fn compute_span(scroll_offset: f64, config: &ListConfig) -> Option<IndexSpan> {
    span_with_overscan(scroll_offset, config, config.overscan)
}

fn span_with_overscan(
    scroll_offset: f64,
    config: &ListConfig,
    overscan: usize,
) -> Option<IndexSpan> {
    if config.items_count == 0 {
        return None;
    }
    if !config.has_valid_item_height() {
        fwarn!(
            item_height = config.item_height,
            items_count = config.items_count,
            "item_height must be positive and finite; rendering an empty range"
        );
        return None;
    }

    let range_start = non_negative(scroll_offset);
    let range_end = range_start + non_negative(config.viewport_height);

    let raw_start = floor_index(range_start / config.item_height);
    let raw_end = ceil_index(range_end / config.item_height);

    let last = config.items_count - 1;
    let end_index = raw_end.saturating_add(overscan).min(last);
    // Offsets past the end of the content would otherwise leave `start > end`.
    let start_index = raw_start.saturating_sub(overscan).min(end_index);

    Some(IndexSpan {
        start_index,
        end_index,
    })
}

/// Calls `f` for every row to materialize, in ascending index order, without allocating.
pub fn for_each_virtual_item(
    scroll_offset: f64,
    config: &ListConfig,
    f: impl FnMut(VirtualItem),
) {
    if let Some(span) = compute_span(scroll_offset, config) {
        items_in_span(span, config, f);
    }
}

fn items_in_span(span: IndexSpan, config: &ListConfig, mut f: impl FnMut(VirtualItem)) {
    for index in span.start_index..=span.end_index {
        f(VirtualItem {
            index,
            offset_top: config.item_offset(index),
        });
    }
}

/// Collects the rows to materialize into `out` (clears `out` first).
///
/// Adapters that render every frame can keep `out` around as a scratch buffer.
pub fn collect_virtual_items(
    scroll_offset: f64,
    config: &ListConfig,
    out: &mut Vec<VirtualItem>,
) {
    out.clear();
    if let Some(span) = compute_span(scroll_offset, config) {
        out.reserve(span.count());
        items_in_span(span, config, |item| out.push(item));
    }
}

/// Maps a scroll offset and a config to the rows to materialize.
///
/// This is a pure function: identical inputs always produce identical output. It never fails;
/// malformed configs degrade to an empty range.
pub fn compute_range(scroll_offset: f64, config: &ListConfig) -> VisibleRange {
    let span = compute_span(scroll_offset, config);
    let mut items = Vec::with_capacity(span.map_or(0, |s| s.count()));
    if let Some(span) = span {
        items_in_span(span, config, |item| items.push(item));
    }
    VisibleRange {
        span,
        items,
        total_height: config.total_height(),
    }
}
