//! A headless windowing engine for large, fixed-row-height vertical lists.
//!
//! For host bindings (scroll-signal tracking, debounced `is_scrolling`, a list controller), see
//! the `fixed-list-adapter` crate.
//!
//! Given an item count, a row height, a viewport height and a scroll offset, this crate computes
//! the small contiguous span of rows that must be materialized to cover the viewport plus an
//! overscan margin, together with each row's vertical offset and the total content height. A
//! renderer then draws only those rows instead of the whole list.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the viewport height
//! - the scroll offset (and scroll signals, if it wants the `is_scrolling` flag)
//!
//! ```
//! use fixed_list::{ListConfig, compute_range};
//!
//! let config = ListConfig::new(10_000, 40.0, 600.0);
//! let range = compute_range(4_000.0, &config);
//! assert_eq!(range.start_index(), Some(97));
//! assert_eq!(range.end_index(), Some(118));
//! assert_eq!(range.total_height, 400_000.0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod memo;
mod options;
mod range;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use memo::{RangeMemo, RecomputePolicy};
pub use options::{DEFAULT_OVERSCAN, DEFAULT_SCROLLING_QUIET_PERIOD_MS, ListConfig};
pub use range::{
    collect_virtual_items, compute_range, compute_span, for_each_virtual_item, unexpanded_span,
};
pub use state::{QuietToken, ScrollState, ScrollStatus};
pub use types::{Align, IndexSpan, ListFrame, VirtualItem, VisibleRange};
