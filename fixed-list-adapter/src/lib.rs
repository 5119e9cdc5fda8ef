//! Host bindings for the `fixed-list` crate.
//!
//! The `fixed-list` crate is UI-agnostic and focuses on the range math and scroll state. This
//! crate wires that state to a host through small, injected capabilities:
//!
//! - [`ScrollHost`]: a scrollable element that reports its offset and fires scroll signals
//! - [`TimerHost`]: start-after-delay / cancel, used to debounce `is_scrolling`
//! - [`ScrollTracker`]: attach/detach against a host, owning the scroll state
//! - [`WindowedList`]: tracker + config + memoized range, producing a [`fixed_list::ListFrame`]
//!   per render
//! - [`ManualTimers`]: a clock-driven [`TimerHost`] for tick-based hosts and tests
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui bindings) and
//! single-threaded: callbacks are expected to run on the host's UI event loop.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod host;
mod timers;
mod tracker;


pub use controller::WindowedList;
pub use host::{ScrollHost, ScrollListener, TimeoutCallback, TimerHost};
pub use timers::{ManualTimeout, ManualTimers};
pub use tracker::ScrollTracker;
