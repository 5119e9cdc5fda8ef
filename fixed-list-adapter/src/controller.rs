use fixed_list::{Align, ListConfig, ListFrame, RangeMemo, RecomputePolicy, ScrollState};

use crate::{ScrollHost, ScrollTracker, TimerHost};

/// A framework-neutral controller that joins a [`ScrollTracker`], the caller's [`ListConfig`] and
/// a [`RangeMemo`].
///
/// This type does not hold any UI objects. Adapters drive it by:
/// - calling [`Self::attach`] once the scroll element is mounted (and [`Self::detach`], or simply
///   dropping the controller, on teardown);
/// - updating the config when the data or geometry changes;
/// - calling [`Self::frame`] on every render and drawing the returned rows.
#[derive(Debug)]
pub struct WindowedList<H: ScrollHost, T: TimerHost> {
    tracker: ScrollTracker<H, T>,
    config: ListConfig,
    memo: RangeMemo,
}

impl<H: ScrollHost, T: TimerHost> WindowedList<H, T> {
    pub fn new(config: ListConfig, timers: T) -> Self {
        Self {
            tracker: ScrollTracker::new(timers, config.scrolling_quiet_period_ms),
            config,
            memo: RangeMemo::new(),
        }
    }

    /// Chooses which inputs invalidate the cached range (defaults to
    /// [`RecomputePolicy::AllInputs`]).
    pub fn with_policy(mut self, policy: RecomputePolicy) -> Self {
        self.memo.set_policy(policy);
        self
    }

    pub fn attach(&mut self, host: impl FnOnce() -> Option<H>) -> bool {
        self.tracker.attach(host)
    }

    pub fn detach(&mut self) {
        self.tracker.detach();
    }

    pub fn is_attached(&self) -> bool {
        self.tracker.is_attached()
    }

    pub fn tracker(&self) -> &ScrollTracker<H, T> {
        &self.tracker
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Replaces the config. A changed quiet period applies from the next scroll signal.
    pub fn set_config(&mut self, config: ListConfig) {
        if config.scrolling_quiet_period_ms != self.config.scrolling_quiet_period_ms {
            self.tracker
                .set_quiet_period_ms(config.scrolling_quiet_period_ms);
        }
        self.config = config;
    }

    pub fn update_config(&mut self, f: impl FnOnce(&mut ListConfig)) {
        let mut next = self.config;
        f(&mut next);
        self.set_config(next);
    }

    pub fn set_items_count(&mut self, items_count: usize) {
        self.update_config(|c| c.items_count = items_count);
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.tracker.state()
    }

    /// Number of times the visible range was actually recomputed.
    pub fn recompute_count(&self) -> u64 {
        self.memo.recompute_count()
    }

    /// Returns the rows to draw for the current scroll state.
    pub fn frame(&mut self) -> ListFrame<'_> {
        let state = self.tracker.state();
        let range = self.memo.get(state.scroll_offset, &self.config);
        ListFrame {
            total_height: range.total_height,
            items: &range.items,
            is_scrolling: state.is_scrolling,
            span: range.span,
        }
    }

    /// The offset the host should scroll to in order to reveal `index`.
    ///
    /// The controller does not scroll by itself: the host applies the offset, and the resulting
    /// scroll signal flows back through the tracker.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> f64 {
        self.config
            .scroll_to_index_offset(index, align, self.tracker.scroll_offset())
    }
}
