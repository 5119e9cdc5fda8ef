use crate::options::non_negative;

/// A lightweight snapshot of the current scroll state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub scroll_offset: f64,
    pub is_scrolling: bool,
}

/// Identifies one quiet-period countdown started by [`ScrollStatus::begin_activity`].
///
/// Only the token from the most recent scroll signal can clear `is_scrolling`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuietToken(u64);

/// The owned scroll state of a list, mutated only through explicit transitions.
///
/// Two ways of clearing the activity flag are supported:
/// - timer-driven: call [`Self::begin_activity`] on every scroll signal, schedule a countdown that
///   carries the returned [`QuietToken`], and hand the token back through
///   [`Self::quiet_period_elapsed`] when it fires;
/// - polling: call [`Self::notify_scroll_event`] on every scroll signal and
///   [`Self::update_scrolling`] once per frame/tick.
#[derive(Clone, Debug, Default)]
pub struct ScrollStatus {
    state: ScrollState,
    generation: u64,
    last_scroll_event_ms: Option<u64>,
}

impl ScrollStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> ScrollState {
        self.state
    }

    pub fn scroll_offset(&self) -> f64 {
        self.state.scroll_offset
    }

    pub fn is_scrolling(&self) -> bool {
        self.state.is_scrolling
    }

    /// Publishes a new scroll offset. Negative and NaN offsets are stored as `0.0`.
    ///
    /// Returns `true` if the stored offset changed.
    pub fn publish_offset(&mut self, offset: f64) -> bool {
        let offset = non_negative(offset);
        if self.state.scroll_offset.to_bits() == offset.to_bits() {
            return false;
        }
        self.state.scroll_offset = offset;
        true
    }

    /// Marks the list as scrolling and supersedes any outstanding countdown.
    pub fn begin_activity(&mut self) -> QuietToken {
        self.generation = self.generation.wrapping_add(1);
        self.state.is_scrolling = true;
        QuietToken(self.generation)
    }

    /// Clears `is_scrolling` if `token` belongs to the latest scroll signal.
    ///
    /// Returns `true` if the flag was cleared. Stale tokens are ignored.
    pub fn quiet_period_elapsed(&mut self, token: QuietToken) -> bool {
        if token.0 != self.generation || !self.state.is_scrolling {
            return false;
        }
        self.state.is_scrolling = false;
        self.last_scroll_event_ms = None;
        true
    }

    /// Unconditionally clears `is_scrolling` and invalidates every outstanding token.
    ///
    /// Returns `true` if the flag was set.
    pub fn end_activity(&mut self) -> bool {
        self.generation = self.generation.wrapping_add(1);
        self.last_scroll_event_ms = None;
        core::mem::replace(&mut self.state.is_scrolling, false)
    }

    /// Polling variant of [`Self::begin_activity`] for hosts without a timer facility.
    pub fn notify_scroll_event(&mut self, now_ms: u64) -> QuietToken {
        self.last_scroll_event_ms = Some(now_ms);
        self.begin_activity()
    }

    /// Clears `is_scrolling` once `quiet_period_ms` has passed since the last
    /// [`Self::notify_scroll_event`].
    ///
    /// Returns `true` if the flag was cleared by this call.
    pub fn update_scrolling(&mut self, now_ms: u64, quiet_period_ms: u64) -> bool {
        if !self.state.is_scrolling {
            return false;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return false;
        };
        if now_ms.saturating_sub(last) < quiet_period_ms {
            return false;
        }
        self.end_activity()
    }
}
