use alloc::boxed::Box;
use alloc::rc::Rc;

/// A callback fired by a [`ScrollHost`] whenever its scroll position changes.
pub type ScrollListener = Rc<dyn Fn()>;

/// A one-shot callback scheduled on a [`TimerHost`].
pub type TimeoutCallback = Box<dyn FnOnce()>;

/// A live, scrollable host element (a DOM node, a TUI pane, a test double).
///
/// Handles are expected to be cheap to clone (typically an `Rc` or an id).
pub trait ScrollHost: Clone + 'static {
    /// Token returned on registration, handed back to remove the listener.
    type Registration;

    /// The element's current vertical scroll offset.
    fn scroll_offset(&self) -> f64;

    fn add_scroll_listener(&self, listener: ScrollListener) -> Self::Registration;

    fn remove_scroll_listener(&self, registration: Self::Registration);
}

/// Start-after-delay and cancel primitives with millisecond granularity.
pub trait TimerHost: Clone + 'static {
    type Timeout: 'static;

    fn set_timeout(&self, delay_ms: u64, callback: TimeoutCallback) -> Self::Timeout;

    /// Cancels a timeout. Clearing one that already fired must be harmless.
    fn clear_timeout(&self, timeout: Self::Timeout);
}
