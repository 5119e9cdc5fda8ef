use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use fixed_list::{ScrollState, ScrollStatus};

use crate::{ScrollHost, ScrollListener, TimerHost};

struct Shared<O> {
    status: ScrollStatus,
    pending: Option<O>,
    quiet_period_ms: u64,
}

struct Attachment<H: ScrollHost> {
    host: H,
    position: H::Registration,
    activity: H::Registration,
}

/// Observes a host element's scroll signal and exposes the scroll offset plus a debounced
/// "is scrolling" flag.
///
/// The tracker is the only writer of its [`ScrollState`]. It registers two independent listeners
/// on the host:
/// - a position listener that republishes the host's scroll offset on every signal;
/// - an activity listener that sets `is_scrolling` and restarts a single quiet-period countdown
///   on every signal. The flag clears only when the countdown for the *last* signal elapses.
///
/// [`Self::detach`] (also run on drop) cancels the pending countdown and removes both
/// listeners. Listener and timer callbacks hold only weak references to the tracker's state, so a
/// callback that outlives the tracker does nothing.
pub struct ScrollTracker<H: ScrollHost, T: TimerHost> {
    timers: T,
    shared: Rc<RefCell<Shared<T::Timeout>>>,
    attachment: Option<Attachment<H>>,
}

impl<H: ScrollHost, T: TimerHost> ScrollTracker<H, T> {
    pub fn new(timers: T, quiet_period_ms: u64) -> Self {
        Self {
            timers,
            shared: Rc::new(RefCell::new(Shared {
                status: ScrollStatus::new(),
                pending: None,
                quiet_period_ms,
            })),
            attachment: None,
        }
    }

    /// Starts observing the element returned by `host`.
    ///
    /// If the tracker is already attached it detaches first. If `host` yields `None` (the element
    /// is not mounted yet) nothing is registered and `false` is returned; call `attach` again once
    /// the element exists.
    ///
    /// The host's current offset is published synchronously before any listener is registered,
    /// so the first frame renders at the true position rather than at zero.
    pub fn attach(&mut self, host: impl FnOnce() -> Option<H>) -> bool {
        self.detach();
        let Some(host) = host() else {
            fdebug!("ScrollTracker::attach: no scroll host yet");
            return false;
        };

        let offset = host.scroll_offset();
        self.shared.borrow_mut().status.publish_offset(offset);

        let position = host.add_scroll_listener(position_listener(&host, &self.shared));
        let activity = host.add_scroll_listener(activity_listener(&self.timers, &self.shared));
        fdebug!(scroll_offset = offset, "ScrollTracker::attach");

        self.attachment = Some(Attachment {
            host,
            position,
            activity,
        });
        true
    }

    /// Cancels the pending countdown, removes both listeners and clears `is_scrolling`.
    ///
    /// The last published scroll offset stays readable. Detaching an unattached tracker is a
    /// no-op.
    pub fn detach(&mut self) {
        let Some(attachment) = self.attachment.take() else {
            return;
        };

        let pending = {
            let mut shared = self.shared.borrow_mut();
            shared.status.end_activity();
            shared.pending.take()
        };
        if let Some(timeout) = pending {
            self.timers.clear_timeout(timeout);
        }

        attachment.host.remove_scroll_listener(attachment.position);
        attachment.host.remove_scroll_listener(attachment.activity);
        fdebug!("ScrollTracker::detach");
    }

    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    pub fn state(&self) -> ScrollState {
        self.shared.borrow().status.snapshot()
    }

    pub fn scroll_offset(&self) -> f64 {
        self.shared.borrow().status.scroll_offset()
    }

    pub fn is_scrolling(&self) -> bool {
        self.shared.borrow().status.is_scrolling()
    }

    pub fn quiet_period_ms(&self) -> u64 {
        self.shared.borrow().quiet_period_ms
    }

    /// Applies to countdowns started by later scroll signals.
    pub fn set_quiet_period_ms(&mut self, quiet_period_ms: u64) {
        self.shared.borrow_mut().quiet_period_ms = quiet_period_ms;
    }

    pub fn timers(&self) -> &T {
        &self.timers
    }
}

impl<H: ScrollHost, T: TimerHost> Drop for ScrollTracker<H, T> {
    fn drop(&mut self) {
        self.detach();
    }
}

impl<H: ScrollHost, T: TimerHost> fmt::Debug for ScrollTracker<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.shared.borrow();
        f.debug_struct("ScrollTracker")
            .field("state", &shared.status.snapshot())
            .field("quiet_period_ms", &shared.quiet_period_ms)
            .field("countdown_pending", &shared.pending.is_some())
            .field("attached", &self.attachment.is_some())
            .finish_non_exhaustive()
    }
}

fn position_listener<H: ScrollHost, O: 'static>(
    host: &H,
    shared: &Rc<RefCell<Shared<O>>>,
) -> ScrollListener {
    let host = host.clone();
    let shared = Rc::downgrade(shared);
    Rc::new(move || {
        let Some(shared) = shared.upgrade() else {
            return;
        };
        let offset = host.scroll_offset();
        if shared.borrow_mut().status.publish_offset(offset) {
            ftrace!(scroll_offset = offset, "scroll offset published");
        }
    })
}

fn activity_listener<T: TimerHost>(
    timers: &T,
    shared: &Rc<RefCell<Shared<T::Timeout>>>,
) -> ScrollListener {
    let timers = timers.clone();
    let shared = Rc::downgrade(shared);
    Rc::new(move || {
        let Some(state) = shared.upgrade() else {
            return;
        };

        let (token, previous, delay_ms) = {
            let mut s = state.borrow_mut();
            let token = s.status.begin_activity();
            (token, s.pending.take(), s.quiet_period_ms)
        };
        if let Some(previous) = previous {
            timers.clear_timeout(previous);
        }

        let expiry = Rc::downgrade(&state);
        let timeout = timers.set_timeout(
            delay_ms,
            Box::new(move || {
                let Some(state) = expiry.upgrade() else {
                    return;
                };
                let mut s = state.borrow_mut();
                if s.status.quiet_period_elapsed(token) {
                    s.pending = None;
                    ftrace!("scrolling settled");
                }
            }),
        );

        let mut s = state.borrow_mut();
        // A host may run a zero-delay timeout inline; only a live countdown is worth keeping.
        if s.status.is_scrolling() {
            s.pending = Some(timeout);
        }
    })
}
