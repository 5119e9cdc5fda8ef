use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use crate::{TimeoutCallback, TimerHost};

/// Handle for a timeout scheduled on [`ManualTimers`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ManualTimeout(u64);

struct Entry {
    id: u64,
    due_ms: u64,
    callback: TimeoutCallback,
}

#[derive(Default)]
struct Queue {
    now_ms: u64,
    next_id: u64,
    entries: Vec<Entry>,
}

/// A [`TimerHost`] driven by an explicit clock.
///
/// Useful for hosts that already run a frame/tick loop (TUIs, game loops) and for tests: nothing
/// fires until the adapter calls [`Self::advance_to`]. Clones share the same queue.
#[derive(Clone, Default)]
pub struct ManualTimers {
    queue: Rc<RefCell<Queue>>,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.queue.borrow().now_ms
    }

    /// Number of scheduled timeouts that have neither fired nor been cleared.
    pub fn pending(&self) -> usize {
        self.queue.borrow().entries.len()
    }

    pub fn next_due_ms(&self) -> Option<u64> {
        self.queue.borrow().entries.iter().map(|e| e.due_ms).min()
    }

    /// Advances the clock to `now_ms`, firing every timeout due at or before it in due order
    /// (ties fire in scheduling order).
    ///
    /// Callbacks may schedule or clear timeouts; newly scheduled ones that fall due before
    /// `now_ms` fire in the same call. The clock never moves backwards. Returns the number of
    /// callbacks fired.
    pub fn advance_to(&self, now_ms: u64) -> usize {
        let mut fired = 0;
        loop {
            let callback = {
                let mut queue = self.queue.borrow_mut();
                let next = queue
                    .entries
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.due_ms <= now_ms)
                    .min_by_key(|(_, e)| (e.due_ms, e.id))
                    .map(|(pos, _)| pos);
                let Some(pos) = next else {
                    queue.now_ms = queue.now_ms.max(now_ms);
                    break;
                };
                let entry = queue.entries.remove(pos);
                queue.now_ms = queue.now_ms.max(entry.due_ms);
                entry.callback
            };
            callback();
            fired += 1;
        }
        fired
    }

    pub fn advance_by(&self, delta_ms: u64) -> usize {
        let now_ms = self.now_ms().saturating_add(delta_ms);
        self.advance_to(now_ms)
    }
}

impl TimerHost for ManualTimers {
    type Timeout = ManualTimeout;

    fn set_timeout(&self, delay_ms: u64, callback: TimeoutCallback) -> ManualTimeout {
        let mut queue = self.queue.borrow_mut();
        let id = queue.next_id;
        queue.next_id += 1;
        let due_ms = queue.now_ms.saturating_add(delay_ms);
        queue.entries.push(Entry {
            id,
            due_ms,
            callback,
        });
        ManualTimeout(id)
    }

    fn clear_timeout(&self, timeout: ManualTimeout) {
        self.queue
            .borrow_mut()
            .entries
            .retain(|e| e.id != timeout.0);
    }
}

impl fmt::Debug for ManualTimers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let queue = self.queue.borrow();
        f.debug_struct("ManualTimers")
            .field("now_ms", &queue.now_ms)
            .field("pending", &queue.entries.len())
            .finish_non_exhaustive()
    }
}
