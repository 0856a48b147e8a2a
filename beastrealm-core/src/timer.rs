//! Deferred callbacks for the single-threaded UI loop.
//!
//! The overlay store never talks to a clock directly; hosts inject a
//! [`Scheduler`]. The browser implementation wraps `setTimeout`, while
//! [`ManualScheduler`] drives virtual time for tests and native tools.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

/// Opaque handle for a scheduled callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

pub type TimerTask = Box<dyn FnOnce()>;

pub trait Scheduler {
    /// Run `task` once after `delay`.
    fn schedule(&self, delay: Duration, task: TimerTask) -> TimerId;

    /// Drop a pending task. Unknown or already-fired ids are ignored.
    fn cancel(&self, id: TimerId);
}

#[derive(Default)]
struct ManualInner {
    now: Duration,
    next_id: u64,
    pending: BTreeMap<TimerId, (Duration, TimerTask)>,
}

/// Virtual-time scheduler. Clones share the same queue.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualInner>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Advance the clock, firing due tasks in deadline order (ties by id).
    /// Tasks scheduled by a firing task run too if they fall due in the window.
    pub fn advance(&self, by: Duration) {
        let target = self.inner.borrow().now + by;
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let due = inner
                    .pending
                    .iter()
                    .filter(|(_, (deadline, _))| *deadline <= target)
                    .min_by_key(|(id, (deadline, _))| (*deadline, **id))
                    .map(|(id, (deadline, _))| (*id, *deadline));
                due.and_then(|(id, deadline)| {
                    inner.now = deadline;
                    inner.pending.remove(&id).map(|(_, task)| task)
                })
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.inner.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: TimerTask) -> TimerId {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = TimerId(inner.next_id);
        let deadline = inner.now + delay;
        inner.pending.insert(id, (deadline, task));
        id
    }

    fn cancel(&self, id: TimerId) {
        self.inner.borrow_mut().pending.remove(&id);
    }
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    fn schedule(&self, delay: Duration, task: TimerTask) -> TimerId {
        (**self).schedule(delay, task)
    }

    fn cancel(&self, id: TimerId) {
        (**self).cancel(id);
    }
}
