//! Deferred-task scheduling.
//!
//! Timed behaviors (debounced search, alert auto-dismiss, toast expiry) are
//! written against [`Scheduler`]. The browser crate backs it with window
//! timers; tests use [`VirtualClock`], which only moves when told to.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// A task run once after its delay elapses.
pub type Task = Box<dyn FnOnce() + 'static>;

/// Something that can run a task after a delay.
pub trait Scheduler {
    /// Handle to a pending task. Implementations may cancel the task when
    /// the handle is dropped, so holders must keep it until it fires.
    type Handle;

    /// Schedule `task`, returning a handle that can cancel it.
    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle;

    /// Cancel a pending task. Cancelling a task that already ran is a no-op.
    fn cancel(&self, handle: Self::Handle);

    /// Schedule `task` with no way to cancel it.
    fn defer(&self, delay: Duration, task: Task);
}

/// Identifier of a task scheduled on a [`VirtualClock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

struct Entry {
    id: u64,
    due: Duration,
    task: Task,
}

#[derive(Default)]
struct ClockState {
    now: Cell<Duration>,
    next_id: Cell<u64>,
    pending: RefCell<Vec<Entry>>,
}

/// Deterministic scheduler with manually advanced time.
///
/// Clones share the same timeline.
#[derive(Clone, Default)]
pub struct VirtualClock {
    state: Rc<ClockState>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the clock was created.
    pub fn now(&self) -> Duration {
        self.state.now.get()
    }

    /// Number of tasks waiting to run.
    pub fn pending(&self) -> usize {
        self.state.pending.borrow().len()
    }

    /// Move time forward by `by`, running every task that falls due in
    /// deadline order. Tasks scheduled while advancing run too if their
    /// deadline is inside the window.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let next = {
                let mut pending = self.state.pending.borrow_mut();
                let due = pending
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.due <= target)
                    .min_by_key(|(_, e)| (e.due, e.id))
                    .map(|(idx, _)| idx);
                due.map(|idx| pending.remove(idx))
            };
            match next {
                Some(entry) => {
                    self.state.now.set(entry.due);
                    (entry.task)();
                }
                None => break,
            }
        }
        self.state.now.set(target);
    }

    fn push(&self, delay: Duration, task: Task) -> TimerId {
        let id = self.state.next_id.get();
        self.state.next_id.set(id + 1);
        self.state.pending.borrow_mut().push(Entry {
            id,
            due: self.now() + delay,
            task,
        });
        TimerId(id)
    }
}

impl Scheduler for VirtualClock {
    type Handle = TimerId;

    fn schedule(&self, delay: Duration, task: Task) -> TimerId {
        self.push(delay, task)
    }

    fn cancel(&self, handle: TimerId) {
        self.state.pending.borrow_mut().retain(|e| e.id != handle.0);
    }

    fn defer(&self, delay: Duration, task: Task) {
        self.push(delay, task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let make = {
            let log = Rc::clone(&log);
            move |name: &'static str| -> Task {
                let log = Rc::clone(&log);
                Box::new(move || log.borrow_mut().push(name))
            }
        };
        (log, make)
    }

    #[test]
    fn test_tasks_run_in_deadline_order() {
        let clock = VirtualClock::new();
        let (log, task) = recorder();

        clock.defer(Duration::from_millis(300), task("late"));
        clock.defer(Duration::from_millis(100), task("early"));
        clock.defer(Duration::from_millis(100), task("early-second"));

        clock.advance(Duration::from_millis(99));
        assert!(log.borrow().is_empty());

        clock.advance(Duration::from_millis(1));
        assert_eq!(*log.borrow(), vec!["early", "early-second"]);

        clock.advance(Duration::from_millis(500));
        assert_eq!(*log.borrow(), vec!["early", "early-second", "late"]);
        assert_eq!(clock.now(), Duration::from_millis(600));
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_cancel_removes_task() {
        let clock = VirtualClock::new();
        let (log, task) = recorder();

        let handle = clock.schedule(Duration::from_millis(10), task("cancelled"));
        clock.defer(Duration::from_millis(20), task("kept"));
        clock.cancel(handle);

        clock.advance(Duration::from_secs(1));
        assert_eq!(*log.borrow(), vec!["kept"]);
    }

    #[test]
    fn test_cancel_after_run_is_noop() {
        let clock = VirtualClock::new();
        let (log, task) = recorder();

        let handle = clock.schedule(Duration::from_millis(10), task("ran"));
        clock.advance(Duration::from_millis(10));
        clock.cancel(handle);
        assert_eq!(*log.borrow(), vec!["ran"]);
    }

    #[test]
    fn test_task_scheduled_during_advance() {
        let clock = VirtualClock::new();
        let (log, task) = recorder();

        let inner = clock.clone();
        let follow_up = task("follow-up");
        clock.defer(
            Duration::from_millis(10),
            Box::new(move || inner.defer(Duration::from_millis(10), follow_up)),
        );

        clock.advance(Duration::from_millis(15));
        assert!(log.borrow().is_empty());
        clock.advance(Duration::from_millis(5));
        assert_eq!(*log.borrow(), vec!["follow-up"]);
    }
}
