//! Cancel-and-reschedule debouncing.
//!
//! A [`Debouncer`] wraps an action so that a burst of calls collapses into a
//! single invocation, made once no new call has arrived for the configured
//! delay. The invocation receives the argument of the last call.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::schedule::Scheduler;

/// Debounced wrapper around an action taking `A`.
pub struct Debouncer<S: Scheduler, A> {
    scheduler: S,
    delay: Duration,
    action: Rc<dyn Fn(A)>,
    pending: RefCell<Option<S::Handle>>,
    armed: Rc<Cell<bool>>,
}

/// Wrap `action` so it only runs after `delay` of quiet.
pub fn debounce<S, A, F>(scheduler: S, delay: Duration, action: F) -> Debouncer<S, A>
where
    S: Scheduler,
    A: 'static,
    F: Fn(A) + 'static,
{
    Debouncer::new(scheduler, delay, action)
}

impl<S: Scheduler, A: 'static> Debouncer<S, A> {
    pub fn new<F>(scheduler: S, delay: Duration, action: F) -> Self
    where
        F: Fn(A) + 'static,
    {
        Self {
            scheduler,
            delay,
            action: Rc::new(action),
            pending: RefCell::new(None),
            armed: Rc::new(Cell::new(false)),
        }
    }

    /// Request an invocation with `arg`, superseding any pending one.
    pub fn call(&self, arg: A) {
        self.cancel();

        let action = Rc::clone(&self.action);
        let armed = Rc::clone(&self.armed);
        armed.set(true);
        let handle = self.scheduler.schedule(
            self.delay,
            Box::new(move || {
                armed.set(false);
                action(arg);
            }),
        );
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Drop the pending invocation, if any.
    pub fn cancel(&self) {
        let handle = self.pending.borrow_mut().take();
        if let Some(handle) = handle {
            self.scheduler.cancel(handle);
        }
        self.armed.set(false);
    }

    /// Whether an invocation is waiting for its quiet window to elapse.
    pub fn is_pending(&self) -> bool {
        self.armed.get()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::VirtualClock;

    fn collecting(clock: &VirtualClock) -> (Rc<RefCell<Vec<String>>>, Debouncer<VirtualClock, String>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let debouncer = debounce(clock.clone(), Duration::from_millis(300), move |q: String| {
            sink.borrow_mut().push(q)
        });
        (calls, debouncer)
    }

    #[test]
    fn test_burst_invokes_once_with_last_value() {
        let clock = VirtualClock::new();
        let (calls, debouncer) = collecting(&clock);

        for (i, text) in ["p", "pa", "pas", "past", "pasta"].iter().enumerate() {
            if i > 0 {
                clock.advance(Duration::from_millis(50));
            }
            debouncer.call(text.to_string());
        }
        assert!(debouncer.is_pending());

        clock.advance(Duration::from_secs(1));
        assert_eq!(*calls.borrow(), vec!["pasta".to_string()]);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_quiet_window_restarts_on_each_call() {
        let clock = VirtualClock::new();
        let (calls, debouncer) = collecting(&clock);

        debouncer.call("a".to_string());
        clock.advance(Duration::from_millis(200));
        debouncer.call("ab".to_string());

        // 300ms after the first call, but only 100ms after the second
        clock.advance(Duration::from_millis(100));
        assert!(calls.borrow().is_empty());

        clock.advance(Duration::from_millis(199));
        assert!(calls.borrow().is_empty());

        clock.advance(Duration::from_millis(1));
        assert_eq!(*calls.borrow(), vec!["ab".to_string()]);
    }

    #[test]
    fn test_separated_calls_each_fire() {
        let clock = VirtualClock::new();
        let (calls, debouncer) = collecting(&clock);

        debouncer.call("soup".to_string());
        clock.advance(Duration::from_millis(300));
        debouncer.call("salad".to_string());
        clock.advance(Duration::from_millis(300));

        assert_eq!(*calls.borrow(), vec!["soup".to_string(), "salad".to_string()]);
    }

    #[test]
    fn test_cancel_prevents_invocation() {
        let clock = VirtualClock::new();
        let (calls, debouncer) = collecting(&clock);

        debouncer.call("bread".to_string());
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert_eq!(clock.pending(), 0);

        clock.advance(Duration::from_secs(1));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_only_one_timer_outstanding() {
        let clock = VirtualClock::new();
        let (_calls, debouncer) = collecting(&clock);

        debouncer.call("a".to_string());
        debouncer.call("b".to_string());
        debouncer.call("c".to_string());
        assert_eq!(clock.pending(), 1);
        assert_eq!(debouncer.delay(), Duration::from_millis(300));
    }
}
