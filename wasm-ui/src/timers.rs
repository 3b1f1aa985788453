//! Window timers behind the core [`Scheduler`] trait.

use std::time::Duration;

use gloo::timers::callback::Timeout;
use recipe_ui::{Scheduler, Task};

/// Schedules tasks with `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

fn millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, task: Task) -> Timeout {
        Timeout::new(millis(delay), task)
    }

    fn cancel(&self, handle: Timeout) {
        handle.cancel();
    }

    fn defer(&self, delay: Duration, task: Task) {
        Timeout::new(millis(delay), task).forget();
    }
}
