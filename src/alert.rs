//! Alert auto-dismiss.

use std::time::Duration;

use crate::markup::ALERT_PERMANENT;
use crate::schedule::Scheduler;

/// Schedules non-permanent alerts to close themselves.
pub struct AlertDismisser<S> {
    scheduler: S,
    delay: Duration,
}

impl<S: Scheduler> AlertDismisser<S> {
    pub fn new(scheduler: S, delay: Duration) -> Self {
        Self { scheduler, delay }
    }

    /// Whether an alert with these classes opted out of auto-dismiss.
    pub fn is_permanent<'a>(classes: impl IntoIterator<Item = &'a str>) -> bool {
        classes.into_iter().any(|class| class == ALERT_PERMANENT)
    }

    /// Arm the timer for one alert. Returns false for permanent alerts.
    ///
    /// The timer is not cancellable; `close` must tolerate the alert having
    /// been closed by hand already.
    pub fn arm<'a, I, F>(&self, classes: I, close: F) -> bool
    where
        I: IntoIterator<Item = &'a str>,
        F: FnOnce() + 'static,
    {
        if Self::is_permanent(classes) {
            return false;
        }
        self.scheduler.defer(self.delay, Box::new(close));
        true
    }
}
