//! Debounced search input.
//!
//! The downstream [`SearchHandler`] is an extension point; [`LogSearch`] only
//! records the query.

use std::time::Duration;

use log::info;

use crate::debounce::Debouncer;
use crate::schedule::Scheduler;

/// Receives the settled value of a search input.
pub trait SearchHandler {
    fn search(&self, query: &str);
}

/// Logs queries without running them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSearch;

impl SearchHandler for LogSearch {
    fn search(&self, query: &str) {
        info!("search requested: {:?}", query);
    }
}

impl<F: Fn(&str)> SearchHandler for F {
    fn search(&self, query: &str) {
        self(query)
    }
}

/// Debouncer feeding a search input's value to `handler`.
pub fn search_debouncer<S, H>(scheduler: S, delay: Duration, handler: H) -> Debouncer<S, String>
where
    S: Scheduler,
    H: SearchHandler + 'static,
{
    Debouncer::new(scheduler, delay, move |query: String| handler.search(&query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::VirtualClock;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_typing_burst_searches_once() {
        let clock = VirtualClock::new();
        let queries = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&queries);
        let search = search_debouncer(
            clock.clone(),
            Duration::from_millis(300),
            move |q: &str| sink.borrow_mut().push(q.to_string()),
        );

        for text in ["c", "cu", "cur", "curr", "curry"] {
            search.call(text.to_string());
            clock.advance(Duration::from_millis(100));
        }
        clock.advance(Duration::from_millis(200));

        assert_eq!(*queries.borrow(), vec!["curry".to_string()]);
    }

    #[test]
    fn test_log_search_accepts_any_query() {
        let clock = VirtualClock::new();
        let search = search_debouncer(clock.clone(), Duration::from_millis(300), LogSearch);
        search.call(String::new());
        clock.advance(Duration::from_millis(300));
        assert!(!search.is_pending());
    }
}
