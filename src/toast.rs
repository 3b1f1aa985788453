//! Toast notifications.
//!
//! A [`Toaster`] shows a notice through a [`ToastSink`] and schedules its
//! removal. The kind only changes styling.

use std::rc::Rc;
use std::time::Duration;

use crate::error::UiError;
use crate::schedule::Scheduler;

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl ToastKind {
    /// Parse a kind name; unknown names fall back to `Info`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => ToastKind::Success,
            "warning" => ToastKind::Warning,
            "danger" | "error" => ToastKind::Danger,
            _ => ToastKind::Info,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Info => "text-bg-info",
            ToastKind::Success => "text-bg-success",
            ToastKind::Warning => "text-bg-warning",
            ToastKind::Danger => "text-bg-danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Class attribute for the toast element.
    pub fn class_list(&self) -> String {
        format!("toast align-items-center border-0 show {}", self.kind.css_class())
    }
}

/// Where toasts are displayed.
pub trait ToastSink {
    /// Reference to a displayed toast.
    type Entry: 'static;

    fn show(&self, toast: &Toast) -> Result<Self::Entry, UiError>;

    /// Remove a displayed toast. Must tolerate an entry already dismissed
    /// by the user.
    fn remove(&self, entry: Self::Entry);
}

/// Shows toasts and removes them after a fixed lifetime.
pub struct Toaster<S, K> {
    scheduler: S,
    sink: Rc<K>,
    duration: Duration,
}

impl<S, K> Toaster<S, K>
where
    S: Scheduler,
    K: ToastSink + 'static,
{
    pub fn new(scheduler: S, sink: K, duration: Duration) -> Self {
        Self {
            scheduler,
            sink: Rc::new(sink),
            duration,
        }
    }

    pub fn notify(&self, message: impl Into<String>, kind: ToastKind) -> Result<(), UiError> {
        let toast = Toast::new(message, kind);
        let entry = self.sink.show(&toast)?;
        let sink = Rc::clone(&self.sink);
        self.scheduler
            .defer(self.duration, Box::new(move || sink.remove(entry)));
        Ok(())
    }
}
