//! Copy-to-clipboard with toast feedback.

use std::future::Future;

use log::warn;

use crate::error::UiError;
use crate::schedule::Scheduler;
use crate::toast::{ToastKind, ToastSink, Toaster};

pub const COPIED_MESSAGE: &str = "Copied to clipboard!";
pub const COPY_FAILED_MESSAGE: &str = "Could not copy to clipboard";

/// Asynchronous clipboard access.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), UiError>>;
}

/// Copy `text` and confirm with a success toast.
///
/// A failed write is returned to the caller. It only produces a toast when
/// `toast_on_failure` is set. A confirmation toast that cannot be shown is
/// logged; the copy still counts as done.
pub async fn copy_with_feedback<C, S, K>(
    clipboard: &C,
    toaster: &Toaster<S, K>,
    text: &str,
    toast_on_failure: bool,
) -> Result<(), UiError>
where
    C: Clipboard,
    S: Scheduler,
    K: ToastSink + 'static,
{
    match clipboard.write_text(text).await {
        Ok(()) => {
            if let Err(err) = toaster.notify(COPIED_MESSAGE, ToastKind::Success) {
                warn!("copied, but could not confirm: {}", err);
            }
            Ok(())
        }
        Err(err) => {
            if toast_on_failure {
                toaster.notify(COPY_FAILED_MESSAGE, ToastKind::Danger)?;
            }
            Err(err)
        }
    }
}
