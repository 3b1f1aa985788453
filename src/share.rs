//! Share-or-copy action for the current page.
//!
//! The strategy is picked once, when the [`Sharer`] is built: native share
//! if the platform has it, otherwise copy the URL and acknowledge.

use std::future::Future;

use log::{debug, warn};

use crate::clipboard::Clipboard;
use crate::error::ShareError;

/// Message shown after the clipboard fallback succeeds.
pub const LINK_COPIED_ACK: &str = "Link copied to clipboard!";

/// What gets shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub url: String,
}

/// Browser services the share action needs.
pub trait SharePlatform: Clipboard {
    fn supports_native_share(&self) -> bool;

    fn native_share(&self, payload: &SharePayload) -> impl Future<Output = Result<(), ShareError>>;

    /// Blocking acknowledgement to the user.
    fn acknowledge(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareStrategy {
    Native,
    Clipboard,
}

impl ShareStrategy {
    pub fn detect<P: SharePlatform>(platform: &P) -> Self {
        if platform.supports_native_share() {
            ShareStrategy::Native
        } else {
            ShareStrategy::Clipboard
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    /// The user dismissed the native share sheet.
    Cancelled,
    Copied,
    Failed(String),
}

pub struct Sharer<P> {
    platform: P,
    strategy: ShareStrategy,
}

impl<P: SharePlatform> Sharer<P> {
    pub fn new(platform: P) -> Self {
        let strategy = ShareStrategy::detect(&platform);
        Self { platform, strategy }
    }

    pub fn strategy(&self) -> ShareStrategy {
        self.strategy
    }

    /// Share `payload`. Failures are logged, never surfaced to the user.
    pub async fn share(&self, payload: &SharePayload) -> ShareOutcome {
        match self.strategy {
            ShareStrategy::Native => match self.platform.native_share(payload).await {
                Ok(()) => ShareOutcome::Shared,
                Err(ShareError::Cancelled) => {
                    debug!("share cancelled");
                    ShareOutcome::Cancelled
                }
                Err(ShareError::Failed(reason)) => {
                    warn!("native share failed: {}", reason);
                    ShareOutcome::Failed(reason)
                }
            },
            ShareStrategy::Clipboard => match self.platform.write_text(&payload.url).await {
                Ok(()) => {
                    self.platform.acknowledge(LINK_COPIED_ACK);
                    ShareOutcome::Copied
                }
                Err(err) => {
                    warn!("copying share link failed: {}", err);
                    ShareOutcome::Failed(err.to_string())
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UiError;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakePlatform {
        native: bool,
        share_result: Option<ShareError>,
        clipboard_fails: bool,
        share_calls: Cell<usize>,
        copied: RefCell<Vec<String>>,
        acks: RefCell<Vec<String>>,
    }

    impl Clipboard for FakePlatform {
        async fn write_text(&self, text: &str) -> Result<(), UiError> {
            if self.clipboard_fails {
                return Err(UiError::Clipboard("denied".to_string()));
            }
            self.copied.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    impl SharePlatform for FakePlatform {
        fn supports_native_share(&self) -> bool {
            self.native
        }

        async fn native_share(&self, _payload: &SharePayload) -> Result<(), ShareError> {
            self.share_calls.set(self.share_calls.get() + 1);
            match &self.share_result {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }

        fn acknowledge(&self, message: &str) {
            self.acks.borrow_mut().push(message.to_string());
        }
    }

    fn payload() -> SharePayload {
        SharePayload {
            title: "Lemon Tart".to_string(),
            url: "https://recipes.example/12/recipe/".to_string(),
        }
    }

    #[test]
    fn test_native_share_selected_when_available() {
        let sharer = Sharer::new(FakePlatform {
            native: true,
            ..Default::default()
        });
        assert_eq!(sharer.strategy(), ShareStrategy::Native);

        assert_eq!(block_on(sharer.share(&payload())), ShareOutcome::Shared);
        assert_eq!(sharer.platform.share_calls.get(), 1);
        assert!(sharer.platform.copied.borrow().is_empty());
    }

    #[test]
    fn test_cancel_does_not_fall_back() {
        let sharer = Sharer::new(FakePlatform {
            native: true,
            share_result: Some(ShareError::Cancelled),
            ..Default::default()
        });

        assert_eq!(block_on(sharer.share(&payload())), ShareOutcome::Cancelled);
        assert!(sharer.platform.copied.borrow().is_empty());
        assert!(sharer.platform.acks.borrow().is_empty());
    }

    #[test]
    fn test_native_failure_is_not_retried() {
        let sharer = Sharer::new(FakePlatform {
            native: true,
            share_result: Some(ShareError::Failed("TypeError".to_string())),
            ..Default::default()
        });

        let outcome = block_on(sharer.share(&payload()));
        assert_eq!(outcome, ShareOutcome::Failed("TypeError".to_string()));
        assert_eq!(sharer.platform.share_calls.get(), 1);
        assert!(sharer.platform.copied.borrow().is_empty());
    }

    #[test]
    fn test_clipboard_fallback_copies_url_and_acknowledges() {
        let sharer = Sharer::new(FakePlatform::default());
        assert_eq!(sharer.strategy(), ShareStrategy::Clipboard);

        assert_eq!(block_on(sharer.share(&payload())), ShareOutcome::Copied);
        assert_eq!(
            *sharer.platform.copied.borrow(),
            vec!["https://recipes.example/12/recipe/".to_string()]
        );
        assert_eq!(*sharer.platform.acks.borrow(), vec![LINK_COPIED_ACK.to_string()]);
        assert_eq!(sharer.platform.share_calls.get(), 0);
    }

    #[test]
    fn test_clipboard_fallback_failure() {
        let sharer = Sharer::new(FakePlatform {
            clipboard_fails: true,
            ..Default::default()
        });

        let outcome = block_on(sharer.share(&payload()));
        assert!(matches!(outcome, ShareOutcome::Failed(_)));
        assert!(sharer.platform.acks.borrow().is_empty());
    }
}
