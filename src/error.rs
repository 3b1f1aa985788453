//! Error types for the interaction layer.

use thiserror::Error;

/// Errors raised while wiring or running page behaviors.
#[derive(Debug, Error)]
pub enum UiError {
    /// A DOM or JavaScript call threw.
    #[error("JavaScript error: {0}")]
    Js(String),

    /// A browser capability is absent on this page.
    #[error("browser capability unavailable: {0}")]
    Unavailable(&'static str),

    /// A DOM value did not have the expected type.
    #[error("unexpected value from {0}")]
    UnexpectedValue(&'static str),

    /// Writing to the clipboard was rejected.
    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A malformed configuration override.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for `{key}`: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl ConfigError {
    pub(crate) fn invalid(key: &'static str, value: &str, reason: &'static str) -> Self {
        ConfigError::Invalid {
            key,
            value: value.to_string(),
            reason,
        }
    }
}

/// Why a native share did not complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    /// The user dismissed the share sheet.
    #[error("share cancelled by user")]
    Cancelled,

    #[error("share failed: {0}")]
    Failed(String),
}

impl ShareError {
    /// Classify a rejected share promise by its `DOMException` name.
    pub fn from_exception(name: Option<&str>, message: impl Into<String>) -> Self {
        match name {
            Some("AbortError") => ShareError::Cancelled,
            _ => ShareError::Failed(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abort_error_is_cancellation() {
        assert_eq!(
            ShareError::from_exception(Some("AbortError"), "Share canceled"),
            ShareError::Cancelled
        );
    }

    #[test]
    fn test_other_exceptions_are_failures() {
        assert_eq!(
            ShareError::from_exception(Some("NotAllowedError"), "denied"),
            ShareError::Failed("denied".to_string())
        );
        assert_eq!(
            ShareError::from_exception(None, "boom"),
            ShareError::Failed("boom".to_string())
        );
    }

    #[test]
    fn test_config_error_message() {
        let err = ConfigError::invalid("toast-ms", "soon", "expected milliseconds");
        assert_eq!(
            err.to_string(),
            "invalid value \"soon\" for `toast-ms`: expected milliseconds"
        );
        let ui: UiError = err.into();
        assert!(matches!(ui, UiError::Config(_)));
    }
}
