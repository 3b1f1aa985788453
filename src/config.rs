//! Tunable timings, thresholds and colors.
//!
//! Defaults match the site's stylesheet and templates. A page may override
//! individual values with `data-ui-*` attributes on `<body>`; the browser crate
//! feeds those through [`UiConfig::from_lookup`].

use std::time::Duration;

use crate::error::ConfigError;

/// Colors and scale for the star-rating control.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingPalette {
    /// Highest rating a control can express.
    pub max: f64,
    pub dim: String,
    pub highlight: String,
}

impl Default for RatingPalette {
    fn default() -> Self {
        Self {
            max: 5.0,
            dim: "#ccc".to_string(),
            highlight: "gold".to_string(),
        }
    }
}

/// Runtime configuration shared by every page behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// Delay before a non-permanent alert closes itself.
    pub alert_dismiss: Duration,
    /// Lifetime of a toast notification.
    pub toast_duration: Duration,
    /// Quiet window for the search input.
    pub search_debounce: Duration,
    /// Scroll offset (px) above which the back-to-top button shows.
    pub back_to_top_threshold: f64,
    /// Scroll offset (px) past which scrolling down hides the navbar.
    pub navbar_hide_threshold: f64,
    /// Visible fraction of a card that triggers its fade-in.
    pub fade_in_threshold: f64,
    pub rating: RatingPalette,
    /// Path the delete form posts to, followed by the recipe identifier.
    pub delete_action_prefix: String,
    /// Show a toast when a clipboard write fails.
    pub toast_on_copy_failure: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            alert_dismiss: Duration::from_millis(5000),
            toast_duration: Duration::from_millis(3000),
            search_debounce: Duration::from_millis(300),
            back_to_top_threshold: 300.0,
            navbar_hide_threshold: 100.0,
            fade_in_threshold: 0.1,
            rating: RatingPalette::default(),
            delete_action_prefix: "/delete_recipe/".to_string(),
            toast_on_copy_failure: false,
        }
    }
}

/// Override keys understood by [`UiConfig::from_lookup`].
pub const OVERRIDE_KEYS: &[&str] = &[
    "alert-ms",
    "toast-ms",
    "debounce-ms",
    "back-to-top-px",
    "navbar-px",
    "fade-in-ratio",
    "toast-on-copy-failure",
];

impl UiConfig {
    /// Build a configuration from defaults plus whatever `lookup` returns for
    /// each of [`OVERRIDE_KEYS`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("alert-ms") {
            config.alert_dismiss = parse_millis("alert-ms", &value)?;
        }
        if let Some(value) = lookup("toast-ms") {
            config.toast_duration = parse_millis("toast-ms", &value)?;
        }
        if let Some(value) = lookup("debounce-ms") {
            config.search_debounce = parse_millis("debounce-ms", &value)?;
        }
        if let Some(value) = lookup("back-to-top-px") {
            config.back_to_top_threshold = parse_pixels("back-to-top-px", &value)?;
        }
        if let Some(value) = lookup("navbar-px") {
            config.navbar_hide_threshold = parse_pixels("navbar-px", &value)?;
        }
        if let Some(value) = lookup("fade-in-ratio") {
            config.fade_in_threshold = parse_ratio("fade-in-ratio", &value)?;
        }
        if let Some(value) = lookup("toast-on-copy-failure") {
            config.toast_on_copy_failure = parse_flag("toast-on-copy-failure", &value)?;
        }

        Ok(config)
    }
}

fn parse_millis(key: &'static str, value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::invalid(key, value, "expected whole milliseconds"))
}

fn parse_pixels(key: &'static str, value: &str) -> Result<f64, ConfigError> {
    match value.trim().parse::<f64>() {
        Ok(px) if px.is_finite() && px >= 0.0 => Ok(px),
        _ => Err(ConfigError::invalid(key, value, "expected a non-negative pixel offset")),
    }
}

fn parse_ratio(key: &'static str, value: &str) -> Result<f64, ConfigError> {
    match value.trim().parse::<f64>() {
        Ok(ratio) if (0.0..=1.0).contains(&ratio) => Ok(ratio),
        _ => Err(ConfigError::invalid(key, value, "expected a ratio between 0 and 1")),
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim() {
        "" | "true" | "1" | "on" => Ok(true),
        "false" | "0" | "off" => Ok(false),
        _ => Err(ConfigError::invalid(key, value, "expected true or false")),
    }
}
