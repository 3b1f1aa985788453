//! Scroll-driven effects: back-to-top button, navbar auto-hide and in-page
//! anchor targets.

/// Visibility rule for the back-to-top button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackToTop {
    threshold: f64,
}

impl BackToTop {
    /// Offset the button scrolls back to.
    pub const TARGET_OFFSET: f64 = 0.0;

    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn is_visible(&self, offset: f64) -> bool {
        offset > self.threshold
    }

    /// CSS `display` value for the button at `offset`.
    pub fn display(&self, offset: f64) -> &'static str {
        if self.is_visible(offset) { "block" } else { "none" }
    }
}

/// Navbar position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarState {
    Shown,
    Hidden,
}

impl NavbarState {
    /// CSS `transform` value for this state.
    pub fn transform(self) -> &'static str {
        match self {
            NavbarState::Shown => "translateY(0)",
            NavbarState::Hidden => "translateY(-100%)",
        }
    }
}

/// Hides the navbar while scrolling down past a threshold.
///
/// Owns the last sampled offset, which every update replaces.
#[derive(Debug, Clone)]
pub struct NavbarController {
    threshold: f64,
    last_offset: f64,
}

impl NavbarController {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            last_offset: 0.0,
        }
    }

    /// Feed the current scroll offset and get the navbar state for it.
    pub fn update(&mut self, offset: f64) -> NavbarState {
        let state = if offset > self.last_offset && offset > self.threshold {
            NavbarState::Hidden
        } else {
            NavbarState::Shown
        };
        self.last_offset = offset;
        state
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }
}

/// Selector for an in-page anchor's target, or `None` for a bare `#`.
pub fn anchor_target(href: &str) -> Option<&str> {
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}
