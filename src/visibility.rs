//! Intersection-driven effects: card fade-in and lazy images.
//!
//! Both are one-shot per element: once an element has been handled the
//! observer stops watching it.

/// Fade-in trigger for card elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeIn {
    threshold: f64,
}

impl FadeIn {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether an observation shows enough of the element to reveal it.
    pub fn should_reveal(&self, is_intersecting: bool, ratio: f64) -> bool {
        is_intersecting && ratio >= self.threshold
    }
}

/// Outcome of observing a lazy image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LazyImage {
    /// Not on screen yet; keep observing.
    Wait,
    /// Copy this URL into `src` and stop observing.
    Load(String),
    /// On screen but nothing to load; stop observing.
    Skip,
}

impl LazyImage {
    pub fn resolve(is_intersecting: bool, deferred_src: Option<String>) -> Self {
        if !is_intersecting {
            return LazyImage::Wait;
        }
        match deferred_src {
            Some(src) if !src.is_empty() => LazyImage::Load(src),
            _ => LazyImage::Skip,
        }
    }

    /// Whether the observer should release the element.
    pub fn is_done(&self) -> bool {
        !matches!(self, LazyImage::Wait)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_in_threshold() {
        let fade = FadeIn::new(0.1);
        assert!(!fade.should_reveal(true, 0.05));
        assert!(fade.should_reveal(true, 0.1));
        assert!(fade.should_reveal(true, 1.0));
        assert!(!fade.should_reveal(false, 0.0));
    }

    #[test]
    fn test_lazy_waits_off_screen() {
        let action = LazyImage::resolve(false, Some("/media/pie.jpg".to_string()));
        assert_eq!(action, LazyImage::Wait);
        assert!(!action.is_done());
    }

    #[test]
    fn test_lazy_loads_on_screen() {
        let action = LazyImage::resolve(true, Some("/media/pie.jpg".to_string()));
        assert_eq!(action, LazyImage::Load("/media/pie.jpg".to_string()));
        assert!(action.is_done());
    }

    #[test]
    fn test_lazy_without_source_is_released() {
        assert_eq!(LazyImage::resolve(true, None), LazyImage::Skip);
        assert_eq!(LazyImage::resolve(true, Some(String::new())), LazyImage::Skip);
        assert!(LazyImage::Skip.is_done());
    }
}
