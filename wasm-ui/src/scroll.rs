//! Scroll-driven behaviors: back-to-top button, navbar auto-hide, smooth
//! in-page anchors and lazy images.

use gloo::events::{EventListener, EventListenerOptions};
use log::{debug, warn};
use recipe_ui::markup::{
    BACK_TO_TOP_CLASS, BACK_TO_TOP_ID, DEFERRED_SRC_ATTR, IN_PAGE_ANCHORS, LAZY_CLASS, LAZY_IMAGES,
    NAVBAR,
};
use recipe_ui::{BackToTop, LazyImage, NavbarController, UiConfig, UiError, anchor_target};
use web_sys::{
    Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Window,
};

use crate::observe::observe_until;
use crate::page::{JsResultExt, Page, set_style};

fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Inject the back-to-top button and keep it in sync with the scroll offset.
pub fn install_back_to_top(page: &Page, config: &UiConfig) -> Result<(), UiError> {
    let window = page.window()?;
    let button = back_to_top_button(page)?;
    let control = BackToTop::new(config.back_to_top_threshold);
    set_style(&button, "display", control.display(scroll_offset(&window)))?;

    let target = button.clone();
    let scrolled = window.clone();
    EventListener::new(&window, "scroll", move |_| {
        if let Err(err) = set_style(&target, "display", control.display(scroll_offset(&scrolled))) {
            warn!("could not update back-to-top button: {}", err);
        }
    })
    .forget();

    EventListener::new(&button, "click", move |_| scroll_to_top(&window)).forget();
    Ok(())
}

/// The page's back-to-top button, created if it does not exist yet.
fn back_to_top_button(page: &Page) -> Result<Element, UiError> {
    if let Some(existing) = page.document().get_element_by_id(BACK_TO_TOP_ID) {
        return Ok(existing);
    }
    let button = page.create("button")?;
    button.set_id(BACK_TO_TOP_ID);
    button.set_class_name(BACK_TO_TOP_CLASS);
    button.set_attribute("type", "button").js()?;
    button.set_attribute("aria-label", "Back to top").js()?;
    button.set_text_content(Some("\u{2191}"));
    page.mount_point()?.append_child(&button).js()?;
    Ok(button)
}

pub fn scroll_to_top(window: &Window) {
    let options = ScrollToOptions::new();
    options.set_top(BackToTop::TARGET_OFFSET);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Slide the navbar away while scrolling down, back while scrolling up.
pub fn bind_navbar(page: &Page, config: &UiConfig) -> Result<(), UiError> {
    let Some(navbar) = page.find(NAVBAR)? else {
        return Ok(());
    };
    let window = page.window()?;
    let mut controller = NavbarController::new(config.navbar_hide_threshold);

    let scrolled = window.clone();
    EventListener::new(&window, "scroll", move |_| {
        let state = controller.update(scroll_offset(&scrolled));
        if let Err(err) = set_style(&navbar, "transform", state.transform()) {
            warn!("could not move navbar: {}", err);
        }
    })
    .forget();
    Ok(())
}

/// Smooth-scroll to the target of `#fragment` links.
pub fn bind_smooth_anchors(page: &Page, _config: &UiConfig) -> Result<(), UiError> {
    for anchor in page.find_all(IN_PAGE_ANCHORS)? {
        let document = page.document().clone();
        let link = anchor.clone();
        EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let href = link.get_attribute("href").unwrap_or_default();
                let Some(selector) = anchor_target(&href) else {
                    return;
                };
                // An invalid selector behaves like a missing target
                let Ok(Some(target)) = document.query_selector(selector) else {
                    return;
                };
                event.prevent_default();
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            },
        )
        .forget();
    }
    Ok(())
}

/// Load `img.lazy` sources once each image reaches the viewport.
pub fn observe_lazy_images(page: &Page, _config: &UiConfig) -> Result<(), UiError> {
    let images = page.find_all(LAZY_IMAGES)?;

    let observed = observe_until(&images, 0.0, |entry| {
        let image = entry.target();
        let action = LazyImage::resolve(entry.is_intersecting(), image.get_attribute(DEFERRED_SRC_ATTR));
        if let Err(err) = apply_lazy(&image, &action) {
            warn!("could not load lazy image: {}", err);
        }
        action.is_done()
    });

    if let Err(err) = observed {
        // No IntersectionObserver: load everything now
        debug!("lazy loading unavailable ({}), loading {} images", err, images.len());
        for image in &images {
            apply_lazy(image, &LazyImage::resolve(true, image.get_attribute(DEFERRED_SRC_ATTR)))?;
        }
    }
    Ok(())
}

fn apply_lazy(image: &Element, action: &LazyImage) -> Result<(), UiError> {
    if let LazyImage::Load(src) = action {
        image.set_attribute("src", src).js()?;
        image.class_list().remove_1(LAZY_CLASS).js()?;
    }
    Ok(())
}
