//! Browser bindings for recipe-ui
//!
//! Attaches the site's page behaviors to a server-rendered document. Each
//! binder looks up its elements, skips quietly when they are absent, and
//! hands every decision to the `recipe_ui` core.

mod bootstrap;
mod enhance;
mod forms;
mod observe;
mod page;
mod platform;
mod scroll;
mod search;
mod timers;
mod toast;

use gloo::events::EventListener;
use log::{debug, error, warn};
use recipe_ui::markup::PRINT_TRIGGERS;
use recipe_ui::{ToastKind, UiConfig, UiError, copy_with_feedback};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub use enhance::{arm_alerts, bind_share_button, init_tooltips, observe_fade_in};
pub use forms::{
    bind_delete_modal, bind_form_validation, bind_ingredient_checklist, bind_star_ratings,
};
pub use page::{JsResultExt, Page};
pub use platform::BrowserPlatform;
pub use scroll::{
    bind_navbar, bind_smooth_anchors, install_back_to_top, observe_lazy_images, scroll_to_top,
};
pub use search::bind_search_inputs;
pub use timers::BrowserScheduler;
pub use toast::{DomToastSink, DomToaster};

type Binder = fn(&Page, &UiConfig) -> Result<(), UiError>;

/// Every page behavior, in installation order.
const BINDERS: &[(&str, Binder)] = &[
    ("delete modal", forms::bind_delete_modal),
    ("star ratings", forms::bind_star_ratings),
    ("tooltips", enhance::init_tooltips),
    ("alerts", enhance::arm_alerts),
    ("fade-in", enhance::observe_fade_in),
    ("share button", enhance::bind_share_button),
    ("ingredient checklist", forms::bind_ingredient_checklist),
    ("form validation", forms::bind_form_validation),
    ("search", search::bind_search_inputs),
    ("smooth anchors", scroll::bind_smooth_anchors),
    ("back to top", scroll::install_back_to_top),
    ("lazy images", scroll::observe_lazy_images),
    ("navbar", scroll::bind_navbar),
    ("print", bind_print_triggers),
];

/// Install every behavior on `page`.
///
/// A binder that fails is logged and the rest still run. Returns the number
/// of binders that failed.
pub fn install(page: &Page, config: &UiConfig) -> usize {
    let mut failures = 0;
    for (name, binder) in BINDERS {
        if let Err(err) = binder(page, config) {
            error!("{} not installed: {}", name, err);
            failures += 1;
        }
    }
    debug!(
        "installed {} of {} page behaviors",
        BINDERS.len() - failures,
        BINDERS.len()
    );
    failures
}

pub fn bind_print_triggers(page: &Page, _config: &UiConfig) -> Result<(), UiError> {
    for trigger in page.find_all(PRINT_TRIGGERS)? {
        EventListener::new(&trigger, "click", |_| print_page()).forget();
    }
    Ok(())
}

fn install_current_page() {
    match Page::current() {
        Ok(page) => {
            let config = page.config();
            install(&page, &config);
        }
        Err(err) => error!("no page to install on: {}", err),
    }
}

/// Entry point for the WASM module.
#[wasm_bindgen(start)]
pub fn run() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let ready_state = js_sys::Reflect::get(&document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|state| state.as_string());
    if ready_state.as_deref() == Some("loading") {
        EventListener::once(&document, "DOMContentLoaded", |_| install_current_page()).forget();
    } else {
        install_current_page();
    }
}

/// Show a toast on the current page. `kind` is one of info, success,
/// warning or danger.
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, kind: Option<String>) {
    let result = Page::current().and_then(|page| {
        let config = page.config();
        let kind = kind.as_deref().map(ToastKind::parse).unwrap_or_default();
        toast::toaster(&page, &config).notify(message, kind)
    });
    if let Err(err) = result {
        warn!("could not show toast: {}", err);
    }
}

/// Copy `text` to the clipboard and confirm with a toast.
#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard(text: String) {
    let page = match Page::current() {
        Ok(page) => page,
        Err(err) => {
            warn!("could not copy: {}", err);
            return;
        }
    };
    let config = page.config();
    let window = match page.window() {
        Ok(window) => window,
        Err(err) => {
            warn!("could not copy: {}", err);
            return;
        }
    };

    let platform = BrowserPlatform::new(window);
    let toaster = toast::toaster(&page, &config);
    spawn_local(async move {
        let copied =
            copy_with_feedback(&platform, &toaster, &text, config.toast_on_copy_failure).await;
        if let Err(err) = copied {
            warn!("copy to clipboard failed: {}", err);
        }
    });
}

/// Open the browser's print dialog.
#[wasm_bindgen(js_name = printPage)]
pub fn print_page() {
    let printed = web_sys::window()
        .ok_or(UiError::Unavailable("window"))
        .and_then(|w| w.print().js());
    if let Err(err) = printed {
        warn!("print failed: {}", err);
    }
}
