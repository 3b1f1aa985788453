//! Page enhancements: tooltips, alert auto-dismiss, card fade-in and the
//! share button.

use std::rc::Rc;

use gloo::events::EventListener;
use log::{debug, info, warn};
use recipe_ui::markup::{ALERTS, FADE_IN_TARGETS, SHARE_BUTTON, TOOLTIPS, VISIBLE_CLASS};
use recipe_ui::{AlertDismisser, FadeIn, SharePayload, Sharer, UiConfig, UiError};
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::bootstrap;
use crate::observe::observe_until;
use crate::page::{JsResultExt, Page};
use crate::platform::BrowserPlatform;
use crate::timers::BrowserScheduler;

pub fn init_tooltips(page: &Page, _config: &UiConfig) -> Result<(), UiError> {
    let targets = page.find_all(TOOLTIPS)?;
    if targets.is_empty() {
        return Ok(());
    }
    let window = page.window()?;
    if !bootstrap::is_loaded(&window) {
        debug!("bootstrap not loaded, skipping {} tooltips", targets.len());
        return Ok(());
    }
    for target in &targets {
        if let Err(err) = bootstrap::attach_tooltip(&window, target) {
            warn!("could not attach tooltip: {}", err);
        }
    }
    Ok(())
}

/// Close every non-permanent alert after the configured delay.
pub fn arm_alerts(page: &Page, config: &UiConfig) -> Result<(), UiError> {
    let window = page.window()?;
    let dismisser = AlertDismisser::new(BrowserScheduler, config.alert_dismiss);
    for alert in page.find_all(ALERTS)? {
        let class_name = alert.class_name();
        let window = window.clone();
        let target = alert.clone();
        dismisser.arm(class_name.split_whitespace(), move || {
            if let Err(err) = bootstrap::close_alert(&window, &target) {
                warn!("could not close alert: {}", err);
                target.remove();
            }
        });
    }
    Ok(())
}

/// Reveal cards the first time enough of them scrolls into view.
pub fn observe_fade_in(page: &Page, config: &UiConfig) -> Result<(), UiError> {
    let cards = page.find_all(FADE_IN_TARGETS)?;
    let fade = FadeIn::new(config.fade_in_threshold);

    let observed = observe_until(&cards, fade.threshold(), move |entry| {
        if !fade.should_reveal(entry.is_intersecting(), entry.intersection_ratio()) {
            return false;
        }
        if let Err(err) = reveal(&entry.target()) {
            warn!("could not reveal card: {}", err);
        }
        true
    });

    if let Err(err) = observed {
        // No IntersectionObserver: show everything at once
        debug!("fade-in unavailable ({}), revealing {} cards", err, cards.len());
        for card in &cards {
            reveal(card)?;
        }
    }
    Ok(())
}

fn reveal(card: &Element) -> Result<(), UiError> {
    card.class_list().add_1(VISIBLE_CLASS).js()
}

/// Share the current page natively, or copy its link.
pub fn bind_share_button(page: &Page, _config: &UiConfig) -> Result<(), UiError> {
    let Some(button) = page.find(SHARE_BUTTON)? else {
        return Ok(());
    };
    let window = page.window()?;
    let sharer = Rc::new(Sharer::new(BrowserPlatform::new(window.clone())));
    info!("share button uses {:?} strategy", sharer.strategy());

    let document = page.document().clone();
    EventListener::new(&button, "click", move |_| {
        let payload = SharePayload {
            title: document.title(),
            url: window.location().href().unwrap_or_default(),
        };
        let sharer = Rc::clone(&sharer);
        spawn_local(async move {
            let outcome = sharer.share(&payload).await;
            debug!("share finished: {:?}", outcome);
        });
    })
    .forget();
    Ok(())
}
