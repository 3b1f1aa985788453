//! Optional calls into the page's Bootstrap bundle.
//!
//! Bootstrap is loaded by the templates as a global script. Nothing here
//! fails when it is missing; callers get `false` and fall back.

use js_sys::{Array, Function, Reflect};
use recipe_ui::UiError;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Window};

use crate::page::JsResultExt;

/// Constructor of a Bootstrap component such as `Tooltip`.
fn component(window: &Window, name: &str) -> Option<Function> {
    let bootstrap = Reflect::get(window, &JsValue::from_str("bootstrap")).ok()?;
    if bootstrap.is_undefined() || bootstrap.is_null() {
        return None;
    }
    Reflect::get(&bootstrap, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// Whether the Bootstrap global is present.
pub fn is_loaded(window: &Window) -> bool {
    component(window, "Tooltip").is_some()
}

/// Attach a tooltip to `element`. Returns false without Bootstrap.
pub fn attach_tooltip(window: &Window, element: &Element) -> Result<bool, UiError> {
    let Some(tooltip) = component(window, "Tooltip") else {
        return Ok(false);
    };
    Reflect::construct(&tooltip, &Array::of1(element)).js()?;
    Ok(true)
}

/// Close an alert, through Bootstrap when available.
///
/// Closing an alert that is already gone does nothing.
pub fn close_alert(window: &Window, element: &Element) -> Result<(), UiError> {
    if !element.is_connected() {
        return Ok(());
    }
    if let Some(alert) = component(window, "Alert") {
        let get_instance = Reflect::get(&alert, &JsValue::from_str("getOrCreateInstance")).js()?;
        if let Some(get_instance) = get_instance.dyn_ref::<Function>() {
            let instance = get_instance.call1(&alert, element).js()?;
            let close = Reflect::get(&instance, &JsValue::from_str("close")).js()?;
            if let Some(close) = close.dyn_ref::<Function>() {
                close.call0(&instance).js()?;
                return Ok(());
            }
        }
    }
    element.remove();
    Ok(())
}

/// The element that opened a Bootstrap modal, from a `show.bs.modal` event.
pub fn related_target(event: &JsValue) -> Option<Element> {
    Reflect::get(event, &JsValue::from_str("relatedTarget"))
        .ok()?
        .dyn_into::<Element>()
        .ok()
}
