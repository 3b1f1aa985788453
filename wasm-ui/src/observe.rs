//! One-shot intersection observation.

use js_sys::Array;
use recipe_ui::UiError;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::page::JsResultExt;

/// Observe `targets`, calling `on_entry` for each observation. Once it
/// returns true the target is no longer observed.
///
/// The observer lives for the rest of the page.
pub fn observe_until<F>(targets: &[Element], threshold: f64, on_entry: F) -> Result<(), UiError>
where
    F: Fn(&IntersectionObserverEntry) -> bool + 'static,
{
    if targets.is_empty() {
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if on_entry(&entry) {
                    observer.unobserve(&entry.target());
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).js()?;
    callback.forget();

    for target in targets {
        observer.observe(target);
    }
    Ok(())
}
