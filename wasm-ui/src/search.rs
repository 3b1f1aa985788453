//! Debounced search inputs.

use gloo::events::EventListener;
use recipe_ui::markup::SEARCH_INPUTS;
use recipe_ui::{LogSearch, UiConfig, UiError, search_debouncer};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::page::Page;
use crate::timers::BrowserScheduler;

pub fn bind_search_inputs(page: &Page, config: &UiConfig) -> Result<(), UiError> {
    for input in page.find_all(SEARCH_INPUTS)? {
        let Ok(field) = input.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        let search = search_debouncer(BrowserScheduler, config.search_debounce, LogSearch);
        let target = field.clone();
        EventListener::new(&field, "input", move |_| search.call(target.value())).forget();
    }
    Ok(())
}
