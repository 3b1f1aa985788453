//! Toast notices rendered into the page.

use gloo::events::EventListener;
use recipe_ui::markup::{TOAST_CONTAINER_CLASS, TOAST_CONTAINER_ID};
use recipe_ui::{Toast, ToastSink, Toaster, UiConfig, UiError};
use web_sys::Element;

use crate::page::{JsResultExt, Page};
use crate::timers::BrowserScheduler;

pub type DomToaster = Toaster<BrowserScheduler, DomToastSink>;

/// Toaster for `page` using the configured lifetime.
pub fn toaster(page: &Page, config: &UiConfig) -> DomToaster {
    Toaster::new(
        BrowserScheduler,
        DomToastSink::new(page.clone()),
        config.toast_duration,
    )
}

/// Appends toasts to a shared container, creating it on first use.
pub struct DomToastSink {
    page: Page,
}

impl DomToastSink {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    fn container(&self) -> Result<Element, UiError> {
        if let Some(existing) = self.page.document().get_element_by_id(TOAST_CONTAINER_ID) {
            return Ok(existing);
        }
        let container = self.page.create("div")?;
        container.set_id(TOAST_CONTAINER_ID);
        container.set_class_name(TOAST_CONTAINER_CLASS);
        self.page.mount_point()?.append_child(&container).js()?;
        Ok(container)
    }
}

impl ToastSink for DomToastSink {
    type Entry = Element;

    fn show(&self, toast: &Toast) -> Result<Element, UiError> {
        let element = self.page.create("div")?;
        element.set_class_name(&toast.class_list());
        element.set_attribute("role", "alert").js()?;
        element.set_attribute("aria-live", "assertive").js()?;
        element.set_attribute("aria-atomic", "true").js()?;

        let row = self.page.create("div")?;
        row.set_class_name("d-flex");

        let body = self.page.create("div")?;
        body.set_class_name("toast-body");
        // Text content only; messages never carry markup
        body.set_text_content(Some(&toast.message));

        let close = self.page.create("button")?;
        close.set_class_name("btn-close btn-close-white me-2 m-auto");
        close.set_attribute("type", "button").js()?;
        close.set_attribute("aria-label", "Close").js()?;

        row.append_child(&body).js()?;
        row.append_child(&close).js()?;
        element.append_child(&row).js()?;

        let dismissed = element.clone();
        EventListener::once(&close, "click", move |_| dismissed.remove()).forget();

        self.container()?.append_child(&element).js()?;
        Ok(element)
    }

    fn remove(&self, entry: Element) {
        entry.remove();
    }
}
