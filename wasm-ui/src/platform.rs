//! Clipboard and native share through `navigator`.
//!
//! Both APIs are looked up dynamically: older browsers and insecure origins
//! simply lack them, which callers treat as a missing capability.

use js_sys::{Function, Object, Promise, Reflect};
use log::warn;
use recipe_ui::{Clipboard, ShareError, SharePayload, SharePlatform, UiError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::Window;

use crate::page::{JsResultExt, describe};

#[derive(Clone)]
pub struct BrowserPlatform {
    window: Window,
}

impl BrowserPlatform {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// A method on `navigator` (or on one of its members) plus its receiver.
    fn navigator_method(&self, member: Option<&str>, method: &str) -> Option<(JsValue, Function)> {
        let mut receiver: JsValue = self.window.navigator().into();
        if let Some(member) = member {
            receiver = Reflect::get(&receiver, &JsValue::from_str(member)).ok()?;
            if receiver.is_undefined() || receiver.is_null() {
                return None;
            }
        }
        let function = Reflect::get(&receiver, &JsValue::from_str(method))
            .ok()?
            .dyn_into::<Function>()
            .ok()?;
        Some((receiver, function))
    }

    fn clipboard_write(&self, text: &str) -> Result<Promise, UiError> {
        let (clipboard, write_text) = self
            .navigator_method(Some("clipboard"), "writeText")
            .ok_or(UiError::Unavailable("navigator.clipboard"))?;
        write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .js()?
            .dyn_into::<Promise>()
            .map_err(|_| UiError::UnexpectedValue("clipboard.writeText"))
    }

    fn share_request(&self, payload: &SharePayload) -> Result<Promise, ShareError> {
        let (navigator, share) = self
            .navigator_method(None, "share")
            .ok_or_else(|| ShareError::Failed("navigator.share unavailable".to_string()))?;

        let data = Object::new();
        for (key, value) in [("title", &payload.title), ("url", &payload.url)] {
            Reflect::set(&data, &JsValue::from_str(key), &JsValue::from_str(value))
                .map_err(|err| ShareError::Failed(describe(&err)))?;
        }

        share
            .call1(&navigator, &data)
            .map_err(|err| share_error(&err))?
            .dyn_into::<Promise>()
            .map_err(|_| ShareError::Failed("navigator.share did not return a promise".to_string()))
    }
}

fn share_error(err: &JsValue) -> ShareError {
    let name = Reflect::get(err, &JsValue::from_str("name"))
        .ok()
        .and_then(|n| n.as_string());
    ShareError::from_exception(name.as_deref(), describe(err))
}

impl Clipboard for BrowserPlatform {
    async fn write_text(&self, text: &str) -> Result<(), UiError> {
        let promise = self.clipboard_write(text)?;
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|err| UiError::Clipboard(describe(&err)))
    }
}

impl SharePlatform for BrowserPlatform {
    fn supports_native_share(&self) -> bool {
        self.navigator_method(None, "share").is_some()
    }

    async fn native_share(&self, payload: &SharePayload) -> Result<(), ShareError> {
        let promise = self.share_request(payload)?;
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|err| share_error(&err))
    }

    fn acknowledge(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            warn!("acknowledgement dialog failed: {}", describe(&err));
        }
    }
}
