//! Scoped access to the document the behaviors are installed on.

use recipe_ui::markup::CONFIG_ATTR_PREFIX;
use recipe_ui::{UiConfig, UiError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

/// Convert JavaScript exceptions into [`UiError`].
pub trait JsResultExt<T> {
    fn js(self) -> Result<T, UiError>;
}

impl<T> JsResultExt<T> for Result<T, JsValue> {
    fn js(self) -> Result<T, UiError> {
        self.map_err(|err| UiError::Js(describe(&err)))
    }
}

/// Human-readable form of a thrown JavaScript value.
pub fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return format!("{}: {}", String::from(err.name()), String::from(err.message()));
    }
    format!("{:?}", value)
}

/// A document plus the subtree behaviors are installed under.
///
/// Installing on the whole page uses the document element as root; tests
/// root each instance in its own fixture container.
#[derive(Clone)]
pub struct Page {
    document: Document,
    root: Element,
}

impl Page {
    pub fn new(document: Document, root: Element) -> Self {
        Self { document, root }
    }

    /// The whole of `document`.
    pub fn from_document(document: Document) -> Result<Self, UiError> {
        let root = document
            .document_element()
            .ok_or(UiError::Unavailable("document element"))?;
        Ok(Self::new(document, root))
    }

    /// The page this module was loaded into.
    pub fn current() -> Result<Self, UiError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(UiError::Unavailable("document"))?;
        Self::from_document(document)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn window(&self) -> Result<Window, UiError> {
        self.document
            .default_view()
            .ok_or(UiError::Unavailable("window"))
    }

    /// First element under the root matching `selector`.
    pub fn find(&self, selector: &str) -> Result<Option<Element>, UiError> {
        self.root.query_selector(selector).js()
    }

    /// All elements under the root matching `selector`, in document order.
    pub fn find_all(&self, selector: &str) -> Result<Vec<Element>, UiError> {
        Ok(elements(&self.root.query_selector_all(selector).js()?))
    }

    pub fn create(&self, tag: &str) -> Result<Element, UiError> {
        self.document.create_element(tag).js()
    }

    /// Where injected controls go: `<body>` for the whole page, otherwise the
    /// root itself.
    pub fn mount_point(&self) -> Result<Element, UiError> {
        if self.root.tag_name().eq_ignore_ascii_case("html") {
            self.document
                .body()
                .map(Element::from)
                .ok_or(UiError::Unavailable("document body"))
        } else {
            Ok(self.root.clone())
        }
    }

    /// Configuration from `data-ui-*` overrides on `<body>`.
    ///
    /// A malformed override is logged and the defaults are used instead.
    pub fn config(&self) -> UiConfig {
        let body = self.document.body();
        let lookup = |key: &str| {
            body.as_ref()
                .and_then(|b| b.get_attribute(&format!("{}{}", CONFIG_ATTR_PREFIX, key)))
        };
        match UiConfig::from_lookup(lookup) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring page configuration: {}", err);
                UiConfig::default()
            }
        }
    }
}

/// Collect the element nodes of a `NodeList`.
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Set an inline style property. Non-HTML elements are left alone.
pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), UiError> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        html.style().set_property(property, value).js()?;
    }
    Ok(())
}
