//! DOM Access
//!
//! Lookup of the page's fixed elements and the small amount of web-sys glue
//! the controllers share.

use catalog_core::config::CatalogConfig;
use catalog_core::CatalogError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions, Window};

/// Ids and classes the server-rendered templates provide
pub mod selectors {
    pub const MEN_BUTTON: &str = "#men-catalog-button";
    pub const WOMEN_BUTTON: &str = "#women-catalog-button";
    pub const BOTH_BUTTON: &str = "#both-catalog-button";
    pub const LANDING_SECTION: &str = "#main-division";
    pub const CATALOG_SECTION: &str = "#main-division-women";
    pub const ITEMS_CONTAINER: &str = ".main-division-bottom-part";
    pub const ITEMS_HEADING: &str = "#items_type";
    pub const SORT_ASCENDING: &str = "#ltohButton";
    pub const SORT_DESCENDING: &str = "#htolButton";
    pub const ADD_TO_CART: &str = ".add-to-cart-item-page";
    pub const REMOVE_FROM_CART: &str = ".remove-from-cart-item";
    pub const CART_STATUS: &str = "#error-item-page";
    /// Element id (not a selector) of the optional inline JSON config
    pub const CONFIG_ELEMENT_ID: &str = "catalog-config";
}

/// Elements the catalog view needs, resolved together
pub struct CatalogElements {
    pub landing: HtmlElement,
    pub catalog: HtmlElement,
    pub container: HtmlElement,
    pub heading: HtmlElement,
    pub sort_ascending: HtmlElement,
    pub sort_descending: HtmlElement,
}

impl CatalogElements {
    pub fn query(document: &Document) -> Result<Self, CatalogError> {
        Ok(Self {
            landing: require(document, selectors::LANDING_SECTION)?,
            catalog: require(document, selectors::CATALOG_SECTION)?,
            container: require(document, selectors::ITEMS_CONTAINER)?,
            heading: require(document, selectors::ITEMS_HEADING)?,
            sort_ascending: require(document, selectors::SORT_ASCENDING)?,
            sort_descending: require(document, selectors::SORT_DESCENDING)?,
        })
    }
}

/// Best-effort message out of a thrown JS value
pub fn js_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub fn network_error(value: JsValue) -> CatalogError {
    CatalogError::Network(js_message(&value))
}

pub fn window() -> Result<Window, CatalogError> {
    web_sys::window().ok_or_else(|| CatalogError::MissingElement("window".to_string()))
}

pub fn document() -> Result<Document, CatalogError> {
    window()?
        .document()
        .ok_or_else(|| CatalogError::MissingElement("document".to_string()))
}

pub fn require(document: &Document, selector: &str) -> Result<HtmlElement, CatalogError> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| CatalogError::MissingElement(selector.to_string()))
}

/// All elements matching `selector`; none is not an error
pub fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Attach a click listener for the lifetime of the page
pub fn on_click<F>(target: &web_sys::EventTarget, handler: F)
where
    F: FnMut(MouseEvent) + 'static,
{
    let on_click = Closure::<dyn FnMut(MouseEvent)>::new(handler);
    let _ = target.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}

pub fn set_display(element: &HtmlElement, display: &str) {
    let _ = element.style().set_property("display", display);
}

pub fn scroll_to_top(window: &Window) {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_left(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn current_path(window: &Window) -> String {
    window.location().pathname().unwrap_or_default()
}

pub fn navigate(window: &Window, href: &str) -> Result<(), CatalogError> {
    window.location().set_href(href).map_err(network_error)
}

/// Defaults, overridden by `<script id="catalog-config" type="application/json">` when present
pub fn load_config(document: &Document) -> CatalogConfig {
    let Some(raw) = document
        .get_element_by_id(selectors::CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return CatalogConfig::default();
    };
    CatalogConfig::from_json(&raw).unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("[BOOT] {}, using defaults", e).into());
        CatalogConfig::default()
    })
}
