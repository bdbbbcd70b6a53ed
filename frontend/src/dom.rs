//! Thin adapters between the page DOM and the shared state machines.

use crate::config::Config;
use shared::{CheckboxState, FilterCategory, SectionBounds, SharedError};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

pub fn document() -> Result<Document, SharedError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| SharedError::dom_missing("document"))
}

/// Looks up an element the page is expected to provide.
pub fn require(document: &Document, selector: &str) -> Result<Element, SharedError> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| SharedError::dom_missing(selector))
}

/// Every element under `root` matching `selector` that casts to `T`.
pub fn query_all<T: JsCast>(root: &Element, selector: &str) -> Vec<T> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Reads every filter checkbox under `root`, in DOM order.
pub fn read_checkboxes(root: &Element) -> Vec<CheckboxState> {
    query_all::<HtmlInputElement>(root, "input[data-filter-type]")
        .into_iter()
        .filter_map(|input| {
            let tag = input.get_attribute("data-filter-type")?;
            let category = FilterCategory::parse(&tag)?;
            Some(CheckboxState::new(category, input.value(), input.checked()))
        })
        .collect()
}

/// Geometry of the date sections currently on the page.
pub fn section_bounds(document: &Document) -> Vec<SectionBounds> {
    let Some(root) = document.document_element() else {
        return Vec::new();
    };
    query_all::<HtmlElement>(&root, Config::DATE_SECTIONS)
        .into_iter()
        .filter_map(|section| {
            let date = section.get_attribute("data-date")?;
            Some(SectionBounds::new(
                date,
                f64::from(section.offset_top()),
                f64::from(section.offset_height()),
            ))
        })
        .collect()
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or(0.0)
}

/// Creates the panel host and prepends it to the content wrapper.
pub fn insert_panel_host(document: &Document) -> Result<Element, SharedError> {
    let wrapper = require(document, Config::CONTENT_WRAPPER)?;
    let host = document
        .create_element("div")
        .map_err(|_| SharedError::dom_missing("div"))?;
    host.set_class_name("filter-panel-host");
    wrapper
        .prepend_with_node_1(&host)
        .map_err(|_| SharedError::dom_missing(Config::CONTENT_WRAPPER))?;
    Ok(host)
}
