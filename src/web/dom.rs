//! DOM Surface
//!
//! The undo bar and its list entry as seen through `web-sys`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::config::RawAttributes;
use crate::error::{UndoError, UndoResult};
use crate::surface::UndoSurface;

/// Undo bar plus the document its list entry lives in
pub struct DomSurface {
    document: Document,
    bar: Element,
}

impl DomSurface {
    pub fn new(document: Document, bar: Element) -> Self {
        Self { document, bar }
    }
}

impl UndoSurface for DomSurface {
    fn remove_bar(&self) -> UndoResult<()> {
        detach(&self.bar)
    }

    fn remove_entry(&self, entry_id: &str) -> UndoResult<()> {
        let entry = self
            .document
            .get_element_by_id(entry_id)
            .ok_or_else(|| UndoError::ElementMissing(entry_id.to_string()))?;
        detach(&entry)
    }
}

/// Take an element out of the visible tree
fn detach(element: &Element) -> UndoResult<()> {
    let parent = element
        .parent_node()
        .ok_or_else(|| UndoError::ElementMissing(element.id()))?;
    parent
        .remove_child(element)
        .map(|_| ())
        .map_err(|e| UndoError::Removal(js_message(&e)))
}

/// Read the bar's `data-*` attributes through its dataset
pub fn read_attributes(bar: &Element) -> UndoResult<RawAttributes> {
    let bar = bar
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| UndoError::Config(format!("#{} is not an HTML element", bar.id())))?;
    let dataset: JsValue = bar.dataset().into();
    serde_wasm_bindgen::from_value(dataset).map_err(|e| UndoError::Config(e.to_string()))
}

pub fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
