//! Browser Bindings
//!
//! Wires the controller to the live page: the undo bar's dataset for
//! configuration, `setTimeout` for the delay, the undo form's `submit` for
//! cancel and `fetch` for the server.

mod dom;
mod fetch;
mod timer;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, Window};

use crate::config::{parse_log_level, UndoBarConfig, ARMED_ATTRIBUTE, DEFAULT_BAR_ID};
use crate::controller::UndoBarController;
use crate::error::{UndoError, UndoResult};
use crate::logging;

pub use dom::DomSurface;
pub use fetch::FetchNotifier;
pub use timer::{GlooScheduler, GlooTimer};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = mount_undo_bar(DEFAULT_BAR_ID) {
        web_sys::console::error_1(&e);
    }
}

/// Arm the undo bar rendered under `bar_id`.
///
/// Returns `false` when the page has no such element. Only a missing
/// window or document is reported to the caller; everything else is logged.
#[wasm_bindgen]
pub fn mount_undo_bar(bar_id: &str) -> Result<bool, JsValue> {
    logging::init(log::LevelFilter::Warn);

    let window = web_sys::window()
        .ok_or(UndoError::MissingCollaborator("window"))
        .map_err(to_js)?;
    let document = window
        .document()
        .ok_or(UndoError::MissingCollaborator("document"))
        .map_err(to_js)?;

    let result = mount(&window, &document, bar_id);
    match result {
        Ok(found) => Ok(found),
        Err(e) => {
            log::error!("Undo bar #{} not armed: {}", bar_id, e);
            Ok(true)
        }
    }
}

fn mount(window: &Window, document: &Document, bar_id: &str) -> UndoResult<bool> {
    let Some(bar) = document.get_element_by_id(bar_id) else {
        log::debug!("No #{} on this page", bar_id);
        return Ok(false);
    };

    let attributes = dom::read_attributes(&bar)?;
    if attributes.is_armed() {
        log::debug!("#{} is already armed", bar_id);
        return Ok(true);
    }
    logging::init(parse_log_level(attributes.log_level.as_deref()));
    let config = UndoBarConfig::from_attributes(&attributes)?;

    // One controller per bar: later mounts see the mark and back off
    if let Err(e) = bar.set_attribute(ARMED_ATTRIBUTE, "") {
        log::warn!("#{} not marked as armed: {}", bar_id, dom::js_message(&e));
    }

    let form = bar.query_selector("form").ok().flatten();
    let surface = DomSurface::new(document.clone(), bar);
    let notifier = FetchNotifier::new(window.clone());
    let controller = UndoBarController::arm(config, surface, notifier, &GlooScheduler);

    match form {
        Some(form) => bind_cancel(&form, controller),
        None => {
            log::debug!("#{} has no undo form, finalize cannot be cancelled", bar_id);
            controller.detach();
        }
    }
    Ok(true)
}

/// Cancel on undo form submit. The submission itself goes through untouched.
fn bind_cancel(form: &Element, mut controller: UndoBarController<GlooTimer>) {
    let on_submit = Closure::<dyn FnMut(Event)>::new(move |_ev: Event| {
        controller.cancel();
    });

    if let Err(e) = form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref()) {
        log::warn!("Undo form listener not bound: {}", dom::js_message(&e));
    }
    // The closure owns the controller, and with it the pending timer
    on_submit.forget();
}

fn to_js(e: UndoError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
