//! Fetch Notifier
//!
//! Sends the finalize request with `window.fetch` and walks away.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Headers, RequestInit, Response, Window};

use super::dom::js_message;
use crate::error::{UndoError, UndoResult};
use crate::request::FinalizeRequest;
use crate::surface::FinalizeNotifier;

pub struct FetchNotifier {
    window: Window,
}

impl FetchNotifier {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl FinalizeNotifier for FetchNotifier {
    fn dispatch(&self, request: &FinalizeRequest) -> UndoResult<()> {
        let headers = Headers::new().map_err(|e| UndoError::Request(js_message(&e)))?;
        headers
            .set("Content-Type", request.content_type())
            .map_err(|e| UndoError::Request(js_message(&e)))?;

        let init = RequestInit::new();
        init.set_method(request.method());
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&request.body()));
        // Survive the page navigating away right after finalize
        init.set_keepalive(true);

        let promise: js_sys::Promise = self.window.fetch_with_str_and_init(&request.url, &init);

        // Detached: the outcome is only logged, never retried or awaited
        let url = request.url.clone();
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(value) => {
                    if let Ok(response) = value.dyn_into::<Response>() {
                        log::debug!("Finalize {} answered {}", url, response.status());
                    }
                }
                Err(e) => log::debug!("Finalize {} failed: {}", url, js_message(&e)),
            }
        });

        Ok(())
    }
}
