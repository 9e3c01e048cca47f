//! Finalize Request
//!
//! The single outbound call that commits a pending deletion on the server.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::UndoBarConfig;

pub const FINALIZE_METHOD: &str = "POST";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Bytes escaped by the form-urlencoded serializer. Space is handled
/// separately since it becomes `+`.
const FORM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Finalize notification for one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizeRequest {
    pub url: String,
    pub item_id: String,
    pub token: String,
}

impl FinalizeRequest {
    pub fn from_config(config: &UndoBarConfig) -> Self {
        Self {
            url: config.finalize_url.clone(),
            item_id: config.item_id.clone(),
            token: config.token.clone(),
        }
    }

    pub fn method(&self) -> &'static str {
        FINALIZE_METHOD
    }

    pub fn content_type(&self) -> &'static str {
        FORM_CONTENT_TYPE
    }

    /// `item_id=<itemId>&token=<token>`, form-urlencoded
    pub fn body(&self) -> String {
        format!(
            "item_id={}&token={}",
            form_encode(&self.item_id),
            form_encode(&self.token)
        )
    }
}

/// Encode one form value the way `URLSearchParams` serializes it
pub fn form_encode(value: &str) -> String {
    value
        .split(' ')
        .map(|part| utf8_percent_encode(part, FORM_ENCODE_SET).to_string())
        .collect::<Vec<_>>()
        .join("+")
}
