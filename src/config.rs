//! Undo Bar Configuration
//!
//! Values the server renders onto the undo bar as `data-*` attributes.

use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

use crate::error::{UndoError, UndoResult};

/// Element id the server renders the undo bar under
pub const DEFAULT_BAR_ID: &str = "undoBar";

/// Prefix of the list entry id (`item-<itemId>`)
pub const ENTRY_ID_PREFIX: &str = "item-";

/// Attribute set on a bar once a controller is armed for it
pub const ARMED_ATTRIBUTE: &str = "data-undo-armed";

/// Largest delay a browser timer accepts (2^31 - 1 ms)
pub const MAX_DELAY_MS: u32 = i32::MAX as u32;

/// Raw dataset of the undo bar, before validation.
///
/// Field names follow the dataset's camelCase view of the attributes
/// (`data-item-id` -> `itemId`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAttributes {
    pub item_id: Option<String>,
    pub token: Option<String>,
    pub remaining_ms: Option<String>,
    pub finalize_url: Option<String>,
    pub log_level: Option<String>,
    /// Present once a controller owns this bar
    pub undo_armed: Option<String>,
}

impl RawAttributes {
    /// Whether a controller is already armed for this bar
    pub fn is_armed(&self) -> bool {
        self.undo_armed.is_some()
    }
}

/// Validated undo bar configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoBarConfig {
    /// Opaque identifier of the item pending deletion
    pub item_id: String,
    /// Opaque string passed through to the server
    pub token: String,
    /// Delay before auto-finalization, already clamped
    pub remaining_ms: u32,
    /// Endpoint notified on finalize, used verbatim
    pub finalize_url: String,
}

impl UndoBarConfig {
    pub fn new(
        item_id: impl Into<String>,
        token: impl Into<String>,
        remaining_ms: u32,
        finalize_url: impl Into<String>,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            token: token.into(),
            remaining_ms: remaining_ms.min(MAX_DELAY_MS),
            finalize_url: finalize_url.into(),
        }
    }

    /// Validate the raw dataset. Missing identifiers fail fast; a missing
    /// or malformed delay means "finalize on the next tick".
    pub fn from_attributes(raw: &RawAttributes) -> UndoResult<Self> {
        let item_id = raw
            .item_id
            .clone()
            .ok_or(UndoError::MissingAttribute("item-id"))?;
        let token = raw
            .token
            .clone()
            .ok_or(UndoError::MissingAttribute("token"))?;
        let finalize_url = raw
            .finalize_url
            .clone()
            .ok_or(UndoError::MissingAttribute("finalize-url"))?;

        Ok(Self {
            item_id,
            token,
            remaining_ms: parse_remaining_ms(raw.remaining_ms.as_deref()),
            finalize_url,
        })
    }

    /// Id of the list entry this bar stands for
    pub fn entry_id(&self) -> String {
        format!("{}{}", ENTRY_ID_PREFIX, self.item_id)
    }
}

/// Parse `data-remaining-ms` the way a page script would with `parseInt`:
/// leading whitespace skipped, optional sign, leading digits, rest ignored.
/// Anything negative or unparsable is 0; huge values clamp to [`MAX_DELAY_MS`].
pub fn parse_remaining_ms(value: Option<&str>) -> u32 {
    let s = value
        .unwrap_or("0")
        .trim_start_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() || negative {
        return 0;
    }

    match digits.parse::<u64>() {
        Ok(ms) => ms.min(MAX_DELAY_MS as u64) as u32,
        // Only overflow remains at this point
        Err(_) => MAX_DELAY_MS,
    }
}

/// Console log level from `data-log-level`, `warn` when absent or unknown
pub fn parse_log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| LevelFilter::from_str(v.trim()).ok())
        .unwrap_or(LevelFilter::Warn)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(remaining_ms: Option<&str>) -> RawAttributes {
        RawAttributes {
            item_id: Some("42".to_string()),
            token: Some("abc".to_string()),
            remaining_ms: remaining_ms.map(str::to_string),
            finalize_url: Some("/items/undo/finalize".to_string()),
            log_level: None,
            undo_armed: None,
        }
    }

    #[test]
    fn test_from_attributes() {
        let config = UndoBarConfig::from_attributes(&raw(Some("5000"))).unwrap();
        assert_eq!(config.item_id, "42");
        assert_eq!(config.token, "abc");
        assert_eq!(config.remaining_ms, 5000);
        assert_eq!(config.finalize_url, "/items/undo/finalize");
        assert_eq!(config.entry_id(), "item-42");
    }

    #[test]
    fn test_missing_remaining_ms_is_zero() {
        let config = UndoBarConfig::from_attributes(&raw(None)).unwrap();
        assert_eq!(config.remaining_ms, 0);
    }

    #[test]
    fn test_missing_required_attribute() {
        let mut attrs = raw(Some("10"));
        attrs.finalize_url = None;
        assert_eq!(
            UndoBarConfig::from_attributes(&attrs),
            Err(UndoError::MissingAttribute("finalize-url"))
        );

        let mut attrs = raw(Some("10"));
        attrs.item_id = None;
        assert_eq!(
            UndoBarConfig::from_attributes(&attrs),
            Err(UndoError::MissingAttribute("item-id"))
        );

        let mut attrs = raw(Some("10"));
        attrs.token = None;
        assert_eq!(
            UndoBarConfig::from_attributes(&attrs),
            Err(UndoError::MissingAttribute("token"))
        );
    }

    #[test]
    fn test_empty_strings_are_kept() {
        let mut attrs = raw(Some("10"));
        attrs.token = Some(String::new());
        let config = UndoBarConfig::from_attributes(&attrs).unwrap();
        assert_eq!(config.token, "");
    }

    #[test]
    fn test_parse_remaining_ms() {
        assert_eq!(parse_remaining_ms(Some("5000")), 5000);
        assert_eq!(parse_remaining_ms(Some("  250")), 250);
        assert_eq!(parse_remaining_ms(Some("+7")), 7);
        assert_eq!(parse_remaining_ms(Some("1500ms")), 1500);
        assert_eq!(parse_remaining_ms(Some("12.9")), 12);
        assert_eq!(parse_remaining_ms(Some("-300")), 0);
        assert_eq!(parse_remaining_ms(Some("-0")), 0);
        assert_eq!(parse_remaining_ms(Some("abc")), 0);
        assert_eq!(parse_remaining_ms(Some("")), 0);
        assert_eq!(parse_remaining_ms(None), 0);
    }

    #[test]
    fn test_parse_remaining_ms_skips_byte_order_mark() {
        assert_eq!(parse_remaining_ms(Some("\u{FEFF}100")), 100);
        assert_eq!(parse_remaining_ms(Some(" \u{FEFF}\t42")), 42);
    }

    #[test]
    fn test_parse_remaining_ms_clamps_large_values() {
        assert_eq!(parse_remaining_ms(Some("2147483647")), MAX_DELAY_MS);
        assert_eq!(parse_remaining_ms(Some("2147483648")), MAX_DELAY_MS);
        assert_eq!(parse_remaining_ms(Some("99999999999999999999999")), MAX_DELAY_MS);
        assert_eq!(UndoBarConfig::new("1", "t", u32::MAX, "/f").remaining_ms, MAX_DELAY_MS);
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level(None), LevelFilter::Warn);
        assert_eq!(parse_log_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_log_level(Some("OFF")), LevelFilter::Off);
        assert_eq!(parse_log_level(Some("loud")), LevelFilter::Warn);
    }

    #[test]
    fn test_raw_attributes_from_dataset_json() {
        let json = r#"{"itemId":"7","token":"t0k","remainingMs":"300","finalizeUrl":"/f"}"#;
        let attrs: RawAttributes = serde_json::from_str(json).unwrap();
        assert_eq!(attrs.log_level, None);

        let config = UndoBarConfig::from_attributes(&attrs).unwrap();
        assert_eq!(config, UndoBarConfig::new("7", "t0k", 300, "/f"));
        assert!(!attrs.is_armed());
    }

    #[test]
    fn test_armed_bar_is_detected() {
        let json = r#"{"itemId":"7","token":"t0k","finalizeUrl":"/f","undoArmed":""}"#;
        let attrs: RawAttributes = serde_json::from_str(json).unwrap();
        assert!(attrs.is_armed());

        assert!(!raw(Some("10")).is_armed());
    }

    #[test]
    fn test_remaining_ms_is_clamped_from_attributes() {
        let config = UndoBarConfig::from_attributes(&raw(Some("4294967295"))).unwrap();
        assert_eq!(config.remaining_ms, MAX_DELAY_MS);
    }
}
