//! Page settings, read from an optional inline JSON block.
//!
//! Every field is optional. Values that are missing, mistyped, out of
//! bounds or of an unknown variant fall back to their defaults one by one;
//! only malformed JSON discards the whole block.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::typing::{Cadence, CodeWindowProfile};

pub const CONFIG_ELEMENT_ID: &str = "site-config";

const DEFAULT_CONTACT_ADDRESS: &str = "hello@example.com";
const DEFAULT_HERO_TITLE: &str = "Software Engineer";
const DEFAULT_HERO_START_DELAY_MS: u32 = 1_000;
const DEFAULT_SNIPPET_HOLD_MS: u32 = 3_000;
const DEFAULT_SCROLL_THROTTLE_MS: u32 = 10;
const DEFAULT_SUBMIT_FEEDBACK_MS: u32 = 3_000;
const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

const HERO_START_DELAY_MS_BOUNDS: (u32, u32) = (0, 10_000);
const HERO_CHAR_DELAY_MS_BOUNDS: (u32, u32) = (10, 1_000);
const SNIPPET_HOLD_MS_BOUNDS: (u32, u32) = (500, 60_000);
const SCROLL_THROTTLE_MS_BOUNDS: (u32, u32) = (0, 250);
const SUBMIT_FEEDBACK_MS_BOUNDS: (u32, u32) = (500, 30_000);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawSiteConfig {
    contact_address: Option<Value>,
    hero_title: Option<Value>,
    hero_start_delay_ms: Option<Value>,
    hero_char_delay_ms: Option<Value>,
    code_window: Option<Value>,
    snippet_hold_ms: Option<Value>,
    scroll_throttle_ms: Option<Value>,
    submit_feedback_ms: Option<Value>,
    log_level: Option<Value>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub contact_address: String,
    pub hero_title: String,
    pub hero_start_delay_ms: u32,
    pub hero_cadence: Cadence,
    pub code_window: CodeWindowProfile,
    pub snippet_hold_ms: u32,
    pub scroll_throttle_ms: u32,
    pub submit_feedback_ms: u32,
    pub log_level: log::Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_address: DEFAULT_CONTACT_ADDRESS.to_string(),
            hero_title: DEFAULT_HERO_TITLE.to_string(),
            hero_start_delay_ms: DEFAULT_HERO_START_DELAY_MS,
            hero_cadence: Cadence::HERO,
            code_window: CodeWindowProfile::default(),
            snippet_hold_ms: DEFAULT_SNIPPET_HOLD_MS,
            scroll_throttle_ms: DEFAULT_SCROLL_THROTTLE_MS,
            submit_feedback_ms: DEFAULT_SUBMIT_FEEDBACK_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let raw: RawSiteConfig = serde_json::from_str(raw)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawSiteConfig) -> Self {
        let defaults = Self::default();

        let contact_address = non_empty(text_field("contactAddress", raw.contact_address))
            .filter(|address| address.contains('@'))
            .unwrap_or(defaults.contact_address);
        let hero_title =
            non_empty(text_field("heroTitle", raw.hero_title)).unwrap_or(defaults.hero_title);
        let hero_cadence = millis_field(
            "heroCharDelayMs",
            raw.hero_char_delay_ms,
            HERO_CHAR_DELAY_MS_BOUNDS,
        )
        .map_or(defaults.hero_cadence, Cadence::uniform);
        let code_window = match text_field("codeWindow", raw.code_window)
            .map(|value| value.trim().to_ascii_lowercase())
        {
            Some(value) if value == "legacy" => CodeWindowProfile::Legacy,
            Some(value) if value == "cycling" => CodeWindowProfile::Cycling,
            _ => defaults.code_window,
        };
        let log_level = text_field("logLevel", raw.log_level)
            .and_then(|value| value.trim().parse::<log::Level>().ok())
            .unwrap_or(defaults.log_level);

        Self {
            contact_address,
            hero_title,
            hero_start_delay_ms: millis_field(
                "heroStartDelayMs",
                raw.hero_start_delay_ms,
                HERO_START_DELAY_MS_BOUNDS,
            )
            .unwrap_or(defaults.hero_start_delay_ms),
            hero_cadence,
            code_window,
            snippet_hold_ms: millis_field("snippetHoldMs", raw.snippet_hold_ms, SNIPPET_HOLD_MS_BOUNDS)
                .unwrap_or(defaults.snippet_hold_ms),
            scroll_throttle_ms: millis_field(
                "scrollThrottleMs",
                raw.scroll_throttle_ms,
                SCROLL_THROTTLE_MS_BOUNDS,
            )
            .unwrap_or(defaults.scroll_throttle_ms),
            submit_feedback_ms: millis_field(
                "submitFeedbackMs",
                raw.submit_feedback_ms,
                SUBMIT_FEEDBACK_MS_BOUNDS,
            )
            .unwrap_or(defaults.submit_feedback_ms),
            log_level,
        }
    }
}

fn text_field(name: &str, value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text),
        other => {
            log::warn!("site config `{name}` ignored: expected a string, got {other}");
            None
        }
    }
}

fn millis_field(name: &str, value: Option<Value>, bounds: (u32, u32)) -> Option<u32> {
    let value = value?;
    let millis = value
        .as_u64()
        .and_then(|value| u32::try_from(value).ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value));

    if millis.is_none() {
        log::warn!(
            "site config `{name}` ignored: {value} is not a millisecond count in {}..={}",
            bounds.0,
            bounds.1
        );
    }
    millis
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
