use std::env;

use serde::{Deserialize, Serialize};

use self::instant_capture::InstantCaptureConfig;
use self::quick_search::QuickSearchConfig;
use self::select_text::SelectTextConfig;

pub mod instant_capture;
pub mod quick_search;
pub mod select_text;

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Global enable switch; an inactive config suppresses every behavior.
    pub active: bool,
    pub quick_search: QuickSearchConfig,
    pub instant_capture: InstantCaptureConfig,
    pub select_text: SelectTextConfig,
    /// Match patterns, e.g. `https://*.example.com/*`
    pub blacklist: Vec<String>,
    /// Whitelist wins over blacklist
    pub whitelist: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            active: true,
            quick_search: QuickSearchConfig::default(),
            instant_capture: InstantCaptureConfig::default(),
            select_text: SelectTextConfig::default(),
            blacklist: Vec::new(),
            whitelist: Vec::new(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let capture_delay_ms = env::var("WORDTAP_CAPTURE_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(400); // hover dwell before capture

        let double_click_delay_ms = env::var("WORDTAP_DOUBLE_CLICK_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(450);

        let press_interval_ms = env::var("WORDTAP_PRESS_INTERVAL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(500);

        Config {
            quick_search: QuickSearchConfig {
                interval_ms: press_interval_ms,
                ..QuickSearchConfig::default()
            },
            instant_capture: InstantCaptureConfig {
                delay_ms: capture_delay_ms,
                ..InstantCaptureConfig::default()
            },
            select_text: SelectTextConfig {
                double_click_delay_ms,
                ..SelectTextConfig::default()
            },
            ..Config::default()
        }
    }
}
