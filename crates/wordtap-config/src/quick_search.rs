use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_key() -> String {
    "Control".to_string()
}

fn default_press_count() -> u8 {
    3
}

fn default_interval_ms() -> u64 {
    500
}

/// Key-sequence trigger (e.g. triple Ctrl opens the standalone panel).
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct QuickSearchConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_key")]
    pub key: String,
    /// Presses required within the interval to fire
    #[serde(default = "default_press_count")]
    pub press_count: u8,
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for QuickSearchConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            key: default_key(),
            press_count: default_press_count(),
            interval_ms: default_interval_ms(),
        }
    }
}
