use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_double_click_delay_ms() -> u64 {
    450
}

/// Drag/double-click selection detection.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SelectTextConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Two clicks within this window count as a double click
    #[serde(default = "default_double_click_delay_ms")]
    pub double_click_delay_ms: u64,
}

impl Default for SelectTextConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            double_click_delay_ms: default_double_click_delay_ms(),
        }
    }
}
