use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    false
}

fn default_key() -> CaptureKey {
    CaptureKey::Alt
}

fn default_delay_ms() -> u64 {
    400
}

/// Modifier that must be held for hover capture, or `Direct` for none.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CaptureKey {
    Direct,
    Alt,
    Ctrl,
    Shift,
}

/// Hover/instant capture of the word under the pointer.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct InstantCaptureConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_key")]
    pub key: CaptureKey,
    /// Dwell time before the hovered word is captured
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for InstantCaptureConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            key: default_key(),
            delay_ms: default_delay_ms(),
        }
    }
}
