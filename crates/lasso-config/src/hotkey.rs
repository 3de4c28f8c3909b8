use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_binding() -> String {
    "ctrl+shift+space".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HotkeyConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Modifiers plus key, lowercase, joined with `+`.
    #[serde(default = "default_binding")]
    pub binding: String,
}

impl HotkeyConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            binding: default_binding(),
        }
    }
}
