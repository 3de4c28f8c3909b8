use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_size() -> usize {
    50
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HistoryConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_size")]
    pub size: usize,
}

impl HistoryConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            size: default_size(),
        }
    }
}
