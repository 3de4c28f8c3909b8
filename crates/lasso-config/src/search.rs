use lasso_types::SearchEngine;
use serde::{Deserialize, Serialize};

fn default_engine() -> SearchEngine {
    SearchEngine::Google
}

fn default_auto_copy() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    #[serde(default = "default_engine")]
    pub default_engine: SearchEngine,
    /// Copy recognized text to the clipboard as soon as OCR finishes.
    #[serde(default = "default_auto_copy")]
    pub auto_copy: bool,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_engine: default_engine(),
            auto_copy: default_auto_copy(),
        }
    }
}
