use std::env;

use serde::{Deserialize, Serialize};

use self::history::HistoryConfig;
use self::hotkey::HotkeyConfig;
use self::ocr::OcrConfig;
use self::search::SearchConfig;
use self::ui::UiConfig;

pub mod history;
pub mod hotkey;
pub mod ocr;
pub mod search;
pub mod ui;

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub hotkey: HotkeyConfig,
    pub ocr: OcrConfig,
    pub search: SearchConfig,
    pub history: HistoryConfig,
    pub ui: UiConfig,

    /// How often the hotkey watcher polls for events, in milliseconds.
    pub hotkey_poll_ms: u64,
}

impl Config {
    pub fn new() -> Self {
        let hotkey_poll_ms = env::var("HOTKEY_POLL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(50);

        Config {
            hotkey: HotkeyConfig::new(),
            ocr: OcrConfig::new(),
            search: SearchConfig::new(),
            history: HistoryConfig::new(),
            ui: UiConfig::new(),

            hotkey_poll_ms,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
