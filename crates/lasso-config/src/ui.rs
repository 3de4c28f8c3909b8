use serde::{Deserialize, Serialize};

fn default_show_notifications() -> bool {
    true
}

fn default_min_selection_px() -> u32 {
    10
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_show_notifications")]
    pub show_notifications: bool,
    /// Selections with either side below this are discarded by the overlay.
    #[serde(default = "default_min_selection_px")]
    pub min_selection_px: u32,
}

impl UiConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_notifications: default_show_notifications(),
            min_selection_px: default_min_selection_px(),
        }
    }
}
