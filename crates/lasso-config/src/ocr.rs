use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "en".to_string()
}

fn default_enhance() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OcrConfig {
    /// BCP-47 language tag handed to the OCR engine.
    #[serde(default = "default_language")]
    pub language: String,
    /// Grayscale/contrast pass over the capture before recognition.
    #[serde(default = "default_enhance")]
    pub enhance: bool,
}

impl OcrConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            enhance: default_enhance(),
        }
    }
}
