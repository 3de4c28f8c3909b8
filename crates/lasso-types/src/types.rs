use serde::{Deserialize, Serialize};

/// Events exchanged between the backend event loop and the UI layer.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Ask the UI to arm the selection overlay.
    ShowOverlay,
    /// Overlay dismissed without a selection.
    OverlayCancelled,
    /// Overlay produced a selection; starts the capture pipeline.
    RegionSelected(SelectionRect),
    /// Recognition finished; text, confidence and thumbnail for the panel.
    ShowResults(RecognitionSummary),
    StatusUpdate {
        status: String,
        capturing: bool,
    },
    OpenTextSearch {
        engine: SearchEngine,
        query: String,
    },
    /// Image *results* for a text query.
    OpenImageResults {
        engine: SearchEngine,
        query: String,
    },
    /// Reverse image search with the last capture.
    OpenImageSearch {
        engine: SearchEngine,
    },
    OpenTranslation(String),
    CopyText(String),
    /// Write the last capture (image + companion text) to disk.
    SaveCapture,
    SetEngine(SearchEngine),
    ClearHistory,
    BackendReady,
    Exit,
}

/// A drag selection in logical screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Axis-aligned bounds of a recognized fragment, in capture pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// One recognized region: bounds, text and the engine's confidence.
///
/// Backends that do not report per-fragment confidence use 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    pub bounds: BoundingBox,
    pub text: String,
    pub confidence: f32,
}

/// Raw output of one recognition pass, immutable once produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecognitionResult {
    pub fragments: Vec<Fragment>,
}

/// What the results panel displays after a capture completes.
#[derive(Debug, Clone)]
pub struct RecognitionSummary {
    pub text: String,
    pub average_confidence: f32,
    /// PNG-encoded thumbnail of the captured region.
    pub thumbnail: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    Google,
    Bing,
}

impl SearchEngine {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchEngine::Google => "google",
            SearchEngine::Bing => "bing",
        }
    }
}

impl std::str::FromStr for SearchEngine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "google" => Ok(SearchEngine::Google),
            "bing" => Ok(SearchEngine::Bing),
            other => Err(format!("unknown search engine: {other}")),
        }
    }
}

impl std::fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
