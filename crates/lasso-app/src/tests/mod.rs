mod watcher_tests;
mod worker_gate_tests;

use std::sync::Arc;

use lasso_config::Config;
use lasso_ocr::{OcrError, Recognizer};
use lasso_types::{BoundingBox, Fragment, RecognitionResult};

use crate::state::AppState;

/// Deterministic stand-in for the platform OCR engine.
pub(crate) struct FakeRecognizer {
    fragments: Vec<(String, f32)>,
}

impl FakeRecognizer {
    pub(crate) fn with(fragments: &[(&str, f32)]) -> Self {
        Self {
            fragments: fragments
                .iter()
                .map(|(t, c)| (t.to_string(), *c))
                .collect(),
        }
    }
}

impl Recognizer for FakeRecognizer {
    fn recognize(&self, _png_bytes: &[u8]) -> Result<RecognitionResult, OcrError> {
        Ok(RecognitionResult {
            fragments: self
                .fragments
                .iter()
                .map(|(text, confidence)| Fragment {
                    bounds: BoundingBox {
                        x: 0.0,
                        y: 0.0,
                        width: 10.0,
                        height: 10.0,
                    },
                    text: text.clone(),
                    confidence: *confidence,
                })
                .collect(),
        })
    }
}

pub(crate) fn test_state() -> Arc<AppState> {
    Arc::new(AppState::new(
        Config::new(),
        Arc::new(FakeRecognizer::with(&[("hello world", 0.9)])),
    ))
}
