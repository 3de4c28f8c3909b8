use std::sync::{Arc, Mutex};

use lasso_config::Config;
use lasso_ocr::{CapturedImage, Recognizer};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::status::AppStatus;

/// Shared application state.
///
/// The recognizer is constructed once at startup and owned here; workers
/// borrow it through the `Arc`. `ocr_gate` serialises recognition so the
/// engine handle is never entered from two threads at once.
pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub recognizer: Arc<dyn Recognizer>,
    pub ocr_gate: Arc<tokio::sync::Mutex<()>>,
    pub status: AppStatus,
    current_capture: Mutex<Option<CancellationToken>>,
    last_capture: Mutex<Option<(CapturedImage, String)>>,
}

impl AppState {
    pub fn new(config: Config, recognizer: Arc<dyn Recognizer>) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            recognizer,
            ocr_gate: Arc::new(tokio::sync::Mutex::new(())),
            status: AppStatus::new(),
            current_capture: Mutex::new(None),
            last_capture: Mutex::new(None),
        }
    }

    /// Start a new capture: cancel whatever worker is in flight and
    /// return the token the new worker must watch.
    pub fn begin_capture(&self) -> CancellationToken {
        let token = CancellationToken::new();
        let mut slot = self
            .current_capture
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(previous) = slot.replace(token.clone()) {
            previous.cancel();
        }
        token
    }

    /// Keep the most recent capture + recognized text around for the
    /// panel's save button.
    pub fn remember_capture(&self, image: CapturedImage, text: String) {
        let mut slot = self
            .last_capture
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some((image, text));
    }

    pub fn last_capture(&self) -> Option<(CapturedImage, String)> {
        self.last_capture
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}
