use std::sync::Arc;
use std::time::SystemTime;

use tokio::sync::RwLock;

/// Capture pipeline status, for the UI and for logs.
#[derive(Clone, Debug, Default)]
pub struct CaptureStatus {
    pub capturing: bool,
    pub last_capture_time: Option<SystemTime>,
    pub capture_count: u64,
    pub error_count: u64,
    pub current_message: String,
}

pub struct AppStatus {
    pub capture: Arc<RwLock<CaptureStatus>>,
}

impl AppStatus {
    pub fn new() -> Self {
        Self {
            capture: Arc::new(RwLock::new(CaptureStatus::default())),
        }
    }
}

impl Default for AppStatus {
    fn default() -> Self {
        Self::new()
    }
}
