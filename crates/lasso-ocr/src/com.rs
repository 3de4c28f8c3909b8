use windows::Win32::System::Com::{COINIT_MULTITHREADED, CoInitializeEx, CoUninitialize};

use crate::ocr::OcrError;

/// RAII guard for per-thread COM initialization.
///
/// Recognition workers run on pool threads that may not have COM set up;
/// the guard uninitializes on drop even on an early return.
pub struct ComGuard;

impl ComGuard {
    pub fn initialize() -> Result<Self, OcrError> {
        unsafe { CoInitializeEx(Some(std::ptr::null()), COINIT_MULTITHREADED) }
            .ok()
            .map_err(|e| OcrError::Init(format!("COM initialization failed: {e}")))?;
        Ok(ComGuard)
    }
}

impl Drop for ComGuard {
    fn drop(&mut self) {
        unsafe {
            CoUninitialize();
        }
    }
}
