mod capture;
mod enhance;
mod hotkey;
mod ocr;

#[cfg(windows)]
mod com;

pub use capture::{CaptureError, CapturedImage, capture_region, to_physical};
pub use enhance::enhance_for_ocr;
pub use hotkey::{HotkeyError, HotkeyManager, parse_binding};
pub use ocr::{OcrEngine, OcrError, Recognizer};

#[cfg(windows)]
pub use com::ComGuard;
