use lasso_types::RecognitionResult;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("OCR engine init failed: {0}")]
    Init(String),
    #[error("recognition failed: {0}")]
    Recognize(String),
    #[error("no OCR backend for this platform")]
    Unsupported,
}

/// The one capability the pipeline needs from an OCR backend.
///
/// Implementations may block; the app runs them on blocking workers and
/// never concurrently (the engine handle is not re-entrant).
pub trait Recognizer: Send + Sync {
    fn recognize(&self, png_bytes: &[u8]) -> Result<RecognitionResult, OcrError>;
}

#[cfg(windows)]
pub use windows_backend::OcrEngine;

#[cfg(windows)]
mod windows_backend {
    use lasso_types::{BoundingBox, Fragment, RecognitionResult};
    use windows::{
        Globalization::Language,
        Graphics::Imaging::BitmapDecoder,
        Media::Ocr::OcrEngine as WinOcrEngine,
        Storage::Streams::{DataWriter, InMemoryRandomAccessStream},
        core::HSTRING,
    };

    use super::{OcrError, Recognizer};

    /// Windows `Media.Ocr` backend.
    ///
    /// Construction is expensive; build once at startup and share by
    /// reference. The WinRT engine does not report per-word confidence,
    /// so fragments carry 1.0.
    pub struct OcrEngine {
        engine: WinOcrEngine,
    }

    impl OcrEngine {
        pub fn new(language_tag: &str) -> Result<Self, OcrError> {
            let language = Language::CreateLanguage(&HSTRING::from(language_tag))
                .map_err(|e| OcrError::Init(format!("language '{language_tag}': {e}")))?;

            let engine = WinOcrEngine::TryCreateFromLanguage(&language)
                .map_err(|e| OcrError::Init(format!("engine for '{language_tag}': {e}")))?;

            Ok(Self { engine })
        }

        fn recognize_png(&self, png_bytes: &[u8]) -> Result<RecognitionResult, OcrError> {
            let recognize = |e: windows::core::Error| OcrError::Recognize(e.to_string());

            let stream = InMemoryRandomAccessStream::new().map_err(recognize)?;
            let writer = DataWriter::CreateDataWriter(&stream).map_err(recognize)?;
            writer.WriteBytes(png_bytes).map_err(recognize)?;
            writer
                .StoreAsync()
                .map_err(recognize)?
                .get()
                .map_err(recognize)?;
            writer
                .FlushAsync()
                .map_err(recognize)?
                .get()
                .map_err(recognize)?;
            stream.Seek(0).map_err(recognize)?;

            let decoder = BitmapDecoder::CreateAsync(&stream)
                .map_err(recognize)?
                .get()
                .map_err(recognize)?;
            let bitmap = decoder
                .GetSoftwareBitmapAsync()
                .map_err(recognize)?
                .get()
                .map_err(recognize)?;

            let result = self
                .engine
                .RecognizeAsync(&bitmap)
                .map_err(recognize)?
                .get()
                .map_err(recognize)?;

            let mut fragments = Vec::new();
            for line in result.Lines().map_err(recognize)? {
                let text = line.Text().map_err(recognize)?.to_string();

                // Line bounds are the union of its word rects.
                let mut bounds: Option<BoundingBox> = None;
                for word in line.Words().map_err(recognize)? {
                    let rect = word.BoundingRect().map_err(recognize)?;
                    bounds = Some(match bounds {
                        None => BoundingBox {
                            x: rect.X,
                            y: rect.Y,
                            width: rect.Width,
                            height: rect.Height,
                        },
                        Some(b) => {
                            let x = b.x.min(rect.X);
                            let y = b.y.min(rect.Y);
                            let x1 = (b.x + b.width).max(rect.X + rect.Width);
                            let y1 = (b.y + b.height).max(rect.Y + rect.Height);
                            BoundingBox {
                                x,
                                y,
                                width: x1 - x,
                                height: y1 - y,
                            }
                        }
                    });
                }

                fragments.push(Fragment {
                    bounds: bounds.unwrap_or(BoundingBox {
                        x: 0.0,
                        y: 0.0,
                        width: 0.0,
                        height: 0.0,
                    }),
                    text,
                    confidence: 1.0,
                });
            }

            Ok(RecognitionResult { fragments })
        }
    }

    impl Recognizer for OcrEngine {
        fn recognize(&self, png_bytes: &[u8]) -> Result<RecognitionResult, OcrError> {
            self.recognize_png(png_bytes)
        }
    }
}

#[cfg(not(windows))]
pub struct OcrEngine;

#[cfg(not(windows))]
impl OcrEngine {
    pub fn new(_language_tag: &str) -> Result<Self, OcrError> {
        Err(OcrError::Unsupported)
    }
}

#[cfg(not(windows))]
impl Recognizer for OcrEngine {
    fn recognize(&self, _png_bytes: &[u8]) -> Result<RecognitionResult, OcrError> {
        Err(OcrError::Unsupported)
    }
}
