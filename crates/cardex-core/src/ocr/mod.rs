//! OCR boundary: image decoding and the recognizer adapter.

mod decode;
mod tesseract;

pub use decode::decode_image;
pub use tesseract::{EngineMode, PageSegMode, TesseractEngine};

use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::error::OcrError;

/// A text recognizer turning a pixel grid into raw text.
///
/// Implementations run synchronously and make a single attempt.
pub trait Recognizer: Send + Sync {
    /// Recognize all text in the image.
    fn recognize(&self, image: &DynamicImage) -> Result<OcrResult, OcrError>;

    /// Short engine name for logs and metadata.
    fn name(&self) -> &str {
        "unknown"
    }
}

impl<R: Recognizer + ?Sized> Recognizer for std::sync::Arc<R> {
    fn recognize(&self, image: &DynamicImage) -> Result<OcrResult, OcrError> {
        (**self).recognize(image)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Result of OCR processing on an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrResult {
    /// Full transcription, line breaks included.
    pub text: String,

    /// Processing time in milliseconds.
    pub processing_time_ms: u64,

    /// Image dimensions (width, height).
    pub image_size: (u32, u32),
}

impl OcrResult {
    /// Create an empty result.
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            text: String::new(),
            processing_time_ms: 0,
            image_size: (width, height),
        }
    }

    /// Whether the engine produced any non-whitespace text.
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}
