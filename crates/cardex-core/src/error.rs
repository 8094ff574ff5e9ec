//! Error types for the cardex-core library.

use thiserror::Error;

/// Main error type for the cardex library.
#[derive(Error, Debug)]
pub enum CardexError {
    /// The uploaded bytes are not a decodable image.
    #[error("image decode error: {0}")]
    Decode(String),

    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<image::ImageError> for CardexError {
    fn from(err: image::ImageError) -> Self {
        CardexError::Decode(err.to_string())
    }
}

/// Errors raised by the recognizer adapter.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The engine executable could not be started.
    #[error("failed to start OCR engine '{cmd}': {source}")]
    Spawn {
        cmd: String,
        #[source]
        source: std::io::Error,
    },

    /// The engine ran but reported a failure.
    #[error("OCR engine exited with {status}: {stderr}")]
    Engine { status: String, stderr: String },

    /// The pixel grid could not be re-encoded for the engine.
    #[error("failed to encode image for OCR: {0}")]
    Encode(String),

    /// Piping data to or from the engine failed.
    #[error("OCR engine I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl CardexError {
    /// Whether the failure lies with the uploaded data rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, CardexError::Decode(_))
    }
}

/// Result type for the cardex library.
pub type Result<T> = std::result::Result<T, CardexError>;
