//! HTTP service for business card extraction.
//!
//! One operation, `POST /ocr`, takes a multipart upload and answers with the
//! extracted contact record and the raw OCR text.

pub mod error;
pub mod handlers;
pub mod router;
pub mod types;

pub use error::ApiError;
pub use router::{router, serve};
pub use types::{ErrorResponse, ScanResponse};
