//! JSON envelopes returned by the service.

use serde::Serialize;

use cardex_core::{ContactRecord, ScanOutcome};

/// Successful scan.
#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub status: &'static str,
    pub data: ContactRecord,
    pub raw_text: String,
}

impl From<ScanOutcome> for ScanResponse {
    fn from(outcome: ScanOutcome) -> Self {
        Self {
            status: "success",
            data: outcome.record,
            raw_text: outcome.raw_text,
        }
    }
}

/// Failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}
