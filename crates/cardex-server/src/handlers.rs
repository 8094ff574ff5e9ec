//! Axum handlers.

use std::sync::Arc;

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{debug, info};

use cardex_core::{Recognizer, ScanPipeline};

use crate::error::ApiError;
use crate::types::ScanResponse;

/// Multipart field expected to carry the image.
pub const FILE_FIELD: &str = "file";

/// An uploaded file pulled out of a multipart body.
#[derive(Debug)]
pub struct Upload {
    pub filename: Option<String>,
    pub bytes: Vec<u8>,
}

/// `POST /ocr`: scan an uploaded card image.
pub async fn scan_card<R>(
    State(pipeline): State<Arc<ScanPipeline<R>>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ScanResponse>, ApiError>
where
    R: Recognizer + 'static,
{
    let multipart = multipart.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let upload = read_upload(multipart).await?;

    info!(
        filename = upload.filename.as_deref().unwrap_or("-"),
        bytes = upload.bytes.len(),
        "Received card upload"
    );

    // OCR is CPU-bound and blocking; keep it off the async workers.
    let outcome = tokio::task::spawn_blocking(move || pipeline.scan_bytes(&upload.bytes))
        .await
        .map_err(|e| ApiError::Internal(format!("scan worker failed: {}", e)))??;

    debug!("Scan finished in {}ms", outcome.processing_time_ms);

    Ok(Json(ScanResponse::from(outcome)))
}

/// `GET /health`.
pub async fn health() -> &'static str {
    "ok"
}

/// Take the `file` field, or failing that the first field carrying a file name.
pub async fn read_upload(mut multipart: Multipart) -> Result<Upload, ApiError> {
    let mut fallback: Option<Upload> = None;

    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        let is_named = field.name() == Some(FILE_FIELD);
        let filename = field.file_name().map(str::to_string);

        if !is_named && (filename.is_none() || fallback.is_some()) {
            continue;
        }

        let bytes = field.bytes().await.map_err(upload_error)?.to_vec();
        let upload = Upload { filename, bytes };

        if is_named {
            return Ok(upload);
        }
        fallback = Some(upload);
    }

    fallback.ok_or_else(|| ApiError::BadRequest(format!("no '{}' field in upload", FILE_FIELD)))
}

fn upload_error(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(err.body_text())
    } else {
        ApiError::BadRequest(err.body_text())
    }
}
