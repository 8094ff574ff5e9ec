//! Scan pipeline: decode, recognize, extract.

use std::time::Instant;

use image::{DynamicImage, GenericImageView};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::card::{CardExtractor, CardParser};
use crate::error::Result;
use crate::models::config::CardexConfig;
use crate::models::contact::ContactRecord;
use crate::ocr::{decode_image, Recognizer, TesseractEngine};

/// Result of scanning one card.
#[derive(Debug, Clone, Serialize)]
pub struct ScanOutcome {
    /// Extracted contact fields.
    pub record: ContactRecord,
    /// Text returned by the recognizer.
    pub raw_text: String,
    /// Total processing time in milliseconds.
    pub processing_time_ms: u64,
    /// Image dimensions (width, height).
    pub image_size: (u32, u32),
}

/// Decode → recognize → extract, for any recognizer.
pub struct ScanPipeline<R: Recognizer> {
    recognizer: R,
    parser: CardParser,
}

impl ScanPipeline<TesseractEngine> {
    /// Build the tesseract-backed pipeline described by a configuration.
    pub fn from_config(config: &CardexConfig) -> Self {
        Self::new(
            TesseractEngine::new(&config.ocr),
            CardParser::from_config(&config.extraction),
        )
    }
}

impl<R: Recognizer> ScanPipeline<R> {
    pub fn new(recognizer: R, parser: CardParser) -> Self {
        Self { recognizer, parser }
    }

    pub fn recognizer(&self) -> &R {
        &self.recognizer
    }

    pub fn parser(&self) -> &CardParser {
        &self.parser
    }

    /// Scan an uploaded file's bytes.
    pub fn scan_bytes(&self, bytes: &[u8]) -> Result<ScanOutcome> {
        let start = Instant::now();
        let image = decode_image(bytes)?;
        debug!("Decoded upload of {} bytes in {:?}", bytes.len(), start.elapsed());

        let mut outcome = self.scan_image(&image)?;
        outcome.processing_time_ms = start.elapsed().as_millis() as u64;
        Ok(outcome)
    }

    /// Scan an already decoded image.
    pub fn scan_image(&self, image: &DynamicImage) -> Result<ScanOutcome> {
        let start = Instant::now();

        let ocr = self.recognizer.recognize(image)?;
        if !ocr.has_text() {
            warn!("{} returned no text", self.recognizer.name());
        }

        let record = self.extract_text(&ocr.text);

        info!(
            "Scanned {}x{} card with {}: {} fields in {:?}",
            ocr.image_size.0,
            ocr.image_size.1,
            self.recognizer.name(),
            record.field_count(),
            start.elapsed()
        );

        Ok(ScanOutcome {
            record,
            raw_text: ocr.text,
            processing_time_ms: start.elapsed().as_millis() as u64,
            image_size: image.dimensions(),
        })
    }

    /// Run only the field extractor.
    pub fn extract_text(&self, text: &str) -> ContactRecord {
        self.parser.extract(text)
    }
}
