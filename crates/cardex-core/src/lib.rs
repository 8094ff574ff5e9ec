//! Core library for business card OCR processing.
//!
//! This crate provides:
//! - Image decoding for uploaded card photos and scans
//! - A recognizer adapter driving the external tesseract engine
//! - Contact field extraction (name, role, company, emails, phones,
//!   postal codes, address, social profiles)
//! - A scan pipeline composing the three

pub mod error;
pub mod models;
pub mod ocr;
pub mod card;
pub mod pipeline;

pub use error::{CardexError, OcrError, Result};
pub use models::contact::ContactRecord;
pub use models::config::{CardexConfig, ExtractorVariant};
pub use ocr::{decode_image, EngineMode, OcrResult, PageSegMode, Recognizer, TesseractEngine};
pub use card::{CardExtractor, CardParser};
pub use pipeline::{ScanOutcome, ScanPipeline};
