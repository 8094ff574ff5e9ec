//! Business card field extraction module.

mod parser;
pub mod rules;
mod text;

pub use parser::CardParser;
pub use text::NormalizedText;

use crate::models::contact::ContactRecord;

/// Trait for contact field extractors.
///
/// Extraction is total: every input string yields a record.
pub trait CardExtractor {
    /// Extract contact fields from raw OCR text.
    fn extract(&self, text: &str) -> ContactRecord;
}
