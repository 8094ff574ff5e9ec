//! Email address extraction.

use super::patterns::EMAIL;
use super::{FieldExtractor, NormalizedText};

/// Email extractor. Returns every match in order, duplicates included.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailExtractor;

impl FieldExtractor for EmailExtractor {
    type Output = String;

    fn extract_all(&self, text: &NormalizedText<'_>) -> Vec<Self::Output> {
        EMAIL
            .find_iter(&text.joined)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
