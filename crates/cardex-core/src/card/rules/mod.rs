//! Rule-based field extractors for business cards.
//!
//! List fields (emails, phones, postal codes, social links) are exhaustive
//! scans implementing [`FieldExtractor`]. Scalar fields (company, name, role)
//! are resolved through ordered [`ScalarRule`] tables where the first rule
//! returning `Some` wins.

pub mod address;
pub mod company;
pub mod email;
pub mod patterns;
pub mod person;
pub mod phone;
pub mod postal;
pub mod social;

pub use address::extract_address;
pub use email::EmailExtractor;
pub use phone::{normalize_phone, phone_key, PhoneExtractor};
pub use postal::PostalCodeExtractor;
pub use social::{SocialExtractor, SocialPlatform};

use super::text::NormalizedText;

/// A single rule in a first-match-wins chain.
pub type ScalarRule = fn(&NormalizedText<'_>) -> Option<String>;

/// Apply rules in order and return the first hit.
pub fn first_match(rules: &[ScalarRule], text: &NormalizedText<'_>) -> Option<String> {
    rules.iter().find_map(|rule| rule(text))
}

/// Trait for exhaustive field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &NormalizedText<'_>) -> Vec<Self::Output>;

    /// Extract the first occurrence of the field.
    fn extract(&self, text: &NormalizedText<'_>) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }
}

/// A matched value with its location in the joined text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte span in the source text.
    pub position: (usize, usize),
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            value,
            position: (start, end),
            source: source.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.position.1 - self.position.0
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn never(_: &NormalizedText<'_>) -> Option<String> {
        None
    }

    fn first_line(text: &NormalizedText<'_>) -> Option<String> {
        text.lines.first().map(|l| l.to_string())
    }

    fn constant(_: &NormalizedText<'_>) -> Option<String> {
        Some("constant".to_string())
    }

    #[test]
    fn test_first_match_respects_order() {
        let text = NormalizedText::new("alpha\nbeta");
        assert_eq!(
            first_match(&[never, first_line, constant], &text),
            Some("alpha".to_string())
        );
        assert_eq!(
            first_match(&[never, constant, first_line], &text),
            Some("constant".to_string())
        );
    }

    #[test]
    fn test_first_match_falls_through_to_none() {
        let text = NormalizedText::new("");
        assert_eq!(first_match(&[never, first_line], &text), None);
        assert_eq!(first_match(&[], &text), None);
    }

    #[test]
    fn test_match_len() {
        let m = ExtractionMatch::new("x".to_string(), "abc", 4, 7);
        assert_eq!(m.len(), 3);
        assert!(!m.is_empty());
    }
}
