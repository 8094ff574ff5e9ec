//! Postal code (PIN) extraction.

use super::patterns::{PINCODE_LINE, PINCODE_SCAN};
use super::{FieldExtractor, NormalizedText};

/// Postal code extractor.
///
/// Anchored mode accepts only lines that are a postal code on their own and
/// falls back to a word-bounded scan of the joined text when no line
/// qualifies. Unanchored mode always scans.
#[derive(Debug, Clone, Copy)]
pub struct PostalCodeExtractor {
    anchored: bool,
}

impl PostalCodeExtractor {
    pub fn new() -> Self {
        Self { anchored: true }
    }

    /// Set whether whole-line matches are preferred over scanning.
    pub fn with_anchoring(mut self, anchored: bool) -> Self {
        self.anchored = anchored;
        self
    }

    fn scan(joined: &str) -> Vec<String> {
        PINCODE_SCAN
            .find_iter(joined)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

impl Default for PostalCodeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PostalCodeExtractor {
    type Output = String;

    fn extract_all(&self, text: &NormalizedText<'_>) -> Vec<Self::Output> {
        if !self.anchored {
            return Self::scan(&text.joined);
        }

        let whole_lines: Vec<String> = text
            .lines
            .iter()
            .filter(|line| PINCODE_LINE.is_match(line))
            .map(|line| line.to_string())
            .collect();

        if whole_lines.is_empty() {
            Self::scan(&text.joined)
        } else {
            whole_lines
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn anchored(raw: &str) -> Vec<String> {
        PostalCodeExtractor::new().extract_all(&NormalizedText::new(raw))
    }

    fn scanned(raw: &str) -> Vec<String> {
        PostalCodeExtractor::new()
            .with_anchoring(false)
            .extract_all(&NormalizedText::new(raw))
    }

    #[test]
    fn test_whole_line_preferred() {
        // The line match wins; "400 001" inside the address line is not added.
        assert_eq!(anchored("Plot 4, Mumbai 400 001\n560001"), vec!["560001"]);
    }

    #[test]
    fn test_falls_back_to_scan() {
        assert_eq!(
            anchored("Plot 12, Industrial Area, Sector 5 560001 Phone: 12345"),
            vec!["560001"]
        );
    }

    #[test]
    fn test_scan_finds_all() {
        assert_eq!(scanned("Pune 411 014 and Delhi 110001"), vec!["411 014", "110001"]);
    }

    #[test]
    fn test_leading_zero_rejected() {
        assert!(anchored("012345").is_empty());
        assert!(scanned("code 012345").is_empty());
    }

    #[test]
    fn test_longer_digit_runs_rejected() {
        assert!(scanned("9876543210").is_empty());
        assert!(anchored("xyz123").is_empty());
    }
}
