//! Phone and mobile number extraction.
//!
//! Two shapes are scanned: a generic international/local number and an
//! Indian mobile (or area code + local number). Where the two overlap the
//! mobile hit wins, then numbers are normalized and deduplicated on their
//! national digits.

use std::collections::HashSet;

use tracing::trace;

use super::patterns::{PHONE_GENERIC, PHONE_MOBILE, PHONE_SEPARATORS};
use super::{ExtractionMatch, FieldExtractor, NormalizedText};

/// Number of trailing digits identifying a national number.
const NATIONAL_DIGITS: usize = 10;

/// Phone extractor.
#[derive(Debug, Default, Clone, Copy)]
pub struct PhoneExtractor;

impl PhoneExtractor {
    /// Raw hits from both shapes in order of appearance.
    ///
    /// Mobile-shape hits always survive; a generic hit is kept only where it
    /// overlaps none of them.
    pub fn candidates(&self, joined: &str) -> Vec<ExtractionMatch<String>> {
        let mut hits: Vec<ExtractionMatch<String>> = PHONE_MOBILE
            .captures_iter(joined)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let num = caps.name("num")?;
                Some(ExtractionMatch::new(
                    num.as_str().to_string(),
                    whole.as_str(),
                    num.start(),
                    num.end(),
                ))
            })
            .collect();

        let generic: Vec<ExtractionMatch<String>> = PHONE_GENERIC
            .find_iter(joined)
            .map(|m| ExtractionMatch::new(m.as_str().to_string(), m.as_str(), m.start(), m.end()))
            .filter(|g| {
                let inside_mobile = hits.iter().any(|h| overlaps(h.position, g.position));
                if inside_mobile {
                    trace!("Dropping generic phone hit {:?} inside a mobile number", g.value);
                }
                !inside_mobile
            })
            .collect();

        hits.extend(generic);
        hits.sort_by_key(|hit| hit.position.0);
        hits
    }
}

fn overlaps(a: (usize, usize), b: (usize, usize)) -> bool {
    a.0 < b.1 && b.0 < a.1
}

impl FieldExtractor for PhoneExtractor {
    type Output = String;

    fn extract_all(&self, text: &NormalizedText<'_>) -> Vec<Self::Output> {
        let mut seen = HashSet::new();
        let mut phones = Vec::new();

        for hit in self.candidates(&text.joined) {
            let normalized = normalize_phone(&hit.value);
            if normalized.is_empty() {
                continue;
            }
            if seen.insert(phone_key(&normalized)) {
                phones.push(normalized);
            }
        }

        phones
    }
}

/// Collapse runs of whitespace and hyphens to single spaces and trim.
pub fn normalize_phone(number: &str) -> String {
    PHONE_SEPARATORS.replace_all(number, " ").trim().to_string()
}

/// Deduplication key: the national digits of a number.
///
/// Numbers longer than a national number carry a country prefix, which is
/// dropped so `+91 98765 43210` and `98765-43210` collide.
pub fn phone_key(number: &str) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() > NATIONAL_DIGITS {
        digits[digits.len() - NATIONAL_DIGITS..].to_string()
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    fn phones(raw: &str) -> BTreeSet<String> {
        PhoneExtractor
            .extract_all(&NormalizedText::new(raw))
            .into_iter()
            .collect()
    }

    #[test]
    fn test_same_number_different_format_dedups() {
        let found = phones("Mob: +91 98765 43210 | Office 98765-43210");
        assert_eq!(found.len(), 1);
        let only = found.into_iter().next().unwrap();
        assert!(only == "+91 98765 43210" || only == "98765 43210", "{only}");
    }

    #[test]
    fn test_label_is_stripped() {
        assert_eq!(phones("Mobile: 9876543210"), BTreeSet::from(["9876543210".to_string()]));
    }

    #[test]
    fn test_us_style_number() {
        assert_eq!(
            phones("Tel +1 (415) 555-0132"),
            BTreeSet::from(["+1 (415) 555 0132".to_string()])
        );
    }

    #[test]
    fn test_landline_with_area_code() {
        assert_eq!(
            phones("Ph: 080-2345678"),
            BTreeSet::from(["080 2345678".to_string()])
        );
    }

    #[test]
    fn test_two_distinct_numbers() {
        let found = phones("9876543210\n8123456789");
        assert_eq!(
            found,
            BTreeSet::from(["9876543210".to_string(), "8123456789".to_string()])
        );
    }

    #[test]
    fn test_no_fragments_of_mobile() {
        // The generic shape alone would also hit "765 4321" inside this number.
        let found = phones("+91 98765 43210");
        assert_eq!(found, BTreeSet::from(["+91 98765 43210".to_string()]));
    }

    #[test]
    fn test_mobile_after_pincode_line() {
        assert_eq!(
            phones("Bangalore 560001\n9876543210"),
            BTreeSet::from(["9876543210".to_string()])
        );
        assert_eq!(
            phones("Pune 411026\nMob: +91 98220 12345"),
            BTreeSet::from(["+91 98220 12345".to_string()])
        );
    }

    #[test]
    fn test_mobile_not_taken_from_inside_digit_run() {
        let hits = PhoneExtractor.candidates("Bangalore 560001 9876543210");
        let values: Vec<&str> = hits.iter().map(|h| h.value.as_str()).collect();
        assert_eq!(values, vec!["9876543210"]);
    }

    #[test]
    fn test_short_numbers_ignored() {
        assert!(phones("Sector 5 560001 Phone: 12345").is_empty());
        assert!(phones("xyz123").is_empty());
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone(" 98765 -- 43210 "), "98765 43210");
        assert_eq!(normalize_phone("   "), "");
    }

    #[test]
    fn test_phone_key() {
        assert_eq!(phone_key("+91 98765 43210"), "9876543210");
        assert_eq!(phone_key("98765 43210"), "9876543210");
        assert_eq!(phone_key("080 2345678"), "0802345678");
        assert_eq!(phone_key("555 0132"), "5550132");
    }
}
