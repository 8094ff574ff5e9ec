//! Person name and job title rules.

use crate::models::config::ExtractorVariant;

use super::patterns::{JOB_TITLE, JOB_TITLE_COMPACT, NAME_AFTER_NUMBER, PERSON_NAME, PERSON_NAME_COMPACT};
use super::{NormalizedText, ScalarRule};

const FULL_NAME_RULES: &[ScalarRule] = &[capitalized_run, name_after_number];

const COMPACT_NAME_RULES: &[ScalarRule] = &[capitalized_run_compact, name_after_number];

const FULL_ROLE_RULES: &[ScalarRule] = &[job_title];

const COMPACT_ROLE_RULES: &[ScalarRule] = &[job_title_compact];

/// Ordered name rules for a variant.
pub fn name_rules(variant: ExtractorVariant) -> &'static [ScalarRule] {
    match variant {
        ExtractorVariant::Full => FULL_NAME_RULES,
        ExtractorVariant::Compact => COMPACT_NAME_RULES,
    }
}

/// Ordered role rules for a variant.
pub fn role_rules(variant: ExtractorVariant) -> &'static [ScalarRule] {
    match variant {
        ExtractorVariant::Full => FULL_ROLE_RULES,
        ExtractorVariant::Compact => COMPACT_ROLE_RULES,
    }
}

/// First run of capitalized words in the joined text.
pub fn capitalized_run(text: &NormalizedText<'_>) -> Option<String> {
    PERSON_NAME.find(&text.joined).map(|m| m.as_str().to_string())
}

pub fn capitalized_run_compact(text: &NormalizedText<'_>) -> Option<String> {
    PERSON_NAME_COMPACT
        .find(&text.joined)
        .map(|m| m.as_str().to_string())
}

/// Two capitalized words after a leading number at the start of the raw text.
pub fn name_after_number(text: &NormalizedText<'_>) -> Option<String> {
    NAME_AFTER_NUMBER
        .captures(text.raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// First job-title keyword, as written on the card.
pub fn job_title(text: &NormalizedText<'_>) -> Option<String> {
    JOB_TITLE.find(&text.joined).map(|m| m.as_str().to_string())
}

pub fn job_title_compact(text: &NormalizedText<'_>) -> Option<String> {
    JOB_TITLE_COMPACT
        .find(&text.joined)
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::rules::first_match;
    use pretty_assertions::assert_eq;

    fn name(raw: &str, variant: ExtractorVariant) -> Option<String> {
        first_match(name_rules(variant), &NormalizedText::new(raw))
    }

    fn role(raw: &str, variant: ExtractorVariant) -> Option<String> {
        first_match(role_rules(variant), &NormalizedText::new(raw))
    }

    #[test]
    fn test_name_first_capitalized_run() {
        assert_eq!(
            name("rahul.k@acme.in\nRahul K. Sharma\nSenior Engineer", ExtractorVariant::Full),
            Some("Rahul K. Sharma Senior Engineer".to_string())
        );
    }

    #[test]
    fn test_name_with_apostrophe_and_hyphen() {
        assert_eq!(
            name("mail: Mary-Jane O'Neil", ExtractorVariant::Full),
            Some("Mary-Jane O'Neil".to_string())
        );
    }

    #[test]
    fn test_compact_name_stops_at_punctuation() {
        assert_eq!(
            name("mail: Mary-Jane O'Neil", ExtractorVariant::Compact),
            Some("Mary".to_string())
        );
    }

    #[test]
    fn test_single_letter_is_not_a_name() {
        assert_eq!(name("a B c 42", ExtractorVariant::Full), None);
    }

    #[test]
    fn test_name_after_number_rule() {
        let text = NormalizedText::new("221 Baker Street\nlondon");
        assert_eq!(name_after_number(&text), Some("Baker Street".to_string()));

        let text = NormalizedText::new("Baker Street 221");
        assert_eq!(name_after_number(&text), None);
    }

    #[test]
    fn test_role_case_insensitive_as_written() {
        assert_eq!(
            role("jane doe | senior MANAGER, sales", ExtractorVariant::Full),
            Some("MANAGER".to_string())
        );
    }

    #[test]
    fn test_role_first_in_text_wins() {
        assert_eq!(
            role("Lead Designer", ExtractorVariant::Full),
            Some("Lead".to_string())
        );
    }

    #[test]
    fn test_compact_role_vocabulary() {
        assert_eq!(role("Data Analyst", ExtractorVariant::Full), Some("Analyst".to_string()));
        assert_eq!(role("Data Analyst", ExtractorVariant::Compact), None);
    }

    #[test]
    fn test_role_whole_word() {
        assert_eq!(role("Leadership Summit", ExtractorVariant::Full), None);
    }
}
