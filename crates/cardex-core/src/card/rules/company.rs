//! Company name resolution.
//!
//! A website on the card is the strongest signal; otherwise the first line
//! carrying a legal-entity keyword is used.

use regex::Regex;
use tracing::debug;

use crate::models::config::ExtractorVariant;

use super::patterns::{
    ANY_WHITESPACE, BARE_DOMAIN, COMPANY_DISALLOWED, COMPANY_KEYWORD, COMPANY_KEYWORD_COMPACT,
    SOCIAL_HOSTS, URL_PREFIX, WEBSITE,
};
use super::{NormalizedText, ScalarRule};

const FULL_RULES: &[ScalarRule] = &[from_website, from_bare_domain, from_legal_entity_line];

const COMPACT_RULES: &[ScalarRule] = &[from_website, from_legal_entity_line_compact];

/// Ordered company rules for a variant.
pub fn rules(variant: ExtractorVariant) -> &'static [ScalarRule] {
    match variant {
        ExtractorVariant::Full => FULL_RULES,
        ExtractorVariant::Compact => COMPACT_RULES,
    }
}

/// Domain of the first `www.`/`http(s)://` token, prefix stripped.
pub fn from_website(text: &NormalizedText<'_>) -> Option<String> {
    let m = WEBSITE.find(&text.joined)?;
    let domain = strip_url_prefix(m.as_str());
    debug!("Company from website: {}", domain);
    (!domain.is_empty()).then_some(domain)
}

/// First bare domain with a known TLD that is not part of an email address
/// or a social profile link.
pub fn from_bare_domain(text: &NormalizedText<'_>) -> Option<String> {
    let joined = text.joined.as_str();

    BARE_DOMAIN.find_iter(joined).find_map(|m| {
        let before = joined[..m.start()].chars().next_back();
        let after = joined[m.end()..].chars().next();
        if matches!(before, Some('@') | Some('.') | Some('/')) || after == Some('@') {
            return None;
        }

        let domain = strip_url_prefix(m.as_str());
        if is_social_host(&domain) {
            return None;
        }

        debug!("Company from bare domain: {}", domain);
        Some(domain)
    })
}

/// First line containing a legal-entity keyword, sanitized.
pub fn from_legal_entity_line(text: &NormalizedText<'_>) -> Option<String> {
    entity_line(text, &COMPANY_KEYWORD)
}

/// Like [`from_legal_entity_line`] with the narrower keyword list.
pub fn from_legal_entity_line_compact(text: &NormalizedText<'_>) -> Option<String> {
    entity_line(text, &COMPANY_KEYWORD_COMPACT)
}

fn entity_line(text: &NormalizedText<'_>, keywords: &Regex) -> Option<String> {
    text.lines
        .iter()
        .find(|line| keywords.is_match(line))
        .map(|line| sanitize_company(line))
        .filter(|name| !name.is_empty())
}

/// Keep letters, digits, spaces and `&`; collapse whitespace.
pub fn sanitize_company(line: &str) -> String {
    let kept = COMPANY_DISALLOWED.replace_all(line, " ");
    ANY_WHITESPACE.replace_all(kept.trim(), " ").into_owned()
}

fn strip_url_prefix(url: &str) -> String {
    URL_PREFIX.replace(url, "").into_owned()
}

fn is_social_host(domain: &str) -> bool {
    let lower = domain.to_ascii_lowercase();
    SOCIAL_HOSTS
        .iter()
        .any(|host| lower == *host || lower.ends_with(&format!(".{}", host)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::rules::first_match;
    use pretty_assertions::assert_eq;

    fn company(raw: &str, variant: ExtractorVariant) -> Option<String> {
        first_match(rules(variant), &NormalizedText::new(raw))
    }

    #[test]
    fn test_website_beats_entity_line() {
        let raw = "Acme Pvt Ltd\nwww.acmesolutions.com";
        assert_eq!(
            company(raw, ExtractorVariant::Full),
            Some("acmesolutions.com".to_string())
        );
        assert_eq!(
            company(raw, ExtractorVariant::Compact),
            Some("acmesolutions.com".to_string())
        );
    }

    #[test]
    fn test_scheme_and_www_stripped() {
        let text = NormalizedText::new("Visit https://www.example.co.in/about");
        assert_eq!(from_website(&text), Some("example.co.in".to_string()));
    }

    #[test]
    fn test_bare_domain() {
        let text = NormalizedText::new("Jane Doe\nacme-tools.com");
        assert_eq!(from_bare_domain(&text), Some("acme-tools.com".to_string()));
    }

    #[test]
    fn test_bare_domain_skips_email_and_socials() {
        let text = NormalizedText::new("jane@example.co.in\nlinkedin.com/in/janedoe\njane.co@mail.org");
        assert_eq!(from_bare_domain(&text), None);
    }

    #[test]
    fn test_entity_line_sanitized() {
        let raw = "Jane Doe\nM/s. Shree Ganesh Tools & Dies (Pvt.) Ltd.\nPune";
        assert_eq!(
            company(raw, ExtractorVariant::Full),
            Some("M s Shree Ganesh Tools & Dies Pvt Ltd".to_string())
        );
    }

    #[test]
    fn test_entity_keyword_case_insensitive() {
        let text = NormalizedText::new("Bright Path solutions");
        assert_eq!(
            from_legal_entity_line(&text),
            Some("Bright Path solutions".to_string())
        );
    }

    #[test]
    fn test_co_abbreviation() {
        let text = NormalizedText::new("Jane Doe\nPatel & Co. Chartered Accountants");
        assert_eq!(
            from_legal_entity_line(&text),
            Some("Patel & Co Chartered Accountants".to_string())
        );
    }

    #[test]
    fn test_co_inside_email_domain_is_not_a_keyword() {
        let raw = "Jane Doe\njane@acme.co.in\nSales";
        assert_eq!(from_legal_entity_line(&NormalizedText::new(raw)), None);
        assert_eq!(company(raw, ExtractorVariant::Full), None);
        assert_eq!(
            from_legal_entity_line(&NormalizedText::new("Visit example.Co.uk")),
            None
        );
    }

    #[test]
    fn test_full_vocabulary_is_wider() {
        let raw = "Orion Technologies";
        assert_eq!(
            company(raw, ExtractorVariant::Full),
            Some("Orion Technologies".to_string())
        );
        assert_eq!(company(raw, ExtractorVariant::Compact), None);
    }

    #[test]
    fn test_keyword_must_be_whole_word() {
        let text = NormalizedText::new("Incubator Park");
        assert_eq!(from_legal_entity_line(&text), None);
    }

    #[test]
    fn test_no_company() {
        assert_eq!(company("xyz123", ExtractorVariant::Full), None);
        assert_eq!(company("", ExtractorVariant::Compact), None);
    }
}
