//! Rule-driven business card parser.

use tracing::debug;

use crate::models::config::{ExtractionConfig, ExtractorVariant};
use crate::models::contact::ContactRecord;

use super::rules::{
    company, extract_address, first_match, person, EmailExtractor, FieldExtractor,
    PhoneExtractor, PostalCodeExtractor, SocialExtractor, SocialPlatform,
};
use super::text::NormalizedText;
use super::CardExtractor;

/// Business card parser applying the rule set of one variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardParser {
    variant: ExtractorVariant,
}

impl CardParser {
    /// Create a parser with the full rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new().with_variant(config.variant)
    }

    /// Set the rule set.
    pub fn with_variant(mut self, variant: ExtractorVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn variant(&self) -> ExtractorVariant {
        self.variant
    }

    /// Parse already normalized text.
    pub fn parse(&self, text: &NormalizedText<'_>) -> ContactRecord {
        let mut record = ContactRecord::empty(self.variant);

        record.emails = EmailExtractor.extract_all(text);
        record.phones = PhoneExtractor.extract_all(text);
        record.pincodes = PostalCodeExtractor::new()
            .with_anchoring(self.variant == ExtractorVariant::Full)
            .extract_all(text);

        record.company = first_match(company::rules(self.variant), text);
        record.name = first_match(person::name_rules(self.variant), text);
        record.role = first_match(person::role_rules(self.variant), text);
        record.address = extract_address(text, record.pincodes.first().map(String::as_str));

        if self.variant == ExtractorVariant::Full {
            let links = |platform| Some(SocialExtractor::new(platform).extract_all(text));
            record.linkedin = links(SocialPlatform::LinkedIn);
            record.twitter = links(SocialPlatform::Twitter);
            record.facebook = links(SocialPlatform::Facebook);
        }

        debug!(
            "Extracted {} fields from {} lines ({} variant)",
            record.field_count(),
            text.lines.len(),
            self.variant
        );

        record
    }
}

impl CardExtractor for CardParser {
    fn extract(&self, text: &str) -> ContactRecord {
        self.parse(&NormalizedText::new(text))
    }
}
