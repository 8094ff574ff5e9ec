//! Contact record extracted from a business card.

use serde::{Deserialize, Serialize};

use super::config::ExtractorVariant;

/// Structured contact fields recovered from OCR text.
///
/// Every field may be absent; a card with no recognisable content yields a
/// record of nulls and empty lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Best-guess person name.
    pub name: Option<String>,

    /// Job title from the title vocabulary.
    pub role: Option<String>,

    /// Organisation, from the website domain or a legal-entity line.
    pub company: Option<String>,

    /// Email addresses in order of appearance.
    pub emails: Vec<String>,

    /// Normalized, deduplicated phone numbers. Order carries no meaning.
    pub phones: Vec<String>,

    /// Postal codes.
    pub pincodes: Vec<String>,

    /// Address block anchored on "Plot".
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<Vec<String>>,
}

impl ContactRecord {
    /// Create an empty record shaped for the given variant.
    pub fn empty(variant: ExtractorVariant) -> Self {
        let socials = match variant {
            ExtractorVariant::Full => Some(Vec::new()),
            ExtractorVariant::Compact => None,
        };

        Self {
            name: None,
            role: None,
            company: None,
            emails: Vec::new(),
            phones: Vec::new(),
            pincodes: Vec::new(),
            address: None,
            linkedin: socials.clone(),
            twitter: socials.clone(),
            facebook: socials,
        }
    }

    /// Whether no field carries a value.
    pub fn is_empty(&self) -> bool {
        let no_socials = [&self.linkedin, &self.twitter, &self.facebook]
            .iter()
            .all(|s| s.as_ref().is_none_or(|v| v.is_empty()));

        self.name.is_none()
            && self.role.is_none()
            && self.company.is_none()
            && self.emails.is_empty()
            && self.phones.is_empty()
            && self.pincodes.is_empty()
            && self.address.is_none()
            && no_socials
    }

    /// Number of populated fields, counting each non-empty list once.
    pub fn field_count(&self) -> usize {
        let scalars = [&self.name, &self.role, &self.company, &self.address]
            .iter()
            .filter(|f| f.is_some())
            .count();
        let lists = [&self.emails, &self.phones, &self.pincodes]
            .iter()
            .filter(|l| !l.is_empty())
            .count();
        let socials = [&self.linkedin, &self.twitter, &self.facebook]
            .iter()
            .filter(|s| s.as_ref().is_some_and(|v| !v.is_empty()))
            .count();

        scalars + lists + socials
    }
}
