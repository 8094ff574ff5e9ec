//! Social profile link extraction.

use regex::Regex;

use super::patterns::{FACEBOOK, LINKEDIN, TWITTER};
use super::{FieldExtractor, NormalizedText};

/// Social network with a recognizable profile URL shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPlatform {
    LinkedIn,
    Twitter,
    Facebook,
}

impl SocialPlatform {
    fn pattern(self) -> &'static Regex {
        match self {
            SocialPlatform::LinkedIn => &LINKEDIN,
            SocialPlatform::Twitter => &TWITTER,
            SocialPlatform::Facebook => &FACEBOOK,
        }
    }
}

/// Extractor for one platform's profile links.
#[derive(Debug, Clone, Copy)]
pub struct SocialExtractor {
    platform: SocialPlatform,
}

impl SocialExtractor {
    pub fn new(platform: SocialPlatform) -> Self {
        Self { platform }
    }
}

impl FieldExtractor for SocialExtractor {
    type Output = String;

    fn extract_all(&self, text: &NormalizedText<'_>) -> Vec<Self::Output> {
        self.platform
            .pattern()
            .find_iter(&text.joined)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
