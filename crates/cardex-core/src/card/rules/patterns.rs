//! Common regex patterns for business card extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Line splitting: newlines and the `|` artifacts of column misdetection
    pub static ref LINE_BREAKS: Regex = Regex::new(r"[\n\r|]+").unwrap();

    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s{2,}").unwrap();

    pub static ref ANY_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();

    // Email pattern
    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    // Generic phone: optional country code, optional (area code), ddd-dddd
    pub static ref PHONE_GENERIC: Regex = Regex::new(
        r"(?:\+?\d{1,2}\s?)?(?:\(?\d{3}\)?[\s-]?)?\d{3}[\s-]?\d{4}"
    ).unwrap();

    // Indian mobile (optional label and +91) or area code + local number, never
    // starting or ending inside a longer digit run
    pub static ref PHONE_MOBILE: Regex = Regex::new(
        r"(?i)(?:\b(?:cell|mobile|mob|m)\b[\s:.]*|\(m\)[\s:.]*)?(?P<num>(?:\+91[\s-]?|\b)[6-9]\d{4}[\s-]?\d{5}\b|(?:\(|\b)\d{3,4}\)?[\s.-]?\d{6,7}\b)"
    ).unwrap();

    pub static ref PHONE_SEPARATORS: Regex = Regex::new(r"[\s-]+").unwrap();

    // Postal code (Indian PIN shape, optional space after the third digit)
    pub static ref PINCODE_LINE: Regex = Regex::new(
        r"^[1-9][0-9]{2}\s?[0-9]{3}$"
    ).unwrap();

    pub static ref PINCODE_SCAN: Regex = Regex::new(
        r"\b[1-9][0-9]{2}\s?[0-9]{3}\b"
    ).unwrap();

    // Website with an explicit scheme or www prefix
    pub static ref WEBSITE: Regex = Regex::new(
        r"(?i)(?:https?://|www\.)[a-z0-9.-]+\.[a-z]{2,}(?:\.[a-z]{2,})?"
    ).unwrap();

    pub static ref URL_PREFIX: Regex = Regex::new(r"(?i)^(?:https?://)?(?:www\.)?").unwrap();

    // Bare domain ending in a common TLD
    pub static ref BARE_DOMAIN: Regex = Regex::new(
        r"(?i)\b[a-z0-9][a-z0-9-]*(?:\.[a-z0-9-]+)*\.(?:com|in|org|net|io|co|biz|info)\b"
    ).unwrap();

    // Legal-entity keywords marking a company line
    pub static ref COMPANY_KEYWORD: Regex = Regex::new(
        r"(?i)\b(?:Services?|Solutions?|Corp|Corporation|Company|Pvt|Ltd|Limited|LLP|Inc|Consultants|International|Associates|Group|Enterprises|Industries|Technologies|Partners|Tooling)\b|(?-i:(?:^|[^.@\w])Co\.)"
    ).unwrap();

    pub static ref COMPANY_KEYWORD_COMPACT: Regex = Regex::new(
        r"(?i)\b(?:Service|Solutions|Corp|Company|Pvt|Ltd|LLP|Inc)\b"
    ).unwrap();

    pub static ref COMPANY_DISALLOWED: Regex = Regex::new(r"[^A-Za-z0-9 &]").unwrap();

    // Capitalized word runs
    pub static ref PERSON_NAME: Regex = Regex::new(
        r"[A-Z][a-zA-Z'\-.]+(?:\s[A-Z][a-zA-Z'\-.]+)*"
    ).unwrap();

    pub static ref PERSON_NAME_COMPACT: Regex = Regex::new(
        r"[A-Z][a-z]+(?:\s[A-Z][a-z]+)*"
    ).unwrap();

    // House number followed by two capitalized words at the very start
    pub static ref NAME_AFTER_NUMBER: Regex = Regex::new(
        r"^\d+\s+([A-Z][a-z]+\s[A-Z][a-z]+)"
    ).unwrap();

    // Job titles
    pub static ref JOB_TITLE: Regex = Regex::new(
        r"(?i)\b(?:Manager|Director|Engineer|Consultant|Developer|Analyst|Executive|Designer|Lead|Specialist|Officer)\b"
    ).unwrap();

    pub static ref JOB_TITLE_COMPACT: Regex = Regex::new(
        r"(?i)\b(?:Manager|Director|Engineer|Consultant|Developer)\b"
    ).unwrap();

    // Address block starting at "Plot" up to the next '='
    pub static ref ADDRESS_BLOCK: Regex = Regex::new(r"(?i)Plot[^=]*").unwrap();

    // Social profiles
    pub static ref LINKEDIN: Regex = Regex::new(r"linkedin\.com/in/[a-zA-Z0-9_-]+").unwrap();

    pub static ref TWITTER: Regex = Regex::new(r"twitter\.com/[a-zA-Z0-9_]+").unwrap();

    pub static ref FACEBOOK: Regex = Regex::new(r"facebook\.com/[a-zA-Z0-9._-]+").unwrap();
}

/// Hosts of social networks, never treated as a company website.
pub const SOCIAL_HOSTS: &[&str] = &["linkedin.com", "twitter.com", "facebook.com", "x.com", "instagram.com"];
