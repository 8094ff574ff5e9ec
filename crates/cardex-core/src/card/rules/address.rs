//! Address block extraction.

use tracing::debug;

use super::patterns::{ADDRESS_BLOCK, WHITESPACE_RUN};
use super::NormalizedText;

/// Address starting at "Plot" and running to the next `=` or the end.
///
/// When a postal code is known the block is cut right before its first
/// occurrence and the code is appended, dropping whatever trails it.
pub fn extract_address(text: &NormalizedText<'_>, pincode: Option<&str>) -> Option<String> {
    let block = ADDRESS_BLOCK.find(&text.joined)?.as_str().trim();

    let block = match pincode {
        Some(pin) => truncate_at_pincode(block, pin),
        None => block.to_string(),
    };

    let address = WHITESPACE_RUN.replace_all(&block, " ").trim().to_string();
    debug!("Address block: {:?}", address);

    Some(address)
}

fn truncate_at_pincode(block: &str, pin: &str) -> String {
    let head = block
        .match_indices(pin)
        .find(|&(start, _)| {
            let before = block[..start].chars().next_back();
            let after = block[start + pin.len()..].chars().next();
            !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
        })
        .map_or(block, |(start, _)| &block[..start]);

    format!("{} {}", head.trim(), pin)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
