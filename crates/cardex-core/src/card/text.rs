//! Normalization of raw OCR output into lines and a joined form.

use super::rules::patterns::LINE_BREAKS;

/// OCR text split into clean lines, plus a single-line join of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText<'a> {
    /// Text exactly as the engine produced it.
    pub raw: &'a str,
    /// Trimmed, non-empty lines in original order.
    pub lines: Vec<&'a str>,
    /// Lines joined with single spaces.
    pub joined: String,
}

impl<'a> NormalizedText<'a> {
    /// Split on runs of `\n`, `\r` and `|`, trim, and drop empty lines.
    pub fn new(raw: &'a str) -> Self {
        let lines: Vec<&str> = LINE_BREAKS
            .split(raw)
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let joined = lines.join(" ");

        Self { raw, lines, joined }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
