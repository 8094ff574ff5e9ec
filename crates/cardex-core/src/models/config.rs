//! Configuration structures for the scan pipeline and server.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CardexError, Result};
use crate::ocr::{EngineMode, PageSegMode};

/// Environment variable overriding [`OcrConfig::tesseract_cmd`].
pub const TESSERACT_CMD_ENV: &str = "CARDEX_TESSERACT_CMD";

/// Main configuration for cardex.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardexConfig {
    /// OCR configuration.
    pub ocr: OcrConfig,

    /// Contact extraction configuration.
    pub extraction: ExtractionConfig,

    /// HTTP server configuration.
    pub server: ServerConfig,
}

/// Recognizer adapter configuration.
///
/// Language and modes are fixed per process; requests cannot change them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Path to the tesseract executable.
    pub tesseract_cmd: PathBuf,

    /// Tesseract language model.
    pub language: String,

    /// OCR engine mode (`--oem`).
    pub engine_mode: EngineMode,

    /// Page segmentation mode (`--psm`).
    pub page_seg_mode: PageSegMode,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            tesseract_cmd: PathBuf::from("/usr/bin/tesseract"),
            language: "eng".to_string(),
            engine_mode: EngineMode::Default,
            page_seg_mode: PageSegMode::Auto,
        }
    }
}

/// Which rule set the field extractor applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractorVariant {
    /// Full vocabularies, anchored postal codes, social profile links.
    #[default]
    Full,
    /// Narrower vocabularies and no social links. Kept for clients that
    /// depend on the older output shape; prefer `Full`.
    Compact,
}

impl std::fmt::Display for ExtractorVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractorVariant::Full => write!(f, "full"),
            ExtractorVariant::Compact => write!(f, "compact"),
        }
    }
}

/// Contact extraction configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Rule set used by the extractor.
    pub variant: ExtractorVariant,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind_addr: String,

    /// Maximum accepted request body in bytes.
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8000".to_string(),
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl CardexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| CardexError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| CardexError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(cmd) = lookup(TESSERACT_CMD_ENV).filter(|v| !v.trim().is_empty()) {
            self.ocr.tesseract_cmd = PathBuf::from(cmd.trim());
        }
        self
    }
}
