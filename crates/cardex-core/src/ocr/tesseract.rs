//! Recognizer adapter around the `tesseract` command-line engine.
//!
//! The image is re-encoded to PNG in memory and piped to a spawned
//! `tesseract stdin stdout` process; stdout is the transcription.

use std::io::{Cursor, ErrorKind, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Instant;

use image::{DynamicImage, GenericImageView, ImageFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::OcrError;
use crate::models::config::OcrConfig;

use super::{OcrResult, Recognizer};

/// Tesseract OCR engine mode (`--oem`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineMode {
    /// Legacy engine only.
    LegacyOnly,
    /// Neural net LSTM engine only.
    LstmOnly,
    /// Legacy and LSTM combined.
    LegacyAndLstm,
    /// Whatever is available (OEM 3).
    #[default]
    Default,
}

impl EngineMode {
    /// Numeric value passed on the command line.
    pub fn as_arg(self) -> u8 {
        match self {
            EngineMode::LegacyOnly => 0,
            EngineMode::LstmOnly => 1,
            EngineMode::LegacyAndLstm => 2,
            EngineMode::Default => 3,
        }
    }
}

/// Tesseract page segmentation mode (`--psm`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageSegMode {
    /// Fully automatic page segmentation, no orientation or script detection (PSM 3).
    #[default]
    Auto,
    /// Single column of text of variable sizes (PSM 4).
    SingleColumn,
    /// Single uniform block of text (PSM 6).
    SingleBlock,
    /// Single text line (PSM 7).
    SingleLine,
    /// Sparse text in no particular order (PSM 11).
    SparseText,
}

impl PageSegMode {
    /// Numeric value passed on the command line.
    pub fn as_arg(self) -> u8 {
        match self {
            PageSegMode::Auto => 3,
            PageSegMode::SingleColumn => 4,
            PageSegMode::SingleBlock => 6,
            PageSegMode::SingleLine => 7,
            PageSegMode::SparseText => 11,
        }
    }
}

/// Recognizer backed by the tesseract executable.
#[derive(Debug, Clone)]
pub struct TesseractEngine {
    cmd: PathBuf,
    language: String,
    engine_mode: EngineMode,
    page_seg_mode: PageSegMode,
}

impl TesseractEngine {
    /// Create an engine from configuration.
    pub fn new(config: &OcrConfig) -> Self {
        Self {
            cmd: config.tesseract_cmd.clone(),
            language: config.language.clone(),
            engine_mode: config.engine_mode,
            page_seg_mode: config.page_seg_mode,
        }
    }

    /// Path of the executable this engine spawns.
    pub fn cmd(&self) -> &std::path::Path {
        &self.cmd
    }

    /// Arguments passed to the executable.
    pub fn command_args(&self) -> Vec<String> {
        vec![
            "stdin".to_string(),
            "stdout".to_string(),
            "-l".to_string(),
            self.language.clone(),
            "--oem".to_string(),
            self.engine_mode.as_arg().to_string(),
            "--psm".to_string(),
            self.page_seg_mode.as_arg().to_string(),
        ]
    }

    fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, OcrError> {
        let mut png = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| OcrError::Encode(e.to_string()))?;
        Ok(png)
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new(&OcrConfig::default())
    }
}

impl Recognizer for TesseractEngine {
    fn recognize(&self, image: &DynamicImage) -> Result<OcrResult, OcrError> {
        let start = Instant::now();
        let (width, height) = image.dimensions();

        info!("Running tesseract on {}x{} image", width, height);

        let png = Self::encode_png(image)?;

        let mut child = Command::new(&self.cmd)
            .args(self.command_args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| OcrError::Spawn {
                cmd: self.cmd.display().to_string(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // An engine that exits early closes the pipe; its exit status
            // below carries the real failure.
            match stdin.write_all(&png) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    warn!("tesseract closed stdin before reading the whole image");
                }
                Err(e) => return Err(OcrError::Io(e)),
            }
        }

        let output = child.wait_with_output()?;

        if !output.status.success() {
            return Err(OcrError::Engine {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        let processing_time_ms = start.elapsed().as_millis() as u64;

        debug!(
            "tesseract produced {} chars in {}ms",
            text.len(),
            processing_time_ms
        );

        Ok(OcrResult {
            text,
            processing_time_ms,
            image_size: (width, height),
        })
    }

    fn name(&self) -> &str {
        "tesseract"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use pretty_assertions::assert_eq;

    fn sample_image() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, Rgb([255, 255, 255])))
    }

    #[test]
    fn test_default_args() {
        let engine = TesseractEngine::default();
        assert_eq!(
            engine.command_args(),
            vec!["stdin", "stdout", "-l", "eng", "--oem", "3", "--psm", "3"]
        );
        assert_eq!(engine.cmd(), std::path::Path::new("/usr/bin/tesseract"));
    }

    #[test]
    fn test_mode_values() {
        assert_eq!(EngineMode::LegacyOnly.as_arg(), 0);
        assert_eq!(EngineMode::Default.as_arg(), 3);
        assert_eq!(PageSegMode::SingleBlock.as_arg(), 6);
        assert_eq!(PageSegMode::SparseText.as_arg(), 11);
    }

    #[test]
    fn test_missing_executable_is_spawn_error() {
        let config = OcrConfig {
            tesseract_cmd: PathBuf::from("/nonexistent/cardex/tesseract"),
            ..OcrConfig::default()
        };
        let engine = TesseractEngine::new(&config);

        let err = engine.recognize(&sample_image()).unwrap_err();
        assert!(matches!(err, OcrError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_executable_is_engine_error() {
        let config = OcrConfig {
            tesseract_cmd: PathBuf::from("false"),
            ..OcrConfig::default()
        };
        let engine = TesseractEngine::new(&config);

        let err = engine.recognize(&sample_image()).unwrap_err();
        assert!(matches!(err, OcrError::Engine { .. }));
    }
}
