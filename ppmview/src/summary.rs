//! Human- and machine-readable descriptions of a decoded image

use ppm_core::{Decoded, ParseState, PpmHeader, Warning};
use std::fmt;

/// What a decode found, without the pixel data
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ImageSummary {
    pub source: Option<String>,
    pub header: PpmHeader,
    pub pixel_bytes: usize,
    pub expected_bytes: usize,
    pub partial: bool,
    pub warnings: Vec<Warning>,
}

impl ImageSummary {
    pub fn new(decoded: &Decoded) -> Self {
        Self {
            source: decoded.record.source_name().map(str::to_owned),
            header: decoded.header,
            pixel_bytes: decoded.record.pixels().len(),
            expected_bytes: decoded.record.expected_len(),
            partial: decoded.record.is_partial(),
            warnings: decoded.warnings.clone(),
        }
    }

    /// Whether the input ended before any max color digit was read
    pub fn max_color_missing(&self) -> bool {
        self.warnings.iter().any(|warning| match *warning {
            Warning::TruncatedHeader { state } => {
                state < ParseState::MaxColorValue
                    || (state == ParseState::MaxColorValue && self.header.max_color_value == 0)
            }
            _ => false,
        })
    }

    /// Pretty-printed JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for ImageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Image Info:")?;
        if let Some(source) = &self.source {
            writeln!(f, "  Source: {source}")?;
        }
        writeln!(
            f,
            "  Dimensions: {} x {}",
            self.header.width, self.header.height
        )?;
        if self.max_color_missing() {
            writeln!(f, "  Declared max color value: missing")?;
        } else {
            writeln!(
                f,
                "  Declared max color value: {}",
                self.header.max_color_value
            )?;
        }
        writeln!(
            f,
            "  Pixel bytes: {} of {}{}",
            self.pixel_bytes,
            self.expected_bytes,
            if self.partial { " (partial)" } else { "" }
        )?;

        if self.warnings.is_empty() {
            write!(f, "  Warnings: none")
        } else {
            write!(f, "  Warnings:")?;
            for warning in &self.warnings {
                write!(f, "\n    - {warning}")?;
            }
            Ok(())
        }
    }
}
