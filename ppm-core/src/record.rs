//! Decoded image record

use alloc::string::String;
use alloc::vec::Vec;

use crate::format::constants::{CHANNELS, SUPPORTED_MAX_COLOR_VALUE};
use crate::validation::payload_len;
use crate::HeaderError;

/// An RGB image with 8 bits per channel
///
/// Pixels are row-major and tightly packed with no row padding. A record
/// built with [`ImageRecord::new`] always holds exactly
/// `width * height * 3` bytes. One produced by a decode whose payload ran
/// short is flagged [`partial`](ImageRecord::is_partial) and may be shorter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    width: u32,
    height: u32,
    max_color_value: u32,
    pixels: Vec<u8>,
    source_name: Option<String>,
    partial: bool,
}

impl ImageRecord {
    /// Build a complete record, checking the buffer against the dimensions
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, HeaderError> {
        let expected = payload_len(width, height)?;
        if pixels.len() != expected {
            return Err(HeaderError::PixelLengthMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            max_color_value: SUPPORTED_MAX_COLOR_VALUE,
            pixels,
            source_name: None,
            partial: false,
        })
    }

    /// Record produced by the decoder; `pixels` may be short when `partial`
    pub(crate) fn decoded(width: u32, height: u32, pixels: Vec<u8>, partial: bool) -> Self {
        Self {
            width,
            height,
            max_color_value: SUPPORTED_MAX_COLOR_VALUE,
            pixels,
            source_name: None,
            partial,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Always 255; other declared scales are reported as warnings
    pub fn max_color_value(&self) -> u32 {
        self.max_color_value
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Complete pixels as RGB triples
    ///
    /// A trailing incomplete pixel from an under-read payload is left out.
    pub fn rgb(&self) -> &[[u8; 3]] {
        let whole = self.pixels.len() - self.pixels.len() % CHANNELS;
        bytemuck::cast_slice(&self.pixels[..whole])
    }

    /// Byte length implied by the dimensions
    pub fn expected_len(&self) -> usize {
        // Dimensions were validated when the record was built
        self.width as usize * self.height as usize * CHANNELS
    }

    /// True when the payload ran short during decode
    pub fn is_partial(&self) -> bool {
        self.partial
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Provenance label, typically the path the bytes came from
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    pub fn set_source_name(&mut self, name: impl Into<String>) {
        self.source_name = Some(name.into());
    }

    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.set_source_name(name);
        self
    }
}
