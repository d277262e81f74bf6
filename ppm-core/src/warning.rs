//! Recoverable anomalies reported next to a best-effort result

use crate::format::header::ParseState;

/// A recoverable deviation from the format
///
/// None of these stop a decode or encode. The result is still produced and
/// the caller decides whether it is usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Warning {
    /// The stream did not start with `P6`; `found` holds the first `len` bytes
    BadMagic { found: [u8; 2], len: u8 },
    /// The byte after the max color value was not whitespace
    MalformedSeparator { found: u8 },
    /// Max color value other than 255; pixels are still read as 8-bit
    UnsupportedMaxColorValue { declared: u32 },
    /// Input ended while the header was still in `state`
    TruncatedHeader { state: ParseState },
    /// Fewer payload bytes were available than the header declared
    PayloadUnderrun { expected: usize, actual: usize },
    /// The pixel buffer handed to the writer had the wrong length
    PayloadWriteMismatch { expected: usize, written: usize },
}

impl Warning {
    /// Bytes of the magic that were actually present
    pub fn found_magic(&self) -> Option<&[u8]> {
        match self {
            Warning::BadMagic { found, len } => Some(&found[..*len as usize]),
            _ => None,
        }
    }
}

impl core::fmt::Display for Warning {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Warning::BadMagic { found, len } => {
                write!(f, "file should start with P6, got ")?;
                match *len {
                    0 => write!(f, "nothing"),
                    _ => {
                        for byte in &found[..*len as usize] {
                            write!(f, "{}", byte.escape_ascii())?;
                        }
                        Ok(())
                    }
                }
            }
            Warning::MalformedSeparator { found } => write!(
                f,
                "expected single whitespace separator, found '{}'",
                found.escape_ascii()
            ),
            Warning::UnsupportedMaxColorValue { declared } => write!(
                f,
                "only a max color value of 255 is supported, got {declared}; reading pixels unscaled"
            ),
            Warning::TruncatedHeader { state } => {
                write!(f, "header ended early while reading {state}")
            }
            Warning::PayloadUnderrun { expected, actual } => {
                write!(f, "read {actual} of {expected} pixel bytes")
            }
            Warning::PayloadWriteMismatch { expected, written } => {
                write!(f, "wrote {written} pixel bytes, expected {expected}")
            }
        }
    }
}
