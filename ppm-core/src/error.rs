//! Fatal error types for PPM header and record handling

use crate::format::header::HeaderField;

/// Errors that abort a decode or record construction
///
/// Everything else the parser runs into is a [`crate::Warning`] and travels
/// alongside a best-effort result instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum HeaderError {
    /// A decimal header field does not fit in a `u32`
    NumericOverflow { field: HeaderField },
    /// `width * height * 3` does not fit in `usize`
    DimensionOverflow,
    /// The declared payload is larger than the caller allows
    PayloadLimitExceeded { declared: usize, limit: usize },
    /// Pixel buffer length disagrees with the declared dimensions
    PixelLengthMismatch { expected: usize, actual: usize },
}

impl core::fmt::Display for HeaderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HeaderError::NumericOverflow { field } => {
                write!(f, "{field} value overflows a 32-bit unsigned integer")
            }
            HeaderError::DimensionOverflow => {
                write!(f, "Image dimensions are too large to address")
            }
            HeaderError::PayloadLimitExceeded { declared, limit } => {
                write!(f, "Declared payload of {declared} bytes exceeds limit of {limit} bytes")
            }
            HeaderError::PixelLengthMismatch { expected, actual } => {
                write!(f, "Expected {expected} pixel bytes, got {actual}")
            }
        }
    }
}

impl core::error::Error for HeaderError {}

/// Result type for header and record operations
pub type Result<T> = core::result::Result<T, HeaderError>;

#[cfg(test)]
mod tests {
    use super::*;

    use std::string::ToString;

    #[test]
    fn test_display_names_the_field() {
        let err = HeaderError::NumericOverflow {
            field: HeaderField::Height,
        };
        assert_eq!(
            err.to_string(),
            "height value overflows a 32-bit unsigned integer"
        );
    }

    #[test]
    fn test_display_limit() {
        let err = HeaderError::PayloadLimitExceeded {
            declared: 300,
            limit: 12,
        };
        assert_eq!(
            err.to_string(),
            "Declared payload of 300 bytes exceeds limit of 12 bytes"
        );
    }
}
