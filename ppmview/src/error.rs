//! Error types for file-backed decode and encode

use ppm_core::HeaderError;
use std::path::PathBuf;

/// Fatal decode failures
///
/// Malformed-but-readable input is not an error; it comes back as
/// [`ppm_core::Warning`]s on the decoded result.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("cannot open {}: {source}", path.display())]
    CannotOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("read failed: {0}")]
    Read(#[from] std::io::Error),

    #[error("unusable header: {0}")]
    Header(#[from] HeaderError),
}

/// Fatal encode failures
///
/// A pixel buffer of the wrong length is written anyway and reported as a
/// warning on the [`crate::EncodeReport`].
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("cannot open {} for writing: {source}", path.display())]
    CannotOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("write failed: {0}")]
    Write(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use ppm_core::HeaderField;

    #[test]
    fn test_cannot_open_names_path() {
        let err = DecodeError::CannotOpen {
            path: PathBuf::from("missing.ppm"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "cannot open missing.ppm: not found");
    }

    #[test]
    fn test_header_error_converts() {
        let err: DecodeError = HeaderError::NumericOverflow {
            field: HeaderField::Width,
        }
        .into();
        assert!(matches!(err, DecodeError::Header(_)));
        assert_eq!(
            err.to_string(),
            "unusable header: width value overflows a 32-bit unsigned integer"
        );
    }
}
