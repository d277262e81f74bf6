//! Payload size validation with overflow protection

use crate::format::constants::CHANNELS;
use crate::HeaderError;

/// Number of payload bytes a `width` x `height` RGB image occupies
///
/// Fails with [`HeaderError::DimensionOverflow`] instead of wrapping when the
/// product cannot be represented on this platform.
pub const fn payload_len(width: u32, height: u32) -> Result<usize, HeaderError> {
    let pixels = match (width as u64).checked_mul(height as u64) {
        Some(pixels) => pixels,
        None => return Err(HeaderError::DimensionOverflow),
    };
    let bytes = match pixels.checked_mul(CHANNELS as u64) {
        Some(bytes) => bytes,
        None => return Err(HeaderError::DimensionOverflow),
    };

    if bytes > usize::MAX as u64 {
        return Err(HeaderError::DimensionOverflow);
    }

    Ok(bytes as usize)
}

/// Reject declared payloads larger than an optional caller limit
pub const fn check_payload_limit(declared: usize, limit: Option<usize>) -> Result<(), HeaderError> {
    match limit {
        Some(limit) if declared > limit => {
            Err(HeaderError::PayloadLimitExceeded { declared, limit })
        }
        _ => Ok(()),
    }
}
