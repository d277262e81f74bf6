//! Byte-level parsing helpers for PPM header tokens

/// Whitespace as the header grammar understands it
///
/// This is the C `isspace` set: space, tab, newline, vertical tab, form feed
/// and carriage return.
pub const fn is_header_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Fold one ASCII digit into a running decimal value
///
/// Returns `None` when `byte` is not a digit or the result would not fit in
/// a `u32`. Callers tell the two apart with [`u8::is_ascii_digit`].
pub const fn accumulate_digit(value: u32, byte: u8) -> Option<u32> {
    if !byte.is_ascii_digit() {
        return None;
    }

    let digit = (byte - b'0') as u32;

    // Check for overflow
    if value > (u32::MAX - digit) / 10 {
        return None;
    }

    Some(value * 10 + digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_header_whitespace() {
        for byte in [b' ', b'\t', b'\n', b'\r', 0x0B, 0x0C] {
            assert!(is_header_whitespace(byte), "{byte:#04x}");
        }

        assert!(!is_header_whitespace(b'#'));
        assert!(!is_header_whitespace(b'0'));
        assert!(!is_header_whitespace(0));
        assert!(!is_header_whitespace(0xA0));
    }

    #[test]
    fn test_accumulate_digit() {
        assert_eq!(accumulate_digit(0, b'7'), Some(7));
        assert_eq!(accumulate_digit(12, b'3'), Some(123));
        assert_eq!(accumulate_digit(0, b'0'), Some(0));

        // Non-digits
        assert_eq!(accumulate_digit(5, b' '), None);
        assert_eq!(accumulate_digit(5, b'a'), None);
        assert_eq!(accumulate_digit(5, b'-'), None);
    }

    #[test]
    fn test_accumulate_digit_overflow() {
        assert_eq!(accumulate_digit(429_496_729, b'5'), Some(u32::MAX));
        assert_eq!(accumulate_digit(429_496_729, b'6'), None);
        assert_eq!(accumulate_digit(u32::MAX, b'0'), None);
    }
}
