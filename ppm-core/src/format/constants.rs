//! Format constants for the binary PPM variant

/// Magic bytes identifying binary (raw) RGB pixmaps
pub const MAGIC: [u8; 2] = *b"P6";

/// The only channel scale whose pixels are taken at face value
pub const SUPPORTED_MAX_COLOR_VALUE: u32 = 255;

/// Bytes per pixel: red, green, blue
pub const CHANNELS: usize = 3;

/// Comment line emitted by the writer, including the leading `#`
pub const CREATOR_COMMENT: &str = "# Created with ppmview";

/// Header comment introducer
pub const COMMENT_START: u8 = b'#';
