//! PPM header state machine
//!
//! The header is a short run of text (magic, width, height, max color
//! value) separated by whitespace and interleaved with `#` comments. It is
//! walked byte by byte through a forward-only sequence of [`ParseState`]s.
//!
//! When a byte ends the current state (the first non-digit after a number,
//! the first non-whitespace after a gap) the cursor is left where it is and
//! the same byte is examined again under the next state. Digits and their
//! terminating whitespace share no separator token, so dropping that byte
//! would lose the first character of the next field.

use crate::format::constants::{COMMENT_START, CREATOR_COMMENT, MAGIC, SUPPORTED_MAX_COLOR_VALUE};
use crate::validation::{accumulate_digit, is_header_whitespace, payload_len};
use crate::{HeaderError, Warning, WarningSink};

/// Numeric header fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HeaderField {
    Width,
    Height,
    MaxColorValue,
}

impl core::fmt::Display for HeaderField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HeaderField::Width => write!(f, "width"),
            HeaderField::Height => write!(f, "height"),
            HeaderField::MaxColorValue => write!(f, "max color value"),
        }
    }
}

/// Header parser states, in the only order they can occur
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ParseState {
    MagicNumber,
    Whitespace1,
    Width,
    Whitespace2,
    Height,
    Whitespace3,
    MaxColorValue,
    SingleWhitespaceChar,
    Done,
}

impl ParseState {
    /// The state that follows this one; `Done` is terminal
    pub const fn next(self) -> Self {
        match self {
            ParseState::MagicNumber => ParseState::Whitespace1,
            ParseState::Whitespace1 => ParseState::Width,
            ParseState::Width => ParseState::Whitespace2,
            ParseState::Whitespace2 => ParseState::Height,
            ParseState::Height => ParseState::Whitespace3,
            ParseState::Whitespace3 => ParseState::MaxColorValue,
            ParseState::MaxColorValue => ParseState::SingleWhitespaceChar,
            ParseState::SingleWhitespaceChar | ParseState::Done => ParseState::Done,
        }
    }

    /// The numeric field accumulated in this state, if any
    pub const fn field(self) -> Option<HeaderField> {
        match self {
            ParseState::Width => Some(HeaderField::Width),
            ParseState::Height => Some(HeaderField::Height),
            ParseState::MaxColorValue => Some(HeaderField::MaxColorValue),
            _ => None,
        }
    }

    const fn skips_whitespace(self) -> bool {
        matches!(
            self,
            ParseState::Whitespace1 | ParseState::Whitespace2 | ParseState::Whitespace3
        )
    }
}

impl core::fmt::Display for ParseState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ParseState::MagicNumber => "magic number",
            ParseState::Whitespace1 | ParseState::Whitespace2 | ParseState::Whitespace3 => {
                "whitespace"
            }
            ParseState::Width => "width",
            ParseState::Height => "height",
            ParseState::MaxColorValue => "max color value",
            ParseState::SingleWhitespaceChar => "separator",
            ParseState::Done => "end of header",
        };
        write!(f, "{name}")
    }
}

/// Parsed header fields plus the offset where pixel data begins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PpmHeader {
    /// First two bytes of the stream, zero-padded if the stream was shorter
    pub magic: [u8; 2],
    /// Pixel columns
    pub width: u32,
    /// Pixel rows
    pub height: u32,
    /// Max color value as declared, before normalization
    pub max_color_value: u32,
    /// Byte offset of the first payload byte
    pub payload_offset: usize,
}

impl PpmHeader {
    /// Whether the stream carried the `P6` magic
    pub fn has_valid_magic(&self) -> bool {
        self.magic == MAGIC
    }

    /// Whether pixel values can be read at face value
    pub fn has_supported_scale(&self) -> bool {
        self.max_color_value == SUPPORTED_MAX_COLOR_VALUE
    }

    /// Declared payload length in bytes
    pub fn payload_len(&self) -> Result<usize, HeaderError> {
        payload_len(self.width, self.height)
    }
}

/// Byte-at-a-time header parser with an explicit cursor
pub struct HeaderParser<'a> {
    bytes: &'a [u8],
    cursor: usize,
    state: ParseState,
    /// Whether the current numeric field has read a digit
    in_digits: bool,
    header: PpmHeader,
}

impl<'a> HeaderParser<'a> {
    /// Start parsing at the beginning of `bytes`
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            cursor: 0,
            state: ParseState::MagicNumber,
            in_digits: false,
            header: PpmHeader {
                magic: [0; 2],
                width: 0,
                height: 0,
                max_color_value: 0,
                payload_offset: 0,
            },
        }
    }

    /// Current state
    pub fn state(&self) -> ParseState {
        self.state
    }

    /// Offset of the next unexamined byte
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Run the state machine to completion
    ///
    /// Recoverable problems go to `sink`; only a numeric field that overflows
    /// `u32` is fatal. If the input ends early the fields parsed so far are
    /// returned and the payload offset is the end of the input.
    pub fn parse<S: WarningSink + ?Sized>(mut self, sink: &mut S) -> Result<PpmHeader, HeaderError> {
        while self.state != ParseState::Done {
            let Some(&byte) = self.bytes.get(self.cursor) else {
                if self.state == ParseState::MagicNumber {
                    sink.warn(Warning::BadMagic {
                        found: [0; 2],
                        len: 0,
                    });
                }
                sink.warn(Warning::TruncatedHeader { state: self.state });
                break;
            };

            if byte == COMMENT_START {
                self.skip_comment();
                continue;
            }

            self.step(byte, sink)?;
        }

        if self.state > ParseState::MaxColorValue {
            self.check_scale(sink);
        }

        self.header.payload_offset = self.cursor;
        Ok(self.header)
    }

    fn step<S: WarningSink + ?Sized>(&mut self, byte: u8, sink: &mut S) -> Result<(), HeaderError> {
        match self.state {
            ParseState::MagicNumber => {
                let end = self.bytes.len().min(self.cursor + MAGIC.len());
                let found = &self.bytes[self.cursor..end];
                self.header.magic[..found.len()].copy_from_slice(found);

                if found != MAGIC {
                    sink.warn(Warning::BadMagic {
                        found: self.header.magic,
                        len: found.len() as u8,
                    });
                }

                self.cursor = end;
                self.advance();
            }
            state if state.skips_whitespace() => {
                if is_header_whitespace(byte) {
                    self.cursor += 1;
                } else {
                    // Rewind: leave the cursor on this byte for the next state
                    self.advance();
                }
            }
            ParseState::SingleWhitespaceChar => {
                if !is_header_whitespace(byte) {
                    sink.warn(Warning::MalformedSeparator { found: byte });
                }
                self.cursor += 1;
                self.advance();
            }
            ParseState::Done => {}
            state => {
                if let Some(field) = state.field() {
                    if byte.is_ascii_digit() {
                        let slot = self.field_mut(field);
                        *slot = accumulate_digit(*slot, byte)
                            .ok_or(HeaderError::NumericOverflow { field })?;
                        self.cursor += 1;
                        self.in_digits = true;
                    } else {
                        self.advance();
                    }
                }
            }
        }

        Ok(())
    }

    /// Discard through the end of the line
    ///
    /// The state is left untouched, so a comment inside width or height is
    /// transparent. A comment right after the max color digits ends the
    /// header, with its newline as the single separator byte.
    fn skip_comment(&mut self) {
        let rest = &self.bytes[self.cursor..];
        match rest.iter().position(|&b| b == b'\n') {
            Some(newline) => {
                self.cursor += newline + 1;
                if self.state == ParseState::MaxColorValue && self.in_digits {
                    self.advance();
                    self.advance();
                }
            }
            None => self.cursor = self.bytes.len(),
        }
    }

    fn check_scale<S: WarningSink + ?Sized>(&self, sink: &mut S) {
        if !self.header.has_supported_scale() {
            sink.warn(Warning::UnsupportedMaxColorValue {
                declared: self.header.max_color_value,
            });
        }
    }

    fn advance(&mut self) {
        self.in_digits = false;
        self.state = self.state.next();
    }

    fn field_mut(&mut self, field: HeaderField) -> &mut u32 {
        match field {
            HeaderField::Width => &mut self.header.width,
            HeaderField::Height => &mut self.header.height,
            HeaderField::MaxColorValue => &mut self.header.max_color_value,
        }
    }
}

/// Parse a header from the start of `bytes`
pub fn parse_header<S: WarningSink + ?Sized>(
    bytes: &[u8],
    sink: &mut S,
) -> Result<PpmHeader, HeaderError> {
    HeaderParser::new(bytes).parse(sink)
}

/// The fixed header the writer emits
///
/// Renders as `P6`, a creator comment, the dimensions, and a max color value
/// of 255, each on its own line. Usable with `write!` in `no_std` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preamble {
    pub width: u32,
    pub height: u32,
}

impl core::fmt::Display for Preamble {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "P6\n{CREATOR_COMMENT}\n{} {}\n{SUPPORTED_MAX_COLOR_VALUE}\n",
            self.width, self.height
        )
    }
}
