//! In-memory decode and encode
//!
//! `decode` never fails on malformed input short of a numeric overflow or a
//! caller-imposed size limit. Everything else comes back as a [`Warning`]
//! next to the best record that could be recovered.

use alloc::format;
use alloc::vec::Vec;

use crate::format::header::{parse_header, PpmHeader, Preamble};
use crate::validation::check_payload_limit;
use crate::{HeaderError, ImageRecord, Warning, WarningSink};

/// Knobs for [`decode`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    zero_fill_underrun: bool,
    max_payload_bytes: Option<usize>,
}

impl DecodeOptions {
    pub const fn new() -> Self {
        Self {
            zero_fill_underrun: false,
            max_payload_bytes: None,
        }
    }

    /// Pad an under-read payload with zeros up to the declared length
    ///
    /// The record is still flagged partial.
    pub const fn with_zero_fill_underrun(mut self, zero_fill: bool) -> Self {
        self.zero_fill_underrun = zero_fill;
        self
    }

    /// Refuse headers that declare more payload than `limit` bytes
    pub const fn with_max_payload_bytes(mut self, limit: Option<usize>) -> Self {
        self.max_payload_bytes = limit;
        self
    }

    pub const fn zero_fill_underrun(&self) -> bool {
        self.zero_fill_underrun
    }

    pub const fn max_payload_bytes(&self) -> Option<usize> {
        self.max_payload_bytes
    }
}

/// Result of a successful decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub record: ImageRecord,
    /// Header as parsed, including the declared max color value
    pub header: PpmHeader,
    pub warnings: Vec<Warning>,
}

impl Decoded {
    /// True when nothing at all was out of the ordinary
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Result of an encode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub bytes: Vec<u8>,
    pub warnings: Vec<Warning>,
}

/// Decode a complete binary PPM held in memory
pub fn decode(bytes: &[u8], options: &DecodeOptions) -> Result<Decoded, HeaderError> {
    let mut warnings = Vec::new();
    let header = parse_header(bytes, &mut warnings)?;

    let expected = header.payload_len()?;
    check_payload_limit(expected, options.max_payload_bytes)?;

    let available = &bytes[header.payload_offset..];
    let take = expected.min(available.len());
    let mut pixels = available[..take].to_vec();

    let partial = take < expected;
    if partial {
        warnings.push(Warning::PayloadUnderrun {
            expected,
            actual: take,
        });
        if options.zero_fill_underrun {
            pixels.resize(expected, 0);
        }
    }

    Ok(Decoded {
        record: ImageRecord::decoded(header.width, header.height, pixels, partial),
        header,
        warnings,
    })
}

/// Check the pixel buffer against the dimensions before writing it
///
/// Returns the number of pixel bytes that will be written.
pub fn check_payload<S: WarningSink + ?Sized>(record: &ImageRecord, sink: &mut S) -> usize {
    let expected = record.expected_len();
    let written = record.pixels().len();
    if written != expected {
        sink.warn(Warning::PayloadWriteMismatch { expected, written });
    }
    written
}

/// Header bytes the writer emits for `record`
pub fn preamble(record: &ImageRecord) -> Preamble {
    Preamble {
        width: record.width(),
        height: record.height(),
    }
}

/// Encode a record as binary PPM
///
/// The header is fixed: `P6`, a creator comment, the dimensions, and 255.
/// A partial record is written as-is and reported with
/// [`Warning::PayloadWriteMismatch`].
pub fn encode(record: &ImageRecord) -> Encoded {
    let mut warnings = Vec::new();
    let payload = check_payload(record, &mut warnings);

    let header = format!("{}", preamble(record));
    let mut bytes = Vec::with_capacity(header.len() + payload);
    bytes.extend_from_slice(header.as_bytes());
    bytes.extend_from_slice(record.pixels());

    Encoded { bytes, warnings }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use alloc::format;
    use alloc::string::String;
    use proptest::prelude::*;

    fn arb_record() -> impl Strategy<Value = ImageRecord> {
        (0u32..12, 0u32..12).prop_flat_map(|(width, height)| {
            let len = (width * height * 3) as usize;
            proptest::collection::vec(any::<u8>(), len).prop_map(move |pixels| {
                ImageRecord::new(width, height, pixels).expect("length matches dimensions")
            })
        })
    }

    fn arb_gap() -> impl Strategy<Value = String> {
        proptest::collection::vec(prop_oneof![Just(' '), Just('\t'), Just('\n')], 1..5)
            .prop_map(|chars| chars.into_iter().collect())
    }

    proptest! {
        #[test]
        fn decode_inverts_encode(record in arb_record()) {
            let decoded = decode(&encode(&record).bytes, &DecodeOptions::default()).unwrap();
            prop_assert!(decoded.is_clean());
            prop_assert_eq!(decoded.record, record);
        }

        #[test]
        fn reencode_is_stable(record in arb_record()) {
            let first = encode(&record).bytes;
            let decoded = decode(&first, &DecodeOptions::default()).unwrap();
            prop_assert_eq!(encode(&decoded.record).bytes, first);
        }

        #[test]
        fn whitespace_runs_are_insignificant(
            width in 0u32..5000,
            height in 0u32..5000,
            gaps in proptest::collection::vec(arb_gap(), 3),
        ) {
            let text = format!("P6{}{width}{}{height}{}255\n", gaps[0], gaps[1], gaps[2]);
            let mut warnings = Vec::new();
            let header = crate::format::header::parse_header(text.as_bytes(), &mut warnings).unwrap();

            prop_assert!(warnings.is_empty());
            prop_assert_eq!((header.width, header.height, header.max_color_value), (width, height, 255));
            prop_assert_eq!(header.payload_offset, text.len());
        }

        #[test]
        fn comment_lines_are_insignificant(
            slot in 0usize..3,
            comment in "[ -~]{0,20}",
            pixels in proptest::collection::vec(any::<u8>(), 6),
        ) {
            let mut fields = [String::from("P6\n"), String::from("2 "), String::from("1\n")];
            fields[slot].push_str(&format!("#{comment}\n"));
            let mut bytes: Vec<u8> = fields.concat().into_bytes();
            bytes.extend_from_slice(b"255\n");
            bytes.extend_from_slice(&pixels);

            let plain: Vec<u8> = b"P6\n2 1\n255\n".iter().chain(&pixels).copied().collect();

            let with_comment = decode(&bytes, &DecodeOptions::default()).unwrap();
            let without = decode(&plain, &DecodeOptions::default()).unwrap();
            prop_assert_eq!(with_comment.record, without.record);
        }

        #[test]
        fn underrun_never_reads_past_input(cut in 0usize..12) {
            let full = encode(&ImageRecord::new(2, 2, alloc::vec![5; 12]).unwrap()).bytes;
            let bytes = &full[..full.len() - cut];
            let decoded = decode(bytes, &DecodeOptions::default()).unwrap();

            prop_assert_eq!(decoded.record.pixels().len(), 12 - cut);
            prop_assert_eq!(decoded.record.is_partial(), cut > 0);
        }
    }
}
