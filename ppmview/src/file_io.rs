//! Reading and writing binary PPM files
//!
//! This module connects byte sources and sinks (paths, readers, writers) to
//! the in-memory codec in `ppm-core`. Warnings from the codec are passed
//! through untouched; deciding whether to surface them is up to the caller.

mod source;

use crate::error::{DecodeError, EncodeError};
use log::debug;
use ppm_core::codec::{check_payload, preamble};
use ppm_core::{decode, DecodeOptions, Decoded, ImageRecord, Warning};
use source::with_file_bytes;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Outcome of a successful encode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeReport {
    /// Header plus pixel bytes handed to the sink
    pub bytes_written: usize,
    pub warnings: Vec<Warning>,
}

/// A `.ppm` file on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PpmFile {
    path: PathBuf,
}

impl PpmFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decode the file, labelling the record with its path
    pub fn decode(&self, options: &DecodeOptions) -> Result<Decoded, DecodeError> {
        let file = File::open(&self.path).map_err(|source| DecodeError::CannotOpen {
            path: self.path.clone(),
            source,
        })?;

        debug!("decoding {}", self.path.display());
        let mut decoded = with_file_bytes(&file, |bytes| decode(bytes, options))??;
        decoded
            .record
            .set_source_name(self.path.display().to_string());

        debug!(
            "decoded {}x{} image with {} warning(s)",
            decoded.record.width(),
            decoded.record.height(),
            decoded.warnings.len()
        );
        Ok(decoded)
    }

    /// Write `record` to the file, replacing any previous contents
    pub fn encode(&self, record: &ImageRecord) -> Result<EncodeReport, EncodeError> {
        let file = File::create(&self.path).map_err(|source| EncodeError::CannotOpen {
            path: self.path.clone(),
            source,
        })?;

        debug!("writing {}", self.path.display());
        let report = encode_writer(record, BufWriter::new(file))?;
        debug!(
            "wrote {} bytes to {}",
            report.bytes_written,
            self.path.display()
        );
        Ok(report)
    }
}

/// Decode everything `reader` yields
pub fn decode_reader<R: Read>(mut reader: R, options: &DecodeOptions) -> Result<Decoded, DecodeError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(decode(&bytes, options)?)
}

/// Encode `record` into `writer` and flush it
///
/// A pixel buffer whose length disagrees with the dimensions is still
/// written in full and reported as [`Warning::PayloadWriteMismatch`].
pub fn encode_writer<W: Write>(record: &ImageRecord, mut writer: W) -> Result<EncodeReport, EncodeError> {
    let mut warnings = Vec::new();
    let payload = check_payload(record, &mut warnings);

    let header = preamble(record).to_string();
    writer.write_all(header.as_bytes())?;
    writer.write_all(record.pixels())?;
    writer.flush()?;

    Ok(EncodeReport {
        bytes_written: header.len() + payload,
        warnings,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Cursor;

    proptest! {
        #[test]
        fn writer_output_reads_back(
            (width, height, pixels) in (0u32..8, 0u32..8).prop_flat_map(|(w, h)| {
                (Just(w), Just(h), proptest::collection::vec(any::<u8>(), (w * h * 3) as usize))
            }),
        ) {
            let record = ImageRecord::new(width, height, pixels).unwrap();

            let mut sink = Vec::new();
            let report = encode_writer(&record, &mut sink).unwrap();
            prop_assert!(report.warnings.is_empty());
            prop_assert_eq!(report.bytes_written, sink.len());

            let decoded = decode_reader(Cursor::new(sink), &DecodeOptions::default()).unwrap();
            prop_assert!(decoded.is_clean());
            prop_assert_eq!(decoded.record, record);
        }
    }
}
