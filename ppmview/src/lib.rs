//! ppmview - Tolerant Binary PPM Reader and Writer
//!
//! This library reads and writes binary PPM (P6) images from files and
//! streams, and carries the state a viewer needs to display them.
//!
//! ## Architecture
//!
//! - **ppm-core**: format constants, the header state machine, and the
//!   in-memory codec (no I/O)
//! - **ppmview**: files, readers, writers, typed errors, and the viewer
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ppmview::{DecodeOptions, PpmFile, ViewerState};
//!
//! fn example() -> Result<(), ppmview::DecodeError> {
//!     let decoded = PpmFile::new("image.ppm").decode(&DecodeOptions::default())?;
//!     for warning in &decoded.warnings {
//!         eprintln!("warning: {warning}");
//!     }
//!
//!     let viewer = ViewerState::default();
//!     let frame = viewer.compose_frame(&decoded.record);
//!     println!("{}: {} bytes", viewer.window_title(&decoded.record), frame.len());
//!     Ok(())
//! }
//! ```
//!
//! Decoding never fails on a malformed but readable file. Bad magic, a
//! missing separator, an unsupported max color value, or a short payload
//! all produce a best-effort record plus [`Warning`]s, and the caller
//! decides what to do with them.

// Re-export core abstractions and format definitions
pub use ppm_core::{
    // Codec
    decode, encode, DecodeOptions, Decoded, Encoded, ImageRecord,
    // Format definitions
    HeaderField, ParseState, PpmHeader,
    // Error handling
    HeaderError, Warning, WarningSink,
};

pub mod error;
pub mod file_io;
pub mod summary;
pub mod viewer;

pub use error::{DecodeError, EncodeError};
pub use file_io::{decode_reader, encode_writer, EncodeReport, PpmFile};
pub use summary::ImageSummary;
pub use viewer::{Channel, ChannelMask, KeyAction, ViewerConfig, ViewerState};
