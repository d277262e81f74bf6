#![no_std]

//! PPM Core - Binary PPM (P6) Format Definitions
//!
//! This crate provides the format constants, the tolerant header state
//! machine, and the in-memory codec for binary RGB pixmaps. It performs no
//! I/O; the `ppmview` crate wires it to files and streams.
//!
//! Malformed input is handled in two tiers. A numeric field that overflows
//! or a payload that cannot be addressed is a fatal [`HeaderError`].
//! Everything else (bad magic, a missing separator, a short payload) is a
//! [`Warning`] returned next to a best-effort result.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(test)]
extern crate std;

#[cfg(feature = "alloc")]
pub mod codec;
pub mod error;
pub mod format;
#[cfg(feature = "alloc")]
pub mod record;
pub mod traits;
pub mod validation;
pub mod warning;

#[cfg(feature = "alloc")]
pub use codec::{decode, encode, DecodeOptions, Decoded, Encoded};
pub use error::*;
pub use format::*;
#[cfg(feature = "alloc")]
pub use record::ImageRecord;
pub use traits::*;
pub use warning::Warning;
