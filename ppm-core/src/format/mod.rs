//! Binary PPM wire format definitions
//!
//! This module contains the format constants and the header state machine.
//! No I/O happens here; the parser walks an in-memory byte slice.

pub mod constants;
pub mod header;

pub use header::{HeaderField, HeaderParser, ParseState, PpmHeader};
