//! Byte classification and size validation for PPM headers
//!
//! Pure functions with no I/O dependencies, shared by the header parser
//! and the codec.

pub mod bounds;
pub mod parsing;

pub use bounds::{check_payload_limit, payload_len};
pub use parsing::{accumulate_digit, is_header_whitespace};
