//! Trait seams between the parser and its callers

use crate::Warning;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Receiver for recoverable anomalies found while decoding or encoding
///
/// The parser never prints or logs. It hands every warning to a sink and
/// lets the caller decide how to surface it. With `alloc`, a plain
/// `Vec<Warning>` collects them in order.
pub trait WarningSink {
    /// Record one warning
    fn warn(&mut self, warning: Warning);
}

#[cfg(feature = "alloc")]
impl WarningSink for Vec<Warning> {
    fn warn(&mut self, warning: Warning) {
        self.push(warning);
    }
}

impl<S: WarningSink + ?Sized> WarningSink for &mut S {
    fn warn(&mut self, warning: Warning) {
        (**self).warn(warning);
    }
}

/// Sink that only counts warnings, for callers without an allocator
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WarningCount(pub usize);

impl WarningSink for WarningCount {
    fn warn(&mut self, _warning: Warning) {
        self.0 += 1;
    }
}
