//! Construction errors.
//!
//! The hot path (`update` / `result`) cannot fail: all arithmetic is
//! fixed-width and wrapping. Everything here is reported at construction or
//! parse time and indicates a programming or configuration error.

use core::fmt;

/// Error building a CRC engine or resolving a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CrcError {
  /// A caller-supplied lookup table does not have exactly 256 entries.
  TableLength {
    /// Required number of entries (always 256).
    expected: usize,
    /// Number of entries supplied.
    actual: usize,
  },
  /// No CRC definition was supplied.
  MissingParams,
  /// A preset name did not match any catalogue entry or alias.
  UnknownPreset,
}

impl fmt::Display for CrcError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::TableLength { expected, actual } => {
        write!(f, "lookup table must have exactly {expected} entries, got {actual}")
      }
      Self::MissingParams => f.write_str("CRC definition is required but none was supplied"),
      Self::UnknownPreset => f.write_str("unknown CRC preset name"),
    }
  }
}

impl core::error::Error for CrcError {}
