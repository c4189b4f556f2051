//! Byte-wise CRC lookup tables.
//!
//! A table holds the remainder contributed by each of the 256 possible
//! leading bytes. Two families exist:
//!
//! | Family | Built when | Indexed by | Entries |
//! |--------|------------|------------|---------|
//! | normal | `reflect_in == false` | top byte of register ^ input | MSB-first remainders |
//! | reflected | `reflect_in == true` | low byte of register ^ input | bit-reversed remainders |
//!
//! The reflection is folded into the table at generation time, so the hot
//! loop never reverses bits. A table depends only on `(polynomial,
//! reflect_in)`; `initial` and `xor_out` never affect its contents.

// SAFETY: All array indexing in this module is a `u8` index into a 256-entry array.
#![allow(clippy::indexing_slicing)]

use alloc::boxed::Box;
use core::fmt;

use crate::{CrcError, CrcParams, Width, reflect::reflect8};

/// Number of entries in every lookup table.
pub const TABLE_LEN: usize = 256;

/// An immutable 256-entry CRC lookup table.
#[derive(Clone, PartialEq, Eq)]
pub struct CrcTable<W> {
  entries: Box<[W; TABLE_LEN]>,
}

impl<W: Width> CrcTable<W> {
  /// Build a table from caller-supplied entries.
  ///
  /// # Errors
  ///
  /// Returns [`CrcError::TableLength`] unless `entries` has exactly 256 elements.
  pub fn from_slice(entries: &[W]) -> Result<Self, CrcError> {
    let entries: [W; TABLE_LEN] =
      entries.try_into().map_err(|_| CrcError::TableLength { expected: TABLE_LEN, actual: entries.len() })?;
    Ok(Self { entries: Box::new(entries) })
  }

  /// Entry for `index`.
  #[inline(always)]
  #[must_use]
  pub fn get(&self, index: u8) -> W {
    self.entries[index as usize]
  }

  /// All 256 entries.
  #[inline]
  #[must_use]
  pub fn as_slice(&self) -> &[W] {
    &self.entries[..]
  }
}

impl<W: Width> AsRef<[W]> for CrcTable<W> {
  fn as_ref(&self) -> &[W] {
    self.as_slice()
  }
}

impl<W: Width> fmt::Debug for CrcTable<W> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CrcTable")
      .field("bits", &W::BITS)
      .field("entry_1", &self.entries[1])
      .field("entry_255", &self.entries[TABLE_LEN - 1])
      .finish_non_exhaustive()
  }
}

/// Generate the lookup table for `params`.
///
/// Each entry is computed by the bit-by-bit polynomial division of its
/// dividend byte, MSB first. For the reflected family the entry is stored
/// bit-reversed at the bit-reversed index.
#[must_use]
pub fn generate<W: Width>(params: &CrcParams<W>) -> CrcTable<W> {
  let mut entries = Box::new([W::ZERO; TABLE_LEN]);

  // Wrapping counter: visits 0..=255 and stops once it wraps back to 0.
  let mut dividend: u8 = 0;
  loop {
    let mut remainder = W::ZERO;
    for bit in (0..8).rev() {
      if (dividend >> bit) & 1 != 0 {
        remainder ^= W::TOP_BIT;
      }
      remainder =
        if remainder & W::TOP_BIT != W::ZERO { remainder.shl1() ^ params.polynomial } else { remainder.shl1() };
    }

    if params.reflect_in {
      entries[reflect8(dividend) as usize] = remainder.reflect();
    } else {
      entries[dividend as usize] = remainder;
    }

    dividend = dividend.wrapping_add(1);
    if dividend == 0 {
      break;
    }
  }

  log::trace!(
    "generated crc{} table: poly={:?} reflected={}",
    W::BITS,
    params.polynomial,
    params.reflect_in
  );

  CrcTable { entries }
}
