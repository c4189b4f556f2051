//! Non-cryptographic checksum capability.
//!
//! A checksum is driven through three operations: [`reset`](Checksum::reset),
//! [`update`](Checksum::update) and [`finalize_bytes`](Checksum::finalize_bytes).
//! Anything that buffers a byte stream (file readers, network framers, the
//! generic hashing harnesses built on top of this crate) only needs these.

use core::fmt::Debug;

/// Incremental, non-cryptographic checksum.
///
/// # Usage
///
/// ```rust,ignore
/// use checksum::{Crc, CrcParams};
/// use traits::Checksum;
///
/// let mut crc = Crc::new(CrcParams::<u32>::CRC32_IEEE);
/// crc.update(b"1234");
/// crc.update(b"56789");
/// assert_eq!(crc.finalize(), 0xCBF4_3926);
/// assert_eq!(crc.finalize_bytes(), [0x26, 0x39, 0xF4, 0xCB]);
/// ```
///
/// # Implementor Requirements
///
/// - `update` must be chunking-invariant: feeding `A` then `B` equals feeding `A || B`
/// - `finalize()` and `finalize_bytes()` must not mutate state and may be called repeatedly
/// - `reset()` must restore the state a fresh instance starts with
pub trait Checksum {
  /// Output size in bytes.
  ///
  /// - CRC-16: 2
  /// - CRC-32: 4
  /// - CRC-64: 8
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  type Output: Copy + Eq + Debug;

  /// Fixed-width serialized output (`[u8; OUTPUT_SIZE]`).
  type Bytes: Copy + AsRef<[u8]> + Debug;

  /// Reset to the initial state, discarding all data seen so far.
  fn reset(&mut self);

  /// Feed more data.
  fn update(&mut self, data: &[u8]);

  /// Feed multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Update with `std::io::IoSlice` buffers.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Current checksum over everything fed since the last reset.
  ///
  /// Does not consume or modify the state; further updates remain possible.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// [`finalize`](Self::finalize) serialized little-endian.
  #[must_use]
  fn finalize_bytes(&self) -> Self::Bytes;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Default)]
  struct Sum(u16);

  impl Checksum for Sum {
    const OUTPUT_SIZE: usize = 2;
    type Output = u16;
    type Bytes = [u8; 2];

    fn reset(&mut self) {
      self.0 = 0;
    }

    fn update(&mut self, data: &[u8]) {
      self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u16::from(b)));
    }

    fn finalize(&self) -> u16 {
      self.0
    }

    fn finalize_bytes(&self) -> [u8; 2] {
      self.0.to_le_bytes()
    }
  }

  #[test]
  fn update_vectored_matches_sequential_updates() {
    let mut a = Sum::default();
    let bufs: [&[u8]; 3] = [b"ab", b"", b"cd"];
    a.update_vectored(&bufs);

    let mut b = Sum::default();
    b.update(b"abcd");

    assert_eq!(a.finalize(), b.finalize());
  }

  #[test]
  fn finalize_is_repeatable() {
    let mut s = Sum::default();
    s.update(&[0xFF, 0x02]);
    assert_eq!(s.finalize(), 0x0101);
    assert_eq!(s.finalize(), 0x0101);
    assert_eq!(s.finalize_bytes(), [0x01, 0x01]);
  }

  #[cfg(feature = "std")]
  #[test]
  fn update_io_slices_matches_update() {
    let mut a = Sum::default();
    a.update_io_slices(&[std::io::IoSlice::new(b"xy"), std::io::IoSlice::new(b"z")]);

    let mut b = Sum::default();
    b.update(b"xyz");

    assert_eq!(a.finalize(), b.finalize());
  }
}
