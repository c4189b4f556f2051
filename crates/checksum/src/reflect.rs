//! Width-scoped bit reflection.
//!
//! "Reflected" means bit-reversed: bit 0 becomes the top bit of the width and
//! vice versa. Every reflection in this crate (table generation, register
//! initialization, result transformation) goes through these four functions,
//! via [`Width::reflect`](crate::Width::reflect).

/// Reverse the 8 bits of a byte.
#[inline]
#[must_use]
pub const fn reflect8(value: u8) -> u8 {
  value.reverse_bits()
}

/// Reverse the 16 bits of `value`.
#[inline]
#[must_use]
pub const fn reflect16(value: u16) -> u16 {
  value.reverse_bits()
}

/// Reverse the 32 bits of `value`.
#[inline]
#[must_use]
pub const fn reflect32(value: u32) -> u32 {
  value.reverse_bits()
}

/// Reverse the 64 bits of `value`.
#[inline]
#[must_use]
pub const fn reflect64(value: u64) -> u64 {
  value.reverse_bits()
}
