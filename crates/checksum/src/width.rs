//! Register width abstraction.
//!
//! The engine, the table generator and the cache are written once against
//! [`Width`]; each supported unsigned integer type supplies the handful of
//! width-specific operations the algorithm needs.
//!
//! | Type | Bits | Output bytes |
//! |------|------|--------------|
//! | `u8` | 8 | 1 |
//! | `u16` | 16 | 2 |
//! | `u32` | 32 | 4 |
//! | `u64` | 64 | 8 |

use core::{
  fmt::Debug,
  hash::Hash,
  ops::{BitAnd, BitXor, BitXorAssign},
};

#[cfg(feature = "std")]
use crate::cache::TableCache;
use crate::reflect::{reflect8, reflect16, reflect32, reflect64};

mod private {
  pub trait Sealed {}
}

/// An unsigned integer usable as a CRC register.
///
/// All operations are fixed-width and wrap: bits shifted past the top of the
/// register are discarded, which is exactly modular polynomial arithmetic.
///
/// This trait is sealed; it is implemented for `u8`, `u16`, `u32` and `u64`.
pub trait Width:
  private::Sealed
  + Copy
  + Eq
  + Ord
  + Hash
  + Debug
  + Default
  + Send
  + Sync
  + 'static
  + BitAnd<Output = Self>
  + BitXor<Output = Self>
  + BitXorAssign
{
  /// Register width in bits.
  const BITS: u32;
  /// Register width in bytes (size of the serialized result).
  const BYTES: usize;
  /// All bits clear.
  const ZERO: Self;
  /// Only the most significant bit of the register set.
  const TOP_BIT: Self;

  /// Little-endian serialized form, `[u8; Self::BYTES]`.
  type Bytes: Copy + AsRef<[u8]> + Debug + Eq;

  /// Least significant byte.
  fn low_byte(self) -> u8;

  /// Most significant byte.
  fn high_byte(self) -> u8;

  /// Shift left by one bit, discarding the top bit.
  fn shl1(self) -> Self;

  /// Shift left by one byte, discarding the top byte (zero for 8-bit registers).
  fn shl8(self) -> Self;

  /// Shift right by one byte (zero for 8-bit registers).
  fn shr8(self) -> Self;

  /// Reverse the bit order across the full width.
  fn reflect(self) -> Self;

  /// Serialize little-endian.
  fn to_le_bytes(self) -> Self::Bytes;

  /// Widen to `u64` (used by width-erased callers such as the preset catalogue).
  fn to_u64(self) -> u64;

  /// The process-wide default table cache for this width.
  #[cfg(feature = "std")]
  fn global_cache() -> &'static TableCache<Self>;
}

impl_width!(u8, reflect8);
impl_width!(u16, reflect16);
impl_width!(u32, reflect32);
impl_width!(u64, reflect64);
