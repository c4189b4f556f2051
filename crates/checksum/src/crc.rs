//! The table-driven CRC engine.
//!
//! [`Crc`] holds a definition, a shared lookup table and the running
//! remainder. It is the only stateful type in the crate.
//!
//! # State machine
//!
//! ```text
//!            new / with_* / from_*                 update(bytes)
//!   ──────────────────────────────► Initialized ──────────────────► Accumulating
//!                                        ▲                               │
//!                                        └──────── initialize() ─────────┘
//! ```
//!
//! There is no terminal state: [`Crc::result`] is pure, and
//! [`Crc::initialize`] starts an independent computation on the same table.
//!
//! # Update step
//!
//! For every input byte `b`:
//!
//! | `reflect_in` | index | shift |
//! |--------------|-------|-------|
//! | `false` | `high_byte(r) ^ b` | `r << 8` |
//! | `true` | `low_byte(r) ^ b` | `r >> 8` |
//!
//! then `r ^= table[index]`. The index must come from the pre-shift remainder.

use alloc::sync::Arc;

#[cfg(feature = "std")]
use crate::TableCache;
use crate::{CrcError, CrcParams, CrcTable, Width};

/// Incremental CRC computation for one definition.
///
/// Cloning is cheap: clones share the lookup table and continue independently
/// from the same remainder.
///
/// # Example
///
/// ```
/// use checksum::{Crc, CrcParams};
///
/// let mut crc = Crc::new(CrcParams::<u16>::CRC16_XMODEM);
/// crc.update(b"1234");
/// crc.update(b"56789");
/// assert_eq!(crc.result(), 0x31C3);
/// assert_eq!(crc.finalize_bytes(), [0xC3, 0x31]);
/// ```
#[derive(Clone, Debug)]
pub struct Crc<W: Width> {
  params: CrcParams<W>,
  table: Arc<CrcTable<W>>,
  remainder: W,
}

impl<W: Width> Crc<W> {
  /// Create an engine whose table comes from the process-wide cache.
  #[cfg(feature = "std")]
  #[must_use]
  pub fn new(params: CrcParams<W>) -> Self {
    Self::with_cache(params, TableCache::global())
  }

  /// Create an engine whose table comes from `cache`.
  #[cfg(feature = "std")]
  #[must_use]
  pub fn with_cache(params: CrcParams<W>, cache: &TableCache<W>) -> Self {
    let table = cache.get_or_create(&params);
    Self::with_table(params, table)
  }

  /// Create an engine around an already-built table.
  ///
  /// The table must have been generated for `params.polynomial` and
  /// `params.reflect_in`; it is not re-validated.
  #[must_use]
  pub fn with_table(params: CrcParams<W>, table: Arc<CrcTable<W>>) -> Self {
    let mut crc = Self { params, table, remainder: W::ZERO };
    crc.initialize();
    crc
  }

  /// Create an engine around caller-supplied table entries.
  ///
  /// # Errors
  ///
  /// Returns [`CrcError::TableLength`] unless `table` has exactly 256 entries.
  pub fn from_table_slice(params: CrcParams<W>, table: &[W]) -> Result<Self, CrcError> {
    let table = CrcTable::from_slice(table)?;
    Ok(Self::with_table(params, Arc::new(table)))
  }

  /// Create an engine from dynamically assembled parts.
  ///
  /// # Errors
  ///
  /// - [`CrcError::MissingParams`] if `params` is `None`
  /// - [`CrcError::TableLength`] unless `table` has exactly 256 entries
  pub fn from_parts(params: Option<CrcParams<W>>, table: &[W]) -> Result<Self, CrcError> {
    let params = params.ok_or(CrcError::MissingParams)?;
    Self::from_table_slice(params, table)
  }

  /// CRC of `data` in one shot, using the process-wide cache.
  #[cfg(feature = "std")]
  #[must_use]
  pub fn checksum(params: CrcParams<W>, data: &[u8]) -> W {
    let mut crc = Self::new(params);
    crc.update(data);
    crc.result()
  }

  /// Reset the remainder to the definition's (possibly reflected) initial value.
  #[inline]
  pub fn initialize(&mut self) {
    self.remainder = if self.params.reflect_in { self.params.initial.reflect() } else { self.params.initial };
  }

  /// Fold `data` into the remainder. Empty input is a no-op.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    let table = &*self.table;
    let mut r = self.remainder;

    if self.params.reflect_in {
      for &byte in data {
        let index = r.low_byte() ^ byte;
        r = r.shr8() ^ table.get(index);
      }
    } else {
      for &byte in data {
        let index = r.high_byte() ^ byte;
        r = r.shl8() ^ table.get(index);
      }
    }

    self.remainder = r;
  }

  /// CRC over everything fed since the last [`initialize`](Self::initialize).
  ///
  /// Pure; may be called at any point without ending the computation.
  #[inline]
  #[must_use]
  pub fn result(&self) -> W {
    // Reflected input already leaves the register bit-reversed, so an output
    // reflection is needed only when the two flags disagree.
    let r = if self.params.reflect_out != self.params.reflect_in { self.remainder.reflect() } else { self.remainder };
    r ^ self.params.xor_out
  }

  /// [`result`](Self::result) as little-endian bytes.
  #[inline]
  #[must_use]
  pub fn finalize_bytes(&self) -> W::Bytes {
    self.result().to_le_bytes()
  }

  /// The definition this engine computes.
  #[inline]
  #[must_use]
  pub fn params(&self) -> &CrcParams<W> {
    &self.params
  }

  /// The lookup table in use.
  #[inline]
  #[must_use]
  pub fn table(&self) -> &Arc<CrcTable<W>> {
    &self.table
  }

  /// Raw register contents, before output reflection and final XOR.
  #[inline]
  #[must_use]
  pub fn remainder(&self) -> W {
    self.remainder
  }
}

impl<W: Width> traits::Checksum for Crc<W> {
  const OUTPUT_SIZE: usize = W::BYTES;
  type Output = W;
  type Bytes = W::Bytes;

  #[inline]
  fn reset(&mut self) {
    self.initialize();
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Crc::update(self, data);
  }

  #[inline]
  fn finalize(&self) -> W {
    self.result()
  }

  #[inline]
  fn finalize_bytes(&self) -> W::Bytes {
    Crc::finalize_bytes(self)
  }
}
