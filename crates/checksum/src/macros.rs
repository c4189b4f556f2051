//! Internal macros.

/// Implement [`Width`](crate::Width) for a primitive unsigned integer.
///
/// # Arguments
///
/// - `$ty`: The register type (e.g., `u32`)
/// - `$reflect`: The width-scoped reflection function (e.g., `reflect32`)
macro_rules! impl_width {
  ($ty:ty, $reflect:path) => {
    impl private::Sealed for $ty {}

    impl $crate::Width for $ty {
      const BITS: u32 = <$ty>::BITS;
      const BYTES: usize = core::mem::size_of::<$ty>();
      const ZERO: Self = 0;
      const TOP_BIT: Self = 1 << (<$ty>::BITS - 1);

      type Bytes = [u8; core::mem::size_of::<$ty>()];

      #[inline(always)]
      fn low_byte(self) -> u8 {
        self as u8
      }

      #[inline(always)]
      fn high_byte(self) -> u8 {
        (self >> (<$ty>::BITS - 8)) as u8
      }

      #[inline(always)]
      fn shl1(self) -> Self {
        self << 1
      }

      #[inline(always)]
      fn shl8(self) -> Self {
        self.checked_shl(8).unwrap_or(0)
      }

      #[inline(always)]
      fn shr8(self) -> Self {
        self.checked_shr(8).unwrap_or(0)
      }

      #[inline(always)]
      fn reflect(self) -> Self {
        $reflect(self)
      }

      #[inline(always)]
      fn to_le_bytes(self) -> Self::Bytes {
        <$ty>::to_le_bytes(self)
      }

      #[inline(always)]
      fn to_u64(self) -> u64 {
        u64::from(self)
      }

      #[cfg(feature = "std")]
      fn global_cache() -> &'static $crate::cache::TableCache<Self> {
        static CACHE: $crate::cache::TableCache<$ty> = $crate::cache::TableCache::new();
        &CACHE
      }
    }
  };
}
