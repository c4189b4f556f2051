//! CRC algorithm definitions.
//!
//! A [`CrcParams`] fully describes one CRC variant following the conventions
//! of the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/). The
//! register width is the type parameter, so every field is exactly as wide as
//! the CRC it describes.
//!
//! # Reflection
//!
//! `reflect_in` selects LSB-first processing: input bytes and the register are
//! handled in bit-reversed order. `reflect_out` reverses the final remainder
//! before the final XOR. The two flags are independent.

use alloc::sync::Arc;

use crate::{Crc, Width, table};

/// Standard check input: the CRC of these bytes is the catalogue "check" value.
pub const CHECK_INPUT: &[u8] = b"123456789";

/// CRC algorithm parameters.
///
/// Immutable once handed to an engine: [`Crc`] keeps its own copy, so any
/// number of engines may be built from one value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcParams<W> {
  /// Generator polynomial (without the implicit high bit).
  pub polynomial: W,
  /// Initial value for the CRC register, before any reflection.
  pub initial: W,
  /// XOR value applied to the final CRC.
  pub xor_out: W,
  /// Process input bytes and the register LSB-first.
  pub reflect_in: bool,
  /// Reflect the final CRC before the final XOR.
  pub reflect_out: bool,
}

impl<W: Width> CrcParams<W> {
  /// Create a definition from its five catalogue parameters.
  #[inline]
  #[must_use]
  pub const fn new(polynomial: W, initial: W, xor_out: W, reflect_in: bool, reflect_out: bool) -> Self {
    Self { polynomial, initial, xor_out, reflect_in, reflect_out }
  }

  /// CRC of [`CHECK_INPUT`] under this definition.
  ///
  /// Builds a private table, so it neither needs nor touches any cache.
  #[must_use]
  pub fn check(&self) -> W {
    let mut crc = Crc::with_table(*self, Arc::new(table::generate(self)));
    crc.update(CHECK_INPUT);
    crc.result()
  }
}

impl CrcParams<u8> {
  /// CRC-8/SMBUS - SMBus PEC, ATM HEC. Check: 0xF4
  pub const CRC8_SMBUS: Self = Self::new(0x07, 0x00, 0x00, false, false);

  /// CRC-8/MAXIM-DOW - 1-Wire, iButton. Check: 0xA1
  pub const CRC8_MAXIM_DOW: Self = Self::new(0x31, 0x00, 0x00, true, true);
}

impl CrcParams<u16> {
  /// CRC-16/ARC - the default CRC-16; LHA, ARC. Check: 0xBB3D
  pub const CRC16_ARC: Self = Self::new(0x8005, 0x0000, 0x0000, true, true);

  /// CRC-16/KERMIT, commonly labelled "CRC-16/CCITT". Check: 0x2189
  pub const CRC16_KERMIT: Self = Self::new(0x1021, 0x0000, 0x0000, true, true);

  /// Alias for [`CRC16_KERMIT`](Self::CRC16_KERMIT).
  pub const CRC16_CCITT: Self = Self::CRC16_KERMIT;

  /// CRC-16/XMODEM - XMODEM, ZMODEM, Bluetooth LE. Check: 0x31C3
  pub const CRC16_XMODEM: Self = Self::new(0x1021, 0x0000, 0x0000, false, false);

  /// CRC-16/IBM-SDLC, a.k.a. X.25 / HDLC. Check: 0x906E
  pub const CRC16_X25: Self = Self::new(0x1021, 0xFFFF, 0xFFFF, true, true);

  /// CRC-16/IBM-3740, a.k.a. CCITT-FALSE. Check: 0x29B1
  pub const CRC16_CCITT_FALSE: Self = Self::new(0x1021, 0xFFFF, 0x0000, false, false);

  /// CRC-16/MODBUS. Check: 0x4B37
  pub const CRC16_MODBUS: Self = Self::new(0x8005, 0xFFFF, 0x0000, true, true);

  /// CRC-16/USB. Check: 0xB4C8
  pub const CRC16_USB: Self = Self::new(0x8005, 0xFFFF, 0xFFFF, true, true);

  /// CRC-16/MAXIM-DOW. Check: 0x44C2
  pub const CRC16_MAXIM_DOW: Self = Self::new(0x8005, 0x0000, 0xFFFF, true, true);

  /// CRC-16/UMTS, a.k.a. BUYPASS. Check: 0xFEE8
  pub const CRC16_UMTS: Self = Self::new(0x8005, 0x0000, 0x0000, false, false);

  /// CRC-16/DNP - DNP 3.0. Check: 0xEA82
  pub const CRC16_DNP: Self = Self::new(0x3D65, 0x0000, 0xFFFF, true, true);

  /// CRC-16/GENIBUS, a.k.a. EPC / DARC. Check: 0xD64E
  pub const CRC16_GENIBUS: Self = Self::new(0x1021, 0xFFFF, 0xFFFF, false, false);
}

impl CrcParams<u32> {
  /// CRC-32/ISO-HDLC - Ethernet, gzip, zip, PNG. Check: 0xCBF43926
  pub const CRC32_IEEE: Self = Self::new(0x04C1_1DB7, 0xFFFF_FFFF, 0xFFFF_FFFF, true, true);

  /// CRC-32/BZIP2 - bzip2, AAL5. Check: 0xFC891918
  pub const CRC32_BZIP2: Self = Self::new(0x04C1_1DB7, 0xFFFF_FFFF, 0xFFFF_FFFF, false, false);

  /// CRC-32/ISCSI (CRC-32C) - iSCSI, SCTP, ext4, Btrfs. Check: 0xE3069283
  pub const CRC32_CASTAGNOLI: Self = Self::new(0x1EDC_6F41, 0xFFFF_FFFF, 0xFFFF_FFFF, true, true);

  /// CRC-32/BASE91-D (CRC-32D). Check: 0x87315576
  pub const CRC32_BASE91_D: Self = Self::new(0xA833_982B, 0xFFFF_FFFF, 0xFFFF_FFFF, true, true);

  /// CRC-32/MPEG-2. Check: 0x0376E6E7
  pub const CRC32_MPEG2: Self = Self::new(0x04C1_1DB7, 0xFFFF_FFFF, 0x0000_0000, false, false);

  /// CRC-32/CKSUM - POSIX `cksum`. Check: 0x765E7680
  pub const CRC32_POSIX: Self = Self::new(0x04C1_1DB7, 0x0000_0000, 0xFFFF_FFFF, false, false);

  /// CRC-32/AIXM (CRC-32Q) - aeronautical data. Check: 0x3010BF7F
  pub const CRC32_AIXM: Self = Self::new(0x8141_41AB, 0x0000_0000, 0x0000_0000, false, false);

  /// CRC-32/XFER. Check: 0xBD0BE338
  pub const CRC32_XFER: Self = Self::new(0x0000_00AF, 0x0000_0000, 0x0000_0000, false, false);

  /// CRC-32/JAMCRC - CRC-32/ISO-HDLC without the final XOR. Check: 0x340BC6D9
  pub const CRC32_JAMCRC: Self = Self::new(0x04C1_1DB7, 0xFFFF_FFFF, 0x0000_0000, true, true);

  /// CRC-32/AUTOSAR. Check: 0x1697D06A
  pub const CRC32_AUTOSAR: Self = Self::new(0xF4AC_FB13, 0xFFFF_FFFF, 0xFFFF_FFFF, true, true);
}

impl CrcParams<u64> {
  /// CRC-64/XZ - XZ Utils, 7-Zip. Check: 0x995DC9BBDF1939FA
  pub const CRC64_XZ: Self = Self::new(0x42F0_E1EB_A9EA_3693, u64::MAX, u64::MAX, true, true);

  /// CRC-64/ECMA-182. Check: 0x6C40DF5F0B497347
  pub const CRC64_ECMA_182: Self = Self::new(0x42F0_E1EB_A9EA_3693, 0, 0, false, false);

  /// CRC-64/GO-ISO. Check: 0xB90956C775A41001
  pub const CRC64_GO_ISO: Self = Self::new(0x0000_0000_0000_001B, u64::MAX, u64::MAX, true, true);
}
