//! Named CRC variants.
//!
//! [`Preset`] is the catalogue of built-in definitions. It exists so a CRC can
//! be chosen by name at runtime (configuration files, command lines,
//! environment variables); code that knows its variant at compile time should
//! use the [`CrcParams`] constants directly.
//!
//! Names follow the CRC Catalogue (`CRC-32/ISO-HDLC`), and every preset also
//! answers to its common aliases (`crc32`, `CRC-32/IEEE`, `pkzip`, ...).
//! Matching ignores ASCII case.
//!
//! ```
//! use checksum::Preset;
//!
//! let preset: Preset = "crc-32/ieee".parse().unwrap();
//! assert_eq!(preset, Preset::Crc32Ieee);
//! assert_eq!(preset.name(), "CRC-32/ISO-HDLC");
//! assert_eq!(preset.params().checksum(b"123456789"), 0xCBF4_3926);
//! ```

use core::str::FromStr;

#[cfg(feature = "std")]
use crate::Crc;
use crate::{CrcError, CrcParams};

/// A definition of any supported width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnyParams {
  /// 8-bit definition.
  W8(CrcParams<u8>),
  /// 16-bit definition.
  W16(CrcParams<u16>),
  /// 32-bit definition.
  W32(CrcParams<u32>),
  /// 64-bit definition.
  W64(CrcParams<u64>),
}

impl AnyParams {
  /// Register width in bits.
  #[must_use]
  pub const fn bits(&self) -> u32 {
    match self {
      Self::W8(_) => 8,
      Self::W16(_) => 16,
      Self::W32(_) => 32,
      Self::W64(_) => 64,
    }
  }

  /// Catalogue check value, widened to `u64`.
  #[must_use]
  pub fn check(&self) -> u64 {
    match self {
      Self::W8(p) => u64::from(p.check()),
      Self::W16(p) => u64::from(p.check()),
      Self::W32(p) => u64::from(p.check()),
      Self::W64(p) => p.check(),
    }
  }

  /// CRC of `data`, widened to `u64`, using the process-wide cache.
  #[cfg(feature = "std")]
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> u64 {
    match *self {
      Self::W8(p) => u64::from(Crc::checksum(p, data)),
      Self::W16(p) => u64::from(Crc::checksum(p, data)),
      Self::W32(p) => u64::from(Crc::checksum(p, data)),
      Self::W64(p) => Crc::checksum(p, data),
    }
  }
}

macro_rules! presets {
  (
    $(
      $(#[$meta:meta])*
      $variant:ident => $width:ident($params:expr), $name:literal, check: $check:literal,
        aliases: [$($alias:literal),* $(,)?];
    )*
  ) => {
    /// Built-in CRC variants.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum Preset {
      $($(#[$meta])* $variant,)*
    }

    impl Preset {
      /// Every preset, in catalogue order.
      pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

      /// Canonical catalogue name.
      #[must_use]
      pub const fn name(self) -> &'static str {
        match self {
          $(Self::$variant => $name,)*
        }
      }

      /// Alternative names accepted by [`FromStr`].
      #[must_use]
      pub const fn aliases(self) -> &'static [&'static str] {
        match self {
          $(Self::$variant => &[$($alias),*],)*
        }
      }

      /// Published check value (CRC of `"123456789"`), widened to `u64`.
      #[must_use]
      pub const fn check(self) -> u64 {
        match self {
          $(Self::$variant => $check,)*
        }
      }

      /// The definition this preset names.
      #[must_use]
      pub const fn params(self) -> AnyParams {
        match self {
          $(Self::$variant => AnyParams::$width($params),)*
        }
      }
    }
  };
}

presets! {
  /// CRC-8/SMBUS.
  Crc8Smbus => W8(CrcParams::CRC8_SMBUS), "CRC-8/SMBUS", check: 0xF4,
    aliases: ["crc-8", "crc8"];
  /// CRC-8/MAXIM-DOW.
  Crc8MaximDow => W8(CrcParams::CRC8_MAXIM_DOW), "CRC-8/MAXIM-DOW", check: 0xA1,
    aliases: ["crc-8/maxim", "dow-crc"];
  /// CRC-16/ARC, the default CRC-16.
  Crc16Arc => W16(CrcParams::CRC16_ARC), "CRC-16/ARC", check: 0xBB3D,
    aliases: ["crc-16", "crc16", "arc", "crc-16/lha", "crc-ibm"];
  /// CRC-16/KERMIT, a.k.a. CRC-16/CCITT.
  Crc16Ccitt => W16(CrcParams::CRC16_CCITT), "CRC-16/KERMIT", check: 0x2189,
    aliases: ["crc-16/ccitt", "crc-16/ccitt-true", "crc-ccitt", "kermit"];
  /// CRC-16/XMODEM.
  Crc16Xmodem => W16(CrcParams::CRC16_XMODEM), "CRC-16/XMODEM", check: 0x31C3,
    aliases: ["xmodem", "zmodem", "crc-16/acorn", "crc-16/lte"];
  /// CRC-16/IBM-SDLC, a.k.a. X.25.
  Crc16X25 => W16(CrcParams::CRC16_X25), "CRC-16/IBM-SDLC", check: 0x906E,
    aliases: ["crc-16/x-25", "crc-16/x25", "x-25", "crc-16/iso-hdlc", "crc-b"];
  /// CRC-16/IBM-3740, a.k.a. CCITT-FALSE.
  Crc16CcittFalse => W16(CrcParams::CRC16_CCITT_FALSE), "CRC-16/IBM-3740", check: 0x29B1,
    aliases: ["crc-16/ccitt-false", "crc-16/autosar"];
  /// CRC-16/MODBUS.
  Crc16Modbus => W16(CrcParams::CRC16_MODBUS), "CRC-16/MODBUS", check: 0x4B37,
    aliases: ["modbus"];
  /// CRC-16/USB.
  Crc16Usb => W16(CrcParams::CRC16_USB), "CRC-16/USB", check: 0xB4C8,
    aliases: [];
  /// CRC-16/MAXIM-DOW.
  Crc16MaximDow => W16(CrcParams::CRC16_MAXIM_DOW), "CRC-16/MAXIM-DOW", check: 0x44C2,
    aliases: ["crc-16/maxim"];
  /// CRC-16/UMTS, a.k.a. BUYPASS.
  Crc16Umts => W16(CrcParams::CRC16_UMTS), "CRC-16/UMTS", check: 0xFEE8,
    aliases: ["crc-16/buypass", "crc-16/verifone"];
  /// CRC-16/DNP.
  Crc16Dnp => W16(CrcParams::CRC16_DNP), "CRC-16/DNP", check: 0xEA82,
    aliases: [];
  /// CRC-16/GENIBUS.
  Crc16Genibus => W16(CrcParams::CRC16_GENIBUS), "CRC-16/GENIBUS", check: 0xD64E,
    aliases: ["crc-16/darc", "crc-16/epc", "crc-16/i-code"];
  /// CRC-32/ISO-HDLC, the default CRC-32.
  Crc32Ieee => W32(CrcParams::CRC32_IEEE), "CRC-32/ISO-HDLC", check: 0xCBF4_3926,
    aliases: ["crc-32", "crc32", "crc-32/ieee", "crc-32/adccp", "crc-32/v-42", "pkzip"];
  /// CRC-32/BZIP2.
  Crc32Bzip2 => W32(CrcParams::CRC32_BZIP2), "CRC-32/BZIP2", check: 0xFC89_1918,
    aliases: ["crc-32/aal5", "crc-32/dect-b", "b-crc-32"];
  /// CRC-32/ISCSI (CRC-32C).
  Crc32Castagnoli => W32(CrcParams::CRC32_CASTAGNOLI), "CRC-32/ISCSI", check: 0xE306_9283,
    aliases: ["crc-32c", "crc32c", "crc-32/castagnoli", "crc-32/base91-c", "crc-32/interlaken"];
  /// CRC-32/BASE91-D (CRC-32D).
  Crc32Base91D => W32(CrcParams::CRC32_BASE91_D), "CRC-32/BASE91-D", check: 0x8731_5576,
    aliases: ["crc-32d"];
  /// CRC-32/MPEG-2.
  Crc32Mpeg2 => W32(CrcParams::CRC32_MPEG2), "CRC-32/MPEG-2", check: 0x0376_E6E7,
    aliases: ["crc-32/mpeg2"];
  /// CRC-32/CKSUM (POSIX).
  Crc32Posix => W32(CrcParams::CRC32_POSIX), "CRC-32/CKSUM", check: 0x765E_7680,
    aliases: ["crc-32/posix", "cksum"];
  /// CRC-32/AIXM (CRC-32Q).
  Crc32Aixm => W32(CrcParams::CRC32_AIXM), "CRC-32/AIXM", check: 0x3010_BF7F,
    aliases: ["crc-32q"];
  /// CRC-32/XFER.
  Crc32Xfer => W32(CrcParams::CRC32_XFER), "CRC-32/XFER", check: 0xBD0B_E338,
    aliases: ["xfer"];
  /// CRC-32/JAMCRC.
  Crc32Jamcrc => W32(CrcParams::CRC32_JAMCRC), "CRC-32/JAMCRC", check: 0x340B_C6D9,
    aliases: ["jamcrc"];
  /// CRC-32/AUTOSAR.
  Crc32Autosar => W32(CrcParams::CRC32_AUTOSAR), "CRC-32/AUTOSAR", check: 0x1697_D06A,
    aliases: [];
  /// CRC-64/XZ.
  Crc64Xz => W64(CrcParams::CRC64_XZ), "CRC-64/XZ", check: 0x995D_C9BB_DF19_39FA,
    aliases: ["crc-64", "crc64", "crc-64/go-ecma"];
  /// CRC-64/ECMA-182.
  Crc64Ecma182 => W64(CrcParams::CRC64_ECMA_182), "CRC-64/ECMA-182", check: 0x6C40_DF5F_0B49_7347,
    aliases: ["crc-64/ecma"];
  /// CRC-64/GO-ISO.
  Crc64GoIso => W64(CrcParams::CRC64_GO_ISO), "CRC-64/GO-ISO", check: 0xB909_56C7_75A4_1001,
    aliases: [];
}

impl Preset {
  /// Look up a preset by catalogue name or alias, ignoring ASCII case and
  /// surrounding whitespace.
  #[must_use]
  pub fn from_name(name: &str) -> Option<Self> {
    let name = name.trim();
    if name.is_empty() {
      return None;
    }
    Self::ALL.iter().copied().find(|preset| {
      preset.name().eq_ignore_ascii_case(name) || preset.aliases().iter().any(|alias| alias.eq_ignore_ascii_case(name))
    })
  }

  /// Read a preset name from the environment variable `var`.
  ///
  /// Returns `Ok(None)` when the variable is unset or blank.
  ///
  /// # Errors
  ///
  /// Returns [`CrcError::UnknownPreset`] when the variable names no preset.
  #[cfg(feature = "std")]
  pub fn from_env(var: &str) -> Result<Option<Self>, CrcError> {
    let Ok(value) = std::env::var(var) else {
      return Ok(None);
    };
    if value.trim().is_empty() {
      return Ok(None);
    }
    value.parse().map(Some)
  }

  /// Register width in bits.
  #[must_use]
  pub const fn bits(self) -> u32 {
    self.params().bits()
  }
}

impl FromStr for Preset {
  type Err = CrcError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_name(s).ok_or(CrcError::UnknownPreset)
  }
}

impl core::fmt::Display for Preset {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.name())
  }
}

#[cfg(test)]
mod tests {
  use alloc::string::ToString;

  use super::*;

  #[test]
  fn every_preset_reproduces_its_check_value() {
    for &preset in Preset::ALL {
      assert_eq!(preset.params().check(), preset.check(), "{preset}");
    }
  }

  #[test]
  fn names_and_aliases_are_unique() {
    let mut seen: alloc::vec::Vec<alloc::string::String> = alloc::vec::Vec::new();
    for &preset in Preset::ALL {
      for name in core::iter::once(&preset.name()).chain(preset.aliases()) {
        let lower = name.to_ascii_lowercase();
        assert!(!seen.contains(&lower), "duplicate preset name {name}");
        seen.push(lower);
      }
    }
  }

  #[test]
  fn parse_is_case_insensitive() {
    assert_eq!("CRC-32/ISO-HDLC".parse::<Preset>(), Ok(Preset::Crc32Ieee));
    assert_eq!("crc-32/iso-hdlc".parse::<Preset>(), Ok(Preset::Crc32Ieee));
    assert_eq!("  Crc32C ".parse::<Preset>(), Ok(Preset::Crc32Castagnoli));
    assert_eq!("x-25".parse::<Preset>(), Ok(Preset::Crc16X25));
    assert_eq!("crc-16/ccitt".parse::<Preset>(), Ok(Preset::Crc16Ccitt));
  }

  #[test]
  fn parse_rejects_unknown() {
    assert_eq!("crc-33".parse::<Preset>(), Err(CrcError::UnknownPreset));
    assert_eq!("".parse::<Preset>(), Err(CrcError::UnknownPreset));
  }

  #[test]
  fn display_is_catalogue_name() {
    assert_eq!(Preset::Crc32Posix.to_string(), "CRC-32/CKSUM");
    assert_eq!(Preset::Crc16Umts.to_string(), "CRC-16/UMTS");
  }

  #[test]
  fn widths() {
    assert_eq!(Preset::Crc8Smbus.bits(), 8);
    assert_eq!(Preset::Crc16Arc.bits(), 16);
    assert_eq!(Preset::Crc32Xfer.bits(), 32);
    assert_eq!(Preset::Crc64GoIso.bits(), 64);
  }

  #[cfg(feature = "std")]
  #[test]
  fn checksum_matches_check_value() {
    for &preset in Preset::ALL {
      assert_eq!(preset.params().checksum(crate::CHECK_INPUT), preset.check(), "{preset}");
    }
  }

  #[cfg(feature = "std")]
  #[test]
  fn from_env_handles_unset_blank_and_invalid() {
    assert_eq!(Preset::from_env("CHECKSUM_TEST_PRESET_DEFINITELY_UNSET"), Ok(None));

    // SAFETY: test-local variable names; no other test reads them.
    #[allow(unsafe_code)]
    unsafe {
      std::env::set_var("CHECKSUM_TEST_PRESET_BLANK", "  ");
      std::env::set_var("CHECKSUM_TEST_PRESET_VALID", "crc-16/xmodem");
      std::env::set_var("CHECKSUM_TEST_PRESET_INVALID", "not-a-crc");
    }

    assert_eq!(Preset::from_env("CHECKSUM_TEST_PRESET_BLANK"), Ok(None));
    assert_eq!(Preset::from_env("CHECKSUM_TEST_PRESET_VALID"), Ok(Some(Preset::Crc16Xmodem)));
    assert_eq!(Preset::from_env("CHECKSUM_TEST_PRESET_INVALID"), Err(CrcError::UnknownPreset));
  }
}
