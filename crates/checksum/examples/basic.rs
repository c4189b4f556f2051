//! Basic checksum usage: one-shot, streaming, and preset lookup.
//!
//! Run with: `cargo run --example basic -p checksum`
//!
//! Set `CHECKSUM_PRESET` to pick the preset used for the streaming demo, and
//! `RUST_LOG=checksum=debug` to watch tables being generated and cached.

use checksum::{AnyParams, CHECK_INPUT, Checksum, Crc, CrcParams, Preset};

fn main() {
  env_logger::init();

  println!("=== Checksum Basic Examples ===\n");

  one_shot_examples();
  streaming_example();
  custom_definition_example();
  catalogue();
}

/// One-shot computation: simplest when you have all data in memory.
fn one_shot_examples() {
  println!("--- One-Shot Computation ---\n");

  // CRC-32/ISO-HDLC - Ethernet, gzip, zip, PNG
  let crc32 = Crc::checksum(CrcParams::CRC32_IEEE, CHECK_INPUT);
  println!("CRC-32/ISO-HDLC:  0x{crc32:08X}");
  assert_eq!(crc32, 0xCBF4_3926);

  // CRC-32/BZIP2 - same polynomial, MSB-first
  let bzip2 = Crc::checksum(CrcParams::CRC32_BZIP2, CHECK_INPUT);
  println!("CRC-32/BZIP2:     0x{bzip2:08X}");
  assert_eq!(bzip2, 0xFC89_1918);

  // CRC-16/XMODEM
  let xmodem = Crc::checksum(CrcParams::CRC16_XMODEM, CHECK_INPUT);
  println!("CRC-16/XMODEM:    0x{xmodem:04X}");
  assert_eq!(xmodem, 0x31C3);

  // CRC-64/XZ - XZ Utils, 7-Zip
  let crc64 = Crc::checksum(CrcParams::CRC64_XZ, CHECK_INPUT);
  println!("CRC-64/XZ:        0x{crc64:016X}");
  assert_eq!(crc64, 0x995D_C9BB_DF19_39FA);

  println!();
}

/// Streaming computation over a preset chosen at runtime.
fn streaming_example() {
  println!("--- Streaming Computation ---\n");

  let preset = match Preset::from_env("CHECKSUM_PRESET") {
    Ok(Some(preset)) => preset,
    Ok(None) => Preset::Crc32Ieee,
    Err(err) => {
      eprintln!("CHECKSUM_PRESET: {err}; falling back to {}", Preset::Crc32Ieee);
      Preset::Crc32Ieee
    }
  };

  let chunks: [&[u8]; 3] = [b"123", b"456", b"789"];
  let result = match preset.params() {
    AnyParams::W8(p) => stream(Crc::new(p), &chunks),
    AnyParams::W16(p) => stream(Crc::new(p), &chunks),
    AnyParams::W32(p) => stream(Crc::new(p), &chunks),
    AnyParams::W64(p) => stream(Crc::new(p), &chunks),
  };

  println!("{preset} over {} chunks: 0x{result:X}", chunks.len());
  assert_eq!(result, preset.check());
  println!();
}

fn stream<C>(mut crc: C, chunks: &[&[u8]]) -> u64
where
  C: Checksum,
  C::Output: Into<u64>,
{
  for chunk in chunks {
    crc.update(chunk);
  }
  crc.finalize().into()
}

/// A definition that is not in the catalogue.
fn custom_definition_example() {
  println!("--- Custom Definition ---\n");

  // CRC-16/XMODEM polynomial with reflected input only.
  let params = CrcParams::new(0x1021u16, 0xFFFF, 0x0000, true, false);
  let mut crc = Crc::new(params);
  crc.update(CHECK_INPUT);
  println!("{params:?}");
  println!("  result: 0x{:04X}  bytes: {:02X?}", crc.result(), crc.finalize_bytes());

  crc.initialize();
  crc.update(b"");
  println!("  empty:  0x{:04X}", crc.result());
  println!();
}

/// Every built-in preset with its check value.
fn catalogue() {
  println!("--- Catalogue ---\n");

  for &preset in Preset::ALL {
    let width = preset.bits() as usize / 4;
    println!("{:<18} 0x{:0width$X}", preset.name(), preset.params().checksum(CHECK_INPUT));
  }
}
