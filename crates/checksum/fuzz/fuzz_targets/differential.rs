//! Differential fuzzing against crc-fast.
//!
//! Compares the table-driven engine against an independent implementation
//! for every catalogue definition both crates know.

#![no_main]

use checksum::{Crc, CrcParams};
use crc_fast::CrcAlgorithm;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  let crc16_arc = Crc::checksum(CrcParams::CRC16_ARC, data);
  assert_eq!(u64::from(crc16_arc), crc_fast::checksum(CrcAlgorithm::Crc16Arc, data), "CRC-16/ARC, len={}", data.len());

  let crc16_x25 = Crc::checksum(CrcParams::CRC16_X25, data);
  assert_eq!(
    u64::from(crc16_x25),
    crc_fast::checksum(CrcAlgorithm::Crc16IbmSdlc, data),
    "CRC-16/IBM-SDLC, len={}",
    data.len()
  );

  let crc32 = Crc::checksum(CrcParams::CRC32_IEEE, data);
  assert_eq!(u64::from(crc32), crc_fast::checksum(CrcAlgorithm::Crc32IsoHdlc, data), "CRC-32/ISO-HDLC, len={}", data.len());

  let crc32c = Crc::checksum(CrcParams::CRC32_CASTAGNOLI, data);
  assert_eq!(u64::from(crc32c), crc_fast::checksum(CrcAlgorithm::Crc32Iscsi, data), "CRC-32/ISCSI, len={}", data.len());

  let crc64 = Crc::checksum(CrcParams::CRC64_XZ, data);
  assert_eq!(crc64, crc_fast::checksum(CrcAlgorithm::Crc64Xz, data), "CRC-64/XZ, len={}", data.len());
});
