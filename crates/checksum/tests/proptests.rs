//! Property-based tests for the CRC engine.
//!
//! These tests verify invariants that must hold for all inputs and all
//! definitions, not just the catalogue vectors. Uses proptest for randomized
//! input generation and crc-fast as an independent reference.

use checksum::{Checksum, Crc, CrcParams, Width};
use crc_fast::CrcAlgorithm;
use proptest::prelude::*;

// Test Strategies

/// Generate arbitrary byte vectors up to 8KB.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..8192)
}

/// Generate multiple split points for chunked testing.
fn arb_splits(len: usize, count: usize) -> impl Strategy<Value = Vec<usize>> {
  prop::collection::vec(0..=len, count).prop_map(move |mut splits| {
    splits.sort();
    splits.push(len);
    splits.dedup();
    splits
  })
}

/// Arbitrary definition for one width, flags included.
fn arb_params<W: Width + Arbitrary>() -> impl Strategy<Value = CrcParams<W>> {
  (any::<W>(), any::<W>(), any::<W>(), any::<bool>(), any::<bool>())
    .prop_map(|(poly, init, xor_out, refin, refout)| CrcParams::new(poly, init, xor_out, refin, refout))
}

// Generic Property Tests

/// Incremental updates at `split` produce the same result as one-shot.
fn prop_incremental_equals_oneshot<W: Width>(params: CrcParams<W>, data: &[u8], split: usize) -> bool {
  let split = split.min(data.len());
  let (a, b) = data.split_at(split);

  let oneshot = Crc::checksum(params, data);

  let mut incremental = Crc::new(params);
  incremental.update(a);
  incremental.update(b);

  incremental.result() == oneshot
}

/// Any partition of the input produces the same result.
fn prop_multi_incremental<W: Width>(params: CrcParams<W>, data: &[u8], splits: &[usize]) -> bool {
  let oneshot = Crc::checksum(params, data);

  let mut crc = Crc::new(params);
  let mut prev = 0;
  for &split in splits {
    let split = split.min(data.len());
    if split > prev {
      crc.update(&data[prev..split]);
      prev = split;
    }
  }
  if prev < data.len() {
    crc.update(&data[prev..]);
  }

  crc.result() == oneshot
}

/// Reinitializing discards everything fed so far.
fn prop_initialize_restores_state<W: Width>(params: CrcParams<W>, noise: &[u8], data: &[u8]) -> bool {
  let mut crc = Crc::new(params);
  crc.update(noise);
  crc.initialize();
  crc.update(data);

  crc.result() == Crc::checksum(params, data)
}

/// The trait surface computes the same thing as the inherent one.
fn prop_trait_matches_inherent<W: Width>(params: CrcParams<W>, data: &[u8], split: usize) -> bool {
  let split = split.min(data.len());
  let (a, b) = data.split_at(split);

  let mut crc = Crc::new(params);
  Checksum::update_vectored(&mut crc, &[a, b]);

  let expected = Crc::checksum(params, data);
  Checksum::finalize(&crc) == expected && Checksum::finalize_bytes(&crc).as_ref() == expected.to_le_bytes().as_ref()
}

/// Swapping `reflect_out` changes the result by exactly one full-width reflection.
fn prop_reflect_out_is_a_final_reflection<W: Width>(params: CrcParams<W>, data: &[u8]) -> bool {
  let flipped = CrcParams { reflect_out: !params.reflect_out, ..params };
  let a = Crc::checksum(params, data) ^ params.xor_out;
  let b = Crc::checksum(flipped, data) ^ params.xor_out;
  a.reflect() == b
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  // CRC-8

  #[test]
  fn crc8_incremental(params in arb_params::<u8>(), data in arb_data(), split in any::<usize>()) {
    prop_assert!(prop_incremental_equals_oneshot(params, &data, split));
  }

  #[test]
  fn crc8_reflect_out(params in arb_params::<u8>(), data in arb_data()) {
    prop_assert!(prop_reflect_out_is_a_final_reflection(params, &data));
  }

  // CRC-16

  #[test]
  fn crc16_incremental(params in arb_params::<u16>(), data in arb_data(), split in any::<usize>()) {
    prop_assert!(prop_incremental_equals_oneshot(params, &data, split));
  }

  #[test]
  fn crc16_multi_incremental(
    params in arb_params::<u16>(),
    (data, splits) in arb_data().prop_flat_map(|d| {
      let len = d.len();
      (Just(d), arb_splits(len, 5))
    })
  ) {
    prop_assert!(prop_multi_incremental(params, &data, &splits));
  }

  #[test]
  fn crc16_initialize(params in arb_params::<u16>(), noise in arb_data(), data in arb_data()) {
    prop_assert!(prop_initialize_restores_state(params, &noise, &data));
  }

  // CRC-32

  #[test]
  fn crc32_incremental(params in arb_params::<u32>(), data in arb_data(), split in any::<usize>()) {
    prop_assert!(prop_incremental_equals_oneshot(params, &data, split));
  }

  #[test]
  fn crc32_multi_incremental(
    params in arb_params::<u32>(),
    (data, splits) in arb_data().prop_flat_map(|d| {
      let len = d.len();
      (Just(d), arb_splits(len, 10))
    })
  ) {
    prop_assert!(prop_multi_incremental(params, &data, &splits));
  }

  #[test]
  fn crc32_trait(params in arb_params::<u32>(), data in arb_data(), split in any::<usize>()) {
    prop_assert!(prop_trait_matches_inherent(params, &data, split));
  }

  #[test]
  fn crc32_reflect_out(params in arb_params::<u32>(), data in arb_data()) {
    prop_assert!(prop_reflect_out_is_a_final_reflection(params, &data));
  }

  // CRC-64

  #[test]
  fn crc64_incremental(params in arb_params::<u64>(), data in arb_data(), split in any::<usize>()) {
    prop_assert!(prop_incremental_equals_oneshot(params, &data, split));
  }

  #[test]
  fn crc64_initialize(params in arb_params::<u64>(), noise in arb_data(), data in arb_data()) {
    prop_assert!(prop_initialize_restores_state(params, &noise, &data));
  }
}

// Cross-checks against crc-fast

proptest! {
  #![proptest_config(ProptestConfig::with_cases(512))]

  #[test]
  fn crc16_arc_matches_crc_fast(data in arb_data()) {
    let ours = Crc::checksum(CrcParams::CRC16_ARC, &data);
    let theirs = crc_fast::checksum(CrcAlgorithm::Crc16Arc, &data) as u16;
    prop_assert_eq!(ours, theirs);
  }

  #[test]
  fn crc16_x25_matches_crc_fast(data in arb_data()) {
    let ours = Crc::checksum(CrcParams::CRC16_X25, &data);
    let theirs = crc_fast::checksum(CrcAlgorithm::Crc16IbmSdlc, &data) as u16;
    prop_assert_eq!(ours, theirs);
  }

  #[test]
  fn crc32_ieee_matches_crc_fast(data in arb_data()) {
    let ours = Crc::checksum(CrcParams::CRC32_IEEE, &data);
    let theirs = crc_fast::checksum(CrcAlgorithm::Crc32IsoHdlc, &data) as u32;
    prop_assert_eq!(ours, theirs);
  }

  #[test]
  fn crc32_castagnoli_matches_crc_fast(data in arb_data()) {
    let ours = Crc::checksum(CrcParams::CRC32_CASTAGNOLI, &data);
    let theirs = crc_fast::checksum(CrcAlgorithm::Crc32Iscsi, &data) as u32;
    prop_assert_eq!(ours, theirs);
  }

  #[test]
  fn crc64_xz_matches_crc_fast(data in arb_data()) {
    let ours = Crc::checksum(CrcParams::CRC64_XZ, &data);
    let theirs = crc_fast::checksum(CrcAlgorithm::Crc64Xz, &data);
    prop_assert_eq!(ours, theirs);
  }
}
