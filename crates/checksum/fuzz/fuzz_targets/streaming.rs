//! Fuzz target for the streaming CRC API.
//!
//! Tests that arbitrary sequences of update calls, interleaved with
//! reinitialization, produce the one-shot result for arbitrary definitions.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{Crc, CrcParams, Width};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Definition<W> {
  polynomial: W,
  initial: W,
  xor_out: W,
  reflect_in: bool,
  reflect_out: bool,
}

impl<W: Width> Definition<W> {
  fn params(&self) -> CrcParams<W> {
    CrcParams::new(self.polynomial, self.initial, self.xor_out, self.reflect_in, self.reflect_out)
  }
}

#[derive(Arbitrary, Debug)]
struct Input {
  crc8: Definition<u8>,
  crc16: Definition<u16>,
  crc32: Definition<u32>,
  crc64: Definition<u64>,
  /// Discarded by reinitialization before `data` is fed.
  noise: Vec<u8>,
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  check_streaming(input.crc8.params(), &input, "crc8");
  check_streaming(input.crc16.params(), &input, "crc16");
  check_streaming(input.crc32.params(), &input, "crc32");
  check_streaming(input.crc64.params(), &input, "crc64");
});

fn check_streaming<W: Width>(params: CrcParams<W>, input: &Input, label: &str) {
  let data = &input.data;
  let expected = Crc::checksum(params, data);

  let mut crc = Crc::new(params);
  crc.update(&input.noise);
  crc.initialize();

  let mut offset = 0;
  let mut chunk_idx = 0usize;

  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      let idx = chunk_idx.strict_rem(input.chunk_sizes.len());
      input.chunk_sizes[idx].strict_rem(256).max(1)
    };

    let end = offset.strict_add(chunk_size).min(data.len());
    crc.update(&data[offset..end]);
    offset = end;
    chunk_idx = chunk_idx.strict_add(1);
  }

  assert_eq!(crc.result(), expected, "{label} streaming mismatch for {params:?}");
}
