//! Fuzz target for the streaming fingerprint API.
//!
//! Tests that arbitrary sequences of update calls produce the same value as
//! a one-shot fingerprint of the concatenation.

#![no_main]

use arbitrary::Arbitrary;
use fingerprint::{Generator, std32, std64};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  test_streaming(std64(), &input.data, &input.chunk_sizes);
  test_streaming(std32(), &input.data, &input.chunk_sizes);
});

fn test_streaming(g: &Generator, data: &[u8], chunk_sizes: &[usize]) {
  let expected = g.fingerprint(data);

  let mut hasher = g.hasher();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      (chunk_sizes[chunk_idx % chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(hasher.finalize(), expected, "streaming mismatch (degree {})", g.degree());
}
