//! Differential fuzzing between independent computation paths.
//!
//! The byte-at-a-time extend loop, the wide (u16/u32/u64) folds, and the
//! one-shot fingerprint all implement the same polynomial arithmetic; any
//! disagreement is a bug in one of them.

#![no_main]

use fingerprint::std64;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  let g = std64();
  let oneshot = g.fingerprint(data);

  // Byte-at-a-time with a single final reduction.
  let mut f = g.empty();
  for &b in data {
    f = g.extend_byte(f, b);
  }
  assert_eq!(g.reduce(f), oneshot, "byte loop mismatch, len={}", data.len());

  // Reduction after every byte must land on the same value.
  let mut f = g.empty();
  for &b in data {
    f = g.reduce(g.extend_byte(f, b));
  }
  assert_eq!(f, oneshot, "stepwise reduction mismatch, len={}", data.len());

  // Whole u64 words folded at once must agree with their LE bytes.
  let mut chunks = data.chunks_exact(8);
  let mut f = g.empty();
  for chunk in chunks.by_ref() {
    let bytes: [u8; 8] = chunk.try_into().unwrap();
    f = g.extend_u64(f, u64::from_le_bytes(bytes));
  }
  for &b in chunks.remainder() {
    f = g.extend_byte(f, b);
  }
  assert_eq!(g.reduce(f), oneshot, "u64 fold mismatch, len={}", data.len());

  // Reduced outputs are idempotent under reduce.
  assert_eq!(g.reduce(oneshot), oneshot);
});
