//! Property-based tests for the fingerprint engine.
//!
//! These verify invariants that must hold for all inputs, not just specific
//! vectors. Uses proptest for randomized input generation.

use fingerprint::{Generator, polynomials, std32, std64};
use proptest::prelude::*;

/// Generate arbitrary byte vectors up to 8KB.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..8192)
}

/// Degrees covering every reduction-width class (N = 8 - degree/8).
fn arb_degree() -> impl Strategy<Value = u32> {
  prop_oneof![Just(1), Just(7), Just(8), Just(13), Just(16), Just(24), Just(31), Just(32), Just(47), Just(64)]
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(500))]

  #[test]
  fn byte_loop_equals_oneshot(data in arb_data(), degree in arb_degree()) {
    let g = Generator::new(polynomials::default_polynomial(degree), degree);

    let mut f = g.empty();
    for &b in &data {
      f = g.extend_byte(f, b);
    }

    prop_assert_eq!(g.reduce(f), g.fingerprint(&data));
  }

  #[test]
  fn reduce_is_idempotent(f in any::<u64>(), degree in arb_degree()) {
    let g = Generator::new(polynomials::default_polynomial(degree), degree);
    let once = g.reduce(f);
    prop_assert_eq!(g.reduce(once), once);
  }

  #[test]
  fn results_stay_in_the_top_degree_bits(data in arb_data(), degree in arb_degree()) {
    let low_bits = if degree == 64 { 0 } else { u64::MAX >> degree };
    let g = Generator::new(polynomials::default_polynomial(degree), degree);
    prop_assert_eq!(g.fingerprint(&data) & low_bits, 0);
  }

  #[test]
  fn streaming_equals_oneshot(data in arb_data(), split in 0..8192usize) {
    let split = split.min(data.len());
    let (a, b) = data.split_at(split);

    let mut hasher = std64().hasher();
    hasher.update(a);
    hasher.update(b);

    prop_assert_eq!(hasher.finalize(), std64().fingerprint(&data));
  }

  #[test]
  fn stepwise_reduction_is_harmless(data in prop::collection::vec(any::<u8>(), 0..512)) {
    let g = std32();

    let mut stepwise = g.empty();
    let mut deferred = g.empty();
    for &b in &data {
      stepwise = g.reduce(g.extend_byte(stepwise, b));
      deferred = g.extend_byte(deferred, b);
    }

    prop_assert_eq!(stepwise, g.reduce(deferred));
  }

  #[test]
  fn fingerprint8_uses_only_the_low_byte(units in prop::collection::vec(any::<u16>(), 0..2048)) {
    let low_bytes: Vec<u8> = units.iter().map(|&u| u as u8).collect();
    prop_assert_eq!(std64().fingerprint8(&units), std64().fingerprint(&low_bytes));
  }

  #[test]
  fn appending_a_symbol_changes_the_fingerprint(data in prop::collection::vec(any::<u8>(), 0..1024), suffix in any::<u8>()) {
    let base = std64().fingerprint(&data);

    let mut extended = data.clone();
    extended.push(suffix);

    // Collisions are possible in principle but bounded by |data| / 2^65 for
    // an irreducible polynomial, far below what any test run can reach.
    prop_assert_ne!(base, std64().fingerprint(&extended));
  }

  #[test]
  fn utf16_and_str_paths_agree(s in ".{0,200}") {
    let units: Vec<u16> = s.encode_utf16().collect();
    prop_assert_eq!(std64().fingerprint_str(&s), std64().fingerprint_u16s(&units));
    prop_assert_eq!(std64().fingerprint8_str(&s), std64().fingerprint8(&units));
  }
}
