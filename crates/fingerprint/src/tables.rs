//! Const-fn table generation for the fingerprint engine.
//!
//! Two precomputed structures back every fingerprint operation:
//!
//! - a **power table** of 128 entries, entry `i` holding `x^i mod P`;
//! - a **byte reduction table** of 16 × 256 entries, entry `[i][j]` holding
//!   the XOR of `x^(127 - 8i - k) mod P` over the set bits `k` of the byte
//!   value `j`.
//!
//! The byte table reduces a byte sitting at byte offset `i` from the top of a
//! 128-bit shift window to its mod-P contribution with a single lookup, which
//! is what makes the extend loop O(1) amortized per byte.
//!
//! Everything here is `const fn`, so the standard generators' tables are
//! computed at compile time and embedded in the binary.

// All array indexing in this module uses loop indices bounded by the array
// sizes (0..128, 0..16, 0..256). Clippy cannot prove this in const fn
// contexts, but the bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

/// Bit-reversed representation of the constant polynomial 1: the x^0
/// coefficient lives in the most significant bit.
pub(crate) const ONE: u64 = 0x8000_0000_0000_0000;

/// Build the table of `x^i mod polynomial` for `i` in 0..128.
///
/// In the bit-reversed representation, multiplying by x is a logical right
/// shift by one. When the x^(degree - 1) coefficient is set before the shift,
/// the shift would overflow past degree, so the polynomial is XORed in to
/// fold the overflow back into the field.
#[must_use]
pub(crate) const fn power_table(polynomial: u64, degree: u32) -> [u64; 128] {
  let mut table = [0u64; 128];
  let x_to_degree_minus_one = ONE >> (degree - 1);

  let mut x_to_the_i = ONE;
  let mut i = 0;
  while i < 128 {
    table[i] = x_to_the_i;
    let overflow = x_to_the_i & x_to_degree_minus_one != 0;
    x_to_the_i >>= 1;
    if overflow {
      x_to_the_i ^= polynomial;
    }
    i += 1;
  }

  table
}

/// Build the byte reduction table from a power table.
///
/// Entry `[i][j]` accumulates, for each set bit `k` of `j`, the power-table
/// entry at index `127 - 8i - k`. GF(2) addition is XOR, so the entry is the
/// reduction of the whole byte polynomial at once.
#[must_use]
pub(crate) const fn byte_mod_table(power: &[u64; 128]) -> [[u64; 256]; 16] {
  let mut table = [[0u64; 256]; 16];

  let mut i = 0;
  while i < 16 {
    let mut j = 0;
    while j < 256 {
      let mut v = 0u64;
      let mut k = 0;
      while k < 8 {
        if j & (1 << k) != 0 {
          v ^= power[127 - i * 8 - k];
        }
        k += 1;
      }
      table[i][j] = v;
      j += 1;
    }
    i += 1;
  }

  table
}
