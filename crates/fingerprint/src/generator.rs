//! The fingerprint engine: extend/reduce operations over a precomputed
//! generator.
//!
//! A [`Generator`] holds only immutable tables; the running fingerprint is an
//! explicit `u64` accumulator passed in and returned by every operation, so a
//! single generator is safely shared across any number of threads.
//!
//! The `extend_byte`/`extend_u16`/`extend_u32`/`extend_u64` primitives return
//! **unreduced** values: numbers congruent (mod P) to the desired fingerprint
//! but possibly of degree ≥ d. [`Generator::reduce`] brings such a value down
//! to its canonical representative. Reduction is the expensive step, so the
//! batch operations (`extend_bytes`, `fingerprint`, ...) fold the whole input
//! unreduced and reduce exactly once at the end.

// Table rows are indexed 0..16 and columns by a masked byte (0..256); slice
// indices come from the caller's slice bounds.
#![allow(clippy::indexing_slicing)]

use crate::hasher::Hasher;
use crate::tables;

/// A Rabin fingerprint generator for one irreducible polynomial.
///
/// Identified by `(polynomial, degree)`; immutable once constructed. Reduced
/// fingerprints of degree `d` occupy the **top** `d` bits of the `u64` (the
/// bit-reversed representation); all lower bits are zero.
#[derive(Clone)]
pub struct Generator {
  degree: u32,
  polynomial: u64,
  empty: u64,
  table: [[u64; 256]; 16],
}

impl Generator {
  /// Create a generator for `polynomial` of the given `degree`.
  ///
  /// This builds the 128-entry power table and the 16×256 byte reduction
  /// table; prefer [`make_generator`](crate::make_generator) (or the
  /// standard generators) to amortize that cost across repeated requests
  /// for the same polynomial.
  ///
  /// # Contract
  ///
  /// `polynomial` must be an irreducible polynomial of exactly `degree` over
  /// GF(2), in the bit-reversed representation
  /// ([`polynomials::candidates`](crate::polynomials::candidates) supplies
  /// known-good values). **This is not checked.** A reducible polynomial
  /// yields a generator that behaves identically at the API level but whose
  /// fingerprints carry a weaker or broken uniqueness guarantee.
  ///
  /// # Panics
  ///
  /// Panics if `degree` is not in 1..=64.
  #[must_use]
  pub const fn new(polynomial: u64, degree: u32) -> Self {
    assert!(degree >= 1 && degree <= 64, "degree must be in 1..=64");
    let power = tables::power_table(polynomial, degree);
    let table = tables::byte_mod_table(&power);
    Self {
      degree,
      polynomial,
      // The conceptual input prefix is the byte 0x01 followed by eight zero
      // bytes; x^64 is the pre-reduced contribution of that header, which
      // makes "fingerprint of nothing" distinct from "fingerprint of
      // zeros".
      empty: power[64],
      table,
    }
  }

  /// The number of bits in fingerprints produced by this generator.
  #[inline]
  #[must_use]
  pub const fn degree(&self) -> u32 {
    self.degree
  }

  /// The defining irreducible polynomial.
  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> u64 {
    self.polynomial
  }

  /// The fingerprint of the empty string: the start-of-computation state.
  #[inline]
  #[must_use]
  pub const fn empty(&self) -> u64 {
    self.empty
  }

  /// Borrow a streaming [`Hasher`] starting from the empty fingerprint.
  #[inline]
  #[must_use]
  pub fn hasher(&self) -> Hasher<'_> {
    Hasher::new(self)
  }

  // ───────────────────────────────────────────────────────────────────────────
  // Reduction
  // ───────────────────────────────────────────────────────────────────────────

  /// Reduce `fp` to a value congruent mod the polynomial and of degree less
  /// than `degree`.
  ///
  /// The result occupies only the top `degree` bits. Idempotent: reducing a
  /// reduced value returns it unchanged.
  #[inline]
  #[must_use]
  pub fn reduce(&self, fp: u64) -> u64 {
    // The low N bytes may carry excess degree; everything above them is
    // already within range and is preserved as-is.
    let n = (8 - self.degree / 8) as usize;
    let high = if n == 8 { 0 } else { fp & (u64::MAX << (8 * n)) };

    let mut f = fp;
    let mut acc = 0u64;
    for i in 0..n {
      acc ^= self.table[8 + i][(f & 0xFF) as usize];
      f >>= 8;
    }

    high ^ acc
  }

  // ───────────────────────────────────────────────────────────────────────────
  // Unreduced extend primitives
  // ───────────────────────────────────────────────────────────────────────────

  /// Extend `f` with one byte, without reducing.
  #[inline]
  #[must_use]
  pub fn extend_byte(&self, f: u64, v: u8) -> u64 {
    let f = f ^ u64::from(v);
    (f >> 8) ^ self.table[7][(f & 0xFF) as usize]
  }

  /// Extend `f` with all sixteen bits of `v`, without reducing.
  #[inline]
  #[must_use]
  pub fn extend_u16(&self, f: u64, v: u16) -> u64 {
    let f = f ^ u64::from(v);
    (f >> 16) ^ self.table[6][(f & 0xFF) as usize] ^ self.table[7][((f >> 8) & 0xFF) as usize]
  }

  /// Extend `f` with all thirty-two bits of `v`, without reducing.
  #[inline]
  #[must_use]
  pub fn extend_u32(&self, f: u64, v: u32) -> u64 {
    let f = f ^ u64::from(v);
    (f >> 32)
      ^ self.table[4][(f & 0xFF) as usize]
      ^ self.table[5][((f >> 8) & 0xFF) as usize]
      ^ self.table[6][((f >> 16) & 0xFF) as usize]
      ^ self.table[7][((f >> 24) & 0xFF) as usize]
  }

  /// Extend `f` with all sixty-four bits of `v`, without reducing.
  #[inline]
  #[must_use]
  pub fn extend_u64(&self, f: u64, v: u64) -> u64 {
    let f = f ^ v;
    self.table[0][(f & 0xFF) as usize]
      ^ self.table[1][((f >> 8) & 0xFF) as usize]
      ^ self.table[2][((f >> 16) & 0xFF) as usize]
      ^ self.table[3][((f >> 24) & 0xFF) as usize]
      ^ self.table[4][((f >> 32) & 0xFF) as usize]
      ^ self.table[5][((f >> 40) & 0xFF) as usize]
      ^ self.table[6][((f >> 48) & 0xFF) as usize]
      ^ self.table[7][((f >> 56) & 0xFF) as usize]
  }

  // ───────────────────────────────────────────────────────────────────────────
  // Reduced batch extends
  // ───────────────────────────────────────────────────────────────────────────

  /// Extend `f` with every byte of `data`; the result is reduced.
  #[must_use]
  pub fn extend_bytes(&self, f: u64, data: &[u8]) -> u64 {
    let mut f = f;
    for &b in data {
      f = self.extend_byte(f, b);
    }
    self.reduce(f)
  }

  /// Extend `f` with all bits of every value in `data`; the result is
  /// reduced.
  #[must_use]
  pub fn extend_u16s(&self, f: u64, data: &[u16]) -> u64 {
    let mut f = f;
    for &v in data {
      f = self.extend_u16(f, v);
    }
    self.reduce(f)
  }

  /// Extend `f` with all bits of every value in `data`; the result is
  /// reduced.
  #[must_use]
  pub fn extend_u32s(&self, f: u64, data: &[u32]) -> u64 {
    let mut f = f;
    for &v in data {
      f = self.extend_u32(f, v);
    }
    self.reduce(f)
  }

  /// Extend `f` with all bits of every value in `data`; the result is
  /// reduced.
  #[must_use]
  pub fn extend_u64s(&self, f: u64, data: &[u64]) -> u64 {
    let mut f = f;
    for &v in data {
      f = self.extend_u64(f, v);
    }
    self.reduce(f)
  }

  /// Extend `f` with the UTF-16 code units of `s`; the result is reduced.
  ///
  /// Folding code units (rather than UTF-8 bytes) keeps the result bit-exact
  /// with implementations that fingerprint 16-bit characters.
  #[must_use]
  pub fn extend_str(&self, f: u64, s: &str) -> u64 {
    let mut f = f;
    for v in s.encode_utf16() {
      f = self.extend_u16(f, v);
    }
    self.reduce(f)
  }

  /// Extend `f` with the low eight bits of every value in `data`; the result
  /// is reduced.
  ///
  /// For text whose fingerprint should ignore the high byte of each
  /// character, e.g. encoding-insensitive matching of Latin-1 content.
  #[must_use]
  pub fn extend8(&self, f: u64, data: &[u16]) -> u64 {
    let mut f = f;
    for &v in data {
      f = self.extend_byte(f, v as u8);
    }
    self.reduce(f)
  }

  /// Extend `f` with the low eight bits of each UTF-16 code unit of `s`; the
  /// result is reduced.
  #[must_use]
  pub fn extend8_str(&self, f: u64, s: &str) -> u64 {
    let mut f = f;
    for v in s.encode_utf16() {
      f = self.extend_byte(f, v as u8);
    }
    self.reduce(f)
  }

  // ───────────────────────────────────────────────────────────────────────────
  // One-shot fingerprints
  // ───────────────────────────────────────────────────────────────────────────

  /// Fingerprint of `data`. Sub-ranges are expressed by slicing.
  #[inline]
  #[must_use]
  pub fn fingerprint(&self, data: &[u8]) -> u64 {
    self.extend_bytes(self.empty, data)
  }

  /// Fingerprint of all bits of the values in `data`.
  #[inline]
  #[must_use]
  pub fn fingerprint_u16s(&self, data: &[u16]) -> u64 {
    self.extend_u16s(self.empty, data)
  }

  /// Fingerprint of all bits of the values in `data`.
  #[inline]
  #[must_use]
  pub fn fingerprint_u32s(&self, data: &[u32]) -> u64 {
    self.extend_u32s(self.empty, data)
  }

  /// Fingerprint of all bits of the values in `data`.
  #[inline]
  #[must_use]
  pub fn fingerprint_u64s(&self, data: &[u64]) -> u64 {
    self.extend_u64s(self.empty, data)
  }

  /// Fingerprint of the UTF-16 code units of `s`.
  #[inline]
  #[must_use]
  pub fn fingerprint_str(&self, s: &str) -> u64 {
    self.extend_str(self.empty, s)
  }

  /// Fingerprint of the low eight bits of every value in `data`.
  #[inline]
  #[must_use]
  pub fn fingerprint8(&self, data: &[u16]) -> u64 {
    self.extend8(self.empty, data)
  }

  /// Fingerprint of the low eight bits of each UTF-16 code unit of `s`.
  #[inline]
  #[must_use]
  pub fn fingerprint8_str(&self, s: &str) -> u64 {
    self.extend8_str(self.empty, s)
  }
}

impl core::fmt::Debug for Generator {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Generator")
      .field("polynomial", &format_args!("{:#018x}", self.polynomial))
      .field("degree", &self.degree)
      .field("empty", &format_args!("{:#018x}", self.empty))
      .finish_non_exhaustive()
  }
}
