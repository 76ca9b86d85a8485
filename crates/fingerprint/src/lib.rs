//! Rabin polynomial fingerprints over GF(2^d), 0 < d ≤ 64.
//!
//! A fingerprint is a probabilistically-unique, fixed-width identifier for a
//! byte or character sequence, computed by arithmetic in the Galois field
//! GF(2^d). The field is represented as the polynomials of degree < d with
//! coefficients in Z(2), modulo an irreducible polynomial P of degree d.
//!
//! Polynomials are stored **bit-reversed**: the coefficient of the
//! lowest-order term sits in the most significant bit of a `u64`, so a
//! degree-d fingerprint occupies the top `d` bits of the word and
//! multiplication by x is a logical right shift. This representation is part
//! of the public contract; fingerprints produced here are bit-exact with any
//! other implementation of the same scheme.
//!
//! If P is chosen at random among the irreducible polynomials of degree d,
//! the probability that two distinct strings A and B share a fingerprint is
//! below `max(|A|, |B|) / 2^(d+1)`, where `|A|` is the length of A in bits.
//! This is a uniqueness bound, not cryptographic collision resistance.
//!
//! # Example
//!
//! ```rust
//! use fingerprint::std64;
//!
//! let g = std64();
//!
//! // One-shot computation.
//! let fp = g.fingerprint(b"hello world");
//! assert_eq!(fp, g.fingerprint(b"hello world"));
//!
//! // Streaming computation over chunks.
//! let mut hasher = g.hasher();
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//! assert_eq!(hasher.finalize(), fp);
//!
//! // Order matters: fingerprint folding is non-commutative.
//! assert_ne!(g.fingerprint_str("AB"), g.fingerprint_str("BA"));
//! ```
//!
//! # Choosing a polynomial
//!
//! [`polynomials::candidates`] supplies at least two known irreducible
//! polynomials per degree; the standard generators use the first degree-64
//! and degree-32 entries. Callers may supply their own polynomial to
//! [`Generator::new`] or [`make_generator`], subject to one contract that is
//! **never checked**: the value must be an irreducible polynomial of exactly
//! the stated degree. A reducible polynomial produces a generator that works
//! at the API level but returns fingerprints with a weaker or broken
//! uniqueness guarantee. See [`Generator::new`].
//!
//! # Feature flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Enables the process-wide generator cache ([`Registry`], [`make_generator`]) |
//!
//! Without `std`, the arithmetic core, the catalog, and the standard
//! generators (whose tables are const-evaluated into the binary) remain
//! available.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod generator;
mod hasher;
pub mod polynomials;
mod tables;

#[cfg(feature = "std")]
mod registry;

pub use generator::Generator;
pub use hasher::Hasher;
#[cfg(feature = "std")]
pub use registry::{Registry, make_generator};

// ─────────────────────────────────────────────────────────────────────────────
// Standard generators
// ─────────────────────────────────────────────────────────────────────────────

static STD64: Generator = Generator::new(polynomials::default_polynomial(64), 64);
static STD32: Generator = Generator::new(polynomials::default_polynomial(32), 32);

/// The standard 64-bit generator, built from the first degree-64 catalog
/// polynomial.
///
/// Its reduction tables are const-evaluated and embedded in the binary, so
/// this never pays the setup cost at runtime.
#[inline]
#[must_use]
pub fn std64() -> &'static Generator {
  &STD64
}

/// The standard 32-bit generator, built from the first degree-32 catalog
/// polynomial.
#[inline]
#[must_use]
pub fn std32() -> &'static Generator {
  &STD32
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn standard_generators_use_catalog_defaults() {
    assert_eq!(std64().degree(), 64);
    assert_eq!(std64().polynomial(), polynomials::default_polynomial(64));
    assert_eq!(std32().degree(), 32);
    assert_eq!(std32().polynomial(), polynomials::default_polynomial(32));
  }

  #[test]
  fn standard_generators_are_distinct() {
    let data = b"standard";
    assert_ne!(std64().fingerprint(data), std32().fingerprint(data));
  }
}
