//! Streaming fingerprint computation.

use crate::generator::Generator;

/// Incremental fingerprint computation over a borrowed [`Generator`].
///
/// The hasher carries the accumulator **unreduced** between updates and
/// reduces only in [`finalize`](Hasher::finalize), so fingerprinting data
/// that arrives in chunks (e.g. across network reads) costs the same as a
/// one-shot [`Generator::fingerprint`] over the concatenation.
///
/// `finalize` is idempotent and does not consume the hasher; further updates
/// continue from the state already folded in.
///
/// # Example
///
/// ```rust
/// use fingerprint::std64;
///
/// let g = std64();
/// let mut hasher = g.hasher();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.finalize(), g.fingerprint(b"hello world"));
/// ```
#[derive(Clone, Debug)]
pub struct Hasher<'g> {
  generator: &'g Generator,
  state: u64,
}

impl<'g> Hasher<'g> {
  /// Create a hasher starting from the generator's empty fingerprint.
  #[inline]
  #[must_use]
  pub fn new(generator: &'g Generator) -> Self {
    Self {
      generator,
      state: generator.empty(),
    }
  }

  /// Create a hasher resuming from a previously computed fingerprint.
  #[inline]
  #[must_use]
  pub fn resume(generator: &'g Generator, fp: u64) -> Self {
    Self { generator, state: fp }
  }

  /// Fold `data` into the running fingerprint, without reducing.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    let mut f = self.state;
    for &b in data {
      f = self.generator.extend_byte(f, b);
    }
    self.state = f;
  }

  /// Fold all bits of every value in `data` into the running fingerprint.
  #[inline]
  pub fn update_u16s(&mut self, data: &[u16]) {
    let mut f = self.state;
    for &v in data {
      f = self.generator.extend_u16(f, v);
    }
    self.state = f;
  }

  /// Fold the UTF-16 code units of `s` into the running fingerprint.
  #[inline]
  pub fn update_str(&mut self, s: &str) {
    let mut f = self.state;
    for v in s.encode_utf16() {
      f = self.generator.extend_u16(f, v);
    }
    self.state = f;
  }

  /// Reduce and return the fingerprint of everything folded in so far.
  #[inline]
  #[must_use]
  pub fn finalize(&self) -> u64 {
    self.generator.reduce(self.state)
  }

  /// Restore the hasher to the empty fingerprint.
  #[inline]
  pub fn reset(&mut self) {
    self.state = self.generator.empty();
  }

  /// The generator this hasher folds with.
  #[inline]
  #[must_use]
  pub fn generator(&self) -> &'g Generator {
    self.generator
  }
}

#[cfg(test)]
mod tests {
  use crate::polynomials;
  use crate::Generator;

  #[test]
  fn streaming_matches_oneshot() {
    let g = Generator::new(polynomials::default_polynomial(64), 64);
    let data = b"hello world, this is a longer test string";
    let oneshot = g.fingerprint(data);

    for split in [0, 1, 7, 8, 9, 20, data.len()] {
      let (a, b) = data.split_at(split);
      let mut h = g.hasher();
      h.update(a);
      h.update(b);
      assert_eq!(h.finalize(), oneshot, "split {split}");
    }
  }

  #[test]
  fn finalize_is_idempotent() {
    let g = Generator::new(polynomials::default_polynomial(32), 32);
    let mut h = g.hasher();
    h.update(b"abc");
    assert_eq!(h.finalize(), h.finalize());
  }

  #[test]
  fn reset_restores_empty() {
    let g = Generator::new(polynomials::default_polynomial(64), 64);
    let mut h = g.hasher();
    h.update(b"garbage");
    h.reset();
    h.update(b"abc");
    assert_eq!(h.finalize(), g.fingerprint(b"abc"));
  }

  #[test]
  fn resume_continues_a_reduced_fingerprint() {
    // A reduced fingerprint is a valid accumulator: resuming from it and
    // folding more data matches folding everything in one pass.
    let g = Generator::new(polynomials::default_polynomial(64), 64);
    let data = b"resume across a chunk boundary";
    let (a, b) = data.split_at(11);

    let fp_a = g.fingerprint(a);
    let mut h = crate::Hasher::resume(&g, fp_a);
    h.update(b);
    assert_eq!(h.finalize(), g.fingerprint(data));
  }

  #[test]
  fn update_str_matches_extend_str() {
    let g = Generator::new(polynomials::default_polynomial(64), 64);
    let mut h = g.hasher();
    h.update_str("hello ");
    h.update_str("world");
    assert_eq!(h.finalize(), g.fingerprint_str("hello world"));
  }
}
