//! String similarity metrics.
//!
//! Currently one metric: Levenshtein edit distance, the minimum number of
//! single-symbol insertions, deletions, or substitutions required to turn one
//! sequence into the other.
//!
//! The implementation is the classic two-row dynamic program:
//! O(len0 · len1) time, O(len0) space.
//!
//! # Example
//!
//! ```rust
//! assert_eq!(strmetrics::levenshtein("kitten", "sitting"), 3);
//! assert_eq!(strmetrics::edit_distance(&[1, 2, 3], &[2, 3, 4]), 2);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
// Row indices below are bounded by the row length (len0 + 1) by construction.
#![allow(clippy::indexing_slicing)]
#![no_std]

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

/// Levenshtein distance between two symbol sequences.
#[must_use]
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
  // Degenerate cases.
  if a == b {
    return 0;
  }
  if a.is_empty() {
    return b.len();
  }
  if b.is_empty() {
    return a.len();
  }

  // cost[i] holds the distance between a[..i] and the prefix of b processed
  // so far; the first row is the cost of deleting every prefix of `a`.
  let mut cost: Vec<usize> = (0..=a.len()).collect();
  let mut next = vec![0usize; a.len() + 1];

  for (j, bj) in b.iter().enumerate() {
    next[0] = j + 1;

    for (i, ai) in a.iter().enumerate() {
      let substitute = cost[i] + usize::from(ai != bj);
      let insert = cost[i + 1] + 1;
      let delete = next[i] + 1;
      next[i + 1] = substitute.min(insert).min(delete);
    }

    core::mem::swap(&mut cost, &mut next);
  }

  cost[a.len()]
}

/// Levenshtein distance between two strings, measured in `char`s.
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
  if a == b {
    return 0;
  }
  let a: Vec<char> = a.chars().collect();
  let b: Vec<char> = b.chars().collect();
  edit_distance(&a, &b)
}
