//! Process-wide cache of fingerprint generators.
//!
//! Building a [`Generator`] computes 16×256 table entries; callers that
//! repeatedly ask for the same polynomial should not pay that cost twice.
//! [`Registry`] is the explicit, injectable cache; [`make_generator`] routes
//! through a process-wide instance.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::generator::Generator;

/// A cache of generators keyed by polynomial value.
///
/// Lookups take a read lock; misses construct the generator **outside** any
/// lock and then insert-if-absent. Two callers racing on the same polynomial
/// may both run setup — construction is a pure function of
/// `(polynomial, degree)`, so the loser's work is discarded, never a
/// correctness hazard — and unrelated lookups are never blocked behind a
/// construction.
///
/// Entries live as long as the registry; there is no eviction.
#[derive(Debug, Default)]
pub struct Registry {
  generators: RwLock<HashMap<u64, Arc<Generator>>>,
}

impl Registry {
  /// Create an empty registry.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Return the cached generator for `polynomial`, running setup on first
  /// request.
  ///
  /// The irreducibility contract of [`Generator::new`] applies: it is the
  /// caller's to uphold and is never checked here.
  ///
  /// # Panics
  ///
  /// Panics if `degree` is not in 1..=64.
  #[must_use]
  pub fn get_or_create(&self, polynomial: u64, degree: u32) -> Arc<Generator> {
    if let Some(generator) = self.read_map().get(&polynomial) {
      return Arc::clone(generator);
    }

    let generator = Arc::new(Generator::new(polynomial, degree));
    match self.write_map().entry(polynomial) {
      // Another caller finished setup first; keep its instance.
      Entry::Occupied(entry) => Arc::clone(entry.get()),
      Entry::Vacant(entry) => Arc::clone(entry.insert(generator)),
    }
  }

  /// Number of cached generators.
  #[must_use]
  pub fn len(&self) -> usize {
    self.read_map().len()
  }

  /// Whether the registry has no cached generators.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.read_map().is_empty()
  }

  fn read_map(&self) -> RwLockReadGuard<'_, HashMap<u64, Arc<Generator>>> {
    // The map is only ever mutated by single insert statements, so a
    // poisoned lock still guards a consistent map.
    self.generators.read().unwrap_or_else(PoisonError::into_inner)
  }

  fn write_map(&self) -> RwLockWriteGuard<'_, HashMap<u64, Arc<Generator>>> {
    self.generators.write().unwrap_or_else(PoisonError::into_inner)
  }
}

fn global() -> &'static Registry {
  static GLOBAL: OnceLock<Registry> = OnceLock::new();
  GLOBAL.get_or_init(Registry::new)
}

/// Obtain the process-wide cached generator for `(polynomial, degree)`,
/// creating it on first request.
///
/// The irreducibility contract of [`Generator::new`] applies and is never
/// checked.
///
/// # Panics
///
/// Panics if `degree` is not in 1..=64.
#[must_use]
pub fn make_generator(polynomial: u64, degree: u32) -> Arc<Generator> {
  global().get_or_create(polynomial, degree)
}
