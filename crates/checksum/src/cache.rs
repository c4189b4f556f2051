//! Lookup-table memoization.
//!
//! A [`TableCache`] maps `(reflect_in, polynomial)` to a shared, immutable
//! [`CrcTable`]. Tables are generated lazily on first request and never
//! evicted, so the cache grows with the number of distinct polynomials seen.
//!
//! # Sharing
//!
//! - Each width has a process-wide default, [`TableCache::global`], used by
//!   [`Crc::new`](crate::Crc::new).
//! - Any scope (a session, a test) can own its own cache and inject it through
//!   [`Crc::with_cache`](crate::Crc::with_cache).
//!
//! # Concurrency
//!
//! Lookups take a read lock. On a miss the table is generated with no lock
//! held, then published under the write lock; if another thread published the
//! same key first, the freshly generated table is dropped and the winner is
//! returned. Generation is pure, so a lost race only costs time.

use alloc::{collections::BTreeMap, sync::Arc};
use std::sync::{PoisonError, RwLock};

use crate::{CrcParams, CrcTable, Width, table};

type TableMap<W> = BTreeMap<W, Arc<CrcTable<W>>>;

/// Thread-safe get-or-create store of lookup tables for one register width.
pub struct TableCache<W> {
  normal: RwLock<TableMap<W>>,
  reflected: RwLock<TableMap<W>>,
}

impl<W: Width> TableCache<W> {
  /// Create an empty cache.
  #[must_use]
  pub const fn new() -> Self {
    Self { normal: RwLock::new(BTreeMap::new()), reflected: RwLock::new(BTreeMap::new()) }
  }

  /// The process-wide default cache for this width.
  #[inline]
  #[must_use]
  pub fn global() -> &'static Self {
    W::global_cache()
  }

  /// Get the table for `params`, generating and publishing it on first use.
  ///
  /// Every caller asking for the same `(reflect_in, polynomial)` observes the
  /// same `Arc`.
  pub fn get_or_create(&self, params: &CrcParams<W>) -> Arc<CrcTable<W>> {
    let map = self.family(params.reflect_in);

    if let Some(found) = map.read().unwrap_or_else(PoisonError::into_inner).get(&params.polynomial) {
      return Arc::clone(found);
    }

    let generated = Arc::new(table::generate(params));

    let mut guard = map.write().unwrap_or_else(PoisonError::into_inner);
    let published = guard.entry(params.polynomial).or_insert_with(|| {
      log::debug!(
        "published crc{} table: poly={:?} reflected={}",
        W::BITS,
        params.polynomial,
        params.reflect_in
      );
      Arc::clone(&generated)
    });

    if !Arc::ptr_eq(published, &generated) {
      log::debug!("crc{} table for poly={:?} already published, discarding duplicate", W::BITS, params.polynomial);
    }
    Arc::clone(published)
  }

  /// Number of tables held across both families.
  #[must_use]
  pub fn len(&self) -> usize {
    self.normal.read().unwrap_or_else(PoisonError::into_inner).len()
      + self.reflected.read().unwrap_or_else(PoisonError::into_inner).len()
  }

  /// `true` if no table has been generated yet.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  #[inline]
  fn family(&self, reflect_in: bool) -> &RwLock<TableMap<W>> {
    if reflect_in { &self.reflected } else { &self.normal }
  }
}

impl<W: Width> Default for TableCache<W> {
  fn default() -> Self {
    Self::new()
  }
}

impl<W: Width> core::fmt::Debug for TableCache<W> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("TableCache").field("bits", &W::BITS).field("tables", &self.len()).finish()
  }
}

#[cfg(test)]
mod tests {
  use alloc::vec::Vec;

  use super::*;

  #[test]
  fn same_key_returns_same_table() {
    let cache = TableCache::<u32>::new();
    let a = cache.get_or_create(&CrcParams::CRC32_IEEE);
    let b = cache.get_or_create(&CrcParams::CRC32_IEEE);
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(cache.len(), 1);
  }

  #[test]
  fn init_and_xor_share_a_table() {
    let cache = TableCache::<u32>::new();
    let ieee = cache.get_or_create(&CrcParams::CRC32_IEEE);
    let jam = cache.get_or_create(&CrcParams::CRC32_JAMCRC);
    assert!(Arc::ptr_eq(&ieee, &jam));
    assert_eq!(cache.len(), 1);
  }

  #[test]
  fn reflection_families_are_separate() {
    let cache = TableCache::<u32>::new();
    let reflected = cache.get_or_create(&CrcParams::CRC32_IEEE);
    let normal = cache.get_or_create(&CrcParams::CRC32_BZIP2);
    assert!(!Arc::ptr_eq(&reflected, &normal));
    assert_ne!(*reflected, *normal);
    assert_eq!(cache.len(), 2);
  }

  #[test]
  fn starts_empty() {
    let cache = TableCache::<u16>::default();
    assert!(cache.is_empty());
    cache.get_or_create(&CrcParams::CRC16_XMODEM);
    assert!(!cache.is_empty());
  }

  #[test]
  fn cached_table_matches_fresh_generation() {
    let cache = TableCache::<u64>::new();
    let cached = cache.get_or_create(&CrcParams::CRC64_XZ);
    assert_eq!(*cached, table::generate(&CrcParams::CRC64_XZ));
  }

  #[test]
  fn concurrent_callers_observe_one_table() {
    let cache = TableCache::<u32>::new();
    let cache = &cache;
    let tables: Vec<Arc<CrcTable<u32>>> = std::thread::scope(|s| {
      let handles: Vec<_> =
        (0..8).map(|_| s.spawn(move || cache.get_or_create(&CrcParams::CRC32_CASTAGNOLI))).collect();
      handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for t in &tables[1..] {
      assert!(Arc::ptr_eq(&tables[0], t));
    }
    assert_eq!(cache.len(), 1);
  }
}
