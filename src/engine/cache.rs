use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Append-only get-or-create map with hit/miss counters.
///
/// Values are immutable once inserted and handed out as `Arc`s. Two threads missing on the
/// same key may both build the value; the first insert wins and both callers get that one.
#[derive(Debug)]
pub(crate) struct MemoCache<K, V> {
    entries: RwLock<HashMap<K, Arc<V>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<K, V> Default for MemoCache<K, V> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }
}

impl<K: Eq + Hash + Copy, V> MemoCache<K, V> {
    /// Look up `key`, building and storing the value with `build` on a miss.
    ///
    /// The build runs without holding the lock.
    pub(crate) fn get_or_create(&self, key: K, build: impl FnOnce() -> V) -> Arc<V> {
        if let Some(v) = self.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return v;
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        let built = Arc::new(build());
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(entries.entry(key).or_insert(built))
    }

    pub(crate) fn get(&self, key: &K) -> Option<Arc<V>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub(crate) fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub(crate) fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/cache.rs"]
mod tests;
