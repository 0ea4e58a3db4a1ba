// src/catalog/cache.rs
// Bounded memo of resolved queries, shared between concurrent searchers.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Indices into the catalog's canonical record list.
pub type Hits = Arc<[usize]>;

#[derive(Clone, Debug)]
struct CacheEntry {
    hits: Hits,
    last_used: u64,
    access_count: u64,
}

/// Cache statistics for diagnostics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheStats {
    pub entries: usize,
    pub max_entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub hit_rate: f64,
}

/// Eviction strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvictionPolicy {
    Lru, // Least Recently Used (default)
    Lfu, // Least Frequently Used
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, CacheEntry>,
    tick: u64,
    hits: u64,
    misses: u64,
    evictions: u64,
}

#[derive(Debug)]
pub struct QueryCache {
    inner: Mutex<Inner>,
    max_entries: usize,
    max_query_len: usize,
    policy: EvictionPolicy,
}

impl QueryCache {
    pub fn new(max_entries: usize, max_query_len: usize) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            max_entries,
            max_query_len,
            policy: EvictionPolicy::Lru,
        }
    }

    pub fn with_policy(mut self, policy: EvictionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Only short queries are memoized; long ones are rare and cheap to miss.
    pub fn is_cacheable(&self, key: &str) -> bool {
        self.max_entries > 0 && key.chars().count() <= self.max_query_len
    }

    // A panic elsewhere cannot leave the map half-written, so a poisoned
    // lock is still safe to read.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn get(&self, key: &str) -> Option<Hits> {
        let mut inner = self.lock();
        inner.tick += 1;
        let tick = inner.tick;

        match inner.entries.get_mut(key) {
            Some(entry) => {
                entry.last_used = tick;
                entry.access_count += 1;
                let hits = entry.hits.clone();
                inner.hits += 1;
                Some(hits)
            }
            None => {
                inner.misses += 1;
                None
            }
        }
    }

    pub fn insert(&self, key: &str, hits: Hits) {
        if !self.is_cacheable(key) {
            return;
        }
        let mut inner = self.lock();
        inner.tick += 1;
        let tick = inner.tick;

        if let Some(entry) = inner.entries.get_mut(key) {
            entry.hits = hits;
            entry.last_used = tick;
            return;
        }

        while inner.entries.len() >= self.max_entries {
            if !self.evict_one(&mut inner) {
                break;
            }
        }

        inner.entries.insert(
            key.to_string(),
            CacheEntry {
                hits,
                last_used: tick,
                access_count: 1,
            },
        );
    }

    /// Looks up `key`, computing and storing it on a miss.
    /// `compute` runs without the lock held, so two racing callers may both
    /// compute; the later insert simply overwrites an identical value.
    pub fn get_or_insert_with<F>(&self, key: &str, compute: F) -> Hits
    where
        F: FnOnce() -> Vec<usize>,
    {
        if !self.is_cacheable(key) {
            return compute().into();
        }
        if let Some(hits) = self.get(key) {
            return hits;
        }
        let hits: Hits = compute().into();
        self.insert(key, hits.clone());
        hits
    }

    fn evict_one(&self, inner: &mut Inner) -> bool {
        let victim = match self.policy {
            EvictionPolicy::Lru => inner
                .entries
                .iter()
                .min_by_key(|(_, e)| e.last_used)
                .map(|(k, _)| k.clone()),
            EvictionPolicy::Lfu => inner
                .entries
                .iter()
                .min_by_key(|(_, e)| (e.access_count, e.last_used))
                .map(|(k, _)| k.clone()),
        };

        match victim {
            Some(key) => {
                inner.entries.remove(&key);
                inner.evictions += 1;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        let inner = self.lock();
        let total = inner.hits + inner.misses;
        CacheStats {
            entries: inner.entries.len(),
            max_entries: self.max_entries,
            hits: inner.hits,
            misses: inner.misses,
            evictions: inner.evictions,
            hit_rate: if total > 0 {
                inner.hits as f64 / total as f64
            } else {
                0.0
            },
        }
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(256, 10)
    }
}
