//! Memoizing stemmer wrapper.
//!
//! Indexing pipelines see the same surface forms over and over. The cache
//! stores `word -> stem` for up to `capacity` distinct inputs. When full it is
//! cleared and refilled, which keeps the hot path to a read lock and a hash
//! lookup.

use std::sync::atomic::{AtomicU64, Ordering};

use ahash::AHashMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::stemmer::Stemmer;

/// Default number of memoized words.
pub const DEFAULT_CACHE_CAPACITY: usize = 10_000;

/// Hit/miss counters for a [`CachedStemmer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

impl CacheStats {
    /// Fraction of lookups served from the cache.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// A stemmer that memoizes the results of another stemmer.
#[derive(Debug)]
pub struct CachedStemmer<S> {
    inner: S,
    capacity: usize,
    cache: RwLock<AHashMap<String, String>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<S: Stemmer> CachedStemmer<S> {
    /// Wrap `inner` with the default capacity.
    pub fn new(inner: S) -> Self {
        Self::with_capacity(inner, DEFAULT_CACHE_CAPACITY)
    }

    /// Wrap `inner`, memoizing at most `capacity` words.
    pub fn with_capacity(inner: S, capacity: usize) -> Self {
        CachedStemmer {
            inner,
            capacity: capacity.max(1),
            cache: RwLock::new(AHashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// The wrapped stemmer.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Current counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache.read().len(),
        }
    }

    /// Drop every memoized entry.
    pub fn clear(&self) {
        self.cache.write().clear();
    }
}

impl<S: Stemmer> Stemmer for CachedStemmer<S> {
    fn stem(&self, word: &str) -> String {
        if let Some(stemmed) = self.cache.read().get(word) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return stemmed.clone();
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let stemmed = self.inner.stem(word);

        let mut cache = self.cache.write();
        if cache.len() >= self.capacity && !cache.contains_key(word) {
            debug!(capacity = self.capacity, "stem cache full, clearing");
            cache.clear();
        }
        cache.insert(word.to_string(), stemmed.clone());

        stemmed
    }

    fn name(&self) -> &'static str {
        "cached"
    }
}
