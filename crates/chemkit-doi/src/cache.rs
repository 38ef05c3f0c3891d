use std::hash::Hash;

use chemkit_core::{ChemError, ErrorInfo};
use chrono::{DateTime, Duration, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

fn default_capacity() -> usize {
    100
}

fn default_ttl_seconds() -> i64 {
    24 * 60 * 60
}

/// Cache sizing and expiry configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of live entries.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Lifetime of an entry, counted from insertion.
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: i64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            ttl_seconds: default_ttl_seconds(),
        }
    }
}

/// Running counters for cache activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that found nothing fresh.
    pub misses: u64,
    /// Entries dropped to make room.
    pub evictions: u64,
    /// Entries dropped because they outlived the TTL.
    pub expirations: u64,
}

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    inserted_at: DateTime<Utc>,
}

// A deadline past the representable range never expires.
fn expired<V>(entry: &CacheEntry<V>, ttl: Duration, now: DateTime<Utc>) -> bool {
    entry
        .inserted_at
        .checked_add_signed(ttl)
        .is_some_and(|deadline| now >= deadline)
}

/// Capacity-bounded map ordered from least to most recently used, with a
/// fixed time-to-live per entry.
#[derive(Debug, Clone)]
pub struct ExpiringCache<K, V> {
    entries: IndexMap<K, CacheEntry<V>>,
    capacity: usize,
    ttl: Duration,
    stats: CacheStats,
}

impl<K: Hash + Eq, V> ExpiringCache<K, V> {
    /// Builds an empty cache. Capacity and TTL must both be positive.
    pub fn new(config: &CacheConfig) -> Result<Self, ChemError> {
        if config.capacity == 0 {
            return Err(ChemError::Cache(ErrorInfo::new(
                "invalid-capacity",
                "cache capacity must be at least one entry",
            )));
        }
        if config.ttl_seconds <= 0 {
            return Err(ChemError::Cache(
                ErrorInfo::new("invalid-ttl", "cache TTL must be positive")
                    .with_context("ttl_seconds", config.ttl_seconds),
            ));
        }
        let ttl = Duration::try_seconds(config.ttl_seconds).ok_or_else(|| {
            ChemError::Cache(
                ErrorInfo::new("invalid-ttl", "cache TTL is out of range")
                    .with_context("ttl_seconds", config.ttl_seconds),
            )
        })?;
        Ok(Self {
            entries: IndexMap::with_capacity(config.capacity),
            capacity: config.capacity,
            ttl,
            stats: CacheStats::default(),
        })
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stored entries, fresh or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Activity counters since construction.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Looks up `key`, dropping it if expired and marking it most recent otherwise.
    pub fn get(&mut self, key: &K, now: DateTime<Utc>) -> Option<&V> {
        let Some(idx) = self.entries.get_index_of(key) else {
            self.stats.misses += 1;
            return None;
        };
        let (owned_key, entry) = self.entries.shift_remove_index(idx)?;
        if expired(&entry, self.ttl, now) {
            self.stats.expirations += 1;
            self.stats.misses += 1;
            return None;
        }
        self.stats.hits += 1;
        self.entries.insert(owned_key, entry);
        self.entries.last().map(|(_, entry)| &entry.value)
    }

    /// Stores `value`, evicting the least recently used entry when full.
    ///
    /// Re-inserting an existing key refreshes both its value and its timestamp.
    pub fn insert(&mut self, key: K, value: V, now: DateTime<Utc>) {
        if self.entries.shift_remove(&key).is_none()
            && self.entries.len() >= self.capacity
            && self.entries.shift_remove_index(0).is_some()
        {
            self.stats.evictions += 1;
        }
        self.entries.insert(
            key,
            CacheEntry {
                value,
                inserted_at: now,
            },
        );
    }

    /// Drops every expired entry and returns how many were removed.
    pub fn purge_expired(&mut self, now: DateTime<Utc>) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !expired(entry, ttl, now));
        let removed = before - self.entries.len();
        self.stats.expirations += removed as u64;
        removed
    }

    /// Removes every entry; counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Keys from least to most recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }
}
