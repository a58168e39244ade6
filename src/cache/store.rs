//! Cache Store
//!
//! The entry table: a `RwLock`-guarded `HashMap` owning all stored items,
//! plus the operations callers invoke directly on their own thread.
//!
//! ## Design Decisions
//!
//! 1. **Single Lock**: one reader/writer lock over a plain map. Multiple
//!    concurrent readers proceed in parallel; writers are exclusive. At this
//!    scale sharding buys nothing.
//! 2. **Lazy Expiry**: read operations treat an expired item as absent
//!    without removing it; physical removal is the sweeper's job (or an
//!    explicit `delete`). `count` reports physical cardinality, so an
//!    expired-but-unswept item is invisible to `get` yet still counted.
//! 3. **Insert-Only Set**: `set` refuses to overwrite. Check and insert
//!    happen under one write-lock acquisition, so two racing sets on the
//!    same key cannot both observe it as absent.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use crate::cache::entry::Item;
use crate::cache::sweep::Sweeper;
use crate::error::{CacheError, Result};

/// Configuration for a [`Cache`].
///
/// The default configuration stores items forever and never sweeps: no
/// expiration, no background task, no runtime requirement.
#[derive(Debug, Clone, Default)]
pub struct CacheConfig {
    /// Lifetime applied when `set` is called with a zero duration.
    /// Zero means items never expire by default.
    pub default_lifetime: Duration,
    /// Sleep period between background sweeps. Zero disables active
    /// reclamation entirely; only passive, read-time expiration applies.
    pub cleanup_interval: Duration,
}

impl CacheConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lifetime used when `set` receives a zero duration.
    pub fn with_default_lifetime(mut self, lifetime: Duration) -> Self {
        self.default_lifetime = lifetime;
        self
    }

    /// Sets the sleep period between background sweeps.
    pub fn with_cleanup_interval(mut self, interval: Duration) -> Self {
        self.cleanup_interval = interval;
        self
    }
}

/// The entry table shared between cache handles and the background sweeper.
#[derive(Debug)]
pub(crate) struct Table<V> {
    items: RwLock<HashMap<String, Item<V>>>,
    default_lifetime: Duration,
}

impl<V> Table<V> {
    /// Removes expired items in two phases: collect expired keys under the
    /// read lock so readers stay unblocked during the scan, then delete
    /// under the write lock.
    ///
    /// Expiry is re-verified per key at delete time: a `rename` can move a
    /// live item onto a key that was scanned as expired.
    ///
    /// # Returns
    ///
    /// The number of items removed.
    pub(crate) fn sweep_expired(&self) -> usize {
        let now = Instant::now();

        let expired: Vec<String> = {
            let items = self.items.read().unwrap();
            items
                .iter()
                .filter(|(_, item)| item.is_expired_at(now))
                .map(|(key, _)| key.clone())
                .collect()
        };

        if expired.is_empty() {
            return 0;
        }

        let mut items = self.items.write().unwrap();
        let mut removed = 0;
        for key in expired {
            if items.get(&key).map(|item| item.is_expired()).unwrap_or(false) {
                items.remove(&key);
                removed += 1;
            }
        }
        removed
    }
}

/// An in-process key-value cache with per-item TTL expiration.
///
/// All operations are thread-safe; wrap the cache in an `Arc` to share it
/// across threads. If constructed with a positive cleanup interval, a
/// background sweeper reclaims expired items until [`close`](Cache::close)
/// is called or the cache is dropped.
///
/// # Example
///
/// ```
/// use embercache::Cache;
/// use std::time::Duration;
///
/// let cache: Cache<String> = Cache::new(Duration::ZERO, Duration::ZERO);
///
/// cache.set("session", "token123".to_string(), Duration::from_secs(60)).unwrap();
/// assert_eq!(cache.get("session"), Some("token123".to_string()));
/// ```
#[derive(Debug)]
pub struct Cache<V> {
    table: Arc<Table<V>>,
    sweeper: Option<Sweeper>,
}

impl<V: Clone + Send + Sync + 'static> Cache<V> {
    /// Creates a new cache.
    ///
    /// `default_lifetime` is applied when a `set` call passes a zero
    /// duration; zero here means such items never expire. A positive
    /// `cleanup_interval` starts the background sweeper with that sleep
    /// period between sweeps; zero disables active reclamation.
    ///
    /// # Panics
    ///
    /// Panics if `cleanup_interval` is positive and no tokio runtime is
    /// available to run the sweeper on.
    pub fn new(default_lifetime: Duration, cleanup_interval: Duration) -> Self {
        Self::with_config(CacheConfig {
            default_lifetime,
            cleanup_interval,
        })
    }

    /// Creates a new cache from a [`CacheConfig`].
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`new`](Cache::new).
    pub fn with_config(config: CacheConfig) -> Self {
        let table = Arc::new(Table {
            items: RwLock::new(HashMap::new()),
            default_lifetime: config.default_lifetime,
        });

        let sweeper = if config.cleanup_interval > Duration::ZERO {
            Some(Sweeper::start(Arc::clone(&table), config.cleanup_interval))
        } else {
            None
        };

        Self { table, sweeper }
    }

    /// Stores a value under `key`.
    ///
    /// A zero `lifetime` falls back to the configured default lifetime; a
    /// zero effective lifetime means the item never expires.
    ///
    /// `set` never overwrites. It fails with [`CacheError::KeyExists`] if
    /// the key is physically present, including an expired item the sweeper
    /// has not removed yet; replacing a key goes through [`delete`](Cache::delete)
    /// and a fresh `set`.
    pub fn set(&self, key: impl Into<String>, value: V, lifetime: Duration) -> Result<()> {
        let key = key.into();
        let lifetime = if lifetime > Duration::ZERO {
            lifetime
        } else {
            self.table.default_lifetime
        };

        let mut items = self.table.items.write().unwrap();
        if items.contains_key(&key) {
            return Err(CacheError::KeyExists(key));
        }
        items.insert(key, Item::new(value, lifetime));
        Ok(())
    }

    /// Retrieves the value stored under `key`.
    ///
    /// Returns `None` if the key is absent or expired. An expired item is
    /// not removed by this call; it stays in the table for the sweeper.
    pub fn get(&self, key: &str) -> Option<V> {
        let items = self.table.items.read().unwrap();
        items
            .get(key)
            .filter(|item| !item.is_expired())
            .map(|item| item.value.clone())
    }

    /// Retrieves the full item stored under `key`, metadata included.
    ///
    /// Same lookup and expiration semantics as [`get`](Cache::get).
    pub fn get_item(&self, key: &str) -> Option<Item<V>> {
        let items = self.table.items.read().unwrap();
        items.get(key).filter(|item| !item.is_expired()).cloned()
    }

    /// Checks if `key` holds a live (present and unexpired) item.
    pub fn contains(&self, key: &str) -> bool {
        let items = self.table.items.read().unwrap();
        items.get(key).map(|item| !item.is_expired()).unwrap_or(false)
    }

    /// Removes the item stored under `key`.
    ///
    /// Deletes regardless of expiration status, so an expired-but-unswept
    /// item can be removed explicitly. Fails with
    /// [`CacheError::KeyNotFound`] only if the key is physically absent.
    pub fn delete(&self, key: &str) -> Result<()> {
        let mut items = self.table.items.write().unwrap();
        if items.remove(key).is_some() {
            Ok(())
        } else {
            Err(CacheError::KeyNotFound(key.to_string()))
        }
    }

    /// Moves the item stored under `key` to `new_key`, preserving its value,
    /// creation time, and expiration instant.
    ///
    /// An existing item at `new_key` is silently overwritten. The move
    /// happens under one write-lock acquisition, so no reader can observe a
    /// state where both keys miss the item.
    ///
    /// Fails with [`CacheError::KeyNotFound`] if `key` is absent or expired.
    pub fn rename(&self, key: &str, new_key: impl Into<String>) -> Result<()> {
        let mut items = self.table.items.write().unwrap();
        match items.remove(key) {
            Some(item) if !item.is_expired() => {
                items.insert(new_key.into(), item);
                Ok(())
            }
            Some(item) => {
                // Expired source goes back in place for the sweeper.
                items.insert(key.to_string(), item);
                Err(CacheError::KeyNotFound(key.to_string()))
            }
            None => Err(CacheError::KeyNotFound(key.to_string())),
        }
    }

    /// Duplicates the item stored under `key` to `new_key`, leaving the
    /// source in place. Afterwards both keys hold independent items with the
    /// same value, creation time, and expiration instant.
    ///
    /// An existing item at `new_key` is silently overwritten.
    ///
    /// Fails with [`CacheError::KeyNotFound`] if `key` is absent or expired.
    pub fn copy(&self, key: &str, new_key: impl Into<String>) -> Result<()> {
        let mut items = self.table.items.write().unwrap();
        let item = match items.get(key) {
            Some(item) if !item.is_expired() => item.clone(),
            _ => return Err(CacheError::KeyNotFound(key.to_string())),
        };
        items.insert(new_key.into(), item);
        Ok(())
    }

    /// Returns the number of items physically present in the table,
    /// **including expired items the sweeper has not removed yet**.
    ///
    /// This is a raw cardinality, not a count of `get`-visible items.
    pub fn count(&self) -> usize {
        self.table.items.read().unwrap().len()
    }

    /// Returns true if the table holds no items at all.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Removes every item from the table, expired or not.
    pub fn clear(&self) {
        self.table.items.write().unwrap().clear();
    }

    /// Removes all expired items right now, on the caller's thread.
    ///
    /// This is the primitive the background sweeper runs on its interval;
    /// it is public so embedders running with a zero cleanup interval can
    /// reclaim memory on their own schedule.
    ///
    /// # Returns
    ///
    /// The number of items removed.
    pub fn sweep_expired(&self) -> usize {
        self.table.sweep_expired()
    }

    /// Stops the background sweeper, if one is running.
    ///
    /// Idempotent. Passive, read-time expiration keeps working after close;
    /// only active reclamation stops. Dropping the cache closes it too.
    pub fn close(&self) {
        if let Some(sweeper) = &self.sweeper {
            sweeper.stop();
        }
    }
}
