//! # EmberCache - An In-Process Key-Value Cache with TTL Expiration
//!
//! EmberCache is an embeddable, thread-safe, in-memory key-value cache.
//! Items carry an optional time-to-live and are reclaimed both passively
//! (expired items read as absent) and actively (a background sweeper removes
//! them in bulk). There is no persistence, no network surface, and no
//! memory-bounded eviction: capacity is bounded only by TTL expiry.
//!
//! ## Features
//!
//! - **Thread-Safe**: a single reader/writer lock lets concurrent readers
//!   proceed in parallel while writers stay exclusive
//! - **TTL Support**: per-item lifetimes with a configurable default, and
//!   zero meaning "never expires"
//! - **Lazy + Active Expiry**: expired items are misses on read, and a
//!   background tokio task sweeps them out of memory
//! - **Insert-Only Set**: `set` never overwrites; replacing a key is an
//!   explicit `delete` + `set`
//! - **Clean Teardown**: the sweeper stops on `close` or drop
//!
//! ## Quick Start
//!
//! ```
//! use embercache::Cache;
//! use std::time::Duration;
//!
//! // No default lifetime, no background sweeper (no runtime needed)
//! let cache: Cache<String> = Cache::new(Duration::ZERO, Duration::ZERO);
//!
//! // Store a value with a 60 second lifetime
//! cache.set("session", "token123".to_string(), Duration::from_secs(60)).unwrap();
//!
//! // Read it back
//! assert_eq!(cache.get("session"), Some("token123".to_string()));
//!
//! // A second set on the same key is refused
//! assert!(cache.set("session", "other".to_string(), Duration::ZERO).is_err());
//! ```
//!
//! With a positive cleanup interval the cache starts its background sweeper,
//! which needs a tokio runtime:
//!
//! ```ignore
//! use embercache::Cache;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     // Items default to a 5 minute lifetime; sweep every 30 seconds
//!     let cache: Cache<Vec<u8>> =
//!         Cache::new(Duration::from_secs(300), Duration::from_secs(30));
//!
//!     cache.set("blob", vec![1, 2, 3], Duration::ZERO).unwrap();
//!
//!     // ... later, stop the sweeper explicitly (dropping the cache also stops it)
//!     cache.close();
//! }
//! ```
//!
//! ## Module Overview
//!
//! - [`cache`]: the entry table, item type, and background sweeper
//! - [`error`]: the two domain errors, `KeyExists` and `KeyNotFound`

pub mod cache;
pub mod error;

// Re-export commonly used types for convenience
pub use cache::{Cache, CacheConfig, Item};
pub use error::{CacheError, Result};

/// Version of EmberCache
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
