//! Cache Engine Module
//!
//! This module provides the whole cache engine: the entry table with its
//! mutation and lookup operations, and the background sweeper that reclaims
//! expired items.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 Cache<V>                    │
//! │  ┌───────────────────────────────────────┐  │
//! │  │    RwLock<HashMap<String, Item<V>>>   │  │
//! │  └───────────────────────────────────────┘  │
//! └─────────────────────────────────────────────┘
//!                       ▲
//!                       │
//!         ┌─────────────┴─────────────┐
//!         │         Sweeper           │
//!         │  (Background Tokio Task)  │
//!         └───────────────────────────┘
//! ```
//!
//! ## Expiration
//!
//! Items with a lifetime expire in two ways:
//! 1. **Passive**: reads treat an expired item as absent without removing it
//! 2. **Active**: the background sweeper periodically deletes expired items
//!
//! `count` reports physical cardinality, so an expired item the sweeper has
//! not reached yet is invisible to `get` but still counted.
//!
//! ## Example
//!
//! ```
//! use embercache::Cache;
//! use std::time::Duration;
//!
//! // No default lifetime, no background sweeper
//! let cache: Cache<&str> = Cache::new(Duration::ZERO, Duration::ZERO);
//!
//! cache.set("name", "ember", Duration::from_secs(60)).unwrap();
//! assert_eq!(cache.get("name"), Some("ember"));
//! assert_eq!(cache.count(), 1);
//! ```

pub mod entry;
pub mod store;

mod sweep;

// Re-export commonly used types
pub use entry::Item;
pub use store::{Cache, CacheConfig};
