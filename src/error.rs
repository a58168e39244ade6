//! Error types for cache operations.
//!
//! The cache has exactly two failure conditions, both returned synchronously
//! to the caller. Lookups (`get`, `get_item`, `count`) never fail; absence is
//! reported through `Option`, not an error.

use thiserror::Error;

/// Unified error type for cache operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// A `set` targeted a key that is already stored.
    ///
    /// `set` never overwrites, so callers replacing a key go through
    /// `delete` followed by a fresh `set`.
    #[error("key already exists: {0}")]
    KeyExists(String),

    /// A mutation targeted a key that is absent or expired.
    #[error("key not found: {0}")]
    KeyNotFound(String),
}

/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
