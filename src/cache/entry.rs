//! Cache Items
//!
//! Defines the unit of storage: the caller's value plus expiration metadata.
//! The expiration instant is absolute rather than a countdown, so expiry
//! checks are a single comparison with no per-check arithmetic.

use std::time::{Duration, Instant};

/// A single stored item with its expiration metadata.
///
/// The value is an opaque payload; the cache never inspects it. Callers
/// receive clones of the value, never references into cache-internal state.
#[derive(Debug, Clone)]
pub struct Item<V> {
    /// The stored value.
    pub value: V,
    /// When this item was inserted. Informational only; expiry is decided
    /// solely by `expires_at`.
    pub created: Instant,
    /// Absolute expiration instant (`None` = never expires).
    pub expires_at: Option<Instant>,
}

impl<V> Item<V> {
    /// Creates a new item. A zero `lifetime` means the item never expires.
    pub(crate) fn new(value: V, lifetime: Duration) -> Self {
        let now = Instant::now();
        let expires_at = if lifetime > Duration::ZERO {
            Some(now + lifetime)
        } else {
            None
        };

        Self {
            value,
            created: now,
            expires_at,
        }
    }

    /// Checks if this item has expired.
    ///
    /// The boundary is exclusive: an item whose expiration instant is exactly
    /// `now` is still live.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Expiry check against an explicit clock reading, so one sweep pass can
    /// judge every item against the same instant.
    #[inline]
    pub(crate) fn is_expired_at(&self, now: Instant) -> bool {
        self.expires_at.map(|exp| now > exp).unwrap_or(false)
    }

    /// Returns the remaining time to live.
    ///
    /// # Returns
    ///
    /// - `Some(remaining)` if the item has an expiration and is still live
    /// - `Some(Duration::ZERO)` if the item has expired
    /// - `None` if the item never expires
    pub fn ttl_remaining(&self) -> Option<Duration> {
        self.expires_at
            .map(|exp| exp.saturating_duration_since(Instant::now()))
    }
}
