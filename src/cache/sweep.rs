//! Background Sweeper
//!
//! Passive expiration has a gap: an item that expires and is never read
//! again stays in memory forever. The sweeper closes it by periodically
//! scanning the table and removing expired items in bulk.
//!
//! The loop runs as a tokio task and each cycle:
//! 1. Sleeps for the configured cleanup interval
//! 2. Collects expired keys under the read lock
//! 3. Deletes them under the write lock, if any were found
//!
//! The task stops when it receives a shutdown signal, sent by
//! `Cache::close` or by dropping the owning cache.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info};

use crate::cache::store::Table;

/// Handle to the running background sweep task.
///
/// Stopping is idempotent. When the handle is dropped, the task is stopped.
#[derive(Debug)]
pub(crate) struct Sweeper {
    /// Sender to signal shutdown
    shutdown_tx: watch::Sender<bool>,
}

impl Sweeper {
    /// Starts the sweep loop as a background task.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime. The check runs up front so
    /// the failure is a clear message instead of a cryptic panic from
    /// `tokio::spawn`.
    pub(crate) fn start<V>(table: Arc<Table<V>>, interval: Duration) -> Self
    where
        V: Send + Sync + 'static,
    {
        if tokio::runtime::Handle::try_current().is_err() {
            panic!(
                "a cache with a positive cleanup interval runs its sweeper \
                 on a tokio runtime; construct the cache from runtime \
                 context or pass a zero cleanup interval"
            );
        }

        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        tokio::spawn(sweep_loop(table, interval, shutdown_rx));

        info!(interval_ms = interval.as_millis() as u64, "background sweeper started");

        Self { shutdown_tx }
    }

    /// Stops the sweep loop.
    ///
    /// This is called automatically when the handle is dropped.
    pub(crate) fn stop(&self) {
        let _ = self.shutdown_tx.send(true);
    }
}

impl Drop for Sweeper {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The perpetual sweep loop: sleep, sweep, repeat until shutdown.
async fn sweep_loop<V>(
    table: Arc<Table<V>>,
    interval: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) where
    V: Send + Sync + 'static,
{
    loop {
        // Wait out the interval or a shutdown signal, whichever comes first
        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            result = shutdown_rx.changed() => {
                if result.is_err() || *shutdown_rx.borrow() {
                    debug!("sweeper received shutdown signal");
                    return;
                }
            }
        }

        let removed = table.sweep_expired();
        if removed > 0 {
            debug!(removed, "expired items reclaimed");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cache::Cache;
    use std::time::Duration;

    #[tokio::test]
    async fn test_sweeper_removes_expired_items() {
        let cache: Cache<i32> = Cache::new(Duration::ZERO, Duration::from_millis(50));

        cache.set("a", 1, Duration::from_millis(10)).unwrap();

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(cache.count(), 0);
    }

    #[tokio::test]
    async fn test_count_drops_only_after_sweep() {
        let cache: Cache<i32> = Cache::new(Duration::ZERO, Duration::from_millis(80));

        cache.set("a", 1, Duration::from_millis(10)).unwrap();

        // Expired but not yet swept: a read miss that still counts.
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.count(), 1);

        // Past the cleanup interval the sweeper has removed it.
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(cache.count(), 0);
    }

    #[tokio::test]
    async fn test_sweeper_preserves_live_items() {
        let cache: Cache<i32> = Cache::new(Duration::ZERO, Duration::from_millis(20));

        cache.set("short", 1, Duration::from_millis(10)).unwrap();
        cache.set("long", 2, Duration::from_secs(3600)).unwrap();
        cache.set("forever", 3, Duration::ZERO).unwrap();

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(cache.count(), 2);
        assert_eq!(cache.get("long"), Some(2));
        assert_eq!(cache.get("forever"), Some(3));
    }

    #[tokio::test]
    async fn test_close_stops_sweeper() {
        let cache: Cache<i32> = Cache::new(Duration::ZERO, Duration::from_millis(20));
        cache.close();

        cache.set("a", 1, Duration::from_millis(10)).unwrap();

        tokio::time::sleep(Duration::from_millis(150)).await;

        // No sweeps after close: passive expiration only.
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.count(), 1);
    }

    #[tokio::test]
    async fn test_close_is_idempotent() {
        let cache: Cache<i32> = Cache::new(Duration::ZERO, Duration::from_millis(20));

        cache.close();
        cache.close();

        cache.set("a", 1, Duration::ZERO).unwrap();
        assert_eq!(cache.get("a"), Some(1));
    }

    #[test]
    #[should_panic(expected = "tokio runtime")]
    fn test_sweeper_requires_runtime() {
        // No tokio runtime here, so a positive interval must panic.
        let _cache: Cache<i32> = Cache::new(Duration::ZERO, Duration::from_millis(10));
    }
}
