use lru::LruCache;
use std::future::Future;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex as TokioMutex, OnceCell};

use crate::types::CacheKey;

/// Default lifetime of a cached result
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

struct CacheEntry<V> {
    created: Instant,
    value: Arc<OnceCell<V>>,
}

/// Memoizes results per account for a bounded time window.
///
/// Callers asking for the same key while a computation is in flight wait
/// for that computation instead of starting their own. Failed computations
/// are not stored.
pub struct CacheManager<V> {
    entries: TokioMutex<LruCache<CacheKey, CacheEntry<V>>>,
    ttl: Duration,
}

impl<V: Clone> CacheManager<V> {
    /// Create a new cache manager holding at most `capacity` accounts
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: TokioMutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    /// Return the cached value for `key`, or run `compute` and store its
    /// successful result
    pub async fn get_or_try_compute<F, Fut, E>(&self, key: &CacheKey, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let cell = self.cell_for(key).await;
        cell.get_or_try_init(compute).await.cloned()
    }

    /// Retrieve a fresh, completed result from the cache
    pub async fn get(&self, key: &CacheKey) -> Option<V> {
        let mut entries = self.entries.lock().await;
        match entries.get(key) {
            Some(entry) if entry.created.elapsed() < self.ttl => entry.value.get().cloned(),
            _ => None,
        }
    }

    /// Drop the result stored for `key`
    pub async fn invalidate(&self, key: &CacheKey) {
        self.entries.lock().await.pop(key);
    }

    /// Clear the cache
    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    async fn cell_for(&self, key: &CacheKey) -> Arc<OnceCell<V>> {
        let mut entries = self.entries.lock().await;
        if let Some(entry) = entries.get(key) {
            if entry.created.elapsed() < self.ttl {
                return Arc::clone(&entry.value);
            }
        }

        let value = Arc::new(OnceCell::new());
        entries.put(
            key.clone(),
            CacheEntry {
                created: Instant::now(),
                value: Arc::clone(&value),
            },
        );
        value
    }
}

impl<V: Clone> Default for CacheManager<V> {
    fn default() -> Self {
        Self::new(64, DEFAULT_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    async fn counted(calls: &AtomicUsize, value: u32) -> Result<u32, String> {
        calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(20)).await;
        Ok(value)
    }

    #[tokio::test]
    async fn test_repeated_calls_are_memoized() {
        let cache = CacheManager::default();
        let calls = AtomicUsize::new(0);
        let key = CacheKey::new("octocat");

        let first = cache.get_or_try_compute(&key, || counted(&calls, 7)).await;
        let second = cache.get_or_try_compute(&key, || counted(&calls, 9)).await;

        assert_eq!(first, Ok(7));
        assert_eq!(second, Ok(7));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.get(&key).await, Some(7));
    }

    #[tokio::test]
    async fn test_concurrent_calls_share_one_computation() {
        let cache = CacheManager::default();
        let calls = AtomicUsize::new(0);
        let key = CacheKey::new("octocat");

        let (a, b) = tokio::join!(
            cache.get_or_try_compute(&key, || counted(&calls, 1)),
            cache.get_or_try_compute(&key, || counted(&calls, 2)),
        );

        assert_eq!(a, b);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let cache = CacheManager::default();
        let calls = AtomicUsize::new(0);

        let a = cache
            .get_or_try_compute(&CacheKey::new("a"), || counted(&calls, 1))
            .await;
        let b = cache
            .get_or_try_compute(&CacheKey::new("b"), || counted(&calls, 2))
            .await;

        assert_eq!((a, b), (Ok(1), Ok(2)));
        assert_eq!(cache.len().await, 2);
    }

    #[tokio::test]
    async fn test_expired_entries_are_recomputed() {
        let cache = CacheManager::new(4, Duration::ZERO);
        let calls = AtomicUsize::new(0);
        let key = CacheKey::new("octocat");

        cache.get_or_try_compute(&key, || counted(&calls, 1)).await.unwrap();
        let second = cache.get_or_try_compute(&key, || counted(&calls, 2)).await;

        assert_eq!(second, Ok(2));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.get(&key).await, None);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let cache: CacheManager<u32> = CacheManager::default();
        let key = CacheKey::new("octocat");

        let failed = cache
            .get_or_try_compute(&key, || async { Err::<u32, _>("boom".to_string()) })
            .await;
        assert!(failed.is_err());
        assert_eq!(cache.get(&key).await, None);

        let retried = cache
            .get_or_try_compute(&key, || async { Ok::<_, String>(3) })
            .await;
        assert_eq!(retried, Ok(3));
    }

    #[tokio::test]
    async fn test_invalidate_and_clear() {
        let cache = CacheManager::default();
        let calls = AtomicUsize::new(0);
        let key = CacheKey::new("octocat");

        cache.get_or_try_compute(&key, || counted(&calls, 1)).await.unwrap();
        cache.invalidate(&key).await;
        assert_eq!(cache.get(&key).await, None);

        cache.get_or_try_compute(&key, || counted(&calls, 1)).await.unwrap();
        cache.clear().await;
        assert_eq!(cache.len().await, 0);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_capacity_evicts_least_recent() {
        let cache = CacheManager::new(1, DEFAULT_TTL);
        let calls = AtomicUsize::new(0);

        cache
            .get_or_try_compute(&CacheKey::new("a"), || counted(&calls, 1))
            .await
            .unwrap();
        cache
            .get_or_try_compute(&CacheKey::new("b"), || counted(&calls, 2))
            .await
            .unwrap();

        assert_eq!(cache.get(&CacheKey::new("a")).await, None);
        assert_eq!(cache.get(&CacheKey::new("b")).await, Some(2));
    }
}
