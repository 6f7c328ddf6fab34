//! Caching layer for train lists.
//!
//! A train list is fetched once per (origin, destination) pair and then
//! reused while the user changes the date, filter or sort. Entries expire
//! after a TTL so timetable changes eventually show up.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::{debug, info};

use crate::api::{ApiError, TrainsBackend};
use crate::domain::{StationCode, TrainRecord};

/// Cache key: (origin, destination).
type PairKey = (StationCode, StationCode);

/// Cached train list.
pub type TrainList = Arc<Vec<TrainRecord>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached station pairs.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(600),
            max_capacity: 500,
        }
    }
}

/// Cache of train lists keyed by station pair.
pub struct TrainListCache {
    lists: MokaCache<PairKey, TrainList>,
}

impl TrainListCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let lists = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { lists }
    }

    /// Get a cached list.
    pub async fn get(&self, key: &PairKey) -> Option<TrainList> {
        self.lists.get(key).await
    }

    /// Insert a list into the cache.
    pub async fn insert(&self, key: PairKey, list: TrainList) {
        self.lists.insert(key, list).await;
    }
}

/// Trains backend with caching.
///
/// Failed fetches are not cached, so the next request retries.
pub struct CachedTrainsClient {
    backend: TrainsBackend,
    cache: TrainListCache,
}

impl CachedTrainsClient {
    /// Create a new cached client.
    pub fn new(backend: TrainsBackend, cache_config: &CacheConfig) -> Self {
        Self {
            backend,
            cache: TrainListCache::new(cache_config),
        }
    }

    /// Get trains between two stations, using the cache if possible.
    pub async fn trains_between(
        &self,
        from: &StationCode,
        to: &StationCode,
    ) -> Result<TrainList, ApiError> {
        let key = (*from, *to);

        if let Some(cached) = self.cache.get(&key).await {
            debug!(%from, %to, trains = cached.len(), "train list cache hit");
            return Ok(cached);
        }

        let records = self.backend.trains_between(from, to).await?;
        info!(%from, %to, trains = records.len(), "fetched train list");

        let list = Arc::new(records);
        self.cache.insert(key, list.clone()).await;

        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockTrainsClient;
    use tempfile::tempdir;

    const RESPONSE: &str = r#"{
        "success": true,
        "data": [ { "train_base": { "train_no": "12301", "train_name": "HOWRAH RAJ EXP" } } ]
    }"#;

    fn code(s: &str) -> StationCode {
        StationCode::parse(s).unwrap()
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(600));
        assert_eq!(config.max_capacity, 500);
    }

    #[tokio::test]
    async fn cache_roundtrip() {
        let cache = TrainListCache::new(&CacheConfig::default());
        let key = (code("NDLS"), code("HWH"));
        assert!(cache.get(&key).await.is_none());

        let list = Arc::new(vec![TrainRecord::default()]);
        cache.insert(key, list.clone()).await;

        let cached = cache.get(&key).await.unwrap();
        assert!(Arc::ptr_eq(&cached, &list));

        // Direction matters
        assert!(cache.get(&(code("HWH"), code("NDLS"))).await.is_none());
    }

    #[tokio::test]
    async fn second_fetch_is_served_from_cache() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("NDLS_HWH.json"), RESPONSE).unwrap();
        let mock = MockTrainsClient::new(dir.path()).unwrap();
        let client = CachedTrainsClient::new(TrainsBackend::Mock(mock), &CacheConfig::default());

        let first = client
            .trains_between(&code("NDLS"), &code("HWH"))
            .await
            .unwrap();
        let second = client
            .trains_between(&code("NDLS"), &code("HWH"))
            .await
            .unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 1);
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("NDLS_HWH.json"), RESPONSE).unwrap();
        let mock = MockTrainsClient::new(dir.path()).unwrap();
        let client = CachedTrainsClient::new(TrainsBackend::Mock(mock), &CacheConfig::default());

        let key = (code("AAA"), code("BBB"));
        assert!(client.trains_between(&key.0, &key.1).await.is_err());
        assert!(client.cache.get(&key).await.is_none());

        // Still an error the second time, not a cached empty list
        assert!(client.trains_between(&key.0, &key.1).await.is_err());
    }
}
