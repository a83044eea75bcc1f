use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::errors::SMSystemError;

pub struct MokaCacheWrapper {
    inner: Cache<String, String>,
}

impl MokaCacheWrapper {
    pub fn new() -> Result<Self, SMSystemError> {
        let config = AppConfig::get();
        if config.cache.max_capacity == 0 {
            return Err(SMSystemError::cache_connection(
                "cache.max_capacity 不能为 0",
            ));
        }

        let inner = Cache::builder()
            .max_capacity(config.cache.max_capacity)
            .time_to_live(std::time::Duration::from_secs(config.cache.default_ttl))
            .build();

        debug!(
            "MokaCacheWrapper initialized with max capacity: {}",
            config.cache.max_capacity
        );
        Ok(Self { inner })
    }
}

#[async_trait]
impl ObjectCache for MokaCacheWrapper {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        if let Some(value) = self.inner.get(key).await {
            debug!("Successfully retrieved key: {}", key);
            CacheResult::Found(value)
        } else {
            debug!("Key not found in cache: {}", key);
            CacheResult::NotFound
        }
    }

    async fn insert_raw(&self, key: String, value: String, _ttl: u64) {
        // Moka 在创建时设置全局 TTL，逐条 ttl 参数不生效
        self.inner.insert(key, value).await;
    }

    async fn remove(&self, key: &str) {
        self.inner.invalidate(key).await;
    }

    async fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_and_get_round_trip() {
        let cache = MokaCacheWrapper::new().unwrap();
        cache
            .insert_raw("k".to_string(), "v".to_string(), 60)
            .await;

        match cache.get_raw("k").await {
            CacheResult::Found(v) => assert_eq!(v, "v"),
            CacheResult::NotFound => panic!("expected cache hit"),
        }

        cache.remove("k").await;
        assert!(matches!(cache.get_raw("k").await, CacheResult::NotFound));
    }
}
