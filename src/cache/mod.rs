//! 进程内对象缓存，JWT 校验后的用户信息走这里

mod moka;

pub use moka::MokaCacheWrapper;

use crate::errors::Result;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// 缓存查询结果
pub enum CacheResult<T> {
    Found(T),
    NotFound,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}

/// 类型化读取，反序列化失败视为未命中
pub async fn get_object<T: DeserializeOwned>(
    cache: &dyn ObjectCache,
    key: &str,
) -> CacheResult<T> {
    match cache.get_raw(key).await {
        CacheResult::Found(raw) => match serde_json::from_str(&raw) {
            Ok(value) => CacheResult::Found(value),
            Err(_) => {
                cache.remove(key).await;
                CacheResult::NotFound
            }
        },
        CacheResult::NotFound => CacheResult::NotFound,
    }
}

/// 类型化写入，序列化失败时静默跳过（缓存不是关键路径）
pub async fn insert_object<T: Serialize>(cache: &dyn ObjectCache, key: String, value: &T, ttl: u64) {
    if let Ok(raw) = serde_json::to_string(value) {
        cache.insert_raw(key, raw, ttl).await;
    }
}

pub fn create_cache() -> Result<Arc<dyn ObjectCache>> {
    let cache = MokaCacheWrapper::new()?;
    Ok(Arc::new(cache))
}
