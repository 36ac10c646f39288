use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;

use super::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::errors::Result;

/// 基于 moka 的进程内缓存
pub struct MemoryObjectCache {
    cache: Cache<String, String>,
    default_ttl: Duration,
}

impl MemoryObjectCache {
    pub fn new() -> Self {
        let cfg = &AppConfig::get().cache;
        let cache = Cache::builder()
            .max_capacity(cfg.memory.max_capacity)
            .time_to_live(Duration::from_secs(cfg.default_ttl))
            .build();
        Self {
            cache,
            default_ttl: Duration::from_secs(cfg.default_ttl),
        }
    }
}

impl Default for MemoryObjectCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ObjectCache for MemoryObjectCache {
    async fn get_raw(&self, key: &str) -> Result<CacheResult<String>> {
        match self.cache.get(key).await {
            Some(v) => Ok(CacheResult::Found(v)),
            None => Ok(CacheResult::NotFound),
        }
    }

    async fn insert_raw(&self, key: &str, value: String, ttl: Option<Duration>) -> Result<()> {
        // moka 的 TTL 在构建时全局设定，不支持单键覆盖
        let _ = ttl.unwrap_or(self.default_ttl);
        self.cache.insert(key.to_string(), value).await;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.cache.invalidate(key).await;
        Ok(())
    }
}
