//! 会话上下文缓存，减少认证中间件的数据库往返

pub mod memory;

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::errors::Result;

/// 缓存查询结果，区分未命中与命中空值
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> Result<CacheResult<String>>;
    async fn insert_raw(&self, key: &str, value: String, ttl: Option<Duration>) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
}

/// 类型化的读写封装，值走 JSON 序列化
pub async fn get_typed<T: DeserializeOwned>(
    cache: &dyn ObjectCache,
    key: &str,
) -> Result<CacheResult<T>> {
    match cache.get_raw(key).await? {
        CacheResult::Found(raw) => Ok(CacheResult::Found(serde_json::from_str(&raw)?)),
        CacheResult::NotFound => Ok(CacheResult::NotFound),
    }
}

pub async fn insert_typed<T: Serialize>(
    cache: &dyn ObjectCache,
    key: &str,
    value: &T,
    ttl: Option<Duration>,
) -> Result<()> {
    cache
        .insert_raw(key, serde_json::to_string(value)?, ttl)
        .await
}
