//! Read-through cache for derived football aggregates.
//!
//! Standings and form are computed from stored matches and cached as JSON under
//! `touchline:`-prefixed keys with a fixed TTL. The cache is an accelerant only: a failed
//! read or write is logged and the caller continues against the database.

pub mod memory;
pub mod redis;

use std::{future::Future, time::Duration};

use serde::{de::DeserializeOwned, Serialize};

use crate::server::error::Error;

pub use memory::MemoryCache;
pub use redis::RedisCache;

/// Time-to-live applied to cached aggregates.
pub const CACHE_TTL: Duration = Duration::from_secs(60);

/// Cache key for a league's standings table.
pub fn standings_key(league_id: i32) -> String {
    format!("touchline:standings:league:{}", league_id)
}

/// Cache key for a team's form limited to `limit` matches.
pub fn form_key(team_id: i32, limit: u64) -> String {
    format!("touchline:form:team:{}:{}", team_id, limit)
}

/// Key-value store with per-entry expiry.
pub trait CacheStore: Send + Sync {
    /// Get the value stored under `key`, `None` when missing or expired.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, Error>> + Send;

    /// Store `value` under `key`, expiring after `ttl`.
    fn set(
        &self,
        key: &str,
        value: String,
        ttl: Duration,
    ) -> impl Future<Output = Result<(), Error>> + Send;
}

/// Cache backend selected at startup.
#[derive(Clone)]
pub enum AppCache {
    Redis(RedisCache),
    Memory(MemoryCache),
}

impl CacheStore for AppCache {
    async fn get(&self, key: &str) -> Result<Option<String>, Error> {
        match self {
            Self::Redis(cache) => cache.get(key).await,
            Self::Memory(cache) => cache.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), Error> {
        match self {
            Self::Redis(cache) => cache.set(key, value, ttl).await,
            Self::Memory(cache) => cache.set(key, value, ttl).await,
        }
    }
}

/// Get and deserialize a cached JSON value.
///
/// Store errors and undecodable values are logged and treated as a cache miss.
pub async fn get_json<C, T>(cache: &C, key: &str) -> Option<T>
where
    C: CacheStore,
    T: DeserializeOwned,
{
    let value = match cache.get(key).await {
        Ok(Some(value)) => value,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key = %key, "Failed to read from cache: {}", e);
            return None;
        }
    };

    match serde_json::from_str(&value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::warn!(key = %key, "Discarding undecodable cache entry: {}", e);
            None
        }
    }
}

/// Serialize and cache a JSON value with [`CACHE_TTL`].
///
/// Failures are logged and otherwise ignored.
pub async fn set_json<C, T>(cache: &C, key: &str, value: &T)
where
    C: CacheStore,
    T: Serialize,
{
    let encoded = match serde_json::to_string(value) {
        Ok(encoded) => encoded,
        Err(e) => {
            tracing::warn!(key = %key, "Failed to encode cache entry: {}", e);
            return;
        }
    };

    if let Err(e) = cache.set(key, encoded, CACHE_TTL).await {
        tracing::warn!(key = %key, "Failed to write to cache: {}", e);
    }
}
