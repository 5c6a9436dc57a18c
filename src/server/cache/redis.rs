use std::time::Duration;

use fred::{prelude::*, types::Expiration};

use crate::server::{cache::CacheStore, error::Error};

/// Cache backed by the shared Redis/Valkey pool.
#[derive(Clone)]
pub struct RedisCache {
    pool: Pool,
}

impl RedisCache {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

impl CacheStore for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.pool.get::<Option<String>, _>(key).await?)
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), Error> {
        let expiration = Expiration::EX(ttl.as_secs().max(1) as i64);

        self.pool
            .set::<(), _, _>(key, value, Some(expiration), None, false)
            .await?;

        Ok(())
    }
}

#[cfg(all(test, feature = "redis-test"))]
mod tests {
    use super::*;

    async fn connect() -> RedisCache {
        let config = Config::from_url("redis://127.0.0.1:6379").unwrap();
        let pool = Pool::new(config, None, None, None, 1).unwrap();
        pool.init().await.unwrap();

        RedisCache::new(pool)
    }

    #[tokio::test]
    async fn round_trips_value_with_expiry() {
        let cache = connect().await;
        let key = "touchline:test:redis-cache";

        cache
            .set(key, "value".to_string(), Duration::from_secs(60))
            .await
            .unwrap();
        let value = cache.get(key).await.unwrap();
        let ttl: i64 = cache.pool.ttl(key).await.unwrap();

        assert_eq!(value, Some("value".to_string()));
        assert!(ttl > 0 && ttl <= 60);

        cache.pool.del::<(), _>(key).await.unwrap();
    }
}
