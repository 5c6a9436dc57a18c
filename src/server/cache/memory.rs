use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use tokio::time::Instant;

use crate::server::{cache::CacheStore, error::Error};

struct Entry {
    value: String,
    expires_at: Instant,
}

/// In-process cache for single instance deployments and tests.
///
/// Expired entries are dropped when read, and every write sweeps all expired entries so
/// keys that are never read again do not accumulate.
#[derive(Clone, Default)]
pub struct MemoryCache {
    entries: Arc<Mutex<HashMap<String, Entry>>>,
}

impl MemoryCache {
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Entry>>, Error> {
        self.entries
            .lock()
            .map_err(|e| Error::InternalError(format!("Memory cache lock poisoned: {}", e)))
    }
}

impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let mut entries = self.lock()?;

        let Some(entry) = entries.get(key) else {
            return Ok(None);
        };

        if entry.expires_at <= Instant::now() {
            entries.remove(key);
            return Ok(None);
        }

        Ok(Some(entry.value.clone()))
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), Error> {
        let now = Instant::now();
        let mut entries = self.lock()?;

        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(
            key.to_string(),
            Entry {
                value,
                expires_at: now + ttl,
            },
        );

        Ok(())
    }
}
