use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::Error;
use crate::cache::CacheClient;

#[derive(Debug, Clone)]
struct StoredValue {
    data: String,
    expires_at: Option<Instant>,
}

impl StoredValue {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.map(|expires| expires > now).unwrap_or(true)
    }
}

/// An in-memory cache client.
///
/// Entries honour their TTL. Reads skip expired entries; they are swept from
/// the map on the next `set` or `len`. Clones share the same underlying map.
///
/// ### Note
///
/// Data is lost with the process and is not visible to other services, so
/// this is mostly useful for tests and local development.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    data: Arc<RwLock<HashMap<String, StoredValue>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.cleanup_expired();
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn cleanup_expired(&self) {
        let now = Instant::now();
        self.data.write().retain(|_, value| value.is_live(now));
    }
}

impl CacheClient for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let data = self.data.read();
        Ok(data
            .get(key)
            .filter(|value| value.is_live(Instant::now()))
            .map(|value| value.data.clone()))
    }

    async fn set(&self, key: &str, value: &str, ttl_secs: i64) -> Result<bool, Error> {
        self.cleanup_expired();

        // a TTL past what `Instant` can represent is stored without an expiry
        let expires_at = if ttl_secs > 0 {
            Instant::now().checked_add(Duration::from_secs(ttl_secs as u64))
        } else {
            None
        };

        self.data.write().insert(
            key.to_string(),
            StoredValue {
                data: value.to_string(),
                expires_at,
            },
        );

        Ok(true)
    }

    async fn delete(&self, key: &str) -> Result<bool, Error> {
        let removed = self.data.write().remove(key);
        Ok(removed.is_some_and(|value| value.is_live(Instant::now())))
    }
}
