#![allow(dead_code)]

use json_session::cache::CacheClient;
use json_session::cache::memory::MemoryCache;
use json_session::{Error, SessionMap};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct TestUser {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetCall {
    pub key: String,
    pub value: String,
    pub ttl_secs: i64,
}

/// A cache that serves from a `MemoryCache` and records every call.
#[derive(Debug, Clone, Default)]
pub struct RecordingCache {
    inner: MemoryCache,
    sets: Arc<Mutex<Vec<SetCall>>>,
    deletes: Arc<Mutex<Vec<String>>>,
    failing: Arc<AtomicBool>,
}

impl RecordingCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sets(&self) -> Vec<SetCall> {
        self.sets.lock().clone()
    }

    pub fn deletes(&self) -> Vec<String> {
        self.deletes.lock().clone()
    }

    pub fn inner(&self) -> &MemoryCache {
        &self.inner
    }

    /// Makes every subsequent call fail as if the backend were unreachable.
    pub fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::Relaxed);
    }

    fn check(&self) -> Result<(), Error> {
        if self.failing.load(Ordering::Relaxed) {
            return Err(Error::Backend("connection refused".to_string()));
        }
        Ok(())
    }
}

impl CacheClient for RecordingCache {
    async fn get(&self, key: &str) -> Result<Option<String>, Error> {
        self.check()?;
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str, ttl_secs: i64) -> Result<bool, Error> {
        self.check()?;
        self.sets.lock().push(SetCall {
            key: key.to_string(),
            value: value.to_string(),
            ttl_secs,
        });
        self.inner.set(key, value, ttl_secs).await
    }

    async fn delete(&self, key: &str) -> Result<bool, Error> {
        self.check()?;
        self.deletes.lock().push(key.to_string());
        self.inner.delete(key).await
    }
}

pub fn create_test_session() -> SessionMap {
    let mut session = SessionMap::new();
    session
        .insert(
            "user",
            &TestUser {
                id: 42,
                name: "Test User".to_string(),
            },
        )
        .unwrap();
    session.insert("flash", &["ok"]).unwrap();
    session
}
