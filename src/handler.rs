//! The session save handler.
//!
//! [`JsonSessionHandler`] implements the open/read/write/destroy/gc/close
//! lifecycle a host session subsystem drives once per request, keeping each
//! session as a JSON document under `sessions/{id}` in a [`CacheClient`].

use std::future::Future;
use std::sync::Arc;

use crate::cache::CacheClient;
use crate::{Error, Id, Result, SessionConfig, SessionMap, codec};

/// The lifecycle every session save handler implements.
///
/// A host calls `open` once per request, then `read`, lets the application
/// mutate the session, calls `write` (or `destroy`) and finally `close`.
/// `gc` may be called at any point.
pub trait SessionHandler: Send + Sync {
    /// Prepares the handler for a request. `save_path` is backend specific
    /// and may be ignored.
    fn open(&mut self, save_path: &str, name: &str) -> Result<bool>;

    /// Loads the session stored for `id`. An unknown id yields an empty session.
    fn read(&self, id: &Id) -> impl Future<Output = Result<SessionMap>> + Send;

    /// Persists `session` for `id`.
    fn write(&self, id: &Id, session: &SessionMap) -> impl Future<Output = Result<bool>> + Send;

    /// Removes the session stored for `id`.
    fn destroy(&self, id: &Id) -> impl Future<Output = Result<bool>> + Send;

    /// Collects sessions older than `max_lifetime` seconds.
    fn gc(&self, max_lifetime: i64) -> Result<bool>;

    fn close(&self) -> Result<bool>;
}

#[derive(Clone, Debug)]
struct Opened {
    name: String,
    lifetime: i64,
}

/// A session handler that stores sessions as JSON in a key-value cache.
///
/// Writing JSON rather than a Rust-specific encoding means other services,
/// in any language, can read the same session with a plain `GET sessions/{id}`.
/// Expiration is left entirely to the cache: every write carries the lifetime
/// captured at `open` as its TTL and `gc` does nothing.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use json_session::{Id, JsonSessionHandler, SessionConfig, SessionHandler, SessionMap};
/// use json_session::cache::memory::MemoryCache;
///
/// # async fn example() -> json_session::Result<()> {
/// let config = SessionConfig::build().gc_maxlifetime(1800);
/// let mut handler = JsonSessionHandler::new(Arc::new(MemoryCache::new()), config);
/// handler.open("", "SESSID")?;
///
/// let id = Id::from("abc123");
/// let mut session = handler.read(&id).await?;
/// session.insert("cart", &[1, 2, 3])?;
/// handler.write(&id, &session).await?;
/// handler.close()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct JsonSessionHandler<C: CacheClient> {
    client: Arc<C>,
    config: SessionConfig,
    opened: Option<Opened>,
}

impl<C> JsonSessionHandler<C>
where
    C: CacheClient,
{
    pub fn new(client: Arc<C>, config: SessionConfig) -> Self {
        Self {
            client,
            config,
            opened: None,
        }
    }

    pub fn client(&self) -> &Arc<C> {
        &self.client
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Changes to the configuration take effect at the next `open`.
    pub fn config_mut(&mut self) -> &mut SessionConfig {
        &mut self.config
    }

    /// The session name recorded by the last `open`.
    pub fn name(&self) -> Option<&str> {
        self.opened.as_ref().map(|opened| opened.name.as_str())
    }

    /// The TTL captured by the last `open`, used by every `write`.
    pub fn lifetime(&self) -> Option<i64> {
        self.opened.as_ref().map(|opened| opened.lifetime)
    }

    fn key(&self, id: &Id) -> String {
        id.cache_key(&self.config.key_prefix)
    }
}

impl<C> SessionHandler for JsonSessionHandler<C>
where
    C: CacheClient,
{
    fn open(&mut self, _save_path: &str, name: &str) -> Result<bool> {
        self.opened = Some(Opened {
            name: name.to_string(),
            lifetime: self.config.gc_maxlifetime,
        });
        tracing::debug!(
            session_name = name,
            lifetime = self.config.gc_maxlifetime,
            "opened session handler"
        );
        Ok(true)
    }

    #[tracing::instrument(name = "reading session from cache", skip(self))]
    async fn read(&self, id: &Id) -> Result<SessionMap> {
        let raw = self.client.get(&self.key(id)).await.map_err(|err| {
            tracing::error!(err = %err, "failed to read session from cache");
            err
        })?;

        let Some(raw) = raw else {
            tracing::debug!("no session stored");
            return Ok(SessionMap::new());
        };

        codec::decode(&raw).map_err(|err| {
            tracing::error!(err = %err, "stored session is not a JSON object");
            err
        })
    }

    #[tracing::instrument(name = "writing session to cache", skip(self, session))]
    async fn write(&self, id: &Id, session: &SessionMap) -> Result<bool> {
        let Some(lifetime) = self.lifetime() else {
            tracing::error!("the session handler has not been opened");
            return Err(Error::NotOpened);
        };

        let encoded = codec::encode(session).map_err(|err| {
            tracing::error!(err = %err, "failed to encode session");
            err
        })?;

        self.client
            .set(&self.key(id), &encoded, lifetime)
            .await
            .map_err(|err| {
                tracing::error!(err = %err, "failed to write session to cache");
                err
            })
    }

    #[tracing::instrument(name = "destroying session in cache", skip(self))]
    async fn destroy(&self, id: &Id) -> Result<bool> {
        self.client.delete(&self.key(id)).await.map_err(|err| {
            tracing::error!(err = %err, "failed to delete session from cache");
            err
        })
    }

    fn gc(&self, _max_lifetime: i64) -> Result<bool> {
        // entries expire through their cache TTL
        Ok(true)
    }

    fn close(&self) -> Result<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::memory::MemoryCache;

    fn handler(lifetime: i64) -> JsonSessionHandler<MemoryCache> {
        let config = SessionConfig::build().gc_maxlifetime(lifetime);
        JsonSessionHandler::new(Arc::new(MemoryCache::new()), config)
    }

    #[tokio::test]
    async fn test_open_records_name_and_lifetime() {
        let mut handler = handler(1800);
        assert!(handler.name().is_none());
        assert!(handler.lifetime().is_none());

        assert!(handler.open("/ignored", "SESSID").unwrap());
        assert_eq!(handler.name(), Some("SESSID"));
        assert_eq!(handler.lifetime(), Some(1800));
    }

    #[tokio::test]
    async fn test_write_before_open_fails() {
        let handler = handler(1800);
        let result = handler.write(&Id::from("a"), &SessionMap::new()).await;
        assert!(matches!(result, Err(Error::NotOpened)));
    }

    #[tokio::test]
    async fn test_read_rejects_non_object() {
        let handler = handler(1800);
        handler
            .client()
            .set("sessions/bad", "[1,2,3]", 0)
            .await
            .unwrap();

        let result = handler.read(&Id::from("bad")).await;
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[tokio::test]
    async fn test_key_prefix_is_configurable() {
        let config = SessionConfig::build().key_prefix("app:");
        let mut handler = JsonSessionHandler::new(Arc::new(MemoryCache::new()), config);
        handler.open("", "SESSID").unwrap();

        let mut session = SessionMap::new();
        session.insert("k", &"v").unwrap();
        handler.write(&Id::from("xyz"), &session).await.unwrap();

        let raw = handler.client().get("app:xyz").await.unwrap();
        assert_eq!(raw.as_deref(), Some(r#"{"k":"v"}"#));
        assert!(handler.client().get("sessions/xyz").await.unwrap().is_none());
    }

    #[test]
    fn test_gc_and_close_always_succeed() {
        let handler = handler(1800);
        assert!(handler.gc(0).unwrap());
        assert!(handler.gc(i64::MAX).unwrap());
        assert!(handler.close().unwrap());
    }
}
