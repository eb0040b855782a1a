use fred::clients::Pool;
use fred::interfaces::KeysInterface;
use fred::types::Expiration;
use std::sync::Arc;

use crate::Error;
use crate::cache::CacheClient;

/// A redis cache client.
///
/// Each session is a plain string key holding the JSON document, so any
/// redis client in any language can `GET` it.
#[derive(Clone, Debug)]
pub struct RedisCache<C: KeysInterface + Clone + Send + Sync = Pool> {
    client: Arc<C>,
}

impl<C> RedisCache<C>
where
    C: KeysInterface + Clone + Send + Sync,
{
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Arc<C> {
        &self.client
    }
}

impl<C> CacheClient for RedisCache<C>
where
    C: KeysInterface + Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.client.get::<Option<String>, _>(key).await?)
    }

    async fn set(&self, key: &str, value: &str, ttl_secs: i64) -> Result<bool, Error> {
        let expiration = (ttl_secs > 0).then_some(Expiration::EX(ttl_secs));

        let _: () = self
            .client
            .set(key, value, expiration, None, false)
            .await?;

        Ok(true)
    }

    async fn delete(&self, key: &str) -> Result<bool, Error> {
        let deleted: i64 = self.client.del(key).await?;
        Ok(deleted > 0)
    }
}
