//! Key-value cache clients the session handler can sit on.

use std::future::Future;

use crate::Error;

pub mod memory;

#[cfg(feature = "redis-store")]
pub mod redis;

/// A minimal key-value cache with per-entry expiration.
///
/// Implementations own their connection lifecycle and thread safety. A
/// missing key is reported as `Ok(None)`, never as an error.
pub trait CacheClient: Send + Sync + 'static {
    /// Gets the value stored at `key`.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, Error>> + Send;

    /// Stores `value` at `key`, replacing any previous value.
    ///
    /// The entry expires after `ttl_secs` seconds. A value of `0` or less
    /// stores the entry without an expiry.
    ///
    /// Returns `true` if the value was stored.
    fn set(
        &self,
        key: &str,
        value: &str,
        ttl_secs: i64,
    ) -> impl Future<Output = Result<bool, Error>> + Send;

    /// Deletes the entry at `key`.
    ///
    /// Returns `true` if an entry was removed, `false` if there was none.
    fn delete(&self, key: &str) -> impl Future<Output = Result<bool, Error>> + Send;
}
