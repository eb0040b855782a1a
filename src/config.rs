use std::env;

use crate::{Error, Result};

/// Default session lifetime in seconds.
pub const DEFAULT_GC_MAXLIFETIME: i64 = 1440;

/// Default prefix for cache keys.
pub const DEFAULT_KEY_PREFIX: &str = "sessions/";

pub const GC_MAXLIFETIME_ENV: &str = "SESSION_GC_MAXLIFETIME";
pub const KEY_PREFIX_ENV: &str = "SESSION_KEY_PREFIX";

/// Process-level session settings, read by the handler at `open` time.
///
/// # Example
///
/// ```rust
/// use json_session::SessionConfig;
///
/// let config = SessionConfig::build()
///     .gc_maxlifetime(30 * 60)
///     .key_prefix("sessions/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Lifetime of a stored session, in seconds. Passed as the cache TTL.
    /// A value of `0` or less stores entries without an expiry.
    pub gc_maxlifetime: i64,
    pub key_prefix: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            gc_maxlifetime: DEFAULT_GC_MAXLIFETIME,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }
}

impl SessionConfig {
    /// Creates a new `SessionConfig` with default values.
    pub fn build() -> Self {
        Self::default()
    }

    pub fn gc_maxlifetime(mut self, seconds: i64) -> Self {
        self.gc_maxlifetime = seconds;
        self
    }

    pub fn key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    /// Reads `SESSION_GC_MAXLIFETIME` and `SESSION_KEY_PREFIX`, falling back
    /// to the defaults for unset variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(GC_MAXLIFETIME_ENV) {
            config.gc_maxlifetime = raw.trim().parse().map_err(|err| {
                Error::Config(format!("{GC_MAXLIFETIME_ENV}={raw:?}: {err}"))
            })?;
        }

        if let Some(prefix) = lookup(KEY_PREFIX_ENV) {
            config.key_prefix = prefix;
        }

        Ok(config)
    }
}
