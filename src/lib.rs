//! # json-session: a JSON session save handler for key-value caches
//!
//! `json-session` stores web-session state in a remote key-value cache, encoded as
//! plain JSON rather than a Rust-specific format, so services written in other
//! languages can read the very same session by fetching `sessions/{id}`.
//!
//! The crate does one thing: it implements the conventional
//! open/read/write/destroy/gc/close save-handler lifecycle a host session
//! subsystem drives once per request. Session ids, cookies and expiry are the
//! host's and the cache's business.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use json_session::{Id, JsonSessionHandler, SessionConfig, SessionHandler};
//! use json_session::cache::memory::MemoryCache;
//!
//! #[tokio::main]
//! async fn main() -> json_session::Result<()> {
//!     // Read `SESSION_GC_MAXLIFETIME` / `SESSION_KEY_PREFIX`, or use the defaults
//!     let config = SessionConfig::from_env()?;
//!     let mut handler = JsonSessionHandler::new(Arc::new(MemoryCache::new()), config);
//!
//!     // Once per request
//!     handler.open("", "SESSID")?;
//!     let id = Id::from("abc123");
//!
//!     let mut session = handler.read(&id).await?;
//!     let visits: i64 = session.get("visits")?.unwrap_or(0);
//!     session.insert("visits", &(visits + 1))?;
//!
//!     handler.write(&id, &session).await?;
//!     handler.close()?;
//!     Ok(())
//! }
//! ```
//!
//! # Stored format
//!
//! | | |
//! |---|---|
//! | Key | `sessions/{id}` (prefix configurable) |
//! | Value | UTF-8 JSON object, e.g. `{"cart":[1,2,3]}` |
//! | TTL | `gc_maxlifetime` captured at `open`, passed on every `write` |
//!
//! An absent entry, an empty string, `null`, `{}` and `[]` all read back as an
//! empty session.
//!
//! # Caches
//!
//! ## Redis
//!
//! Requires the `redis-store` feature.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use fred::clients::Client;
//! use json_session::cache::redis::RedisCache;
//!
//! let cache = RedisCache::new(Arc::new(Client::default()));
//! ```
//!
//! ## Memory
//!
//! [`MemoryCache`](cache::memory::MemoryCache) keeps entries in-process and honours
//! their TTL. Handy for tests; other services cannot see it.
//!
//! Any other backend only needs to implement [`CacheClient`](cache::CacheClient).

#[cfg(feature = "redis-store")]
pub use fred;

pub mod cache;
pub mod codec;

mod config;
pub use config::*;

mod error;
pub use error::*;

mod handler;
pub use handler::*;

mod session;
pub use session::*;
