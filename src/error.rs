use std::result;

/// Errors surfaced by the session handler and its cache clients.
///
/// An absent session is not an error: clients report it as `Ok(None)` and
/// the handler as an empty [`SessionMap`](crate::SessionMap).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Encoding failed with: {0}")]
    Encode(String),

    #[error("Decoding failed with: {0}")]
    Decode(String),

    #[error("{0}")]
    Backend(String),

    #[error("session handler has not been opened")]
    NotOpened,

    #[error("invalid session configuration: {0}")]
    Config(String),
}

pub type Result<T> = result::Result<T, Error>;

#[cfg(feature = "redis-store")]
impl From<fred::error::Error> for Error {
    fn from(err: fred::error::Error) -> Self {
        Error::Backend(err.to_string())
    }
}
