//! The session id and the in-process session mapping.

mod id;
mod map;

pub use id::Id;
pub use map::SessionMap;
