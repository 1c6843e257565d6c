//! Database access for the server half of the API crate.

#[cfg(feature = "server")]
mod pool;
#[cfg(feature = "server")]
pub use pool::get_pool;
