//! The configuration store: locked state, JSON loading and typed getters.
//!
//! - `config_store` holds the `RwLock`-guarded map, `get`, `set_value` and
//!   the coercing getters.
//! - `loader` builds a store from a file, a reader or a string.
//! - `error` defines [`ConfigError`].

pub mod config_store;
pub mod error;
mod loader;

pub use config_store::ConfigStore;
pub use error::ConfigError;
