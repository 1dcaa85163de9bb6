//! # jsonconfig-core
//!
//! A small, thread-safe, in-memory configuration store.  Values are grouped
//! two levels deep, section → key, and are usually loaded once at startup from
//! a JSON document shaped as an object of objects:
//!
//! ```json
//! { "server": { "port": 8080, "debug": true, "name": "api" } }
//! ```
//!
//! # Architecture overview
//!
//! - **`value`** – The closed [`Value`] enum every key holds, plus the
//!   canonical text layouts for floats, durations and timestamps.
//!
//! - **`store`** – [`ConfigStore`]: the map behind a reader/writer lock,
//!   loading from JSON, `get` / `set_value`, and the coercing getters
//!   `get_as_string`, `get_as_int` and `get_as_f64`.
//!
//! Nothing here watches files, writes back to disk or merges sources; the
//! host application decides where the path comes from and what to log.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use jsonconfig_core::ConfigStore;
//!
//! let store = Arc::new(
//!     ConfigStore::from_json_str(r#"{"server": {"port": 8080, "debug": true}}"#).unwrap(),
//! );
//!
//! assert_eq!(store.get_as_int("server", "port").unwrap(), 8080);
//! assert_eq!(store.get_as_string("server", "debug"), "true");
//! assert!(store.get_as_f64("server", "missing").is_err());
//! ```

pub mod store;
pub mod value;

pub use store::{ConfigError, ConfigStore};
pub use value::{Timestamp, Value};
