//! The locked section → key → value map and its typed getters.
//!
//! # Locking
//!
//! All state lives behind one `RwLock`.  Lookups (`get` and every getter built
//! on it) take the shared side, so any number of readers run in parallel.
//! `set_value` takes the exclusive side.  Each call is atomic on its own; a
//! read followed by a write is *not* atomic as a pair.
//!
//! A poisoned lock is recovered rather than propagated: every critical section
//! is a single map lookup or insert, so the map is never observed half-written.
//!
//! # Coercion asymmetry
//!
//! [`ConfigStore::get_as_string`] never fails and degrades to `""`, while
//! [`ConfigStore::get_as_int`] and [`ConfigStore::get_as_f64`] return
//! [`ConfigError::Convert`] for absent or unsupported values.  Callers depend on
//! both behaviours, so they are kept as they are.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::trace;

use super::error::ConfigError;
use crate::value::Value;

/// Keys of one section.
pub(crate) type Section = HashMap<String, Value>;

/// Every section of the store.
pub(crate) type Sections = HashMap<String, Section>;

/// Thread-safe two-level configuration store.
///
/// Share between threads with `Arc<ConfigStore>`; all methods take `&self`.
///
/// # Examples
///
/// ```rust
/// use jsonconfig_core::{ConfigStore, Value};
///
/// let store = ConfigStore::from_json_str(r#"{"server": {"port": 8080}}"#).unwrap();
/// assert_eq!(store.get_as_int("server", "port").unwrap(), 8080);
///
/// store.set_value("server", "name", "api");
/// assert_eq!(store.get("server", "name"), Some(Value::from("api")));
/// ```
#[derive(Debug, Default)]
pub struct ConfigStore {
    sections: RwLock<Sections>,
}

impl ConfigStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_sections(sections: Sections) -> Self {
        Self {
            sections: RwLock::new(sections),
        }
    }

    fn read_sections(&self) -> RwLockReadGuard<'_, Sections> {
        self.sections.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_sections(&self) -> RwLockWriteGuard<'_, Sections> {
        self.sections.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ── Lookup ────────────────────────────────────────────────────────────────

    /// Returns a copy of the value at `section.key`, or `None` when either the
    /// section or the key does not exist.
    ///
    /// Absence is not an error.  A key holding JSON `null` returns
    /// `Some(Value::Null)`, which is distinct from `None`.
    pub fn get(&self, section: &str, key: &str) -> Option<Value> {
        self.read_sections()
            .get(section)
            .and_then(|keys| keys.get(key))
            .cloned()
    }

    /// Returns the canonical string form of `section.key`.
    ///
    /// Never fails.  Absent keys and `null` both yield an empty string.
    pub fn get_as_string(&self, section: &str, key: &str) -> String {
        self.get(section, key)
            .map(|v| v.to_canonical_string())
            .unwrap_or_default()
    }

    /// Reads `section.key` as an `f64`.
    ///
    /// | Stored value | Result |
    /// |--------------|--------|
    /// | `String`     | parsed as a decimal float; parse error passed through |
    /// | `Float32`    | widened |
    /// | `Float64`    | as is |
    /// | anything else, or absent | [`ConfigError::Convert`] |
    ///
    /// # Errors
    ///
    /// See the table above.
    pub fn get_as_f64(&self, section: &str, key: &str) -> Result<f64, ConfigError> {
        match self.get(section, key) {
            Some(Value::String(s)) => Ok(s.parse::<f64>()?),
            Some(Value::Float32(f)) => Ok(f64::from(f)),
            Some(Value::Float64(f)) => Ok(f),
            None
            | Some(
                Value::Bool(_)
                | Value::Int(_)
                | Value::UInt(_)
                | Value::Duration(_)
                | Value::Timestamp(_)
                | Value::Null,
            ) => Err(ConfigError::convert("float64", section, key)),
        }
    }

    /// Reads `section.key` as an `i64`.
    ///
    /// | Stored value | Result |
    /// |--------------|--------|
    /// | `String`     | parsed as a decimal integer; parse error passed through |
    /// | `Int` / `UInt` | cast without an overflow check |
    /// | `Bool`       | `1` / `0` |
    /// | `Float32` / `Float64` | truncated toward zero |
    /// | anything else, or absent | [`ConfigError::Convert`] |
    ///
    /// # Errors
    ///
    /// See the table above.
    pub fn get_as_int(&self, section: &str, key: &str) -> Result<i64, ConfigError> {
        match self.get(section, key) {
            Some(Value::String(s)) => Ok(s.parse::<i64>()?),
            Some(Value::Int(i)) => Ok(i),
            // Values above i64::MAX wrap; no overflow check is made.
            Some(Value::UInt(u)) => Ok(u as i64),
            Some(Value::Bool(b)) => Ok(i64::from(b)),
            Some(Value::Float32(f)) => Ok(f as i64),
            Some(Value::Float64(f)) => Ok(f as i64),
            None | Some(Value::Duration(_) | Value::Timestamp(_) | Value::Null) => {
                Err(ConfigError::convert("int", section, key))
            }
        }
    }

    // ── Mutation ──────────────────────────────────────────────────────────────

    /// Stores `value` at `section.key`, creating the section if needed and
    /// overwriting any previous value.
    pub fn set_value(&self, section: &str, key: &str, value: impl Into<Value>) {
        let value = value.into();
        trace!(section, key, kind = value.type_name(), "setting config value");
        let mut sections = self.write_sections();
        let keys = sections.entry(section.to_string()).or_insert_with(|| {
            trace!(section, "creating config section");
            Section::new()
        });
        keys.insert(key.to_string(), value);
    }

    // ── Introspection ─────────────────────────────────────────────────────────

    /// Returns `true` if `section` exists (even when it has no keys).
    pub fn has_section(&self, section: &str) -> bool {
        self.read_sections().contains_key(section)
    }

    /// Sorted names of all sections.
    pub fn section_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read_sections().keys().cloned().collect();
        names.sort();
        names
    }

    /// Sorted key names within `section`; empty when the section is absent.
    pub fn keys(&self, section: &str) -> Vec<String> {
        let mut keys: Vec<String> = self
            .read_sections()
            .get(section)
            .map(|keys| keys.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.read_sections().len()
    }

    /// Returns `true` when the store has no sections.
    pub fn is_empty(&self) -> bool {
        self.read_sections().is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
