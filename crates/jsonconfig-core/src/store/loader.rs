//! Building a [`ConfigStore`] from a JSON document.
//!
//! The document root must be an object whose every property is itself an
//! object of scalars:
//!
//! ```json
//! {
//!   "server": { "port": 8080, "debug": true, "name": "api" },
//!   "db":     { "url": "postgres://localhost", "pool": 4 }
//! }
//! ```
//!
//! Any other top-level shape (an array, a string, a section that is not an
//! object) fails with [`ConfigError::DecodeJson`].

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::config_store::{ConfigStore, Section, Sections};
use super::error::ConfigError;
use crate::value::Value;

/// Raw decoded shape: section → key → JSON scalar.
#[derive(Deserialize)]
#[serde(transparent)]
struct Document(HashMap<String, HashMap<String, serde_json::Value>>);

impl Document {
    fn into_sections(self) -> Sections {
        self.0
            .into_iter()
            .map(|(name, keys)| {
                let keys: Section = keys
                    .into_iter()
                    .map(|(key, raw)| (key, Value::from(raw)))
                    .collect();
                (name, keys)
            })
            .collect()
    }
}

impl ConfigStore {
    /// Loads a store from the JSON file at `path`.
    ///
    /// The file handle is only held while decoding and is closed on every
    /// return path.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ReadFile`] if the file cannot be opened.
    /// - [`ConfigError::DecodeJson`] if the content is not valid JSON or is
    ///   not an object of objects.
    pub fn read_config(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::from_reader(BufReader::new(file))?;
        debug!(
            path = %path.display(),
            sections = store.len(),
            "loaded config"
        );
        Ok(store)
    }

    /// Like [`read_config`](Self::read_config), but always hands back a usable
    /// store.
    ///
    /// On failure the store is empty and behaves exactly like
    /// [`ConfigStore::new`]; the error is returned alongside it.
    pub fn read_config_or_empty(path: impl AsRef<Path>) -> (Self, Option<ConfigError>) {
        match Self::read_config(path) {
            Ok(store) => (store, None),
            Err(e) => (Self::new(), Some(e)),
        }
    }

    /// Decodes a store from any byte reader.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DecodeJson`] for invalid or mis-shaped JSON,
    /// including I/O failures while reading.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let doc: Document = serde_json::from_reader(reader)?;
        Ok(Self::from_sections(doc.into_sections()))
    }

    /// Decodes a store from an in-memory JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DecodeJson`] for invalid or mis-shaped JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let doc: Document = serde_json::from_str(json)?;
        Ok(Self::from_sections(doc.into_sections()))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
