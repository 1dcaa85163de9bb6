//! Error type shared by loading and the typed getters.

use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by [`ConfigStore`](crate::ConfigStore) operations.
///
/// Load-time failures are [`ReadFile`](ConfigError::ReadFile) and
/// [`DecodeJson`](ConfigError::DecodeJson).  The numeric getters return
/// [`Convert`](ConfigError::Convert) for values they cannot coerce and pass
/// the standard parser's error through unchanged for malformed numeric text.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be opened.
    #[error("read file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not JSON, or not an object of objects.
    #[error("decode json: {0}")]
    DecodeJson(#[from] serde_json::Error),

    /// The stored value (or its absence) cannot be coerced to `target`.
    #[error("convert to {target} in: {section}.{key}")]
    Convert {
        target: &'static str,
        section: String,
        key: String,
    },

    /// A string value holds malformed integer text.
    #[error(transparent)]
    ParseInt(#[from] ParseIntError),

    /// A string value holds malformed float text.
    #[error(transparent)]
    ParseFloat(#[from] ParseFloatError),
}

impl ConfigError {
    pub(crate) fn convert(target: &'static str, section: &str, key: &str) -> Self {
        ConfigError::Convert {
            target,
            section: section.to_string(),
            key: key.to_string(),
        }
    }

    /// `true` when the file could not be opened.
    pub fn is_io(&self) -> bool {
        matches!(self, ConfigError::ReadFile { .. })
    }

    /// `true` when the document failed to decode.
    pub fn is_decode(&self) -> bool {
        matches!(self, ConfigError::DecodeJson(_))
    }

    /// `true` for unsupported-type conversions (not for parse failures).
    pub fn is_conversion(&self) -> bool {
        matches!(self, ConfigError::Convert { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_message_names_section_and_key() {
        let err = ConfigError::convert("int", "server", "port");
        assert_eq!(err.to_string(), "convert to int in: server.port");
        assert!(err.is_conversion());
        assert!(!err.is_io());
    }

    #[test]
    fn test_parse_int_error_is_passed_through_verbatim() {
        let inner = "abc".parse::<i64>().unwrap_err();
        let expected = inner.to_string();

        let err = ConfigError::from(inner);

        assert_eq!(err.to_string(), expected);
        assert!(!err.is_conversion());
    }

    #[test]
    fn test_decode_error_is_prefixed() {
        let inner = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();

        let err = ConfigError::from(inner);

        assert!(err.to_string().starts_with("decode json: "));
        assert!(err.is_decode());
    }

    #[test]
    fn test_read_file_error_keeps_io_source() {
        use std::error::Error as _;

        let err = ConfigError::ReadFile {
            path: PathBuf::from("/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };

        assert!(err.to_string().starts_with("read file /missing.json: "));
        assert!(err.source().is_some());
        assert!(err.is_io());
    }
}
