//! Column-level configuration inherited by value-metadata handlers.

use super::StringEncoding;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How column data is held in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageType {
    /// Rows carry the native value.
    #[default]
    Normal,
    /// Rows carry the raw byte payload read from the source.
    BinaryString,
}

/// Errors raised while loading or validating a [`ValueMetaConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid value metadata configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured string encoding is not supported.
    #[error("unsupported string encoding '{0}'")]
    UnsupportedEncoding(String),
}

/// Inherited configuration of a column's value metadata.
///
/// Handlers treat this as read-only input; none of it is mutated per value.
///
/// # Examples
///
/// ```
/// use valuemeta_uuid::value::domain::{StorageType, ValueMetaConfig};
///
/// let config = ValueMetaConfig::named("order_id").with_sort_descending(true);
/// assert_eq!(config.name.as_deref(), Some("order_id"));
/// assert!(config.sort_descending);
/// assert_eq!(config.storage_type, StorageType::Normal);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueMetaConfig {
    /// Column name.
    pub name: Option<String>,
    /// Whether comparisons are reversed.
    pub sort_descending: bool,
    /// How rows hold the column's data.
    pub storage_type: StorageType,
    /// Whether the stored payload already has the canonical textual format.
    pub identical_format: bool,
    /// Charset name for textual payloads; UTF-8 when unset.
    pub string_encoding: Option<String>,
    /// Whether empty strings and empty payloads count as null when ordering.
    pub empty_is_null: bool,
}

impl Default for ValueMetaConfig {
    fn default() -> Self {
        Self {
            name: None,
            sort_descending: false,
            storage_type: StorageType::Normal,
            identical_format: true,
            string_encoding: None,
            empty_is_null: false,
        }
    }
}

impl ValueMetaConfig {
    /// Creates a default configuration for the named column.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Parses a configuration from JSON, filling missing fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed documents and
    /// [`ConfigError::UnsupportedEncoding`] for unknown charsets.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configured encoding is supported.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedEncoding`] for unknown charsets.
    pub fn validate(&self) -> Result<(), ConfigError> {
        StringEncoding::resolve(self.string_encoding.as_deref())
            .map(|_| ())
            .map_err(|err| ConfigError::UnsupportedEncoding(err.0))
    }

    /// Sets the sort direction.
    #[must_use]
    pub const fn with_sort_descending(mut self, descending: bool) -> Self {
        self.sort_descending = descending;
        self
    }

    /// Sets the storage type.
    #[must_use]
    pub const fn with_storage_type(mut self, storage_type: StorageType) -> Self {
        self.storage_type = storage_type;
        self
    }

    /// Sets whether stored payloads are already in canonical format.
    #[must_use]
    pub const fn with_identical_format(mut self, identical: bool) -> Self {
        self.identical_format = identical;
        self
    }

    /// Sets the charset used for textual payloads.
    #[must_use]
    pub fn with_string_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.string_encoding = Some(encoding.into());
        self
    }

    /// Sets whether empty values count as null when ordering.
    #[must_use]
    pub const fn with_empty_is_null(mut self, empty_is_null: bool) -> Self {
        self.empty_is_null = empty_is_null;
        self
    }
}
