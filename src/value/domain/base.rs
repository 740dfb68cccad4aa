//! Shared base behaviour composed by every value-metadata handler.

use super::{StorageType, StringEncoding, Value, ValueMetaConfig};
use crate::value::error::{ValueMetaError, ValueMetaResult};

/// Inherited configuration plus the behaviour every handler shares.
///
/// Handlers hold one of these and expose it through
/// [`ValueMeta::base`](crate::value::ports::ValueMeta::base); the trait's
/// provided methods delegate here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueMetaBase {
    config: ValueMetaConfig,
    type_desc: &'static str,
}

impl ValueMetaBase {
    /// Creates a base for a handler whose type is described as `type_desc`.
    #[must_use]
    pub const fn new(config: ValueMetaConfig, type_desc: &'static str) -> Self {
        Self { config, type_desc }
    }

    /// Returns the inherited configuration.
    #[must_use]
    pub const fn config(&self) -> &ValueMetaConfig {
        &self.config
    }

    /// Returns the column name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.config.name.as_deref()
    }

    /// Returns the human-readable type description.
    #[must_use]
    pub const fn type_desc(&self) -> &'static str {
        self.type_desc
    }

    /// Returns `"<name> <type>"`, or just the type for unnamed columns.
    #[must_use]
    pub fn description(&self) -> String {
        self.name().map_or_else(
            || self.type_desc.to_owned(),
            |name| format!("{name} {}", self.type_desc),
        )
    }

    /// Returns whether comparisons are reversed.
    #[must_use]
    pub const fn is_sorted_descending(&self) -> bool {
        self.config.sort_descending
    }

    /// Returns whether rows carry raw byte payloads.
    #[must_use]
    pub fn is_storage_binary_string(&self) -> bool {
        self.config.storage_type == StorageType::BinaryString
    }

    /// Returns whether stored payloads are already in canonical format.
    #[must_use]
    pub const fn is_identical_format(&self) -> bool {
        self.config.identical_format
    }

    /// Null predicate used for ordering.
    #[must_use]
    pub const fn is_null(&self, value: &Value) -> bool {
        value.is_null() || (self.config.empty_is_null && value.is_empty())
    }

    /// Resolves the configured charset.
    ///
    /// # Errors
    ///
    /// Returns [`ValueMetaError::UnsupportedEncoding`] for unknown names.
    pub fn string_encoding(&self) -> ValueMetaResult<StringEncoding> {
        StringEncoding::resolve(self.config.string_encoding.as_deref())
            .map_err(|err| ValueMetaError::unsupported_encoding(self.description(), err.0))
    }

    /// Encodes text with the configured charset.
    ///
    /// # Errors
    ///
    /// Returns [`ValueMetaError::UnsupportedEncoding`] for unknown charsets and
    /// [`ValueMetaError::Conversion`] for unmappable text.
    pub fn encode_text(&self, text: &str) -> ValueMetaResult<Vec<u8>> {
        self.string_encoding()?
            .encode(text)
            .map_err(|_| ValueMetaError::conversion(self.description(), text, self.type_desc))
    }

    /// Decodes a byte payload with the configured charset.
    ///
    /// # Errors
    ///
    /// Returns [`ValueMetaError::UnsupportedEncoding`] for unknown charsets and
    /// [`ValueMetaError::Conversion`] for malformed payloads.
    pub fn decode_text(&self, bytes: &[u8]) -> ValueMetaResult<String> {
        let encoding = self.string_encoding()?;
        encoding.decode(bytes).map_err(|_| {
            ValueMetaError::conversion(
                self.description(),
                String::from_utf8_lossy(bytes),
                self.type_desc,
            )
        })
    }
}
