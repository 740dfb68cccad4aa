//! Domain types for value metadata.
//!
//! Pure types with no infrastructure dependencies: foreign values, inherited
//! column configuration, charsets, and dialect descriptors.

mod base;
mod config;
mod dialect;
mod encoding;
mod plugin;
mod value;

pub use base::ValueMetaBase;
pub use config::{ConfigError, StorageType, ValueMetaConfig};
pub use dialect::{ColumnDefinitionOptions, DialectDescriptor, SqlType};
pub use encoding::{EncodingError, ParseStringEncodingError, StringEncoding};
pub use plugin::{TYPE_UUID, ValueTypePlugin};
pub use value::Value;
