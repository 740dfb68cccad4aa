//! UUID value-metadata handler.
//!
//! [`UuidValueMeta`] coerces column data to [`uuid::Uuid`] and implements
//! ordering, hashing, rendering, the binary stream codec, and database
//! mapping for UUID columns. Each contract lives in its own submodule.

mod codec;
mod conversion;
mod database;

use std::cmp::Ordering;
use std::fmt;
use std::io::{Read, Write};

use uuid::Uuid;

use crate::value::{
    domain::{
        ColumnDefinitionOptions, TYPE_UUID, Value, ValueMetaBase, ValueMetaConfig, ValueTypePlugin,
    },
    error::ValueMetaResult,
    ports::{DatabaseDialect, ParameterBinder, ResultRow, ValueMeta},
};

/// Type name used in descriptions and conversion errors.
pub const UUID_TYPE_NAME: &str = "UUID";

/// Value-metadata handler for UUID columns.
///
/// One handler is built per column definition and shared by every row of
/// that column. It holds only inherited configuration.
///
/// # Examples
///
/// ```
/// use valuemeta_uuid::value::adapters::uuid::UuidValueMeta;
/// use valuemeta_uuid::value::domain::Value;
/// use valuemeta_uuid::value::ports::ValueMeta;
///
/// let meta = UuidValueMeta::new("order_id");
/// let rendered = meta
///     .get_string(&Value::from(" 123E4567-E89B-12D3-A456-426614174000 "))
///     .expect("valid UUID text");
/// assert_eq!(rendered.as_deref(), Some("123e4567-e89b-12d3-a456-426614174000"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UuidValueMeta {
    base: ValueMetaBase,
}

impl UuidValueMeta {
    /// Registration metadata for the host's type registry.
    pub const PLUGIN: ValueTypePlugin = ValueTypePlugin {
        id: "77",
        type_code: TYPE_UUID,
        name: UUID_TYPE_NAME,
        description: "Universally Unique Identifier",
    };

    /// Creates a handler for the named column.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_config(ValueMetaConfig::named(name))
    }

    /// Creates a handler with no column name.
    #[must_use]
    pub fn unnamed() -> Self {
        Self::from_config(ValueMetaConfig::default())
    }

    /// Creates a handler from inherited configuration.
    #[must_use]
    pub const fn from_config(config: ValueMetaConfig) -> Self {
        Self {
            base: ValueMetaBase::new(config, UUID_TYPE_NAME),
        }
    }
}

impl Default for UuidValueMeta {
    fn default() -> Self {
        Self::unnamed()
    }
}

impl fmt::Display for UuidValueMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base.description())
    }
}

impl ValueMeta for UuidValueMeta {
    type Native = Uuid;

    fn base(&self) -> &ValueMetaBase {
        &self.base
    }

    fn type_code(&self) -> i32 {
        TYPE_UUID
    }

    fn native_type_name(&self) -> &'static str {
        "uuid::Uuid"
    }

    fn convert(&self, value: &Value) -> ValueMetaResult<Option<Uuid>> {
        self.coerce(value)
    }

    fn type_compare(&self, left: &Value, right: &Value) -> ValueMetaResult<Ordering> {
        Ok(self.coerce(left)?.cmp(&self.coerce(right)?))
    }

    fn hash_value(&self, value: &Value) -> ValueMetaResult<i32> {
        Ok(self.coerce(value)?.map_or(0, conversion::fold_hash))
    }

    fn get_string(&self, value: &Value) -> ValueMetaResult<Option<String>> {
        Ok(self.coerce(value)?.map(|uuid| uuid.to_string()))
    }

    fn binary_string(&self, value: &Value) -> ValueMetaResult<Option<Vec<u8>>> {
        self.to_binary_string(value)
    }

    fn write_data(&self, output: &mut dyn Write, value: &Value) -> ValueMetaResult<()> {
        self.write_frame(output, value)
    }

    fn read_data(&self, input: &mut dyn Read) -> ValueMetaResult<Option<Uuid>> {
        self.read_frame(input)
    }

    fn column_type_definition(
        &self,
        dialect: &dyn DatabaseDialect,
        options: &ColumnDefinitionOptions,
    ) -> String {
        self.column_definition(dialect, options)
    }

    fn bind_parameter(
        &self,
        binder: &mut dyn ParameterBinder,
        index: usize,
        value: &Value,
    ) -> ValueMetaResult<()> {
        self.bind(binder, index, value)
    }

    fn value_from_row(
        &self,
        dialect: &dyn DatabaseDialect,
        row: &dyn ResultRow,
        index: usize,
    ) -> ValueMetaResult<Option<Uuid>> {
        self.read_row(dialect, row, index)
    }
}
