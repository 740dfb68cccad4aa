//! Column mapping and parameter binding for UUID columns.

use uuid::Uuid;

use super::UuidValueMeta;
use crate::value::{
    domain::{ColumnDefinitionOptions, SqlType, Value},
    error::{ValueMetaError, ValueMetaResult},
    ports::{DatabaseDialect, DriverError, ParameterBinder, ResultRow},
};

#[cfg(windows)]
const CR: &str = "\r\n";
#[cfg(not(windows))]
const CR: &str = "\n";

const NATIVE_UUID_TYPE: &str = "UUID";
const MSSQL_UUID_TYPE: &str = "UNIQUEIDENTIFIER";
const TEXT_UUID_TYPE: &str = "VARCHAR(36)";

impl UuidValueMeta {
    pub(super) fn column_definition(
        &self,
        dialect: &dyn DatabaseDialect,
        options: &ColumnDefinitionOptions,
    ) -> String {
        let column_type =
            if dialect.is_postgres_variant() || dialect.plugin_id().eq_ignore_ascii_case("H2") {
                NATIVE_UUID_TYPE
            } else if dialect.is_mssql_server_native_variant() {
                MSSQL_UUID_TYPE
            } else {
                TEXT_UUID_TYPE
            };

        let mut definition = String::new();
        if options.add_field_name {
            definition.push_str(self.base.name().unwrap_or_default());
            definition.push(' ');
        }
        definition.push_str(column_type);
        if options.add_cr {
            definition.push_str(CR);
        }
        definition
    }

    /// Binds natively first and falls back to text on any driver error.
    ///
    /// The native failure is discarded whatever its cause; only the text bind
    /// failing is reported.
    pub(super) fn bind(
        &self,
        binder: &mut dyn ParameterBinder,
        index: usize,
        value: &Value,
    ) -> ValueMetaResult<()> {
        let converted = self
            .coerce(value)
            .map_err(|err| ValueMetaError::binding(self.base.description(), index, err))?;
        let Some(uuid) = converted else {
            return binder
                .set_null(index, SqlType::Other)
                .map_err(|err| ValueMetaError::binding(self.base.description(), index, err));
        };

        match binder.set_uuid(index, uuid) {
            Ok(()) => Ok(()),
            Err(native_err) => {
                tracing::debug!(
                    column = %self.base.description(),
                    index,
                    error = %native_err,
                    "native UUID bind rejected, binding text instead"
                );
                binder
                    .set_string(index, &uuid.to_string())
                    .map_err(|err| ValueMetaError::binding(self.base.description(), index, err))
            }
        }
    }

    /// Reads the column at a 0-based `index`; rows are addressed from 1.
    pub(super) fn read_row(
        &self,
        _dialect: &dyn DatabaseDialect,
        row: &dyn ResultRow,
        index: usize,
    ) -> ValueMetaResult<Option<Uuid>> {
        let column = index.checked_add(1).ok_or_else(|| {
            ValueMetaError::database_read(
                self.base.description(),
                index,
                DriverError::ColumnOutOfRange {
                    column: index,
                    width: 0,
                },
            )
        })?;
        let raw = row
            .get_object(column)
            .map_err(|err| ValueMetaError::database_read(self.base.description(), index, err))?;
        self.coerce(&raw)
            .map_err(|err| ValueMetaError::database_read(self.base.description(), index, err))
    }
}
