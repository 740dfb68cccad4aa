//! The value-metadata capability interface.
//!
//! Every column type in the engine is handled through [`ValueMeta`]. A handler
//! supplies the type-specific contracts; null ordering, sort direction, and
//! the binary-string inverse are provided on top of the composed
//! [`ValueMetaBase`].

use std::cmp::Ordering;
use std::io::{Read, Write};

use super::database::{DatabaseDialect, ParameterBinder, ResultRow};
use crate::value::domain::{ColumnDefinitionOptions, Value, ValueMetaBase};
use crate::value::error::ValueMetaResult;

/// Port for a pluggable column value type.
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - `Value::Null` converts to `None` and never fails in any operation
/// - equal native values hash identically whatever their input form
/// - `read_data(write_data(v))` reproduces `convert(v)`
/// - no per-value state is kept, so one handler can serve concurrent callers
pub trait ValueMeta: Send + Sync {
    /// The canonical in-memory type values are coerced to.
    type Native;

    /// Returns the composed base holding inherited configuration.
    fn base(&self) -> &ValueMetaBase;

    /// Returns the registry type code.
    fn type_code(&self) -> i32;

    /// Returns the name of the native type.
    fn native_type_name(&self) -> &'static str;

    /// Coerces a foreign value to the native type.
    ///
    /// # Errors
    ///
    /// Returns a conversion error when the value cannot be represented.
    fn convert(&self, value: &Value) -> ValueMetaResult<Option<Self::Native>>;

    /// Compares two values known to be non-null.
    ///
    /// # Errors
    ///
    /// Returns a conversion error when either value cannot be converted.
    fn type_compare(&self, left: &Value, right: &Value) -> ValueMetaResult<Ordering>;

    /// Returns a hash consistent with [`ValueMeta::compare`] equality.
    ///
    /// # Errors
    ///
    /// Returns a conversion error when the value cannot be converted.
    fn hash_value(&self, value: &Value) -> ValueMetaResult<i32>;

    /// Renders a value in its canonical textual form.
    ///
    /// # Errors
    ///
    /// Returns a conversion error when the value cannot be converted.
    fn get_string(&self, value: &Value) -> ValueMetaResult<Option<String>>;

    /// Returns the byte payload representation of a value.
    ///
    /// # Errors
    ///
    /// Returns a conversion error for unconvertible values or unsupported
    /// charsets.
    fn binary_string(&self, value: &Value) -> ValueMetaResult<Option<Vec<u8>>>;

    /// Writes one value to a stream.
    ///
    /// # Errors
    ///
    /// Returns a codec error when conversion or I/O fails.
    fn write_data(&self, output: &mut dyn Write, value: &Value) -> ValueMetaResult<()>;

    /// Reads one value from a stream.
    ///
    /// # Errors
    ///
    /// Returns an end-of-stream error when the stream is exhausted, a timeout
    /// error when the channel timed out, and a codec error otherwise.
    fn read_data(&self, input: &mut dyn Read) -> ValueMetaResult<Option<Self::Native>>;

    /// Returns the column type literal for a target database.
    fn column_type_definition(
        &self,
        dialect: &dyn DatabaseDialect,
        options: &ColumnDefinitionOptions,
    ) -> String;

    /// Binds a value as a statement parameter.
    ///
    /// # Errors
    ///
    /// Returns a database binding error when conversion or binding fails.
    fn bind_parameter(
        &self,
        binder: &mut dyn ParameterBinder,
        index: usize,
        value: &Value,
    ) -> ValueMetaResult<()>;

    /// Reads a value from a result row at a 0-based column index.
    ///
    /// # Errors
    ///
    /// Returns a database read error when extraction or conversion fails.
    fn value_from_row(
        &self,
        dialect: &dyn DatabaseDialect,
        row: &dyn ResultRow,
        index: usize,
    ) -> ValueMetaResult<Option<Self::Native>>;

    /// Returns the column name, if any.
    fn name(&self) -> Option<&str> {
        self.base().name()
    }

    /// Returns `"<name> <type>"` for diagnostics.
    fn description(&self) -> String {
        self.base().description()
    }

    /// Returns whether comparisons are reversed.
    fn is_sorted_descending(&self) -> bool {
        self.base().is_sorted_descending()
    }

    /// Returns whether the value counts as null for ordering.
    fn is_null(&self, value: &Value) -> bool {
        self.base().is_null(value)
    }

    /// Returns a copy of a value. Immutable values are returned as-is.
    fn clone_value(&self, value: &Value) -> Value {
        value.clone()
    }

    /// Compares two values, ordering nulls first unless sorting descending.
    ///
    /// # Errors
    ///
    /// Returns a conversion error when a non-null value cannot be converted.
    fn compare(&self, left: &Value, right: &Value) -> ValueMetaResult<Ordering> {
        let ordering = match (self.is_null(left), self.is_null(right)) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.type_compare(left, right)?,
        };
        if self.is_sorted_descending() {
            Ok(ordering.reverse())
        } else {
            Ok(ordering)
        }
    }

    /// Decodes a byte payload with the configured charset and converts it.
    ///
    /// # Errors
    ///
    /// Returns a conversion error for malformed payloads or unsupported
    /// charsets.
    fn convert_binary_string_to_native(
        &self,
        bytes: &[u8],
    ) -> ValueMetaResult<Option<Self::Native>> {
        let text = self.base().decode_text(bytes)?;
        self.convert(&Value::String(text))
    }
}
