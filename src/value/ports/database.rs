//! Database boundary ports.
//!
//! Value-metadata handlers never talk to a driver directly. They query a
//! dialect descriptor for capabilities, bind statement parameters through a
//! [`ParameterBinder`], and read raw column objects through a [`ResultRow`].

use crate::value::domain::{SqlType, Value};
use crate::value::error::BoxedError;
use thiserror::Error;
use uuid::Uuid;

/// Result type for driver-side operations.
pub type DriverResult<T> = Result<T, DriverError>;

/// Failures reported by driver adapters.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The driver does not accept this kind of parameter.
    #[error("unsupported parameter type: {0}")]
    Unsupported(String),

    /// The requested result column does not exist.
    #[error("column {column} is out of range for a row of width {width}")]
    ColumnOutOfRange {
        /// The requested 1-based column.
        column: usize,
        /// The number of columns in the row.
        width: usize,
    },

    /// A statement parameter position was never bound.
    #[error("parameter {0} was not bound")]
    MissingParameter(usize),

    /// Any other driver failure.
    #[error("driver error: {0}")]
    Driver(BoxedError),
}

impl DriverError {
    /// Wraps an arbitrary driver error.
    #[must_use]
    pub fn driver(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Driver(Box::new(err))
    }

    /// Creates an unsupported-parameter error.
    #[must_use]
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported(message.into())
    }
}

/// Capability queries on a target database dialect.
pub trait DatabaseDialect: Send + Sync {
    /// Returns the dialect's plugin identifier, for example `"H2"`.
    fn plugin_id(&self) -> &str;

    /// Returns `true` for `PostgreSQL` and wire-compatible databases.
    fn is_postgres_variant(&self) -> bool;

    /// Returns `true` for SQL Server accessed through its native driver.
    fn is_mssql_server_native_variant(&self) -> bool;
}

/// Positional parameter binding on a prepared statement.
///
/// The primitives are explicit so callers can attempt a native bind and fall
/// back to text without intercepting panics or probing capabilities.
#[cfg_attr(test, mockall::automock)]
pub trait ParameterBinder {
    /// Binds SQL `NULL` of the given type.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError`] when the driver rejects the bind.
    fn set_null(&mut self, index: usize, sql_type: SqlType) -> DriverResult<()>;

    /// Binds a native UUID.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError`] when the driver cannot accept a UUID object.
    fn set_uuid(&mut self, index: usize, value: Uuid) -> DriverResult<()>;

    /// Binds text.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError`] when the driver rejects the bind.
    fn set_string(&mut self, index: usize, value: &str) -> DriverResult<()>;
}

/// Positional access to a fetched result row.
pub trait ResultRow {
    /// Returns the raw object at a 1-based column.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError`] when the column cannot be read.
    fn get_object(&self, column: usize) -> DriverResult<Value>;
}
