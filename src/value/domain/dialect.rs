//! Database dialect value objects used at the SQL boundary.

use crate::value::ports::DatabaseDialect;
use serde::{Deserialize, Serialize};

/// A capability description of a target database.
///
/// Hosts build one from their connection metadata; the value-metadata
/// handlers query it through [`DatabaseDialect`].
///
/// # Examples
///
/// ```
/// use valuemeta_uuid::value::domain::DialectDescriptor;
/// use valuemeta_uuid::value::ports::DatabaseDialect;
///
/// let dialect = DialectDescriptor::postgres();
/// assert!(dialect.is_postgres_variant());
/// assert!(!dialect.is_mssql_server_native_variant());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DialectDescriptor {
    plugin_id: String,
    postgres_variant: bool,
    mssql_native_variant: bool,
}

impl DialectDescriptor {
    /// Creates a descriptor with no special capabilities.
    #[must_use]
    pub fn new(plugin_id: impl Into<String>) -> Self {
        Self {
            plugin_id: plugin_id.into(),
            postgres_variant: false,
            mssql_native_variant: false,
        }
    }

    /// `PostgreSQL`.
    #[must_use]
    pub fn postgres() -> Self {
        Self::new("POSTGRESQL").with_postgres_variant(true)
    }

    /// H2.
    #[must_use]
    pub fn h2() -> Self {
        Self::new("H2")
    }

    /// SQL Server through its native driver.
    #[must_use]
    pub fn mssql_native() -> Self {
        Self::new("MSSQLNATIVE").with_mssql_native_variant(true)
    }

    /// `MySQL`.
    #[must_use]
    pub fn mysql() -> Self {
        Self::new("MYSQL")
    }

    /// Marks the dialect as wire-compatible with `PostgreSQL`.
    #[must_use]
    pub const fn with_postgres_variant(mut self, flag: bool) -> Self {
        self.postgres_variant = flag;
        self
    }

    /// Marks the dialect as SQL Server accessed natively.
    #[must_use]
    pub const fn with_mssql_native_variant(mut self, flag: bool) -> Self {
        self.mssql_native_variant = flag;
        self
    }
}

impl DatabaseDialect for DialectDescriptor {
    fn plugin_id(&self) -> &str {
        &self.plugin_id
    }

    fn is_postgres_variant(&self) -> bool {
        self.postgres_variant
    }

    fn is_mssql_server_native_variant(&self) -> bool {
        self.mssql_native_variant
    }
}

/// Flags controlling how a column definition literal is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnDefinitionOptions {
    /// The column is the technical key.
    pub technical_key: bool,
    /// The column is the primary key.
    pub primary_key: bool,
    /// The column should auto-increment.
    pub use_auto_increment: bool,
    /// Prefix the definition with the column name.
    pub add_field_name: bool,
    /// Append a line terminator.
    pub add_cr: bool,
}

impl ColumnDefinitionOptions {
    /// Prefixes the definition with the column name.
    #[must_use]
    pub const fn with_field_name(mut self) -> Self {
        self.add_field_name = true;
        self
    }

    /// Appends the platform line terminator.
    #[must_use]
    pub const fn with_cr(mut self) -> Self {
        self.add_cr = true;
        self
    }

    /// Marks the column as the technical key.
    #[must_use]
    pub const fn with_technical_key(mut self) -> Self {
        self.technical_key = true;
        self
    }

    /// Marks the column as the primary key.
    #[must_use]
    pub const fn with_primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }
}

/// SQL parameter types used when binding nulls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlType {
    /// Driver-specific or unspecified type.
    Other,
    /// Character data.
    Varchar,
}
