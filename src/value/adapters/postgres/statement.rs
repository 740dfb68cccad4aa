//! Positional parameter collection for Diesel `sql_query` statements.

use std::collections::BTreeMap;

use diesel::pg::Pg;
use diesel::query_builder::{BoxedSqlQuery, SqlQuery};
use diesel::sql_types::{Nullable, Text, Uuid as PgUuid};
use uuid::Uuid;

use crate::value::{
    domain::SqlType,
    ports::{DriverError, DriverResult, ParameterBinder},
};

/// A statement bound for execution through Diesel.
pub type PgBoundQuery = BoxedSqlQuery<'static, Pg, SqlQuery>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum PgParam {
    Null(SqlType),
    Uuid(Uuid),
    Text(String),
}

/// Collects `$n` parameters for a raw `PostgreSQL` statement.
///
/// Binds may arrive in any order; [`PgStatement::into_query`] applies them
/// by position and rejects gaps.
///
/// # Examples
///
/// ```
/// use valuemeta_uuid::value::adapters::postgres::PgStatement;
/// use valuemeta_uuid::value::ports::ParameterBinder;
///
/// let mut statement = PgStatement::new("INSERT INTO orders (id) VALUES ($1)");
/// statement.set_uuid(1, uuid::Uuid::nil()).expect("PostgreSQL accepts UUIDs");
/// assert_eq!(statement.parameter_count(), 1);
/// let _query = statement.into_query().expect("contiguous parameters");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PgStatement {
    sql: String,
    params: BTreeMap<usize, PgParam>,
}

impl PgStatement {
    /// Creates a statement for `sql`, using `$1`, `$2`, ... placeholders.
    #[must_use]
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: BTreeMap::new(),
        }
    }

    /// Returns the statement text.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Returns how many parameters have been bound.
    #[must_use]
    pub fn parameter_count(&self) -> usize {
        self.params.len()
    }

    /// Builds the Diesel query with every parameter applied in order.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::MissingParameter`] when a position between 1
    /// and the highest bound index was never set.
    pub fn into_query(self) -> DriverResult<PgBoundQuery> {
        let mut query = diesel::sql_query(self.sql).into_boxed::<Pg>();
        for (expected, (index, param)) in (1_usize..).zip(self.params) {
            if index != expected {
                return Err(DriverError::MissingParameter(expected));
            }
            query = match param {
                PgParam::Null(SqlType::Other) => query.bind::<Nullable<PgUuid>, _>(None::<Uuid>),
                PgParam::Null(SqlType::Varchar) => {
                    query.bind::<Nullable<Text>, _>(None::<String>)
                }
                PgParam::Uuid(uuid) => query.bind::<PgUuid, _>(uuid),
                PgParam::Text(text) => query.bind::<Text, _>(text),
            };
        }
        Ok(query)
    }
}

impl ParameterBinder for PgStatement {
    fn set_null(&mut self, index: usize, sql_type: SqlType) -> DriverResult<()> {
        self.params.insert(index, PgParam::Null(sql_type));
        Ok(())
    }

    fn set_uuid(&mut self, index: usize, value: Uuid) -> DriverResult<()> {
        self.params.insert(index, PgParam::Uuid(value));
        Ok(())
    }

    fn set_string(&mut self, index: usize, value: &str) -> DriverResult<()> {
        self.params.insert(index, PgParam::Text(value.to_owned()));
        Ok(())
    }
}
