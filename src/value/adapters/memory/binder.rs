//! Recording parameter binder.

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::value::{
    domain::SqlType,
    ports::{DriverError, DriverResult, ParameterBinder},
};

/// A parameter captured by [`RecordingBinder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundParameter {
    /// SQL `NULL` of the given type.
    Null(SqlType),
    /// A native UUID.
    Uuid(Uuid),
    /// Text.
    String(String),
}

/// In-memory binder that records every successful bind by position.
///
/// Native UUID binds can be rejected to model drivers that only accept
/// text, and text binds can be made to fail to model a broken statement.
///
/// # Examples
///
/// ```
/// use valuemeta_uuid::value::adapters::memory::{BoundParameter, RecordingBinder};
/// use valuemeta_uuid::value::ports::ParameterBinder;
///
/// let mut binder = RecordingBinder::text_only();
/// assert!(binder.set_uuid(1, uuid::Uuid::nil()).is_err());
/// binder.set_string(1, "abc").expect("text binds succeed");
/// assert_eq!(binder.get(1), Some(&BoundParameter::String("abc".to_owned())));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingBinder {
    params: BTreeMap<usize, BoundParameter>,
    reject_native: bool,
    fail_text: bool,
    native_attempts: usize,
}

impl RecordingBinder {
    /// Creates a binder that accepts every bind.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a binder that rejects native UUID binds.
    #[must_use]
    pub fn text_only() -> Self {
        Self {
            reject_native: true,
            ..Self::default()
        }
    }

    /// Makes text binds fail as well.
    #[must_use]
    pub const fn with_failing_text(mut self) -> Self {
        self.fail_text = true;
        self
    }

    /// Returns the parameter bound at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&BoundParameter> {
        self.params.get(&index)
    }

    /// Returns every bound parameter ordered by position.
    #[must_use]
    pub const fn params(&self) -> &BTreeMap<usize, BoundParameter> {
        &self.params
    }

    /// Returns how many native UUID binds were attempted.
    #[must_use]
    pub const fn native_attempts(&self) -> usize {
        self.native_attempts
    }
}

impl ParameterBinder for RecordingBinder {
    fn set_null(&mut self, index: usize, sql_type: SqlType) -> DriverResult<()> {
        self.params.insert(index, BoundParameter::Null(sql_type));
        Ok(())
    }

    fn set_uuid(&mut self, index: usize, value: Uuid) -> DriverResult<()> {
        self.native_attempts += 1;
        if self.reject_native {
            return Err(DriverError::unsupported("native UUID parameters"));
        }
        self.params.insert(index, BoundParameter::Uuid(value));
        Ok(())
    }

    fn set_string(&mut self, index: usize, value: &str) -> DriverResult<()> {
        if self.fail_text {
            return Err(DriverError::driver(std::io::Error::other(
                "statement is closed",
            )));
        }
        self.params
            .insert(index, BoundParameter::String(value.to_owned()));
        Ok(())
    }
}
