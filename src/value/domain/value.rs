//! Foreign value representations handed to value-metadata handlers.
//!
//! Rows arriving from files, streams, and database drivers carry column data
//! in whatever shape the producer chose. [`Value`] captures those shapes so a
//! handler can coerce them into its native type.

use std::fmt;
use uuid::Uuid;

/// A single column datum of unknown origin type.
///
/// # Examples
///
/// ```
/// use valuemeta_uuid::value::domain::Value;
///
/// let value = Value::from("123e4567-e89b-12d3-a456-426614174000");
/// assert!(!value.is_null());
/// assert!(Value::Null.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value.
    #[default]
    Null,
    /// Native UUID.
    Uuid(Uuid),
    /// Text, typically produced by file readers or text columns.
    String(String),
    /// Raw bytes, typically a binary-string storage payload.
    Binary(Vec<u8>),
    /// Signed integer.
    Integer(i64),
    /// Floating point number.
    Number(f64),
    /// Boolean flag.
    Boolean(bool),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` when the value is an empty string or empty byte payload.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        match self {
            Self::String(text) => text.is_empty(),
            Self::Binary(bytes) => bytes.is_empty(),
            _ => false,
        }
    }
}

/// Renders the textual form used when coercing through text.
///
/// Binary payloads are shown as lossy UTF-8. Handlers that care about the
/// configured charset decode bytes themselves before falling back to this.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Uuid(uuid) => write!(f, "{uuid}"),
            Self::String(text) => f.write_str(text),
            Self::Binary(bytes) => f.write_str(&String::from_utf8_lossy(bytes)),
            Self::Integer(number) => write!(f, "{number}"),
            Self::Number(number) => write!(f, "{number}"),
            Self::Boolean(flag) => write!(f, "{flag}"),
        }
    }
}

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Binary(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
