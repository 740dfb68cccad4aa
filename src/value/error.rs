//! Error types for value conversion, stream coding, and database binding.
//!
//! Uses `thiserror` for typed variants that callers can inspect. Stream
//! exhaustion and read timeouts have their own variants so retry logic can
//! react to them without parsing messages.

use std::io;
use thiserror::Error;

/// Boxed source error carried by wrapping variants.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Result type for value-metadata operations.
pub type ValueMetaResult<T> = Result<T, ValueMetaError>;

/// Stream operation a codec error occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecOperation {
    /// Writing a value to an output stream.
    Write,
    /// Reading a value from an input stream.
    Read,
}

/// Errors raised by value-metadata handlers.
#[derive(Debug, Error)]
pub enum ValueMetaError {
    /// The value cannot be coerced to the handler's native type.
    #[error("{meta}: unable to convert value '{value}' to data type {target}")]
    Conversion {
        /// Description of the handler, `"<name> <type>"`.
        meta: String,
        /// The offending value in textual form.
        value: String,
        /// The target type name.
        target: &'static str,
    },

    /// The configured charset is not supported.
    #[error("{meta}: unsupported encoding '{encoding}'")]
    UnsupportedEncoding {
        /// Description of the handler.
        meta: String,
        /// The configured charset name.
        encoding: String,
    },

    /// Writing or reading the stream failed for a reason other than
    /// exhaustion or timeout.
    #[error("{meta}: unable to {} value data: {source}", operation_verb(*.operation))]
    Codec {
        /// Description of the handler.
        meta: String,
        /// Whether the failure happened while writing or reading.
        operation: CodecOperation,
        /// The underlying failure.
        #[source]
        source: BoxedError,
    },

    /// The input stream ended before the value was complete.
    #[error("end of stream reached while reading value: {0}")]
    EndOfStream(#[source] io::Error),

    /// The input channel timed out. The original error is carried untouched.
    #[error("timed out reading value: {0}")]
    Timeout(#[source] io::Error),

    /// Binding a statement parameter failed.
    #[error("{meta}: unable to set parameter at index {index}: {source}")]
    DatabaseBinding {
        /// Description of the handler.
        meta: String,
        /// The parameter index.
        index: usize,
        /// The underlying failure.
        #[source]
        source: BoxedError,
    },

    /// Reading a value from a result row failed.
    #[error("{meta}: unable to read value from result row at index {index}: {source}")]
    DatabaseRead {
        /// Description of the handler.
        meta: String,
        /// The 0-based column index.
        index: usize,
        /// The underlying failure.
        #[source]
        source: BoxedError,
    },
}

const fn operation_verb(operation: CodecOperation) -> &'static str {
    match operation {
        CodecOperation::Write => "write",
        CodecOperation::Read => "read",
    }
}

impl ValueMetaError {
    /// Creates a conversion error.
    #[must_use]
    pub fn conversion(
        meta: impl Into<String>,
        value: impl Into<String>,
        target: &'static str,
    ) -> Self {
        Self::Conversion {
            meta: meta.into(),
            value: value.into(),
            target,
        }
    }

    /// Creates an unsupported-encoding error.
    #[must_use]
    pub fn unsupported_encoding(meta: impl Into<String>, encoding: impl Into<String>) -> Self {
        Self::UnsupportedEncoding {
            meta: meta.into(),
            encoding: encoding.into(),
        }
    }

    /// Creates a codec error for a failed write.
    #[must_use]
    pub fn write(
        meta: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Codec {
            meta: meta.into(),
            operation: CodecOperation::Write,
            source: Box::new(err),
        }
    }

    /// Creates a codec error for a failed read.
    #[must_use]
    pub fn read(
        meta: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Codec {
            meta: meta.into(),
            operation: CodecOperation::Read,
            source: Box::new(err),
        }
    }

    /// Classifies a stream read failure.
    ///
    /// Exhaustion and timeouts keep their own variants; anything else becomes
    /// a read [`ValueMetaError::Codec`].
    #[must_use]
    pub fn from_read_io(meta: impl Into<String>, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => Self::EndOfStream(err),
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => Self::Timeout(err),
            _ => Self::read(meta, err),
        }
    }

    /// Creates a database binding error.
    #[must_use]
    pub fn binding(
        meta: impl Into<String>,
        index: usize,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::DatabaseBinding {
            meta: meta.into(),
            index,
            source: Box::new(err),
        }
    }

    /// Creates a database read error.
    #[must_use]
    pub fn database_read(
        meta: impl Into<String>,
        index: usize,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::DatabaseRead {
            meta: meta.into(),
            index,
            source: Box::new(err),
        }
    }

    /// Returns `true` for errors raised while coercing a value.
    #[must_use]
    pub const fn is_conversion(&self) -> bool {
        matches!(
            self,
            Self::Conversion { .. } | Self::UnsupportedEncoding { .. }
        )
    }

    /// Returns `true` when the input stream was exhausted.
    #[must_use]
    pub const fn is_end_of_stream(&self) -> bool {
        matches!(self, Self::EndOfStream(_))
    }

    /// Returns `true` when the input channel timed out.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}
