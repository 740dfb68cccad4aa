//! Column value metadata.
//!
//! Every column in a typed row is described by a value-metadata handler that
//! knows how to coerce, order, hash, render, stream, and bind its values.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types ([`domain::Value`], [`domain::ValueMetaConfig`], [`domain::ValueMetaBase`], etc.)
//! - **Ports**: Trait seams ([`ports::ValueMeta`], [`ports::ParameterBinder`], [`ports::ResultRow`], [`ports::DatabaseDialect`])
//! - **Adapters**: The UUID handler ([`adapters::uuid::UuidValueMeta`]) and driver stand-ins
//!
//! # Example
//!
//! ```
//! use valuemeta_uuid::value::adapters::uuid::UuidValueMeta;
//! use valuemeta_uuid::value::domain::Value;
//! use valuemeta_uuid::value::ports::ValueMeta;
//!
//! let meta = UuidValueMeta::new("id");
//! let mut stream = Vec::new();
//! meta.write_data(&mut stream, &Value::from("123e4567-e89b-12d3-a456-426614174000"))
//!     .expect("valid UUID");
//! let read = meta.read_data(&mut stream.as_slice()).expect("complete frame");
//! assert_eq!(read.map(|uuid| uuid.to_string()).as_deref(), Some("123e4567-e89b-12d3-a456-426614174000"));
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;

#[cfg(test)]
mod tests;
