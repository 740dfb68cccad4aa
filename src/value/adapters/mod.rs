//! Adapters for the value-metadata ports.
//!
//! # Available Adapters
//!
//! - [`UuidValueMeta`](self::uuid::UuidValueMeta): the UUID column value type
//! - [`memory::RecordingBinder`] and [`memory::InMemoryRow`]: in-memory
//!   statement and row stand-ins
//! - [`postgres::PgStatement`]: positional binds for Diesel raw queries

pub mod memory;
pub mod postgres;
pub mod uuid;
