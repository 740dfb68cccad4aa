//! Port trait definitions for value metadata.
//!
//! Ports define the abstract interfaces between value-type handlers and the
//! engine's stream and database infrastructure. Adapters implement these
//! ports for concrete drivers.

pub mod database;
pub mod value_meta;

pub use database::{DatabaseDialect, DriverError, DriverResult, ParameterBinder, ResultRow};
pub use value_meta::ValueMeta;
