//! Value metadata for UUID columns in a typed-row processing engine.
//!
//! This crate provides the UUID column value type: coercion of foreign
//! representations, null-aware ordering, hashing, the binary row-stream
//! codec, and database column mapping and parameter binding.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for streams and database drivers
//! - **Adapters**: Concrete implementations of ports (UUID handler, Diesel, in-memory)
//!
//! # Modules
//!
//! - [`value`]: Value metadata contracts and the UUID handler

pub mod value;
