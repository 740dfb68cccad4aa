//! `PostgreSQL` adapters built on Diesel.

mod statement;

pub use statement::{PgBoundQuery, PgStatement};
