//! In-memory database adapters.
//!
//! Stand-ins for driver statements and result rows, used by tests and by
//! hosts that stage rows before handing them to a real driver.

mod binder;
mod row;

pub use binder::{BoundParameter, RecordingBinder};
pub use row::InMemoryRow;
