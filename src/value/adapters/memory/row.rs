//! In-memory result row.

use crate::value::{
    domain::Value,
    ports::{DriverError, DriverResult, ResultRow},
};

/// A fetched row held in memory, addressed from column 1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryRow {
    columns: Vec<Value>,
}

impl InMemoryRow {
    /// Creates a row from its column values in order.
    #[must_use]
    pub fn new(columns: impl IntoIterator<Item = Value>) -> Self {
        Self {
            columns: columns.into_iter().collect(),
        }
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }
}

impl ResultRow for InMemoryRow {
    fn get_object(&self, column: usize) -> DriverResult<Value> {
        column
            .checked_sub(1)
            .and_then(|offset| self.columns.get(offset))
            .cloned()
            .ok_or(DriverError::ColumnOutOfRange {
                column,
                width: self.columns.len(),
            })
    }
}
