//! Coercion of foreign values to UUIDs and their byte payloads.

use uuid::Uuid;

use super::{UUID_TYPE_NAME, UuidValueMeta};
use crate::value::{
    domain::Value,
    error::{ValueMetaError, ValueMetaResult},
};

impl UuidValueMeta {
    /// Coerces any foreign value to a UUID.
    ///
    /// Byte payloads are decoded with the configured charset; every other
    /// representation goes through its textual form.
    pub(super) fn coerce(&self, value: &Value) -> ValueMetaResult<Option<Uuid>> {
        match value {
            Value::Null => Ok(None),
            Value::Uuid(uuid) => Ok(Some(*uuid)),
            Value::Binary(bytes) => {
                let text = self.base.decode_text(bytes)?;
                self.parse_text(&text).map(Some)
            }
            other => self.parse_text(&other.to_string()).map(Some),
        }
    }

    /// Parses the hyphenated layout only; simple, braced, and URN forms are
    /// rejected.
    fn parse_text(&self, text: &str) -> ValueMetaResult<Uuid> {
        let trimmed = text.trim();
        let rejected =
            || ValueMetaError::conversion(self.base.description(), text, UUID_TYPE_NAME);
        if !is_hyphenated(trimmed) {
            return Err(rejected());
        }
        Uuid::try_parse(trimmed).map_err(|_| rejected())
    }

    pub(super) fn to_binary_string(&self, value: &Value) -> ValueMetaResult<Option<Vec<u8>>> {
        match value {
            Value::Binary(bytes)
                if self.base.is_storage_binary_string() && self.base.is_identical_format() =>
            {
                Ok(Some(bytes.clone()))
            }
            _ => self
                .coerce(value)?
                .map(|uuid| self.base.encode_text(&uuid.to_string()))
                .transpose(),
        }
    }
}

const HYPHENATED_LEN: usize = 36;
const HYPHEN_OFFSETS: [usize; 4] = [8, 13, 18, 23];

/// `8-4-4-4-12` groups; digit validation is left to the parser.
fn is_hyphenated(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == HYPHENATED_LEN
        && HYPHEN_OFFSETS
            .iter()
            .all(|&offset| bytes.get(offset) == Some(&b'-'))
}

/// Folds the 128 bits of a UUID into 32.
///
/// XORs the two 64-bit halves, then the upper and lower words of the result.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    reason = "the fold keeps exactly the low 32 bits as a signed hash"
)]
pub(super) fn fold_hash(uuid: Uuid) -> i32 {
    let (high, low) = uuid.as_u64_pair();
    let mixed = high ^ low;
    ((mixed >> 32) ^ mixed) as u32 as i32
}
