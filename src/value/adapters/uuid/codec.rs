//! Binary stream codec for UUID values.
//!
//! Frame layout, big-endian:
//!
//! ```text
//! u8   1 when null, 0 otherwise
//! i32  payload length N (only when not null)
//! [u8] N bytes of the textual UUID in the configured charset
//! ```
//!
//! Readers treat a negative length as null.

use std::io::{self, Read, Write};

use uuid::Uuid;

use super::UuidValueMeta;
use crate::value::{
    domain::Value,
    error::{BoxedError, CodecOperation, ValueMetaError, ValueMetaResult},
    ports::ValueMeta,
};

const NULL_FLAG: u8 = 1;
const PRESENT_FLAG: u8 = 0;
const LENGTH_WIDTH: usize = 4;

impl UuidValueMeta {
    /// Writes one framed value.
    ///
    /// The whole frame is assembled before the stream is touched, so a value
    /// that fails to convert leaves the stream untouched.
    pub(super) fn write_frame(&self, output: &mut dyn Write, value: &Value) -> ValueMetaResult<()> {
        let frame = self.encode_frame(value).map_err(|source| ValueMetaError::Codec {
            meta: self.base.description(),
            operation: CodecOperation::Write,
            source,
        })?;
        output
            .write_all(&frame)
            .map_err(|err| ValueMetaError::write(self.base.description(), err))
    }

    #[expect(clippy::big_endian_bytes, reason = "the stream format is big-endian")]
    fn encode_frame(&self, value: &Value) -> Result<Vec<u8>, BoxedError> {
        let Some(uuid) = self.coerce(value)? else {
            return Ok(vec![NULL_FLAG]);
        };
        let payload = self.base.encode_text(&uuid.to_string())?;
        let length = i32::try_from(payload.len())?;

        let mut frame = Vec::with_capacity(1 + LENGTH_WIDTH + payload.len());
        frame.push(PRESENT_FLAG);
        frame.extend_from_slice(&length.to_be_bytes());
        frame.extend_from_slice(&payload);
        Ok(frame)
    }

    /// Reads one framed value.
    #[expect(clippy::big_endian_bytes, reason = "the stream format is big-endian")]
    pub(super) fn read_frame(&self, input: &mut dyn Read) -> ValueMetaResult<Option<Uuid>> {
        let mut flag = [0_u8; 1];
        self.fill(input, &mut flag)?;
        if flag != [PRESENT_FLAG] {
            return Ok(None);
        }

        let mut length_bytes = [0_u8; LENGTH_WIDTH];
        self.fill(input, &mut length_bytes)?;
        let length = i32::from_be_bytes(length_bytes);
        let Ok(expected) = u32::try_from(length) else {
            tracing::trace!(
                column = %self.base.description(),
                length,
                "negative payload length read as null"
            );
            return Ok(None);
        };

        let limit = u64::from(expected);
        let mut payload = Vec::new();
        let received = Read::take(&mut *input, limit)
            .read_to_end(&mut payload)
            .map_err(|err| ValueMetaError::from_read_io(self.base.description(), err))?;
        if !u64::try_from(received).is_ok_and(|count| count == limit) {
            return Err(ValueMetaError::EndOfStream(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("expected {limit} payload bytes, stream ended after {received}"),
            )));
        }

        self.convert_binary_string_to_native(&payload)
            .map_err(|err| ValueMetaError::read(self.base.description(), err))
    }

    fn fill(&self, input: &mut dyn Read, buf: &mut [u8]) -> ValueMetaResult<()> {
        input
            .read_exact(buf)
            .map_err(|err| ValueMetaError::from_read_io(self.base.description(), err))
    }
}
