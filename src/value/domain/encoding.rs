//! Character encodings for textual payloads.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when an encoding name is not recognised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported encoding: {0}")]
pub struct ParseStringEncodingError(pub String);

/// Error returned when text cannot be represented in, or decoded from, an
/// encoding.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncodingError {
    /// A character falls outside the encoding's repertoire.
    #[error("character '{character}' cannot be encoded as {encoding}")]
    Unmappable {
        /// The offending character.
        character: char,
        /// The target encoding.
        encoding: StringEncoding,
    },

    /// The byte payload is not valid in the encoding.
    #[error("payload is not valid {0}")]
    Malformed(StringEncoding),
}

/// Charsets supported for textual value payloads.
///
/// Names are matched case-insensitively; unset configuration means UTF-8.
///
/// # Examples
///
/// ```
/// use valuemeta_uuid::value::domain::StringEncoding;
///
/// let encoding: StringEncoding = "latin1".parse().expect("known encoding");
/// assert_eq!(encoding, StringEncoding::Latin1);
/// assert_eq!(encoding.encode("abc").expect("ascii text"), b"abc".to_vec());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StringEncoding {
    /// UTF-8.
    #[default]
    Utf8,
    /// 7-bit US-ASCII.
    Ascii,
    /// ISO-8859-1.
    Latin1,
    /// UTF-16, big-endian, no byte order mark.
    Utf16Be,
    /// UTF-16, little-endian, no byte order mark.
    Utf16Le,
}

impl StringEncoding {
    /// Resolves an optional configured name, defaulting to UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`ParseStringEncodingError`] when the name is not recognised.
    pub fn resolve(name: Option<&str>) -> Result<Self, ParseStringEncodingError> {
        name.map_or(Ok(Self::Utf8), str::parse)
    }

    /// Returns the canonical charset name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Ascii => "US-ASCII",
            Self::Latin1 => "ISO-8859-1",
            Self::Utf16Be => "UTF-16BE",
            Self::Utf16Le => "UTF-16LE",
        }
    }

    /// Encodes `text` into bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::Unmappable`] when a character has no
    /// representation in a single-byte encoding.
    pub fn encode(self, text: &str) -> Result<Vec<u8>, EncodingError> {
        match self {
            Self::Utf8 => Ok(text.as_bytes().to_vec()),
            Self::Ascii => encode_single_byte(text, 0x7F, self),
            Self::Latin1 => encode_single_byte(text, 0xFF, self),
            Self::Utf16Be => Ok(text
                .encode_utf16()
                .flat_map(|unit| {
                    let [high, low] = split_unit(unit);
                    [high, low]
                })
                .collect()),
            Self::Utf16Le => Ok(text
                .encode_utf16()
                .flat_map(|unit| {
                    let [high, low] = split_unit(unit);
                    [low, high]
                })
                .collect()),
        }
    }

    /// Decodes `bytes` into text.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::Malformed`] when the payload is not valid in
    /// this encoding.
    pub fn decode(self, bytes: &[u8]) -> Result<String, EncodingError> {
        match self {
            Self::Utf8 => {
                String::from_utf8(bytes.to_vec()).map_err(|_| EncodingError::Malformed(self))
            }
            Self::Ascii => {
                if bytes.is_ascii() {
                    Ok(bytes.iter().copied().map(char::from).collect())
                } else {
                    Err(EncodingError::Malformed(self))
                }
            }
            Self::Latin1 => Ok(bytes.iter().copied().map(char::from).collect()),
            Self::Utf16Be => decode_utf16(bytes, self, |high, low| join_unit(high, low)),
            Self::Utf16Le => decode_utf16(bytes, self, |low, high| join_unit(high, low)),
        }
    }
}

fn encode_single_byte(
    text: &str,
    max: u32,
    encoding: StringEncoding,
) -> Result<Vec<u8>, EncodingError> {
    text.chars()
        .map(|character| {
            u8::try_from(u32::from(character))
                .ok()
                .filter(|byte| u32::from(*byte) <= max)
                .ok_or(EncodingError::Unmappable {
                    character,
                    encoding,
                })
        })
        .collect()
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "each half is masked or shifted into the u8 range"
)]
const fn split_unit(unit: u16) -> [u8; 2] {
    let high = (unit >> 8) as u8;
    let low = (unit & 0x00FF) as u8;
    [high, low]
}

const fn join_unit(high: u8, low: u8) -> u16 {
    ((high as u16) << 8) | (low as u16)
}

fn decode_utf16(
    bytes: &[u8],
    encoding: StringEncoding,
    join: impl Fn(u8, u8) -> u16,
) -> Result<String, EncodingError> {
    let pairs = bytes.chunks_exact(2);
    if !pairs.remainder().is_empty() {
        return Err(EncodingError::Malformed(encoding));
    }
    let units = pairs.map(|pair| match *pair {
        [first, second] => join(first, second),
        _ => 0,
    });
    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|_| EncodingError::Malformed(encoding))
}

impl FromStr for StringEncoding {
    type Err = ParseStringEncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_uppercase();
        match normalised.as_str() {
            "UTF-8" | "UTF8" => Ok(Self::Utf8),
            "US-ASCII" | "ASCII" => Ok(Self::Ascii),
            "ISO-8859-1" | "ISO_8859_1" | "LATIN1" => Ok(Self::Latin1),
            "UTF-16BE" => Ok(Self::Utf16Be),
            "UTF-16LE" => Ok(Self::Utf16Le),
            _ => Err(ParseStringEncodingError(s.to_owned())),
        }
    }
}

impl fmt::Display for StringEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
