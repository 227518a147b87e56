//! Error types for deckstring encoding and decoding.

use thiserror::Error;

/// A deck definition that breaks one of the shared rules.
///
/// Every variant that concerns a particular value carries the path of the
/// offending field, e.g. `cards[3][1]`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("deck definition: expected an object")]
    NotAnObject,
    #[error("deck definition: missing field {0}")]
    MissingField(&'static str),

    // Shape errors
    #[error("{field}: expected an array")]
    NotAnArray { field: String },
    #[error("{field}: expected an [id, count] pair")]
    NotAPair { field: String },
    #[error("{field}: too many entries")]
    TooManyEntries { field: String },

    // Number errors
    #[error("{field}: expected an integer")]
    NotAnInteger { field: String },
    #[error("{field}: expected a finite number")]
    NotFinite { field: String },
    #[error("{field}: must not be negative")]
    Negative { field: String },
    #[error("{field}: value out of range for u32")]
    OutOfRange { field: String },

    #[error("format: expected 1 or 2, got {0}")]
    UnsupportedFormat(u32),
    #[error("format: unknown name {0}")]
    UnknownFormatName(String),
    #[error("{field}: count must be at least 1")]
    ZeroCount { field: String },
    #[error("{field}: card {id} is listed more than once")]
    DuplicateCard { field: String, id: u32 },
}

/// A deckstring that cannot be turned back into a deck definition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("empty deckstring")]
    Empty,
    #[error("base64 decode: {0}")]
    Base64(base64::DecodeError),
    #[error("truncated deckstring")]
    Truncated,
    #[error("varint out of range")]
    Overflow,
    #[error("reserved byte must be 0x00, got {0:#04x}")]
    Reserved(u8),
    #[error("unsupported deckstring version {0}")]
    UnsupportedVersion(u8),
    #[error("invalid deck: {0}")]
    Invalid(#[from] ValidationError),
}

impl From<varint::error::Error> for DecodeError {
    fn from(e: varint::error::Error) -> Self {
        match e {
            varint::error::Error::Truncated => DecodeError::Truncated,
            varint::error::Error::Overflow | varint::error::Error::OutOfRange(_) => {
                DecodeError::Overflow
            }
        }
    }
}

impl From<nom::Err<varint::error::Error>> for DecodeError {
    fn from(e: nom::Err<varint::error::Error>) -> Self {
        match e {
            nom::Err::Error(e) | nom::Err::Failure(e) => e.into(),
            nom::Err::Incomplete(_) => DecodeError::Truncated,
        }
    }
}
