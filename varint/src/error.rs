use nom::error::{ErrorKind, ParseError};
use thiserror::Error;

/// Errors raised while writing or reading varints.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The input ended before a byte with the continuation bit cleared.
    #[error("varint: unexpected end of input")]
    Truncated,

    /// The encoded value does not fit in 32 bits.
    #[error("varint: value exceeds 32 bits")]
    Overflow,

    /// A value handed to the writer does not fit in 32 bits.
    #[error("varint: value {0} out of range for u32")]
    OutOfRange(u64),
}

// The combinators varints are composed with (`length_count`, tuples) only
// fail on their own when the input runs out.
impl<'a> ParseError<&'a [u8]> for Error {
    fn from_error_kind(_input: &'a [u8], _kind: ErrorKind) -> Self {
        Error::Truncated
    }

    // Keep the innermost error: a truncated hero list should surface as
    // Truncated, not as a failed Count.
    fn append(_input: &'a [u8], _kind: ErrorKind, other: Self) -> Self {
        other
    }
}
