//! Base-128 variable-length integers.
//!
//! Each byte carries seven bits of the value, least-significant group first.
//! The high bit is set on every byte except the last one.
//!
//! ```text
//! 300 = 0b1_0010_1100 → [0xac, 0x02]
//! ```
//!
//! Values are limited to the `u32` range, so an encoding never exceeds
//! [`MAX_LEN`] bytes.

use nom::IResult;

pub mod error;

use error::Error;

/// Longest encoding of a `u32`.
pub const MAX_LEN: usize = 5;

const CONTINUATION: u8 = 0x80;
const PAYLOAD: u8 = 0x7f;

/// Appends the minimal encoding of `value` to `out` and returns the number
/// of bytes written.
pub fn write_u32(out: &mut Vec<u8>, value: u32) -> usize {
    let mut value = value;
    let mut written = 0;
    while value >= u32::from(CONTINUATION) {
        out.push((value as u8 & PAYLOAD) | CONTINUATION);
        value >>= 7;
        written += 1;
    }
    out.push(value as u8);
    written + 1
}

/// Like [`write_u32`], for callers holding a wider integer.
///
/// Fails with [`Error::OutOfRange`] without touching `out` when `value`
/// does not fit in 32 bits.
pub fn write(out: &mut Vec<u8>, value: u64) -> Result<usize, Error> {
    let value = u32::try_from(value).map_err(|_| Error::OutOfRange(value))?;
    Ok(write_u32(out, value))
}

/// Returns the encoding of `value` as a fresh buffer.
pub fn encode(value: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(value));
    write_u32(&mut out, value);
    out
}

/// Number of bytes [`write_u32`] emits for `value`.
pub fn encoded_len(value: u32) -> usize {
    match value {
        0..=0x7f => 1,
        0x80..=0x3fff => 2,
        0x4000..=0x1f_ffff => 3,
        0x20_0000..=0x0fff_ffff => 4,
        _ => 5,
    }
}

/// Reads one varint from the front of `input`.
///
/// Returns the value and the number of bytes consumed. Bytes after the
/// terminating byte are left alone.
pub fn read(input: &[u8]) -> Result<(u32, usize), Error> {
    let mut value: u64 = 0;
    for (i, &b) in input.iter().enumerate() {
        if i == MAX_LEN {
            return Err(Error::Overflow);
        }
        value |= u64::from(b & PAYLOAD) << (7 * i);
        if b & CONTINUATION == 0 {
            let value = u32::try_from(value).map_err(|_| Error::Overflow)?;
            return Ok((value, i + 1));
        }
    }
    if input.len() >= MAX_LEN {
        return Err(Error::Overflow);
    }
    Err(Error::Truncated)
}

/// `nom` flavour of [`read`], for composing with other parsers.
pub fn parse(input: &[u8]) -> IResult<&[u8], u32, Error> {
    let (value, consumed) = read(input).map_err(nom::Err::Error)?;
    Ok((&input[consumed..], value))
}
