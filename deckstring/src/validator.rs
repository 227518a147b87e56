//! Rules shared by the encoder, the decoder and loose input conversion.
//!
//! [`validate`] checks a typed [`DeckDefinition`]. The remaining functions
//! apply the same identifier, count and format rules to untyped JSON values
//! before a definition exists.

use std::collections::HashSet;

use serde_json::Value;

use crate::error::ValidationError;
use crate::{DeckDefinition, Format};

/// Checks every rule a definition must satisfy before it is encoded, and
/// after it has been decoded.
///
/// Returns the game format on success.
pub fn validate(deck: &DeckDefinition) -> Result<Format, ValidationError> {
    let format = Format::try_from(deck.format)?;

    fits_u32("heroes", deck.heroes.len())?;
    fits_u32("cards", deck.cards.len())?;

    let mut seen = HashSet::with_capacity(deck.cards.len());
    for (i, &(id, count)) in deck.cards.iter().enumerate() {
        if count == 0 {
            return Err(ValidationError::ZeroCount {
                field: format!("cards[{i}][1]"),
            });
        }
        if !seen.insert(id) {
            return Err(ValidationError::DuplicateCard {
                field: format!("cards[{i}][0]"),
                id,
            });
        }
    }

    Ok(format)
}

fn fits_u32(field: &str, len: usize) -> Result<(), ValidationError> {
    u32::try_from(len)
        .map(|_| ())
        .map_err(|_| ValidationError::TooManyEntries {
            field: field.to_string(),
        })
}

/// Identifier rule: a non-negative integer within the `u32` range.
pub fn identifier(field: &str, value: &Value) -> Result<u32, ValidationError> {
    let Value::Number(n) = value else {
        return Err(ValidationError::NotAnInteger {
            field: field.to_string(),
        });
    };
    if let Some(v) = n.as_u64() {
        return u32::try_from(v).map_err(|_| ValidationError::OutOfRange {
            field: field.to_string(),
        });
    }
    if n.is_i64() {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }
    match n.as_f64() {
        Some(v) => from_f64(field, v),
        None => Err(ValidationError::NotAnInteger {
            field: field.to_string(),
        }),
    }
}

/// Count rule: an identifier that is also at least 1.
pub fn count(field: &str, value: &Value) -> Result<u32, ValidationError> {
    match identifier(field, value)? {
        0 => Err(ValidationError::ZeroCount {
            field: field.to_string(),
        }),
        n => Ok(n),
    }
}

/// Format rule: the integer 1 or 2. Numeric strings are not accepted.
pub fn format(value: &Value) -> Result<Format, ValidationError> {
    let n = identifier("format", value)?;
    Format::try_from(n)
}

/// Numeric rule for values that arrive as floating point.
pub fn from_f64(field: &str, value: f64) -> Result<u32, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }
    if value.fract() != 0.0 {
        return Err(ValidationError::NotAnInteger {
            field: field.to_string(),
        });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }
    if value > f64::from(u32::MAX) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
        });
    }
    Ok(value as u32)
}

/// Shape rule for `heroes`.
pub(crate) fn heroes(value: &Value) -> Result<Vec<u32>, ValidationError> {
    let Value::Array(items) = value else {
        return Err(ValidationError::NotAnArray {
            field: "heroes".to_string(),
        });
    };
    items
        .iter()
        .enumerate()
        .map(|(i, v)| identifier(&format!("heroes[{i}]"), v))
        .collect()
}

/// Shape rule for `cards`.
pub(crate) fn cards(value: &Value) -> Result<Vec<(u32, u32)>, ValidationError> {
    let Value::Array(items) = value else {
        return Err(ValidationError::NotAnArray {
            field: "cards".to_string(),
        });
    };
    items
        .iter()
        .enumerate()
        .map(|(i, item)| match item.as_array().map(Vec::as_slice) {
            Some([id, n]) => Ok((
                identifier(&format!("cards[{i}][0]"), id)?,
                count(&format!("cards[{i}][1]"), n)?,
            )),
            _ => Err(ValidationError::NotAPair {
                field: format!("cards[{i}]"),
            }),
        })
        .collect()
}
