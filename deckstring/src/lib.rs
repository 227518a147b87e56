//! Deckstrings: compact base64 tokens describing a deck.
//!
//! A deckstring is the standard base64 encoding of a small binary record:
//!
//! ```text
//! 0x00 | 0x01 | format | #heroes heroes.. | #x1 ids.. | #x2 ids.. | #xN (id count)..
//! ```
//!
//! Every field after the two preamble bytes is a varint. Cards are grouped
//! by copy count so the common counts of 1 and 2 need no count on the wire.
//!
//! # Example
//!
//! ```
//! use deckstring::{DeckDefinition, decode, encode};
//!
//! let deck = DeckDefinition::new(2, vec![31], vec![(141, 2), (455, 1)]);
//! let code = encode(&deck).unwrap();
//! assert_eq!("AAECAR8BxwMBjQEA", code);
//!
//! let decoded = decode(&code).unwrap();
//! assert_eq!(Some(2), decoded.count_of(141));
//! ```

use std::{
    convert::Infallible,
    fmt::{Display, Formatter},
    str::FromStr,
};

use base64::{Engine, engine::general_purpose::STANDARD};
use deckcode::decoder::{DecodableFrom, Decoder};
use deckcode::encoder::{EncodableTo, Encoder};
use serde::{Deserialize, Serialize};
use serde_json::Value;

mod decode;
mod encode;
pub mod error;
pub mod validator;

use error::{DecodeError, ValidationError};

pub(crate) const RESERVED: u8 = 0x00;
/// Codec version written after the reserved byte. Unrelated to [`Format`].
pub const VERSION: u8 = 0x01;

const WILD: &str = "wild";
const STANDARD_FORMAT: &str = "standard";

/// Game format, the deck-construction rule set a deck is built for.
///
/// Serialized as its integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
#[repr(u32)]
pub enum Format {
    /// Every card ever released.
    Wild = 1,
    /// Recent card sets only.
    Standard = 2,
}

impl TryFrom<u32> for Format {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Format::Wild),
            2 => Ok(Format::Standard),
            _ => Err(ValidationError::UnsupportedFormat(value)),
        }
    }
}

impl From<Format> for u32 {
    fn from(format: Format) -> Self {
        format as u32
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Wild => write!(f, "{}", WILD),
            Format::Standard => write!(f, "{}", STANDARD_FORMAT),
        }
    }
}

impl FromStr for Format {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            WILD => Ok(Format::Wild),
            STANDARD_FORMAT => Ok(Format::Standard),
            _ => Err(ValidationError::UnknownFormatName(s.to_string())),
        }
    }
}

/// A deck: game format, hero card ids and `(card id, copies)` pairs.
///
/// Fields are public; nothing is checked until the deck is encoded. See
/// [`validator::validate`] for the rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckDefinition {
    pub format: u32,
    pub heroes: Vec<u32>,
    pub cards: Vec<(u32, u32)>,
}

impl DeckDefinition {
    pub fn new(format: u32, heroes: Vec<u32>, cards: Vec<(u32, u32)>) -> Self {
        DeckDefinition {
            format,
            heroes,
            cards,
        }
    }

    /// Game format, if `format` holds a supported value.
    pub fn game_format(&self) -> Result<Format, ValidationError> {
        Format::try_from(self.format)
    }

    /// Sum of all copy counts.
    pub fn total_cards(&self) -> u64 {
        self.cards.iter().map(|&(_, count)| u64::from(count)).sum()
    }

    /// Copies of card `id` in the deck, or `None` if it is absent.
    pub fn count_of(&self, id: u32) -> Option<u32> {
        self.cards
            .iter()
            .find(|&&(card, _)| card == id)
            .map(|&(_, count)| count)
    }
}

/// Builds a definition from untyped input such as a parsed JSON document.
///
/// ```json
/// { "format": 2, "heroes": [31], "cards": [[141, 2], [455, 1]] }
/// ```
impl TryFrom<&Value> for DeckDefinition {
    type Error = ValidationError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let Value::Object(map) = value else {
            return Err(ValidationError::NotAnObject);
        };
        let field = |name: &'static str| map.get(name).ok_or(ValidationError::MissingField(name));

        let format = validator::format(field("format")?)?;
        let heroes = validator::heroes(field("heroes")?)?;
        let cards = validator::cards(field("cards")?)?;

        let deck = DeckDefinition::new(format.into(), heroes, cards);
        validator::validate(&deck)?;
        Ok(deck)
    }
}

/// Options controlling how strictly a deckstring is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Reject records whose reserved byte is not `0x00` or whose version
    /// byte is not [`VERSION`].
    pub strict_preamble: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            strict_preamble: true,
        }
    }
}

/// The textual token. Holds base64 text that has not been decoded yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deckstring {
    base64_data: String,
}

impl Deckstring {
    pub fn from_bytes(data: &[u8]) -> Self {
        Deckstring {
            base64_data: STANDARD.encode(data),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.base64_data
    }

    /// Decodes the token with explicit options.
    pub fn to_deck(&self, options: &DecodeOptions) -> Result<DeckDefinition, DecodeError> {
        let bytes: Vec<u8> = self.decode()?;
        decode::from_bytes(&bytes, options)
    }
}

impl Display for Deckstring {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.base64_data)
    }
}

impl FromStr for Deckstring {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DecodeError::Empty);
        }
        Ok(Deckstring {
            base64_data: s.to_string(),
        })
    }
}

impl DecodableFrom<Deckstring> for Vec<u8> {}

impl Decoder<Deckstring, Vec<u8>> for Deckstring {
    type Error = DecodeError;

    fn decode(&self) -> Result<Vec<u8>, Self::Error> {
        let decoded = STANDARD
            .decode(self.as_str())
            .map_err(DecodeError::Base64)?;
        if decoded.is_empty() {
            return Err(DecodeError::Empty);
        }
        Ok(decoded)
    }
}

impl DecodableFrom<Vec<u8>> for DeckDefinition {}

impl Decoder<Vec<u8>, DeckDefinition> for Vec<u8> {
    type Error = DecodeError;

    fn decode(&self) -> Result<DeckDefinition, Self::Error> {
        decode::from_bytes(self, &DecodeOptions::default())
    }
}

impl DecodableFrom<Deckstring> for DeckDefinition {}

impl Decoder<Deckstring, DeckDefinition> for Deckstring {
    type Error = DecodeError;

    fn decode(&self) -> Result<DeckDefinition, Self::Error> {
        self.to_deck(&DecodeOptions::default())
    }
}

impl DecodableFrom<String> for Deckstring {}

impl Decoder<String, Deckstring> for String {
    type Error = DecodeError;

    fn decode(&self) -> Result<Deckstring, Self::Error> {
        Deckstring::from_str(self)
    }
}

impl DecodableFrom<&str> for Deckstring {}

impl Decoder<&str, Deckstring> for &str {
    type Error = DecodeError;

    fn decode(&self) -> Result<Deckstring, Self::Error> {
        Deckstring::from_str(self)
    }
}

impl EncodableTo<DeckDefinition> for Vec<u8> {}

impl Encoder<DeckDefinition, Vec<u8>> for DeckDefinition {
    type Error = ValidationError;

    fn encode(&self) -> Result<Vec<u8>, Self::Error> {
        encode::to_bytes(self)
    }
}

impl EncodableTo<Vec<u8>> for Deckstring {}

impl Encoder<Vec<u8>, Deckstring> for Vec<u8> {
    type Error = Infallible;

    fn encode(&self) -> Result<Deckstring, Self::Error> {
        Ok(Deckstring::from_bytes(self))
    }
}

impl EncodableTo<DeckDefinition> for Deckstring {}

impl Encoder<DeckDefinition, Deckstring> for DeckDefinition {
    type Error = ValidationError;

    fn encode(&self) -> Result<Deckstring, Self::Error> {
        let bytes: Vec<u8> = self.encode()?;
        Ok(Deckstring::from_bytes(&bytes))
    }
}

/// Encodes `deck` as a deckstring.
///
/// The whole definition is validated first; on error nothing is produced.
pub fn encode(deck: &DeckDefinition) -> Result<String, ValidationError> {
    let deckstring: Deckstring = deck.encode()?;
    Ok(deckstring.to_string())
}

/// Decodes a deckstring with the default [`DecodeOptions`].
pub fn decode(deckstring: &str) -> Result<DeckDefinition, DecodeError> {
    decode_with(deckstring, &DecodeOptions::default())
}

/// Decodes a deckstring with explicit options.
pub fn decode_with(
    deckstring: &str,
    options: &DecodeOptions,
) -> Result<DeckDefinition, DecodeError> {
    Deckstring::from_str(deckstring)?.to_deck(options)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use deckcode::decoder::Decoder;
    use deckcode::encoder::Encoder;
    use rstest::rstest;
    use serde_json::{Value, json};

    use crate::error::{DecodeError, ValidationError};
    use crate::{
        DeckDefinition, DecodeOptions, Deckstring, Format, decode, decode_with, encode,
    };

    const EXAMPLE_DECKSTRING: &str =
        "AAECAR8GxwPJBLsFmQfZB/gIDI0B2AGoArUDhwSSBe0G6wfbCe0JgQr+DAA=";

    fn example_deck() -> DeckDefinition {
        DeckDefinition::new(
            2,
            vec![31],
            vec![
                (141, 2),
                (216, 2),
                (296, 2),
                (437, 2),
                (455, 1),
                (519, 2),
                (585, 1),
                (658, 2),
                (699, 1),
                (877, 2),
                (921, 1),
                (1003, 2),
                (985, 1),
                (1144, 1),
                (1243, 2),
                (1261, 2),
                (1281, 2),
                (1662, 2),
            ],
        )
    }

    fn example_json() -> Value {
        let deck = example_deck();
        json!({
            "format": deck.format,
            "heroes": deck.heroes,
            "cards": deck.cards,
        })
    }

    fn with(key: &str, value: Value) -> Value {
        let mut v = example_json();
        v[key] = value;
        v
    }

    fn card_set(deck: &DeckDefinition) -> HashSet<(u32, u32)> {
        deck.cards.iter().copied().collect()
    }

    #[test]
    fn test_encode_example() {
        assert_eq!(EXAMPLE_DECKSTRING, encode(&example_deck()).unwrap());
    }

    #[test]
    fn test_decode_example() {
        let deck = decode(EXAMPLE_DECKSTRING).unwrap();
        let expected = example_deck();
        assert_eq!(expected.format, deck.format);
        assert_eq!(expected.heroes, deck.heroes);
        assert_eq!(card_set(&expected), card_set(&deck));
        assert_eq!(30, deck.total_cards());
        assert_eq!(Ok(Format::Standard), deck.game_format());
    }

    #[test]
    fn test_small_deck_buckets() {
        let deck = DeckDefinition::new(2, vec![31], vec![(141, 2), (455, 1)]);
        let code = encode(&deck).unwrap();
        assert_eq!("AAECAR8BxwMBjQEA", code);

        let decoded = decode(&code).unwrap();
        assert_eq!(vec![(455, 1), (141, 2)], decoded.cards);
        assert_eq!(card_set(&deck), card_set(&decoded));
    }

    #[rstest(
        deck,
        case(DeckDefinition::new(1, vec![], vec![])),
        case(DeckDefinition::new(2, vec![31], vec![(1, 1), (2, 2), (3, 5)])),
        case(DeckDefinition::new(1, vec![274, 7, 31], vec![(u32::MAX, 1), (0, 2), (128, 30)])),
        case(example_deck())
    )]
    fn test_roundtrip(deck: DeckDefinition) {
        let decoded = decode(&encode(&deck).unwrap()).unwrap();
        assert_eq!(deck.format, decoded.format);
        assert_eq!(deck.heroes, decoded.heroes);
        assert_eq!(card_set(&deck), card_set(&decoded));
    }

    #[test]
    fn test_trait_pipeline() {
        let deckstring: Deckstring = EXAMPLE_DECKSTRING.decode().unwrap();
        let bytes: Vec<u8> = deckstring.decode().unwrap();
        assert_eq!([0x00, 0x01], bytes[..2]);
        let deck: DeckDefinition = bytes.decode().unwrap();

        let bytes_again: Vec<u8> = deck.encode().unwrap();
        assert_eq!(bytes, bytes_again);
        let deckstring_again: Deckstring = bytes_again.encode().unwrap();
        assert_eq!(deckstring, deckstring_again);
    }

    #[rstest(
        input,
        expected,
        case(json!(477), ValidationError::NotAnObject),
        case(json!("somestring"), ValidationError::NotAnObject),
        case(json!([1, 2, 3]), ValidationError::NotAnObject),
        case(json!({"format": 2, "heroes": [31]}), ValidationError::MissingField("cards")),
        case(with("heroes", json!(null)), ValidationError::NotAnArray { field: "heroes".to_string() }),
        case(with("format", json!("1")), ValidationError::NotAnInteger { field: "format".to_string() }),
        case(with("format", json!(3)), ValidationError::UnsupportedFormat(3)),
        case(with("format", json!([1])), ValidationError::NotAnInteger { field: "format".to_string() }),
        case(with("heroes", json!(42)), ValidationError::NotAnArray { field: "heroes".to_string() }),
        case(with("heroes", json!("[]")), ValidationError::NotAnArray { field: "heroes".to_string() }),
        case(with("heroes", json!(["a"])), ValidationError::NotAnInteger { field: "heroes[0]".to_string() }),
        case(with("heroes", json!([42, "a"])), ValidationError::NotAnInteger { field: "heroes[1]".to_string() }),
        case(with("heroes", json!([42, "1"])), ValidationError::NotAnInteger { field: "heroes[1]".to_string() }),
        case(with("heroes", json!([-42])), ValidationError::Negative { field: "heroes[0]".to_string() }),
        case(with("cards", json!(2)), ValidationError::NotAnArray { field: "cards".to_string() }),
        case(with("cards", json!("[]")), ValidationError::NotAnArray { field: "cards".to_string() }),
        case(with("cards", json!([3])), ValidationError::NotAPair { field: "cards[0]".to_string() }),
        case(with("cards", json!([[1, 2], 3])), ValidationError::NotAPair { field: "cards[1]".to_string() }),
        case(with("cards", json!(["a"])), ValidationError::NotAPair { field: "cards[0]".to_string() }),
        case(with("cards", json!([[1, 2, 3]])), ValidationError::NotAPair { field: "cards[0]".to_string() }),
        case(with("cards", json!([[1, "a"]])), ValidationError::NotAnInteger { field: "cards[0][1]".to_string() }),
        case(with("cards", json!([["a", 1]])), ValidationError::NotAnInteger { field: "cards[0][0]".to_string() }),
        case(with("cards", json!([[-4, 1]])), ValidationError::Negative { field: "cards[0][0]".to_string() }),
        case(with("cards", json!([[1, -5]])), ValidationError::Negative { field: "cards[0][1]".to_string() }),
        case(with("cards", json!([[1, 0]])), ValidationError::ZeroCount { field: "cards[0][1]".to_string() }),
        case(with("cards", json!([[1, 1.5]])), ValidationError::NotAnInteger { field: "cards[0][1]".to_string() }),
        case(
            with("cards", json!([[1, 1], [1, 2]])),
            ValidationError::DuplicateCard { field: "cards[1][0]".to_string(), id: 1 }
        )
    )]
    fn test_try_from_value_with_error(input: Value, expected: ValidationError) {
        assert_eq!(expected, DeckDefinition::try_from(&input).unwrap_err());
    }

    #[test]
    fn test_try_from_value() {
        let deck = DeckDefinition::try_from(&example_json()).unwrap();
        assert_eq!(example_deck(), deck);
        assert_eq!(EXAMPLE_DECKSTRING, encode(&deck).unwrap());
    }

    #[rstest(
        input,
        expected,
        case("", DecodeError::Empty),
        case("   \n", DecodeError::Empty),
        case("AA==", DecodeError::Truncated),
        case("AAEDAAAAAA==", DecodeError::Invalid(ValidationError::UnsupportedFormat(3)))
    )]
    fn test_decode_with_error(input: &str, expected: DecodeError) {
        assert_eq!(expected, decode(input).unwrap_err());
    }

    #[rstest(input, case("123abc"), case("not base64!"), case("AAECAR8"))]
    fn test_decode_garbage(input: &str) {
        assert!(matches!(decode(input), Err(DecodeError::Base64(_))));
    }

    #[test]
    fn test_decode_with_lenient_preamble() {
        // reserved byte 0x01, version 0x02
        let code = Deckstring::from_bytes(&[0x01, 0x02, 0x01, 0x00, 0x00, 0x00, 0x00]).to_string();
        assert_eq!(Err(DecodeError::Reserved(0x01)), decode(&code));

        let lenient = DecodeOptions {
            strict_preamble: false,
        };
        assert_eq!(
            Ok(DeckDefinition::new(1, vec![], vec![])),
            decode_with(&code, &lenient)
        );
    }

    #[test]
    fn test_deckstring_trims_whitespace() {
        let deckstring: Deckstring = format!("  {EXAMPLE_DECKSTRING}\n").parse().unwrap();
        assert_eq!(EXAMPLE_DECKSTRING, deckstring.as_str());
    }

    #[rstest(
        input,
        expected,
        case("wild", Ok(Format::Wild)),
        case("Standard", Ok(Format::Standard)),
        case("classic", Err(ValidationError::UnknownFormatName("classic".to_string())))
    )]
    fn test_format_from_str(input: &str, expected: Result<Format, ValidationError>) {
        assert_eq!(expected, input.parse::<Format>());
    }

    #[test]
    fn test_count_of() {
        let deck = example_deck();
        assert_eq!(Some(1), deck.count_of(455));
        assert_eq!(Some(2), deck.count_of(141));
        assert_eq!(None, deck.count_of(1));
    }

    #[rstest(
        input,
        expected,
        case(Format::Wild, "1"),
        case(Format::Standard, "2")
    )]
    fn test_format_serde(input: Format, expected: &str) {
        assert_eq!(expected, serde_json::to_string(&input).unwrap());
        assert_eq!(input, serde_json::from_str::<Format>(expected).unwrap());
    }

    #[rstest(input, case("3"), case("0"), case("\"wild\""))]
    fn test_format_deserialize_with_error(input: &str) {
        assert!(serde_json::from_str::<Format>(input).is_err());
    }

    #[rstest(
        deck,
        json,
        case(
            DeckDefinition::new(2, vec![31], vec![(141, 2), (455, 1)]),
            r#"{"format":2,"heroes":[31],"cards":[[141,2],[455,1]]}"#
        ),
        case(DeckDefinition::new(1, vec![], vec![]), r#"{"format":1,"heroes":[],"cards":[]}"#)
    )]
    fn test_deck_definition_serde(deck: DeckDefinition, json: &str) {
        assert_eq!(json, serde_json::to_string(&deck).unwrap());
        let parsed: DeckDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(deck, parsed);
        assert_eq!(decode(&encode(&parsed).unwrap()).unwrap().format, deck.format);
    }
}
