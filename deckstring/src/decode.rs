use nom::multi::length_count;
use nom::{IResult, Parser};
use tracing::{debug, trace};

use crate::error::DecodeError;
use crate::{DeckDefinition, DecodeOptions, Format, RESERVED, VERSION, validator};

type VarintResult<'a, O> = IResult<&'a [u8], O, varint::error::Error>;

pub(crate) fn from_bytes(
    bytes: &[u8],
    options: &DecodeOptions,
) -> Result<DeckDefinition, DecodeError> {
    let [reserved, version, input @ ..] = bytes else {
        return Err(DecodeError::Truncated);
    };
    trace!(reserved, version, "read preamble");
    if options.strict_preamble {
        if *reserved != RESERVED {
            return Err(DecodeError::Reserved(*reserved));
        }
        if *version != VERSION {
            return Err(DecodeError::UnsupportedVersion(*version));
        }
    }

    let (input, format) = varint::parse(input)?;
    let format = Format::try_from(format)?;
    let (input, heroes) = ids(input)?;
    let (input, single) = ids(input)?;
    let (input, double) = ids(input)?;
    let (input, other) = pairs(input)?;
    if !input.is_empty() {
        trace!(trailing = input.len(), "ignoring trailing bytes");
    }

    let cards = single
        .into_iter()
        .map(|id| (id, 1))
        .chain(double.into_iter().map(|id| (id, 2)))
        .chain(other)
        .collect();
    let deck = DeckDefinition::new(format as u32, heroes, cards);
    validator::validate(&deck)?;

    debug!(
        format = %format,
        heroes = deck.heroes.len(),
        cards = deck.cards.len(),
        "decoded deck"
    );
    Ok(deck)
}

fn ids(input: &[u8]) -> VarintResult<'_, Vec<u32>> {
    length_count(varint::parse, varint::parse).parse(input)
}

fn pairs(input: &[u8]) -> VarintResult<'_, Vec<(u32, u32)>> {
    length_count(varint::parse, (varint::parse, varint::parse)).parse(input)
}
