use tracing::{debug, trace};

use crate::error::ValidationError;
use crate::{DeckDefinition, RESERVED, VERSION, validator};

/// Cards split by copy count. Counts of 1 and 2 are implied by the bucket.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Buckets {
    pub(crate) single: Vec<u32>,
    pub(crate) double: Vec<u32>,
    pub(crate) other: Vec<(u32, u32)>,
}

impl Buckets {
    // Input order is kept within each bucket.
    pub(crate) fn split(cards: &[(u32, u32)]) -> Self {
        cards
            .iter()
            .fold(Buckets::default(), |mut buckets, &(id, count)| {
                match count {
                    1 => buckets.single.push(id),
                    2 => buckets.double.push(id),
                    _ => buckets.other.push((id, count)),
                }
                buckets
            })
    }
}

pub(crate) fn to_bytes(deck: &DeckDefinition) -> Result<Vec<u8>, ValidationError> {
    let format = validator::validate(deck)?;
    let buckets = Buckets::split(&deck.cards);
    trace!(
        single = buckets.single.len(),
        double = buckets.double.len(),
        other = buckets.other.len(),
        "split cards into buckets"
    );

    let mut out = Vec::with_capacity(
        3 + varint::MAX_LEN * (4 + deck.heroes.len() + 2 * deck.cards.len()),
    );
    out.push(RESERVED);
    out.push(VERSION);
    varint::write_u32(&mut out, format as u32);

    write_ids(&mut out, &deck.heroes);
    write_ids(&mut out, &buckets.single);
    write_ids(&mut out, &buckets.double);
    // list lengths are bounded by validate
    varint::write_u32(&mut out, buckets.other.len() as u32);
    for &(id, count) in &buckets.other {
        varint::write_u32(&mut out, id);
        varint::write_u32(&mut out, count);
    }

    debug!(
        format = %format,
        heroes = deck.heroes.len(),
        cards = deck.cards.len(),
        bytes = out.len(),
        "encoded deck"
    );
    Ok(out)
}

fn write_ids(out: &mut Vec<u8>, ids: &[u32]) {
    varint::write_u32(out, ids.len() as u32);
    for &id in ids {
        varint::write_u32(out, id);
    }
}
