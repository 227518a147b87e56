use std::fmt::Write;

use clap::Args;
use deckcode::decoder::Decoder;
use deckstring::Deckstring;

use crate::error::Result;
use crate::utils::{format_hex_dump, read_deckstring};

#[derive(Args)]
pub(crate) struct Config {
    /// Deckstring to dump. If not specified, reads from stdin
    deckstring: Option<String>,

    /// Also label every field of the record, preamble included
    #[arg(long)]
    layout: bool,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input = read_deckstring(config.deckstring.as_deref())?;
    let deckstring: Deckstring = input.parse()?;
    let bytes: Vec<u8> = deckstring.decode()?;

    print!("{}", format_hex_dump(&bytes));
    if config.layout {
        print!("{}", format_layout(&bytes)?);
    }

    Ok(())
}

/// Walks the record field by field.
struct Layout<'a> {
    bytes: &'a [u8],
    offset: usize,
    out: String,
}

impl<'a> Layout<'a> {
    fn line(&mut self, len: usize, value: &str, label: &str) -> Result<()> {
        let raw = self.bytes[self.offset..self.offset + len]
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(self.out, "{:08x}  {:<15} {:<10} {}", self.offset, raw, value, label)?;
        self.offset += len;
        Ok(())
    }

    fn varint(&mut self, label: &str) -> Result<u32> {
        let (value, len) = varint::read(&self.bytes[self.offset..])?;
        self.line(len, &value.to_string(), label)?;
        Ok(value)
    }

    fn ids(&mut self, count_label: &str, label: &str) -> Result<()> {
        let n = self.varint(count_label)?;
        for _ in 0..n {
            self.varint(label)?;
        }
        Ok(())
    }
}

/// One line per field: byte offset, raw bytes, value and field name.
fn format_layout(bytes: &[u8]) -> Result<String> {
    let mut layout = Layout {
        bytes,
        offset: 0,
        out: String::new(),
    };
    for label in ["reserved", "version"] {
        if layout.offset == bytes.len() {
            return Err(deckstring::error::DecodeError::Truncated.into());
        }
        let value = bytes[layout.offset];
        layout.line(1, &format!("{:#04x}", value), label)?;
    }

    layout.varint("format")?;
    layout.ids("heroes", "hero")?;
    layout.ids("x1 cards", "card")?;
    layout.ids("x2 cards", "card")?;
    let n = layout.varint("xN cards")?;
    for _ in 0..n {
        layout.varint("card")?;
        layout.varint("count")?;
    }
    if layout.offset < bytes.len() {
        let rest = bytes.len() - layout.offset;
        layout.line(rest.min(5), &format!("{rest} bytes"), "trailing (ignored)")?;
    }
    Ok(layout.out)
}
