use std::fmt::Write;

use clap::Args;
use deckstring::{DeckDefinition, DecodeOptions};

use crate::error::Result;
use crate::output::OutputFormat;
use crate::utils::read_deckstring;

#[derive(Args)]
pub(crate) struct Config {
    /// Deckstring to decode. If not specified, reads from stdin
    deckstring: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,

    /// Accept records with an unexpected reserved or version byte
    #[arg(long)]
    lenient: bool,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input = read_deckstring(config.deckstring.as_deref())?;
    let options = DecodeOptions {
        strict_preamble: !config.lenient,
    };
    let deck = deckstring::decode_with(&input, &options)?;

    let output = match config.output {
        OutputFormat::Text => format_text(&deck)?,
        OutputFormat::Json => serde_json::to_string_pretty(&deck)?,
        OutputFormat::Yaml => serde_yml::to_string(&deck)?,
    };
    println!("{}", output.trim_end());

    Ok(())
}

fn format_text(deck: &DeckDefinition) -> Result<String> {
    let mut out = String::new();
    match deck.game_format() {
        Ok(format) => writeln!(out, "Format: {} ({})", format, deck.format)?,
        Err(_) => writeln!(out, "Format: {}", deck.format)?,
    }
    let heroes = deck
        .heroes
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "Heroes: {}", heroes)?;
    writeln!(out, "Cards ({}):", deck.total_cards())?;
    for (id, count) in &deck.cards {
        writeln!(out, "  {}x {}", count, id)?;
    }
    Ok(out)
}
