use clap::Args;
use deckstring::DeckDefinition;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to a JSON or YAML deck definition. If not specified, reads from stdin
    file: Option<String>,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input = String::from_utf8(read_input(config.file.as_deref())?)?;
    let value = parse_definition(&input)?;
    let deck = DeckDefinition::try_from(&value)?;

    println!("{}", deckstring::encode(&deck)?);

    Ok(())
}

/// Parses the input as JSON, falling back to YAML.
fn parse_definition(input: &str) -> Result<Value> {
    match serde_json::from_str(input) {
        Ok(value) => Ok(value),
        Err(e) => {
            debug!("input is not JSON ({e}), trying YAML");
            Ok(serde_yml::from_str(input)?)
        }
    }
}
