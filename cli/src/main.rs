use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod decode;
mod dump;
mod encode;
mod error;
mod output;
mod utils;

use error::Result;

#[derive(Parser)]
#[command(name = "deckcode")]
#[command(about = "Deckstring encoder and decoder", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a JSON or YAML deck definition into a deckstring
    Encode {
        #[command(flatten)]
        config: encode::Config,
    },
    /// Decode a deckstring into a deck definition
    Decode {
        #[command(flatten)]
        config: decode::Config,
    },
    /// Show the binary record behind a deckstring
    Dump {
        #[command(flatten)]
        config: dump::Config,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Encode { config } => encode::execute(config)?,
        Commands::Decode { config } => decode::execute(config)?,
        Commands::Dump { config } => dump::execute(config)?,
    }

    Ok(())
}
