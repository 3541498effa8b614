//! bubblesplit command-line entry point

use anyhow::Result;
use bubblesplit_cli::commands::Commands;
use clap::Parser;

/// Split generated text into natural chat-message bubbles
#[derive(Debug, Parser)]
#[command(name = "bubblesplit", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
