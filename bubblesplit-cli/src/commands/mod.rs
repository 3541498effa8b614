//! CLI command implementations

use anyhow::Result;
use bubblesplit_core::tables;
use clap::Subcommand;

pub mod generate_config;
pub mod split;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text into chat-message bubbles
    Split(split::SplitArgs),

    /// Write the default configuration as an annotated TOML template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check that a configuration file loads
    Validate(validate::ValidateArgs),

    /// List built-in rule tables and formats
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the default abbreviations by category
    Abbreviations,

    /// List the default canned phrases
    Phrases,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Text printed for this listing
    pub fn render(&self) -> String {
        match self {
            ListCommands::Abbreviations => {
                let mut out = String::from("Default abbreviations:\n");
                for (category, words) in tables::default_abbreviations() {
                    let tokens: Vec<String> = words.iter().map(|w| format!("{w}.")).collect();
                    out.push_str(&format!("  {category}: {}\n", tokens.join(", ")));
                }
                out
            }
            ListCommands::Phrases => {
                let mut out = String::from("Default canned phrases:\n");
                for phrase in tables::DEFAULT_CANNED_PHRASES {
                    out.push_str(&format!("  {phrase}\n"));
                }
                out
            }
            ListCommands::Formats => String::from(
                "Available output formats:\n  \
                 text      - One bubble per line\n  \
                 json      - Delivery records per input\n  \
                 markdown  - Numbered list of bubbles\n",
            ),
        }
    }
}
