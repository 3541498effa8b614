//! Split command implementation

use crate::config::LoadedConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, InputSource};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use bubblesplit_core::MessageSplitter;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files or patterns (supports glob); stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Text to split instead of reading files
    #[arg(long, value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Guideline bubble length in characters
    #[arg(short, long, value_name = "N", env = "BUBBLESPLIT_MAX_CHARS")]
    pub max_chars: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one bubble per line
    Text,
    /// JSON delivery records per input
    Json,
    /// Markdown formatted output
    Markdown,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting split");
        log::debug!("Arguments: {:?}", self);

        let loaded = LoadedConfig::load(self.config.as_deref())?;
        let splitter = self.build_splitter(&loaded)?;
        let format = self.resolve_format(&loaded)?;
        let sources = self.collect_sources()?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            )),
            None => Box::new(io::stdout()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => {
                Box::new(JsonFormatter::new(writer, loaded.cli.output.pretty_json))
            }
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(sources.len() as u64);

        for source in &sources {
            let label = source.label();
            let text = source.read()?;
            let bubbles = splitter.split_bubbles(&text);
            log::info!("{}: {} bubbles", label, bubbles.len());

            formatter.begin_input(&label)?;
            for bubble in &bubbles {
                formatter.format_bubble(bubble)?;
            }
            formatter.end_input()?;
            progress.file_completed(&label, bubbles.len());
        }

        formatter.finish()?;
        progress.finish();
        Ok(())
    }

    /// Splitter from the loaded config with `--max-chars` applied on top
    fn build_splitter(&self, loaded: &LoadedConfig) -> Result<MessageSplitter> {
        let mut config = loaded.splitter.clone();
        if let Some(max_chars) = self.max_chars {
            config.splitting.max_chars = max_chars;
        }
        MessageSplitter::with_config(config).context("Invalid splitter settings")
    }

    fn resolve_format(&self, loaded: &LoadedConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        let name = &loaded.cli.output.default_format;
        OutputFormat::from_str(name, true).map_err(|_| {
            CliError::ConfigError(format!("unknown output format '{name}'")).into()
        })
    }

    fn collect_sources(&self) -> Result<Vec<InputSource>> {
        if let Some(text) = &self.text {
            return Ok(vec![InputSource::Inline(text.clone())]);
        }
        if self.input.is_empty() {
            return Ok(vec![InputSource::Stdin]);
        }
        Ok(resolve_patterns(&self.input)?
            .into_iter()
            .map(InputSource::File)
            .collect())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}
