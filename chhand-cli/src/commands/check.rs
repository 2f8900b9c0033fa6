//! Check command implementation

use anyhow::{Context, Result};
use chhand_core::DohaValidator;
use clap::Args;
use std::fs::File;
use std::io;
use std::path::PathBuf;

use crate::error::CliError;
use crate::input::{read_stdin, FileReader};
use crate::output::{JsonFormatter, ReportFormatter, TextFormatter};

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Verse text (reads stdin when neither TEXT nor --input is given)
    #[arg(value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Read the verse from a file
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Rendered report followed by a verdict line
    Text,
    /// Single JSON object with per-charan data
    Json,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.quiet, self.verbose);

        log::info!("Checking verse against the Doha meter");

        let verse = self.read_verse()?;
        log::debug!("Input verse: {verse:?}");

        let writer: Box<dyn io::Write> = match &self.output {
            Some(path) => Box::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?),
            None => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn ReportFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };

        match DohaValidator::new().analyze(&verse) {
            Ok(analysis) => {
                formatter.format_analysis(&analysis)?;
                formatter.finish()?;
                if analysis.is_valid() {
                    log::info!("Verse scans as a Doha");
                    Ok(())
                } else {
                    log::info!("Verse does not scan as a Doha");
                    Err(CliError::InvalidVerse.into())
                }
            }
            Err(err) => {
                formatter.format_error(&err)?;
                formatter.finish()?;
                Err(err.into())
            }
        }
    }

    fn read_verse(&self) -> Result<String> {
        let raw = if let Some(text) = &self.text {
            text.clone()
        } else if let Some(path) = &self.input {
            FileReader::read_text(path)?
        } else {
            read_stdin()?
        };

        if raw.trim().is_empty() {
            return Err(CliError::EmptyInput.into());
        }

        Ok(raw)
    }
}
