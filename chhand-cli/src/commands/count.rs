//! Count command implementation

use anyhow::Result;
use chhand_core::{scan_matras, strip_punctuation};
use clap::Args;
use std::path::PathBuf;

use crate::error::CliError;
use crate::input::{read_stdin, FileReader};

/// Arguments for the count command
#[derive(Debug, Args)]
pub struct CountArgs {
    /// Line or verse text (reads stdin when neither TEXT nor --input is given)
    #[arg(value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Print every syllable with its weight
    #[arg(short, long)]
    pub breakdown: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CountArgs {
    /// Execute the count command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.quiet, self.verbose);

        log::info!("Counting matras");

        let text = self.read_text()?;
        for line in text.lines() {
            for fragment in line.split(['|', '।', '॥']) {
                let fragment = fragment.trim();
                if fragment.is_empty() {
                    continue;
                }
                println!("{}", render_count(fragment, self.breakdown));
            }
        }

        Ok(())
    }

    fn read_text(&self) -> Result<String> {
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

/// Render one fragment's count, with a per-syllable listing when requested.
fn render_count(fragment: &str, breakdown: bool) -> String {
    let scanned = scan_matras(&strip_punctuation(fragment));
    let total: u32 = scanned.iter().map(|wa| wa.weight.matras()).sum();

    let mut out = format!("{fragment} -> {total} Matras");
    if breakdown {
        for wa in &scanned {
            out.push_str(&format!("\n  {} -> {}", wa.akshara, wa.weight.matras()));
        }
    }
    out
}
