//! Output formatting module

use anyhow::Result;
use chhand_core::{MeterError, VerseAnalysis};

/// Trait for verse report formatters
pub trait ReportFormatter {
    /// Format and output the analysis of a verse
    fn format_analysis(&mut self, analysis: &VerseAnalysis) -> Result<()>;

    /// Format and output a failure that stopped analysis
    fn format_error(&mut self, error: &MeterError) -> Result<()>;

    /// Finalize output (e.g., write the buffered JSON document)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
