//! Plain text output formatter

use super::ReportFormatter;
use anyhow::Result;
use chhand_core::{MeterError, VerseAnalysis};
use std::io::{self, Write};

/// Plain text formatter - renders the report followed by a verdict line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ReportFormatter for TextFormatter<W> {
    fn format_analysis(&mut self, analysis: &VerseAnalysis) -> Result<()> {
        writeln!(self.writer, "{}", analysis.render_report())?;
        writeln!(self.writer)?;
        if analysis.is_valid() {
            writeln!(self.writer, "Result: VALID DOHA ✓")?;
        } else {
            writeln!(self.writer, "Result: INVALID ✗")?;
        }
        Ok(())
    }

    fn format_error(&mut self, error: &MeterError) -> Result<()> {
        writeln!(self.writer, "Error: {error}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Result: INVALID ✗")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
