//! JSON output formatter

use super::ReportFormatter;
use anyhow::Result;
use chhand_core::{CharanAnalysis, MeterError, VerseAnalysis};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs the verse report as one pretty-printed object
pub struct JsonFormatter<W: Write> {
    writer: W,
    report: Option<ReportData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportData {
    /// Whether the verse scans as a Doha
    pub valid: bool,
    /// Per-charan results, empty when analysis stopped early
    pub charans: Vec<CharanData>,
    /// Failure description when analysis stopped early
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One charan of the JSON report
#[derive(Debug, Serialize, Deserialize)]
pub struct CharanData {
    /// Position in the verse, starting at 1
    pub number: usize,
    /// The charan as written
    pub text: String,
    /// Counted matra total
    pub matras: u32,
    /// Total the meter expects here
    pub expected: u32,
    /// OK or MISMATCH
    pub status: String,
    /// Per-syllable matra contributions
    pub weights: Vec<u32>,
    /// Closing weights found when the even-charan cadence is off
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cadence_found: Option<[u32; 2]>,
}

impl CharanData {
    fn from_analysis(charan: &CharanAnalysis) -> Self {
        Self {
            number: charan.number,
            text: charan.text.clone(),
            matras: charan.matras,
            expected: charan.expected,
            status: charan.status.to_string(),
            weights: charan
                .aksharas
                .iter()
                .map(|wa| wa.weight.matras())
                .collect(),
            cadence_found: charan.cadence.as_ref().map(|note| note.found),
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            report: None,
        }
    }
}

impl<W: Write> ReportFormatter for JsonFormatter<W> {
    fn format_analysis(&mut self, analysis: &VerseAnalysis) -> Result<()> {
        self.report = Some(ReportData {
            valid: analysis.is_valid(),
            charans: analysis
                .charans
                .iter()
                .map(CharanData::from_analysis)
                .collect(),
            error: None,
        });
        Ok(())
    }

    fn format_error(&mut self, error: &MeterError) -> Result<()> {
        self.report = Some(ReportData {
            valid: false,
            charans: Vec::new(),
            error: Some(error.to_string()),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if let Some(report) = self.report.take() {
            serde_json::to_writer_pretty(&mut self.writer, &report)?;
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
