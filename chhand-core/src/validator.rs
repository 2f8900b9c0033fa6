//! Doha validation pipeline
//!
//! Runs a verse through normalization, charan splitting, and matra counting,
//! then checks the totals against the Doha scheme: 13, 11, 13, 11. The
//! even charans are also expected to close on a guru-laghu cadence; a
//! departure there is reported as a note and never fails the verse.

use std::fmt;
use std::sync::Arc;

use crate::error::{MeterError, Result};
use crate::matra::{scan_matras, WeightedAkshara};
use crate::translit::{Normalizer, Transliterator};
use crate::verse::{split_charans, strip_punctuation};

/// Quarter-lines in a Doha
pub const CHARAN_COUNT: usize = 4;

/// Matra totals per charan
pub const EXPECTED_MATRAS: [u32; CHARAN_COUNT] = [13, 11, 13, 11];

/// Closing pattern expected of the even charans (guru then laghu)
pub const EVEN_CHARAN_CADENCE: [u32; 2] = [2, 1];

/// Outcome of counting one charan
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharanStatus {
    /// Matra total matches the scheme
    Ok,
    /// Matra total differs from the scheme
    Mismatch,
}

impl CharanStatus {
    /// Check if the charan met its expected total.
    pub fn is_ok(self) -> bool {
        matches!(self, CharanStatus::Ok)
    }
}

impl fmt::Display for CharanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharanStatus::Ok => write!(f, "OK"),
            CharanStatus::Mismatch => write!(f, "MISMATCH"),
        }
    }
}

/// Advisory raised when an even charan does not close guru-laghu
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CadenceNote {
    /// The last two counting weights actually found
    pub found: [u32; 2],
}

/// Full analysis of one charan
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharanAnalysis {
    /// Position in the verse, starting at 1
    pub number: usize,
    /// The charan as written (split fragment, whitespace trimmed)
    pub text: String,
    /// Matra total after cleanup and conjunct promotion
    pub matras: u32,
    /// Total the scheme expects at this position
    pub expected: u32,
    /// The weighted syllables behind the total
    pub aksharas: Vec<WeightedAkshara>,
    /// Whether the total matches
    pub status: CharanStatus,
    /// Cadence advisory, even charans only
    pub cadence: Option<CadenceNote>,
}

/// Analysis of a whole verse, one entry per charan
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerseAnalysis {
    /// The four charans in verse order
    pub charans: Vec<CharanAnalysis>,
}

impl VerseAnalysis {
    /// A verse is valid when every charan meets its matra total.
    ///
    /// Cadence notes are advisory and do not count against validity.
    pub fn is_valid(&self) -> bool {
        self.charans.iter().all(|charan| charan.status.is_ok())
    }

    /// Render the per-charan report.
    pub fn render_report(&self) -> String {
        let mut lines = vec!["Analysis:".to_owned()];
        for charan in &self.charans {
            lines.push(format!(
                "Charan {}: '{}' -> {} Matras (Expected {}) [{}]",
                charan.number, charan.text, charan.matras, charan.expected, charan.status
            ));
            if let Some(note) = &charan.cadence {
                lines.push(format!(
                    "   Note: Charan {} usually ends in Guru-Laghu (2, 1). Found ({}, {}).",
                    charan.number, note.found[0], note.found[1]
                ));
            }
        }
        lines.join("\n")
    }
}

/// Validity verdict with the rendered report attached
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Verdict {
    /// Whether the verse scans as a Doha
    pub is_valid: bool,
    /// Rendered report, or the failure description when analysis stopped
    pub report: String,
}

/// Checks verses against the Doha meter
#[derive(Clone, Debug, Default)]
pub struct DohaValidator {
    normalizer: Normalizer,
}

impl DohaValidator {
    /// Creates a validator for Devanagari input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator that transliterates Urdu input before analysis.
    pub fn with_transliterator(transliterator: Arc<dyn Transliterator>) -> Self {
        Self {
            normalizer: Normalizer::with_transliterator(transliterator),
        }
    }

    /// Analyze a verse charan by charan.
    ///
    /// Fails when the input script cannot be read (no transliterator) or
    /// when the verse does not divide into four charans. A verse that
    /// divides but counts wrong is not an error; the mismatch lands in the
    /// returned analysis.
    pub fn analyze(&self, verse: &str) -> Result<VerseAnalysis> {
        let normalized = self.normalizer.normalize(verse)?;

        let parts = split_charans(&normalized);
        if parts.len() != CHARAN_COUNT {
            return Err(MeterError::StructuralSplit { found: parts.len() });
        }

        let charans = parts
            .into_iter()
            .enumerate()
            .map(|(i, part)| {
                let number = i + 1;
                let cleaned = strip_punctuation(&part);
                let aksharas = scan_matras(&cleaned);
                let matras = aksharas.iter().map(|wa| wa.weight.matras()).sum();
                let expected = EXPECTED_MATRAS[i];
                let status = if matras == expected {
                    CharanStatus::Ok
                } else {
                    CharanStatus::Mismatch
                };
                let cadence = cadence_note(number, &aksharas);
                CharanAnalysis {
                    number,
                    text: part,
                    matras,
                    expected,
                    aksharas,
                    status,
                    cadence,
                }
            })
            .collect();

        Ok(VerseAnalysis { charans })
    }

    /// Analyze a verse and fold any failure into the verdict.
    pub fn validate(&self, verse: &str) -> Verdict {
        match self.analyze(verse) {
            Ok(analysis) => Verdict {
                is_valid: analysis.is_valid(),
                report: analysis.render_report(),
            },
            Err(err) => Verdict {
                is_valid: false,
                report: err.to_string(),
            },
        }
    }
}

fn cadence_note(number: usize, aksharas: &[WeightedAkshara]) -> Option<CadenceNote> {
    if number % 2 != 0 {
        return None;
    }

    // Conjuncts carry no matras of their own and are skipped when reading
    // the closing pattern
    let active: Vec<u32> = aksharas
        .iter()
        .map(|wa| wa.weight.matras())
        .filter(|&matras| matras > 0)
        .collect();
    if active.len() < 2 {
        return None;
    }

    let found = [active[active.len() - 2], active[active.len() - 1]];
    if found == EVEN_CHARAN_CADENCE {
        None
    } else {
        Some(CadenceNote { found })
    }
}
