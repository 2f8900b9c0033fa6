//! Meter analysis error types

use thiserror::Error;

/// Errors produced while preparing or analyzing a verse
#[derive(Error, Debug)]
pub enum MeterError {
    /// Input is in a script the analyzer cannot read directly
    #[error(
        "input contains Arabic-script text and no transliterator is configured: \
         attach one with `DohaValidator::with_transliterator`"
    )]
    UnsupportedScript,

    /// Verse could not be divided into the four quarter-lines of a Doha
    #[error(
        "could not split verse into 4 charans: found {found} after trying \
         danda, newline, and comma separators (expected two 13-matra and two \
         11-matra quarter-lines)"
    )]
    StructuralSplit {
        /// How many non-empty fragments the split heuristics produced
        found: usize,
    },

    /// Transliteration to Devanagari failed
    #[error("transliteration failed: {0}")]
    Transliteration(#[from] TransliterationError),
}

/// Error reported by a [`Transliterator`](crate::translit::Transliterator)
/// implementation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TransliterationError {
    /// Description of the conversion failure
    pub message: String,
}

impl TransliterationError {
    /// Creates a transliteration error from any displayable cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result type for meter operations
pub type Result<T> = std::result::Result<T, MeterError>;
