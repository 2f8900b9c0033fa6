//! Matra counting and Doha meter validation for Devanagari verse
//!
//! A Doha is a couplet of four quarter-lines (charans) carrying 13, 11, 13,
//! and 11 matras. This crate segments Devanagari text into syllables
//! (aksharas), assigns each its prosodic weight, and checks whole verses
//! against that scheme. Urdu input can be routed through a caller-supplied
//! transliterator.
//!
//! # Quick Start
//!
//! ```
//! use chhand_core::DohaValidator;
//!
//! let validator = DohaValidator::new();
//! let verdict = validator.validate(
//!     "बड़ा भया तो क्या भया, जैसे पेड़ खजूर |\n\
//!      पंथी को छाया नहीं, फल लागे अति दूर ||",
//! );
//! assert!(verdict.is_valid);
//! ```

#![warn(missing_docs)]

pub mod akshara;
pub mod error;
pub mod matra;
pub mod script;
pub mod translit;
pub mod validator;
pub mod verse;

// Re-export key types
pub use akshara::{segment, Akshara};
pub use error::{MeterError, Result, TransliterationError};
pub use matra::{count_matras, scan_matras, weigh, Weight, WeightedAkshara};
pub use translit::{detect_script, Normalizer, Script, Transliterator};
pub use validator::{
    CadenceNote, CharanAnalysis, CharanStatus, DohaValidator, Verdict, VerseAnalysis,
    CHARAN_COUNT, EVEN_CHARAN_CADENCE, EXPECTED_MATRAS,
};
pub use verse::{split_charans, strip_punctuation};

// Convenience functions

/// Analyze a verse with a Devanagari-only validator.
pub fn analyze(verse: &str) -> Result<VerseAnalysis> {
    DohaValidator::new().analyze(verse)
}

/// Validate a verse with a Devanagari-only validator.
pub fn validate(verse: &str) -> Verdict {
    DohaValidator::new().validate(verse)
}
