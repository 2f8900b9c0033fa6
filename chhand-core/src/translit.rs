//! Script detection and normalization
//!
//! The meter engine reads Devanagari only. Urdu renders the same verse in
//! Arabic script, so input is checked first and routed through a
//! [`Transliterator`] when one is attached. No conversion tables ship with
//! this crate; the trait is the seam for callers that have them.

use std::fmt;
use std::sync::Arc;

use crate::error::{MeterError, Result, TransliterationError};

/// Writing system detected in a verse
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Script {
    /// Devanagari (possibly mixed with Latin or punctuation)
    Devanagari,
    /// Arabic-script text, typically Urdu
    Urdu,
}

/// Check for codepoints in the Arabic block (U+0600..U+06FF).
pub fn contains_arabic_script(text: &str) -> bool {
    text.chars().any(|ch| ('\u{0600}'..='\u{06FF}').contains(&ch))
}

/// Detect the script a verse is written in.
///
/// A single Arabic-block codepoint marks the whole verse as Urdu; everything
/// else is treated as Devanagari and left for the segmenter to pick through.
pub fn detect_script(text: &str) -> Script {
    if contains_arabic_script(text) {
        Script::Urdu
    } else {
        Script::Devanagari
    }
}

/// External transliteration capability.
///
/// The engine only ever requests Urdu to Devanagari and uses the returned
/// text verbatim; implementations supporting other pairs may reject the
/// ones they lack.
pub trait Transliterator: Send + Sync {
    /// Transliterate text from one script to another.
    fn transliterate(
        &self,
        source: Script,
        target: Script,
        text: &str,
    ) -> std::result::Result<String, TransliterationError>;
}

/// Prepares raw verse text for metrical analysis
#[derive(Clone, Default)]
pub struct Normalizer {
    transliterator: Option<Arc<dyn Transliterator>>,
}

impl Normalizer {
    /// Creates a normalizer that accepts Devanagari input only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a normalizer that routes Urdu input through the given
    /// transliterator.
    pub fn with_transliterator(transliterator: Arc<dyn Transliterator>) -> Self {
        Self {
            transliterator: Some(transliterator),
        }
    }

    /// Normalize a verse into Devanagari.
    ///
    /// Devanagari input passes through with surrounding whitespace
    /// trimmed. Urdu input is transliterated when a converter is attached
    /// and rejected with [`MeterError::UnsupportedScript`] when none is.
    pub fn normalize(&self, text: &str) -> Result<String> {
        let text = text.trim();
        match detect_script(text) {
            Script::Devanagari => Ok(text.to_owned()),
            Script::Urdu => match &self.transliterator {
                Some(transliterator) => {
                    Ok(transliterator.transliterate(Script::Urdu, Script::Devanagari, text)?)
                }
                None => Err(MeterError::UnsupportedScript),
            },
        }
    }
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("transliterator", &self.transliterator.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedTransliterator(&'static str);

    impl Transliterator for FixedTransliterator {
        fn transliterate(
            &self,
            source: Script,
            target: Script,
            _text: &str,
        ) -> std::result::Result<String, TransliterationError> {
            assert_eq!(source, Script::Urdu);
            assert_eq!(target, Script::Devanagari);
            Ok(self.0.to_owned())
        }
    }

    struct FailingTransliterator;

    impl Transliterator for FailingTransliterator {
        fn transliterate(
            &self,
            _source: Script,
            _target: Script,
            _text: &str,
        ) -> std::result::Result<String, TransliterationError> {
            Err(TransliterationError::new("no conversion table"))
        }
    }

    #[test]
    fn test_detects_urdu_from_a_single_codepoint() {
        assert_eq!(detect_script("کتاب"), Script::Urdu);
        assert_eq!(detect_script("कमल ک"), Script::Urdu);
    }

    #[test]
    fn test_devanagari_and_latin_pass_as_devanagari() {
        assert_eq!(detect_script("कमल"), Script::Devanagari);
        assert_eq!(detect_script("hello"), Script::Devanagari);
        assert_eq!(detect_script(""), Script::Devanagari);
    }

    #[test]
    fn test_devanagari_input_passes_through_trimmed() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("कमल").unwrap(), "कमल");
        assert_eq!(normalizer.normalize("  कमल\n").unwrap(), "कमल");
    }

    #[test]
    fn test_urdu_without_transliterator_is_rejected() {
        let normalizer = Normalizer::new();
        let err = normalizer.normalize("کتاب").unwrap_err();
        assert!(matches!(err, MeterError::UnsupportedScript));
    }

    #[test]
    fn test_urdu_with_transliterator_is_converted() {
        let normalizer = Normalizer::with_transliterator(Arc::new(FixedTransliterator("किताब")));
        assert_eq!(normalizer.normalize("کتاب").unwrap(), "किताब");
    }

    #[test]
    fn test_transliterator_failure_propagates() {
        let normalizer = Normalizer::with_transliterator(Arc::new(FailingTransliterator));
        let err = normalizer.normalize("کتاب").unwrap_err();
        assert!(matches!(err, MeterError::Transliteration(_)));
    }
}
