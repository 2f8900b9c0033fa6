//! Devanagari character classification
//!
//! Maps codepoints of the Devanagari block (U+0900..U+097F) onto the small
//! set of categories the meter cares about:
//! - अ इ उ ऋ - short independent vowels
//! - आ ई ऊ ए ऐ ओ औ - long independent vowels
//! - ि ु ृ ॢ (U+093F, U+0941, U+0943, U+0962) - short vowel signs
//! - ा ी ू े ै ो ौ (U+093E, U+0940, U+0942, U+0947, U+0948, U+094B, U+094C) -
//!   long vowel signs
//! - ् (U+094D) - virama, kills the inherent vowel
//! - ं (U+0902) / ः (U+0903) - anusvara and visarga, lengthen the syllable
//! - ँ (U+0901) / ़ (U+093C) - chandrabindu and nukta, attach without
//!   changing length
//!
//! Everything else inside the block counts as a consonant carrying the
//! inherent short vowel. The tables are fixed by the script; nothing here is
//! configurable at runtime.

/// Virama (halant), U+094D
pub const VIRAMA: char = '\u{094D}';

/// Anusvara, U+0902
pub const ANUSVARA: char = '\u{0902}';

/// Visarga, U+0903
pub const VISARGA: char = '\u{0903}';

/// Chandrabindu, U+0901
pub const CHANDRABINDU: char = '\u{0901}';

/// Nukta, U+093C
pub const NUKTA: char = '\u{093C}';

/// Danda (single verse delimiter), U+0964
pub const DANDA: char = '\u{0964}';

/// Double danda (verse-final delimiter), U+0965
pub const DOUBLE_DANDA: char = '\u{0965}';

/// Vowel duration, the property weights are derived from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VowelLength {
    /// Hrasva (single matra)
    Short,
    /// Dirgha (double matra)
    Long,
}

/// Classification of a codepoint for metrical analysis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// Standalone vowel letter (अ, आ, ...)
    IndependentVowel(VowelLength),
    /// Dependent vowel sign attached to a consonant (ा, ि, ...)
    Matra(VowelLength),
    /// Virama, suppresses the inherent vowel of the preceding consonant
    Virama,
    /// Anusvara nasal mark
    Anusvara,
    /// Visarga mark
    Visarga,
    /// Chandrabindu nasalization mark
    Chandrabindu,
    /// Nukta diacritic (borrowed-sound consonants like ड़)
    Nukta,
    /// Consonant letter, carries the inherent short vowel
    Consonant,
    /// Not part of the Devanagari block
    NonScript,
}

impl CharClass {
    /// Check if this character attaches to the preceding base character
    pub fn is_dependent(self) -> bool {
        matches!(
            self,
            CharClass::Matra(_)
                | CharClass::Virama
                | CharClass::Anusvara
                | CharClass::Visarga
                | CharClass::Chandrabindu
                | CharClass::Nukta
        )
    }

    /// Check if this character starts a new syllable
    pub fn is_base(self) -> bool {
        matches!(self, CharClass::IndependentVowel(_) | CharClass::Consonant)
    }
}

/// Check whether a codepoint belongs to the Devanagari block.
pub fn is_devanagari(ch: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&ch)
}

/// Classify a single codepoint.
pub fn classify(ch: char) -> CharClass {
    match ch {
        VIRAMA => CharClass::Virama,
        ANUSVARA => CharClass::Anusvara,
        VISARGA => CharClass::Visarga,
        CHANDRABINDU => CharClass::Chandrabindu,
        NUKTA => CharClass::Nukta,

        // Independent vowel letters
        'अ' | 'इ' | 'उ' | 'ऋ' => CharClass::IndependentVowel(VowelLength::Short),
        'आ' | 'ई' | 'ऊ' | 'ए' | 'ऐ' | 'ओ' | 'औ' => {
            CharClass::IndependentVowel(VowelLength::Long)
        }

        // Dependent vowel signs
        '\u{093F}' | '\u{0941}' | '\u{0943}' | '\u{0962}' => CharClass::Matra(VowelLength::Short),
        '\u{093E}' | '\u{0940}' | '\u{0942}' | '\u{0947}' | '\u{0948}' | '\u{094B}'
        | '\u{094C}' => CharClass::Matra(VowelLength::Long),

        // Remaining block members (consonants, digits, stray signs) all
        // behave as syllable bases for counting purposes
        c if is_devanagari(c) => CharClass::Consonant,

        _ => CharClass::NonScript,
    }
}
