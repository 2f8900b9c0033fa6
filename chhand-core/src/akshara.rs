//! Akshara segmentation
//!
//! An akshara is the syllable unit of Devanagari text: a base character
//! (consonant or independent vowel) together with every dependent mark that
//! follows it. Metrical weight is assigned per akshara, so segmentation runs
//! before any counting.

use smallvec::{smallvec, SmallVec};

use crate::script::{classify, VIRAMA};

/// One syllable of Devanagari text: a base codepoint plus its attached marks.
///
/// Four codepoints cover base + nukta + vowel sign + nasal mark without
/// spilling to the heap.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Akshara {
    chars: SmallVec<[char; 4]>,
}

impl Akshara {
    fn new(base: char) -> Self {
        Self {
            chars: smallvec![base],
        }
    }

    fn push(&mut self, mark: char) {
        self.chars.push(mark);
    }

    /// The base character this syllable was opened with.
    pub fn base(&self) -> char {
        self.chars[0]
    }

    /// All codepoints of the syllable, base first.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// The syllable as an owned string.
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Check whether a virama is attached, marking a dead consonant.
    pub fn has_virama(&self) -> bool {
        self.chars.contains(&VIRAMA)
    }
}

impl std::fmt::Display for Akshara {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ch in &self.chars {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

/// Split text into aksharas.
///
/// Base characters open a new syllable, dependent marks attach to the open
/// one, and anything outside the script (spaces, Latin letters, punctuation)
/// closes the open syllable and is discarded. A dependent mark arriving with
/// no syllable open is dropped silently: such input is already damaged and
/// the surviving syllables still count.
pub fn segment(text: &str) -> Vec<Akshara> {
    let mut aksharas = Vec::new();
    let mut current: Option<Akshara> = None;

    for ch in text.chars() {
        let class = classify(ch);
        if class.is_base() {
            if let Some(done) = current.replace(Akshara::new(ch)) {
                aksharas.push(done);
            }
        } else if class.is_dependent() {
            if let Some(akshara) = current.as_mut() {
                akshara.push(ch);
            }
        } else if let Some(done) = current.take() {
            aksharas.push(done);
        }
    }

    if let Some(done) = current {
        aksharas.push(done);
    }

    aksharas
}
