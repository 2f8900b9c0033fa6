//! Verse splitting and cleanup
//!
//! A Doha is four quarter-lines (charans). Written verse marks them with
//! dandas, pipes, or line breaks, and frequently collapses each half-verse
//! onto one line with a comma at the caesura. The splitter deals with both
//! layouts; punctuation stripping runs per charan afterwards so the comma
//! is still visible while splitting.

use crate::script::{DANDA, DOUBLE_DANDA};

/// Characters that end a charan outright
const SEPARATORS: &[char] = &['|', DANDA, DOUBLE_DANDA, '\n'];

/// Punctuation with no metrical value, removed before counting
const PUNCTUATION: &[char] = &[
    ',', '.', '-', '?', '!', '"', '\'', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}',
];

/// Split a verse into its quarter-lines.
///
/// Stage one splits on dandas, pipes, and newlines, dropping empty
/// fragments so runs of separators and trailing dandas are harmless. If
/// that leaves exactly two fragments, stage two tries the comma at the
/// caesura: the split is taken only when both halves divide into exactly
/// two pieces each, otherwise the fragments stand as found. The caller
/// decides whether the resulting count fits the meter.
pub fn split_charans(verse: &str) -> Vec<String> {
    let parts: Vec<&str> = verse
        .split(SEPARATORS)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    if parts.len() == 2 {
        let first: Vec<&str> = parts[0].split(',').map(str::trim).collect();
        let second: Vec<&str> = parts[1].split(',').map(str::trim).collect();
        if first.len() == 2 && second.len() == 2 {
            return first.into_iter().chain(second).map(str::to_owned).collect();
        }
    }

    parts.into_iter().map(str::to_owned).collect()
}

/// Remove punctuation that carries no metrical weight.
///
/// Spaces stay: the weigher needs them to close syllables at word gaps.
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|ch| !PUNCTUATION.contains(ch)).collect()
}
