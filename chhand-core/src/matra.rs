//! Prosodic weight assignment
//!
//! Every akshara carries a weight: laghu (light, 1 matra) or guru (heavy,
//! 2 matras). A dead consonant, written with a virama, contributes 0 on its
//! own but lengthens the light syllable before it. Weighing is therefore a
//! two-pass affair: intrinsic weights first, then conjunct promotion.

use crate::akshara::{segment, Akshara};
use crate::script::{classify, CharClass, VowelLength};

/// Metrical weight of one akshara
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weight {
    /// Dead consonant (virama-bearing), counts nothing by itself
    Conjunct,
    /// Light syllable, one matra
    Laghu,
    /// Heavy syllable, two matras
    Guru,
}

impl Weight {
    /// Matra count this weight contributes to the charan total.
    pub fn matras(self) -> u32 {
        match self {
            Weight::Conjunct => 0,
            Weight::Laghu => 1,
            Weight::Guru => 2,
        }
    }
}

/// An akshara together with its assigned weight
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedAkshara {
    /// The syllable
    pub akshara: Akshara,
    /// Its weight after conjunct promotion
    pub weight: Weight,
}

fn makes_heavy(class: CharClass) -> bool {
    matches!(
        class,
        CharClass::IndependentVowel(VowelLength::Long)
            | CharClass::Matra(VowelLength::Long)
            | CharClass::Anusvara
            | CharClass::Visarga
    )
}

fn intrinsic_weight(akshara: &Akshara) -> Weight {
    if akshara.has_virama() {
        return Weight::Conjunct;
    }
    let heavy = akshara.chars().iter().any(|&ch| makes_heavy(classify(ch)));
    if heavy {
        Weight::Guru
    } else {
        Weight::Laghu
    }
}

/// Assign weights to a sequence of aksharas.
///
/// Pass one reads each syllable alone: virama makes it a conjunct, a long
/// vowel sign, long vowel letter, anusvara, or visarga makes it guru,
/// anything else is laghu. Pass two promotes each laghu standing directly
/// before a conjunct to guru. Promotion looks exactly one syllable back, so
/// a run of conjuncts lengthens at most one syllable, and it applies across
/// word gaps because the gap is gone by segmentation time.
pub fn weigh(aksharas: Vec<Akshara>) -> Vec<WeightedAkshara> {
    let mut weights: Vec<Weight> = aksharas.iter().map(intrinsic_weight).collect();

    for i in 1..weights.len() {
        if weights[i] == Weight::Conjunct && weights[i - 1] == Weight::Laghu {
            weights[i - 1] = Weight::Guru;
        }
    }

    aksharas
        .into_iter()
        .zip(weights)
        .map(|(akshara, weight)| WeightedAkshara { akshara, weight })
        .collect()
}

/// Segment text and weigh the resulting aksharas in one call.
pub fn scan_matras(text: &str) -> Vec<WeightedAkshara> {
    weigh(segment(text))
}

/// Total matra count of a piece of text.
pub fn count_matras(text: &str) -> u32 {
    scan_matras(text).iter().map(|wa| wa.weight.matras()).sum()
}
