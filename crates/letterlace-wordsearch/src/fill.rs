//! Random letters for cells not covered by a placed word.

use std::sync::LazyLock;

use letterlace_core::Letter;
use rand::{
    Rng,
    distr::{Distribution as _, weighted::WeightedIndex},
};

/// Relative English letter frequencies, indexed by [`Letter::index`].
///
/// Values are per-mille occurrence counts in typical English text, so the
/// common letters (E, T, A, O, I, N, S, H, R, D, L) dominate the weighted
/// fill while rarities like Q and Z stay rare.
pub(crate) const LETTER_WEIGHTS: [u32; 26] = [
    82,  // A
    15,  // B
    28,  // C
    43,  // D
    127, // E
    22,  // F
    20,  // G
    61,  // H
    70,  // I
    2,   // J
    8,   // K
    40,  // L
    24,  // M
    67,  // N
    75,  // O
    19,  // P
    1,   // Q
    60,  // R
    63,  // S
    91,  // T
    28,  // U
    10,  // V
    24,  // W
    2,   // X
    20,  // Y
    1,   // Z
];

static WEIGHTED: LazyLock<WeightedIndex<u32>> =
    LazyLock::new(|| WeightedIndex::new(LETTER_WEIGHTS).expect("letter weights are positive"));

/// Draws a single fill letter, frequency-weighted or uniform over A-Z.
pub(crate) fn random_letter<R: Rng + ?Sized>(rng: &mut R, weighted: bool) -> Letter {
    if weighted {
        Letter::ALL[WEIGHTED.sample(rng)]
    } else {
        Letter::ALL[rng.random_range(0..Letter::ALL.len())]
    }
}
