//! Gated score: Relevant mass rewarded, Noise mass penalized.
//! Supplementary is neutral; it is kept on the result for inspection only.

use ysrn_core::constants::NOISE_PENALTY;
use ysrn_core::models::DecompositionResult;

pub fn gated_score(decomposition: &DecompositionResult) -> f64 {
    decomposition.relevant - NOISE_PENALTY * decomposition.noise
}
