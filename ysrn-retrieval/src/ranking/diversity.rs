//! Greedy near-duplicate suppression.
//!
//! Walks candidates in ranked order and accepts one only if its cosine
//! similarity to every already-accepted candidate is below the threshold.
//! Skipped candidates are not replaced by padding, so fewer than `k`
//! results come back when the pool lacks diversity.

use ysrn_decomposition::similarity::cosine_with_norms;

use super::scorer::ScoredCandidate;

pub fn select(ranked: Vec<ScoredCandidate>, k: usize, threshold: f64) -> Vec<ScoredCandidate> {
    let mut accepted: Vec<ScoredCandidate> = Vec::with_capacity(k.min(ranked.len()));
    for candidate in ranked {
        if accepted.len() >= k {
            break;
        }
        let near_duplicate = accepted.iter().any(|kept| {
            cosine_with_norms(&kept.embedding, &candidate.embedding, kept.norm, candidate.norm)
                >= threshold
        });
        if near_duplicate {
            tracing::debug!(context_id = %candidate.context_id, "skipped near-duplicate");
            continue;
        }
        accepted.push(candidate);
    }
    accepted
}
