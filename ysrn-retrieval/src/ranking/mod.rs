//! RankingPipeline: score → filter → order → diversify → assign ranks.

pub mod diversity;
pub mod scorer;

use std::cmp::Ordering;

use ysrn_core::models::RetrievalResult;

use scorer::ScoredCandidate;

/// Total order for ranking: gated score descending, then `R` descending,
/// then `N` ascending, then input position.
pub fn compare(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.gated_score
        .total_cmp(&a.gated_score)
        .then_with(|| b.decomposition.relevant.total_cmp(&a.decomposition.relevant))
        .then_with(|| a.decomposition.noise.total_cmp(&b.decomposition.noise))
        .then_with(|| a.position.cmp(&b.position))
}

/// Drop candidates below `min_relevance` and sort the rest.
pub fn order(mut scored: Vec<ScoredCandidate>, min_relevance: f64) -> Vec<ScoredCandidate> {
    scored.retain(|c| c.decomposition.relevant >= min_relevance);
    scored.sort_by(compare);
    scored
}

/// Number the accepted candidates 0..n in their final order.
pub fn assign_ranks(accepted: Vec<ScoredCandidate>) -> Vec<RetrievalResult> {
    accepted
        .into_iter()
        .enumerate()
        .map(|(rank, c)| RetrievalResult {
            context_id: c.context_id,
            decomposition: c.decomposition,
            gated_score: c.gated_score,
            rank,
        })
        .collect()
}
