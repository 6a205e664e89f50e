//! GatedRetriever: decompose → gate → filter → rank → diversify.

use tracing::{debug, info};

use ysrn_core::errors::YsrnResult;
use ysrn_core::models::{ConstraintSnapshot, ContextCandidate, RetrievalResult};
use ysrn_decomposition::DecompositionEngine;

use crate::ranking::{self, diversity, scorer};
use crate::request::RetrievalRequest;

/// Ranks candidate contexts for a query under one constraint snapshot.
///
/// Holds no state between calls; identical inputs always give identical output.
#[derive(Debug, Clone, Default)]
pub struct GatedRetriever {
    engine: DecompositionEngine,
}

impl GatedRetriever {
    pub fn new() -> Self {
        Self {
            engine: DecompositionEngine::new(),
        }
    }

    pub fn with_engine(engine: DecompositionEngine) -> Self {
        Self { engine }
    }

    /// Return at most `request.k` results in final rank order.
    ///
    /// Fails with a validation error for `k == 0`, NaN thresholds, or any
    /// invalid query/candidate vector. An empty candidate sequence yields an
    /// empty result.
    pub fn retrieve(
        &self,
        query: &[f32],
        candidates: &[ContextCandidate],
        constraints: &ConstraintSnapshot,
        request: &RetrievalRequest,
    ) -> YsrnResult<Vec<RetrievalResult>> {
        request.validate()?;
        if candidates.is_empty() {
            debug!("no candidates to rank");
            return Ok(Vec::new());
        }

        let scored = scorer::score(&self.engine, query, candidates, constraints)?;
        let ordered = ranking::order(scored, request.min_relevance);
        let eligible = ordered.len();
        let accepted = diversity::select(ordered, request.k, request.diversity_threshold);
        let results = ranking::assign_ranks(accepted);

        info!(
            candidates = candidates.len(),
            eligible,
            returned = results.len(),
            k = request.k,
            constraints = constraints.len(),
            generation = constraints.generation(),
            "gated retrieval complete"
        );
        Ok(results)
    }

    /// Positional form of [`retrieve`](Self::retrieve).
    pub fn retrieve_top_k(
        &self,
        query: &[f32],
        candidates: &[ContextCandidate],
        constraints: &ConstraintSnapshot,
        k: usize,
        min_relevance: f64,
        diversity_threshold: f64,
    ) -> YsrnResult<Vec<RetrievalResult>> {
        let request = RetrievalRequest {
            k,
            min_relevance,
            diversity_threshold,
        };
        self.retrieve(query, candidates, constraints, &request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ysrn_core::errors::{ValidationError, YsrnError};

    fn cand(id: &str, v: &[f32]) -> ContextCandidate {
        ContextCandidate::new(id, v.to_vec())
    }

    #[test]
    fn identical_ranks_before_orthogonal() {
        let retriever = GatedRetriever::new();
        let candidates = vec![cand("B", &[0.0, 1.0]), cand("A", &[1.0, 0.0])];
        let out = retriever
            .retrieve(&[1.0, 0.0], &candidates, &ConstraintSnapshot::empty(), &RetrievalRequest::new(2))
            .unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].context_id, "A");
        assert_eq!(out[0].rank, 0);
        assert!((out[0].gated_score - 0.625).abs() < 1e-9);
        assert_eq!(out[1].context_id, "B");
        assert_eq!(out[1].rank, 1);
    }

    #[test]
    fn zero_k_fails_even_without_candidates() {
        let retriever = GatedRetriever::new();
        let err = retriever
            .retrieve(&[1.0], &[], &ConstraintSnapshot::empty(), &RetrievalRequest::new(0))
            .unwrap_err();
        assert!(matches!(err, YsrnError::Validation(ValidationError::NonPositiveK)));
    }

    #[test]
    fn empty_candidates_give_empty_result() {
        let retriever = GatedRetriever::new();
        let out = retriever
            .retrieve(&[1.0, 0.0], &[], &ConstraintSnapshot::empty(), &RetrievalRequest::new(5))
            .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn mismatched_candidate_fails_whole_pass() {
        let retriever = GatedRetriever::new();
        let candidates = vec![cand("ok", &[1.0, 0.0]), cand("bad", &[1.0, 0.0, 0.0])];
        let err = retriever
            .retrieve(&[1.0, 0.0], &candidates, &ConstraintSnapshot::empty(), &RetrievalRequest::new(2))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn positional_form_matches_request_form() {
        let retriever = GatedRetriever::new();
        let candidates = vec![cand("a", &[1.0, 0.2]), cand("b", &[0.1, 1.0])];
        let snapshot: ConstraintSnapshot = [("basic".to_string(), 0.7)].into_iter().collect();
        let a = retriever
            .retrieve_top_k(&[1.0, 0.0], &candidates, &snapshot, 2, 0.0, 0.95)
            .unwrap();
        let b = retriever
            .retrieve(&[1.0, 0.0], &candidates, &snapshot, &RetrievalRequest::new(2))
            .unwrap();
        assert_eq!(a, b);
    }
}
