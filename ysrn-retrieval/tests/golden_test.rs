//! Gated retrieval against the golden ranking cases.

use ysrn_core::models::{ConstraintSnapshot, ContextCandidate};
use ysrn_retrieval::{GatedRetriever, RetrievalRequest};

#[test]
fn ranking_cases_match() {
    let fixture = test_fixtures::retrieval_cases();
    let retriever = GatedRetriever::new();

    for case in &fixture.cases {
        let candidates: Vec<ContextCandidate> = case
            .candidates
            .iter()
            .map(|c| ContextCandidate::new(c.id.clone(), c.embedding.clone()))
            .collect();
        let snapshot: ConstraintSnapshot = case.constraints.iter().cloned().collect();
        let request = RetrievalRequest::new(case.k)
            .with_min_relevance(case.min_relevance)
            .with_diversity_threshold(case.diversity_threshold);

        let results = retriever
            .retrieve(&case.query, &candidates, &snapshot, &request)
            .unwrap_or_else(|e| panic!("{}: {e}", case.name));

        let ids: Vec<&str> = results.iter().map(|r| r.context_id.as_str()).collect();
        assert_eq!(ids, case.expected_ids, "{}", case.name);
        for (rank, r) in results.iter().enumerate() {
            assert_eq!(r.rank, rank, "{}", case.name);
        }
        if let Some(scores) = &case.expected_scores {
            for (r, want) in results.iter().zip(scores) {
                assert!(
                    (r.gated_score - want).abs() < 1e-6,
                    "{}: {} scored {}, expected {}",
                    case.name,
                    r.context_id,
                    r.gated_score,
                    want
                );
            }
        }
    }
}
