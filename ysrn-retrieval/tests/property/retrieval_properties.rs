//! Property tests for gated retrieval: bounds, ordering, determinism, diversity.

use proptest::prelude::*;

use ysrn_core::models::{ConstraintSnapshot, ContextCandidate};
use ysrn_decomposition::cosine_similarity;
use ysrn_retrieval::{GatedRetriever, RetrievalRequest};

const DIMS: usize = 4;

fn non_zero_vector() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-5.0f32..5.0, DIMS).prop_map(|mut v| {
        v[0] += if v[0] >= 0.0 { 1.0 } else { -1.0 };
        v
    })
}

fn candidates() -> impl Strategy<Value = Vec<ContextCandidate>> {
    prop::collection::vec(non_zero_vector(), 0..24).prop_map(|vs| {
        vs.into_iter()
            .enumerate()
            .map(|(i, v)| ContextCandidate::new(format!("ctx-{i}"), v))
            .collect()
    })
}

fn snapshot() -> impl Strategy<Value = ConstraintSnapshot> {
    prop::collection::vec(0.0f64..=1.0, 0..4).prop_map(|ws| {
        ws.into_iter()
            .enumerate()
            .map(|(i, w)| (format!("c{i}"), w))
            .collect()
    })
}

proptest! {
    #[test]
    fn never_more_than_k(
        query in non_zero_vector(),
        pool in candidates(),
        constraints in snapshot(),
        k in 1usize..10,
        threshold in 0.5f64..1.2,
    ) {
        let request = RetrievalRequest::new(k).with_diversity_threshold(threshold);
        let out = GatedRetriever::new().retrieve(&query, &pool, &constraints, &request).unwrap();
        prop_assert!(out.len() <= k);
        prop_assert!(out.len() <= pool.len());
        for (i, r) in out.iter().enumerate() {
            prop_assert_eq!(r.rank, i);
        }
    }

    #[test]
    fn sorted_by_gated_score_with_tie_break(
        query in non_zero_vector(),
        pool in candidates(),
        constraints in snapshot(),
    ) {
        let request = RetrievalRequest::new(24).with_diversity_threshold(1.5);
        let out = GatedRetriever::new().retrieve(&query, &pool, &constraints, &request).unwrap();
        for pair in out.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.gated_score >= b.gated_score);
            if a.gated_score == b.gated_score {
                prop_assert!(a.decomposition.relevant >= b.decomposition.relevant);
            }
        }
        // With the filter disabled, every candidate comes back.
        prop_assert_eq!(out.len(), pool.len());
    }

    #[test]
    fn identical_inputs_give_identical_output(
        query in non_zero_vector(),
        pool in candidates(),
        constraints in snapshot(),
        k in 1usize..10,
    ) {
        let retriever = GatedRetriever::new();
        let request = RetrievalRequest::new(k);
        let a = retriever.retrieve(&query, &pool, &constraints, &request).unwrap();
        let b = retriever.retrieve(&query, &pool, &constraints, &request).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn no_two_results_are_near_duplicates(
        query in non_zero_vector(),
        pool in candidates(),
        threshold in 0.3f64..1.0,
    ) {
        let request = RetrievalRequest::new(24).with_diversity_threshold(threshold);
        let out = GatedRetriever::new()
            .retrieve(&query, &pool, &ConstraintSnapshot::empty(), &request)
            .unwrap();
        let embedding = |id: &str| {
            pool.iter().find(|c| c.id == id).map(|c| c.embedding.clone()).unwrap()
        };
        for (i, a) in out.iter().enumerate() {
            for b in &out[i + 1..] {
                let sim = cosine_similarity(&embedding(&a.context_id), &embedding(&b.context_id)).unwrap();
                prop_assert!(sim < threshold, "{} ~ {} = {}", a.context_id, b.context_id, sim);
            }
        }
    }

    #[test]
    fn min_relevance_is_respected(
        query in non_zero_vector(),
        pool in candidates(),
        min_relevance in 0.0f64..1.0,
    ) {
        let request = RetrievalRequest::new(24).with_min_relevance(min_relevance);
        let out = GatedRetriever::new()
            .retrieve(&query, &pool, &ConstraintSnapshot::empty(), &request)
            .unwrap();
        for r in &out {
            prop_assert!(r.decomposition.relevant >= min_relevance);
        }
    }
}

