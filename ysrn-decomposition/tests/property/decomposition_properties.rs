//! Property tests for the R + S + N decomposition.

use proptest::prelude::*;

use ysrn_core::models::RsnLabel;
use ysrn_decomposition::DecompositionEngine;

/// Pairs of equal-length vectors with at least one clearly non-zero component each.
fn vector_pair() -> impl Strategy<Value = (Vec<f32>, Vec<f32>)> {
    (1usize..16).prop_flat_map(|dims| {
        (
            prop::collection::vec(-10.0f32..10.0, dims),
            prop::collection::vec(-10.0f32..10.0, dims),
        )
            .prop_map(|(mut q, mut c)| {
                q[0] += if q[0] >= 0.0 { 1.0 } else { -1.0 };
                c[0] += if c[0] >= 0.0 { 1.0 } else { -1.0 };
                (q, c)
            })
    })
}

fn constraints() -> impl Strategy<Value = Vec<(String, f64)>> {
    prop::collection::vec(0.0f64..=1.0, 0..6).prop_map(|ws| {
        ws.into_iter()
            .enumerate()
            .map(|(i, w)| (format!("c{i}"), w))
            .collect()
    })
}

proptest! {
    #[test]
    fn shares_sum_to_one_and_stay_in_range(
        (q, c) in vector_pair(),
        active in constraints(),
    ) {
        let r = DecompositionEngine::new().decompose(&q, &c, &active).unwrap();
        prop_assert!((r.relevant + r.supplementary + r.noise - 1.0).abs() <= 1e-6);
        for share in [r.relevant, r.supplementary, r.noise] {
            prop_assert!((0.0..=1.0).contains(&share));
        }
    }

    #[test]
    fn label_is_the_argmax(
        (q, c) in vector_pair(),
        active in constraints(),
    ) {
        let r = DecompositionEngine::new().decompose(&q, &c, &active).unwrap();
        let top = r.relevant.max(r.supplementary).max(r.noise);
        let expected = if r.relevant == top {
            RsnLabel::Relevant
        } else if r.supplementary == top {
            RsnLabel::Supplementary
        } else {
            RsnLabel::Noise
        };
        prop_assert_eq!(r.label, expected);
    }

    #[test]
    fn batch_matches_single_calls(
        (q, c) in vector_pair(),
        active in constraints(),
    ) {
        let engine = DecompositionEngine::new();
        let contexts = vec![c.clone(), q.clone(), c];
        let batch = engine.decompose_batch(&q, &contexts, &active).unwrap();
        for (context, result) in contexts.iter().zip(batch) {
            prop_assert_eq!(engine.decompose(&q, context, &active).unwrap(), result);
        }
    }

    #[test]
    fn higher_importance_never_lowers_relevance(
        (q, c) in vector_pair(),
        low in 0.0f64..=1.0,
        bump in 0.0f64..=1.0,
    ) {
        let high = (low + bump).min(1.0);
        let engine = DecompositionEngine::new();
        let a = engine.decompose(&q, &c, &[("x".to_string(), low)]).unwrap();
        let b = engine.decompose(&q, &c, &[("x".to_string(), high)]).unwrap();
        prop_assert!(b.relevant + 1e-12 >= a.relevant);
    }
}
