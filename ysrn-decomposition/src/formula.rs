use ysrn_core::constants::NEUTRAL_ADJUSTMENT;
use ysrn_core::errors::ValidationError;
use ysrn_core::models::DecompositionResult;

/// Three-way relevance split.
///
/// ```text
/// sim'       = (cos(q, c) + 1) / 2
/// adj        = Σ wᵢ² / Σ wᵢ          (0.5 with no active constraints)
/// base       = clamp(sim' × (0.5 + 0.5 × adj), 0, 1)
/// dispersion = 1 − 2 × |sim' − 0.5|
///
/// R = base
/// S = (1 − base) × dispersion
/// N = (1 − base) × (1 − dispersion)
/// ```
///
/// `adj` is the mean of the active weights, each weighted by its own share of
/// the total weight, so dominant constraints pull the adjustment toward themselves.
pub fn compute(mapped_similarity: f64, adjustment: f64) -> DecompositionResult {
    compute_breakdown(mapped_similarity, adjustment).result
}

/// Weighted mean of the active constraint weights.
///
/// Every weight must be finite and within [0, 1].
pub fn constraint_adjustment(active: &[(String, f64)]) -> Result<f64, ValidationError> {
    if active.is_empty() {
        return Ok(NEUTRAL_ADJUSTMENT);
    }
    let mut sum = 0.0;
    let mut sum_sq = 0.0;
    for (id, w) in active {
        if !w.is_finite() || !(0.0..=1.0).contains(w) {
            return Err(ValidationError::WeightOutOfRange {
                id: id.clone(),
                weight: *w,
            });
        }
        sum += w;
        sum_sq += w * w;
    }
    if sum <= 0.0 {
        // Every active constraint has zero importance.
        return Ok(0.0);
    }
    Ok((sum_sq / sum).clamp(0.0, 1.0))
}

/// Relevant-channel allocation before the remainder is split.
pub fn relevant_base(mapped_similarity: f64, adjustment: f64) -> f64 {
    (mapped_similarity * (0.5 + 0.5 * adjustment)).clamp(0.0, 1.0)
}

/// 1 at an ambiguous similarity of 0.5, 0 at either extreme.
pub fn dispersion(mapped_similarity: f64) -> f64 {
    (1.0 - 2.0 * (mapped_similarity - 0.5).abs()).clamp(0.0, 1.0)
}

/// Each intermediate value of the formula, for debugging/observability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecompositionBreakdown {
    pub mapped_similarity: f64,
    pub adjustment: f64,
    pub base: f64,
    pub dispersion: f64,
    pub result: DecompositionResult,
}

/// Compute the split with a full breakdown of each step.
pub fn compute_breakdown(mapped_similarity: f64, adjustment: f64) -> DecompositionBreakdown {
    let base = relevant_base(mapped_similarity, adjustment);
    let dispersion = dispersion(mapped_similarity);
    let rest = 1.0 - base;

    let relevant = base;
    let supplementary = (rest * dispersion).clamp(0.0, 1.0);
    let noise = (rest * (1.0 - dispersion)).clamp(0.0, 1.0);

    DecompositionBreakdown {
        mapped_similarity,
        adjustment,
        base,
        dispersion,
        result: DecompositionResult::from_scores(relevant, supplementary, noise),
    }
}
