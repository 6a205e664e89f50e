//! Decompose every candidate against the query and attach its gated score.

use ysrn_core::errors::YsrnResult;
use ysrn_core::models::embedding::validated_norm;
use ysrn_core::models::{ConstraintSnapshot, ContextCandidate, DecompositionResult};
use ysrn_decomposition::DecompositionEngine;

use crate::gating::gated_score;

/// A candidate after decomposition, before ordering.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub context_id: String,
    /// Index in the caller's candidate sequence.
    pub position: usize,
    pub embedding: Vec<f32>,
    /// L2 norm of `embedding`, reused by the diversity filter.
    pub norm: f64,
    pub decomposition: DecompositionResult,
    pub gated_score: f64,
}

/// Score all candidates under one constraint snapshot.
pub fn score(
    engine: &DecompositionEngine,
    query: &[f32],
    candidates: &[ContextCandidate],
    constraints: &ConstraintSnapshot,
) -> YsrnResult<Vec<ScoredCandidate>> {
    let active = constraints.as_active();
    let embeddings: Vec<&[f32]> = candidates.iter().map(|c| c.embedding.as_slice()).collect();
    let decompositions = engine.decompose_batch(query, &embeddings, &active)?;

    candidates
        .iter()
        .zip(decompositions)
        .enumerate()
        .map(|(position, (candidate, decomposition))| {
            let norm = validated_norm(&candidate.id, &candidate.embedding)?;
            Ok(ScoredCandidate {
                context_id: candidate.id.clone(),
                position,
                embedding: candidate.embedding.clone(),
                norm,
                gated_score: gated_score(&decomposition),
                decomposition,
            })
        })
        .collect()
}
