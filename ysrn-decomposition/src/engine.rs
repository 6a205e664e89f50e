//! DecompositionEngine: validates inputs, runs the formula, labels the result.

use rayon::prelude::*;
use tracing::debug;

use ysrn_core::errors::YsrnResult;
use ysrn_core::models::embedding::{check_dimensions, validated_norm};
use ysrn_core::models::DecompositionResult;

use crate::formula::{self, DecompositionBreakdown};
use crate::similarity::{cosine_with_norms, to_unit_interval};

/// Stateless decomposition engine. Safe to share across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecompositionEngine;

impl DecompositionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Decompose one (query, context) pair under the given active constraints.
    ///
    /// Fails on dimension mismatch, zero-norm or non-finite vectors, and
    /// constraint weights outside [0, 1].
    pub fn decompose(
        &self,
        query: &[f32],
        context: &[f32],
        active_constraints: &[(String, f64)],
    ) -> YsrnResult<DecompositionResult> {
        Ok(self
            .decompose_with_breakdown(query, context, active_constraints)?
            .result)
    }

    /// Same as [`decompose`](Self::decompose), returning every intermediate value.
    pub fn decompose_with_breakdown(
        &self,
        query: &[f32],
        context: &[f32],
        active_constraints: &[(String, f64)],
    ) -> YsrnResult<DecompositionBreakdown> {
        let query_norm = validated_norm("query", query)?;
        let adjustment = formula::constraint_adjustment(active_constraints)?;
        let breakdown = split(query, query_norm, context, adjustment, "context")?;
        debug!(
            similarity = breakdown.mapped_similarity,
            adjustment,
            relevant = breakdown.result.relevant,
            label = %breakdown.result.label,
            "decomposed context"
        );
        Ok(breakdown)
    }

    /// Decompose many contexts against one query. Output order matches input order.
    ///
    /// The query and the constraint adjustment are validated once; any invalid
    /// context fails the whole batch.
    pub fn decompose_batch<C>(
        &self,
        query: &[f32],
        contexts: &[C],
        active_constraints: &[(String, f64)],
    ) -> YsrnResult<Vec<DecompositionResult>>
    where
        C: AsRef<[f32]> + Sync,
    {
        let span = ysrn_observability::decomposition_span!(contexts.len());
        let _guard = span.enter();
        let query_norm = validated_norm("query", query)?;
        let adjustment = formula::constraint_adjustment(active_constraints)?;
        let results = contexts
            .par_iter()
            .enumerate()
            .map(|(i, c)| {
                split(query, query_norm, c.as_ref(), adjustment, &format!("context[{i}]"))
                    .map(|b| b.result)
            })
            .collect::<YsrnResult<Vec<_>>>()?;
        debug!(contexts = results.len(), adjustment, "decomposed batch");
        Ok(results)
    }
}

/// Validate one context against an already-validated query and split it.
pub(crate) fn split(
    query: &[f32],
    query_norm: f64,
    context: &[f32],
    adjustment: f64,
    role: &str,
) -> YsrnResult<DecompositionBreakdown> {
    check_dimensions(role, query.len(), context.len())?;
    let context_norm = validated_norm(role, context)?;
    let similarity = cosine_with_norms(query, context, query_norm, context_norm);
    Ok(formula::compute_breakdown(
        to_unit_interval(similarity),
        adjustment,
    ))
}
