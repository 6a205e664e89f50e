use serde::{Deserialize, Serialize};

use super::decomposition::DecompositionResult;

/// One ranked entry of a gated retrieval pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalResult {
    pub context_id: String,
    pub decomposition: DecompositionResult,
    /// `R - 0.5 * N`.
    pub gated_score: f64,
    /// 0-based position in the final ordering.
    pub rank: usize,
}
