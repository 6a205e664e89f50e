use serde::{Deserialize, Serialize};

use super::defaults;

/// Gated retrieval configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Number of results returned when the caller does not specify `k`.
    pub default_k: usize,
    /// Candidates with a Relevant share below this are discarded.
    pub min_relevance: f64,
    /// Candidates at or above this cosine similarity to an accepted result are skipped.
    pub diversity_threshold: f64,
    /// How many candidates the query pipeline asks persistence for.
    pub candidate_pool_size: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            default_k: defaults::DEFAULT_TOP_K,
            min_relevance: defaults::DEFAULT_MIN_RELEVANCE,
            diversity_threshold: defaults::DEFAULT_DIVERSITY_THRESHOLD,
            candidate_pool_size: defaults::DEFAULT_CANDIDATE_POOL_SIZE,
        }
    }
}
