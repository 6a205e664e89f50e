use ysrn_core::config::RetrievalConfig;
use ysrn_core::errors::ValidationError;

/// Parameters of one retrieval pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetrievalRequest {
    /// Maximum number of results. Must be positive.
    pub k: usize,
    /// Candidates with `R` below this are discarded.
    pub min_relevance: f64,
    /// A candidate whose cosine similarity to any accepted result is at or
    /// above this is skipped. Values above 1.0 disable the filter.
    pub diversity_threshold: f64,
}

impl RetrievalRequest {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Self::default()
        }
    }

    pub fn from_config(config: &RetrievalConfig) -> Self {
        Self {
            k: config.default_k,
            min_relevance: config.min_relevance,
            diversity_threshold: config.diversity_threshold,
        }
    }

    pub fn with_min_relevance(mut self, min_relevance: f64) -> Self {
        self.min_relevance = min_relevance;
        self
    }

    pub fn with_diversity_threshold(mut self, threshold: f64) -> Self {
        self.diversity_threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.k == 0 {
            return Err(ValidationError::NonPositiveK);
        }
        if self.min_relevance.is_nan() {
            return Err(ValidationError::InvalidThreshold {
                name: "min_relevance".into(),
                value: self.min_relevance,
            });
        }
        if self.diversity_threshold.is_nan() {
            return Err(ValidationError::InvalidThreshold {
                name: "diversity_threshold".into(),
                value: self.diversity_threshold,
            });
        }
        Ok(())
    }
}

impl Default for RetrievalRequest {
    fn default() -> Self {
        Self::from_config(&RetrievalConfig::default())
    }
}
