use crate::errors::YsrnResult;
use crate::models::{ContextCandidate, WeightState};

/// Context storage and nearest-candidate lookup.
pub trait IContextPersistence: Send + Sync {
    fn save_context(&self, context: &ContextCandidate) -> YsrnResult<()>;

    fn load_context(&self, id: &str) -> YsrnResult<Option<ContextCandidate>>;

    /// Up to `limit` stored contexts nearest to `query`.
    fn find_candidates(&self, query: &[f32], limit: usize) -> YsrnResult<Vec<ContextCandidate>>;

    fn count(&self) -> YsrnResult<usize>;
}

/// Durable home for constraint weights. Must round-trip id → weight exactly.
pub trait IWeightPersistence: Send + Sync {
    fn save_weights(&self, state: &WeightState) -> YsrnResult<()>;

    /// `None` when nothing has been saved yet.
    fn load_weights(&self) -> YsrnResult<Option<WeightState>>;
}
