use crate::errors::YsrnResult;
use crate::models::{ConstraintSnapshot, ConstraintSource, WeightState, WeightUpdate};

/// Capability interface of the constraint weight store.
///
/// The in-memory store is one implementation; a hardware-backed store can
/// implement the same contract without touching decomposition or retrieval.
pub trait IConstraintStore: Send + Sync {
    /// Consistent copy of every weight, ordered by id.
    fn get_snapshot(&self) -> YsrnResult<ConstraintSnapshot>;

    /// Current weight. Unknown ids are registered at the default weight.
    fn get_weight(&self, id: &str) -> YsrnResult<f64>;

    /// Apply one feedback signal in [-1, 1], tag the constraint with
    /// `source`, and report the change.
    fn apply_feedback_from(
        &self,
        id: &str,
        signal: f64,
        source: ConstraintSource,
    ) -> YsrnResult<WeightUpdate>;

    /// [`apply_feedback_from`](Self::apply_feedback_from) with `Manual` provenance.
    fn apply_feedback_detailed(&self, id: &str, signal: f64) -> YsrnResult<WeightUpdate> {
        self.apply_feedback_from(id, signal, ConstraintSource::Manual)
    }

    /// Apply one feedback signal in [-1, 1] and return the new weight.
    fn apply_feedback(&self, id: &str, signal: f64) -> YsrnResult<f64> {
        Ok(self.apply_feedback_detailed(id, signal)?.new_weight)
    }

    /// Register `id` at `initial_weight`. Existing ids are left untouched.
    /// Returns whether the id was newly registered.
    fn register_constraint(&self, id: &str, initial_weight: f64) -> YsrnResult<bool>;

    /// Bring a set of constraints into use according to the store's activation policy.
    fn activate(&self, ids: &[String]) -> YsrnResult<()>;

    /// Weight assigned to unknown and newly registered constraints.
    fn default_weight(&self) -> f64;

    /// Every constraint with its full record, ordered by id.
    fn export_state(&self) -> YsrnResult<WeightState>;

    /// Replace all constraints with `state`. Rejected as a unit if any
    /// record is out of range.
    fn restore(&self, state: WeightState) -> YsrnResult<()>;
}
