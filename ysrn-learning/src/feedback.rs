//! FeedbackProcessor: signal → store update → event → optional persistence.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use ysrn_core::errors::{ValidationError, YsrnError, YsrnResult};
use ysrn_core::events::{DomainEvent, EventPayload};
use ysrn_core::models::{ConstraintSource, WeightUpdate};
use ysrn_core::traits::{IConstraintStore, IEventBus, IWeightPersistence};
use ysrn_observability::events;

/// One feedback signal aimed at one constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintFeedback {
    pub constraint_id: String,
    /// In [-1, 1]. Positive strengthens, negative weakens.
    pub signal: f64,
    #[serde(default)]
    pub source: ConstraintSource,
}

impl ConstraintFeedback {
    pub fn new(constraint_id: impl Into<String>, signal: f64, source: ConstraintSource) -> Self {
        Self {
            constraint_id: constraint_id.into(),
            signal,
            source,
        }
    }

    /// Human rating in [0, 1], mapped to a signal via `2 * rating - 1`.
    pub fn from_rating(constraint_id: impl Into<String>, rating: f64) -> YsrnResult<Self> {
        if !(0.0..=1.0).contains(&rating) {
            return Err(ValidationError::InvalidThreshold {
                name: "rating".into(),
                value: rating,
            }
            .into());
        }
        Ok(Self::new(constraint_id, 2.0 * rating - 1.0, ConstraintSource::Human))
    }
}

/// The item that stopped a batch.
#[derive(Debug)]
pub struct RejectedFeedback {
    /// Position in the submitted batch.
    pub index: usize,
    pub constraint_id: String,
    pub error: YsrnError,
}

/// Outcome of [`FeedbackProcessor::process_batch`].
#[derive(Debug, Default)]
pub struct FeedbackBatch {
    /// Updates applied before processing stopped, in submission order.
    pub applied: Vec<WeightUpdate>,
    pub rejected: Option<RejectedFeedback>,
}

impl FeedbackBatch {
    pub fn is_complete(&self) -> bool {
        self.rejected.is_none()
    }
}

pub struct FeedbackProcessor {
    store: Arc<dyn IConstraintStore>,
    event_bus: Option<Arc<dyn IEventBus>>,
    persistence: Option<Arc<dyn IWeightPersistence>>,
}

impl FeedbackProcessor {
    pub fn new(store: Arc<dyn IConstraintStore>) -> Self {
        Self {
            store,
            event_bus: None,
            persistence: None,
        }
    }

    pub fn with_event_bus(mut self, bus: Arc<dyn IEventBus>) -> Self {
        self.event_bus = Some(bus);
        self
    }

    /// Save the full weight state after every processed call.
    pub fn with_persistence(mut self, persistence: Arc<dyn IWeightPersistence>) -> Self {
        self.persistence = Some(persistence);
        self
    }

    /// Apply one feedback item. An invalid signal fails without touching the store.
    ///
    /// Event and persistence failures are logged; the weight change stands.
    pub fn process(&self, feedback: &ConstraintFeedback) -> YsrnResult<WeightUpdate> {
        let update = self.apply(feedback)?;
        self.persist();
        Ok(update)
    }

    /// Apply items in order until one fails. Items after the failing one
    /// are not applied. State is persisted once, after the last applied item.
    pub fn process_batch(&self, batch: &[ConstraintFeedback]) -> FeedbackBatch {
        let mut outcome = FeedbackBatch::default();
        for (index, feedback) in batch.iter().enumerate() {
            match self.apply(feedback) {
                Ok(update) => outcome.applied.push(update),
                Err(error) => {
                    tracing::warn!(
                        index,
                        constraint_id = %feedback.constraint_id,
                        error = %error,
                        "feedback batch stopped"
                    );
                    outcome.rejected = Some(RejectedFeedback {
                        index,
                        constraint_id: feedback.constraint_id.clone(),
                        error,
                    });
                    break;
                }
            }
        }
        if !outcome.applied.is_empty() {
            self.persist();
        }
        outcome
    }

    fn apply(&self, feedback: &ConstraintFeedback) -> YsrnResult<WeightUpdate> {
        let span = ysrn_observability::feedback_span!(feedback.constraint_id);
        let _guard = span.enter();

        let update = self
            .store
            .apply_feedback_from(&feedback.constraint_id, feedback.signal, feedback.source)?;

        if let Some(bus) = &self.event_bus {
            let event = DomainEvent::new(EventPayload::ConstraintUpdated {
                constraint_id: update.constraint_id.clone(),
                old_weight: update.old_weight,
                new_weight: update.new_weight,
                source: feedback.source,
            });
            if let Err(e) = bus.publish(&event) {
                events::side_effect_failed("publish constraint_updated", &e);
            }
        }
        Ok(update)
    }

    fn persist(&self) {
        let Some(persistence) = &self.persistence else {
            return;
        };
        let result = self
            .store
            .export_state()
            .and_then(|state| persistence.save_weights(&state));
        if let Err(e) = result {
            events::side_effect_failed("save weights", &e);
        }
    }
}
