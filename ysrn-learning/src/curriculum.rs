//! CurriculumTracker: staged activation of constraints.
//!
//! Each reported result is appended to the learner's history. When the
//! mean of the last `window` results clears both thresholds the tracker
//! moves up one stage, activates that stage's constraints in the store,
//! and publishes `StageAdvanced`. The last stage is terminal.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use ysrn_core::config::CurriculumConfig;
use ysrn_core::errors::{ValidationError, YsrnError, YsrnResult};
use ysrn_core::events::{DomainEvent, EventPayload};
use ysrn_core::models::{CurriculumStage, LearningProgress};
use ysrn_core::traits::{IConstraintStore, IEventBus};
use ysrn_observability::events;

/// What one call to [`CurriculumTracker::evaluate_progression`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Progression {
    Advanced { from: u32, to: u32 },
    Remained { stage: u32 },
}

impl Progression {
    pub fn stage(&self) -> u32 {
        match self {
            Self::Advanced { to, .. } => *to,
            Self::Remained { stage } => *stage,
        }
    }

    pub fn advanced(&self) -> bool {
        matches!(self, Self::Advanced { .. })
    }
}

impl fmt::Display for Progression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Advanced { to, .. } => write!(f, "Advanced to stage {to}"),
            Self::Remained { stage } => write!(f, "Remaining at stage {stage}"),
        }
    }
}

pub struct CurriculumTracker {
    config: CurriculumConfig,
    progress: LearningProgress,
    store: Arc<dyn IConstraintStore>,
    event_bus: Option<Arc<dyn IEventBus>>,
}

impl CurriculumTracker {
    /// Start at stage 1 and activate its constraints.
    pub fn new(config: CurriculumConfig, store: Arc<dyn IConstraintStore>) -> YsrnResult<Self> {
        if config.stages.is_empty() {
            return Err(YsrnError::ConfigError(
                "curriculum needs at least one stage".into(),
            ));
        }
        if config.window == 0 {
            return Err(YsrnError::ConfigError(
                "curriculum window must be positive".into(),
            ));
        }
        let tracker = Self {
            config,
            progress: LearningProgress::new(1),
            store,
            event_bus: None,
        };
        tracker.activate_current()?;
        Ok(tracker)
    }

    pub fn with_event_bus(mut self, bus: Arc<dyn IEventBus>) -> Self {
        self.event_bus = Some(bus);
        self
    }

    pub fn current_stage(&self) -> u32 {
        self.progress.current_stage
    }

    pub fn stage_info(&self) -> &CurriculumStage {
        let index = (self.progress.current_stage as usize).saturating_sub(1);
        // `new` guarantees at least one stage.
        self.config
            .stages
            .get(index)
            .unwrap_or(&self.config.stages[0])
    }

    pub fn stages(&self) -> &[CurriculumStage] {
        &self.config.stages
    }

    pub fn active_constraints(&self) -> &[String] {
        &self.stage_info().active_constraints
    }

    pub fn progress(&self) -> &LearningProgress {
        &self.progress
    }

    /// Record one result and advance at most one stage.
    ///
    /// `accuracy` must be in [0, 1] and `solve_time` (seconds) finite and
    /// non-negative; otherwise nothing is recorded.
    pub fn evaluate_progression(&mut self, accuracy: f64, solve_time: f64) -> YsrnResult<Progression> {
        if !(0.0..=1.0).contains(&accuracy) {
            return Err(ValidationError::InvalidProgress {
                reason: format!("accuracy {accuracy} is outside [0, 1]"),
            }
            .into());
        }
        if !solve_time.is_finite() || solve_time < 0.0 {
            return Err(ValidationError::InvalidProgress {
                reason: format!("solve time {solve_time} must be a non-negative number"),
            }
            .into());
        }

        let from = self.progress.current_stage;
        let span = ysrn_observability::curriculum_span!(from);
        let _guard = span.enter();

        self.progress.add_result(accuracy, solve_time);
        let last_stage = self.config.stages.len() as u32;
        let ready = self.progress.should_advance(
            self.config.advance_accuracy,
            self.config.advance_solve_time,
            self.config.window,
        );
        if from >= last_stage || !ready {
            debug!(stage = from, results = self.progress.accuracy_history.len(), "stage unchanged");
            return Ok(Progression::Remained { stage: from });
        }

        let to = from + 1;
        self.progress.current_stage = to;
        if let Err(e) = self.activate_current() {
            self.progress.current_stage = from;
            return Err(e);
        }
        events::stage_advanced(from, to);
        self.publish(from, to, "performance_threshold");
        Ok(Progression::Advanced { from, to })
    }

    /// Back to stage 1 with an empty history. Weights are not touched
    /// beyond re-activating stage 1's constraints.
    pub fn reset(&mut self) -> YsrnResult<()> {
        self.progress = LearningProgress::new(1);
        self.activate_current()?;
        debug!("curriculum reset");
        Ok(())
    }

    fn activate_current(&self) -> YsrnResult<()> {
        self.store.activate(self.active_constraints())
    }

    fn publish(&self, old_stage: u32, new_stage: u32, trigger: &str) {
        let Some(bus) = &self.event_bus else {
            return;
        };
        let event = DomainEvent::new(EventPayload::StageAdvanced {
            old_stage,
            new_stage,
            trigger: trigger.to_string(),
        });
        if let Err(e) = bus.publish(&event) {
            events::side_effect_failed("publish stage_advanced", &e);
        }
    }
}
