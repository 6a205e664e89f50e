use serde::{Deserialize, Serialize};

/// Where a constraint's weight came from. Provenance only; never affects scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstraintSource {
    Memristor,
    Sensor,
    Human,
    #[default]
    Manual,
}

/// A named criterion with an adaptive importance weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub id: String,
    /// Current weight in [0.0, 1.0].
    pub weight: f64,
    /// Step-size coefficient for feedback updates.
    pub plasticity_rate: f64,
    /// Number of feedback updates applied. Diagnostics only.
    #[serde(default)]
    pub update_count: u64,
    #[serde(default)]
    pub source: ConstraintSource,
}

impl Constraint {
    /// Create a constraint, clamping the weight to [0.0, 1.0].
    pub fn new(id: impl Into<String>, weight: f64, plasticity_rate: f64) -> Self {
        Self {
            id: id.into(),
            weight: weight.clamp(0.0, 1.0),
            plasticity_rate,
            update_count: 0,
            source: ConstraintSource::default(),
        }
    }

    pub fn with_source(mut self, source: ConstraintSource) -> Self {
        self.source = source;
        self
    }
}

/// Before/after record of one feedback update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightUpdate {
    pub constraint_id: String,
    pub old_weight: f64,
    pub new_weight: f64,
    pub update_count: u64,
}

impl WeightUpdate {
    pub fn delta(&self) -> f64 {
        self.new_weight - self.old_weight
    }
}

/// Full persisted state of a weight store. Ordered by constraint id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightState {
    pub constraints: Vec<Constraint>,
}
