use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::defaults;

/// What happens to a constraint's weight when a curriculum stage activates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationPolicy {
    /// Keep the learned weight and its update history.
    #[default]
    Preserve,
    /// Put the weight back to the configured default.
    Reset,
}

/// Constraint weight store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstraintConfig {
    /// Weight given to newly registered and unknown constraints.
    pub default_weight: f64,
    /// Global plasticity rate.
    pub plasticity_rate: f64,
    pub activation_policy: ActivationPolicy,
    /// Per-constraint plasticity rates. Key is the constraint id.
    pub plasticity_overrides: HashMap<String, f64>,
    /// Constraints registered at construction, with their initial weights.
    pub initial: BTreeMap<String, f64>,
}

impl ConstraintConfig {
    /// Plasticity rate for a given constraint id.
    pub fn plasticity_for(&self, id: &str) -> f64 {
        self.plasticity_overrides
            .get(id)
            .copied()
            .unwrap_or(self.plasticity_rate)
    }
}

impl Default for ConstraintConfig {
    fn default() -> Self {
        Self {
            default_weight: defaults::DEFAULT_CONSTRAINT_WEIGHT,
            plasticity_rate: defaults::DEFAULT_PLASTICITY_RATE,
            activation_policy: ActivationPolicy::default(),
            plasticity_overrides: HashMap::new(),
            initial: BTreeMap::new(),
        }
    }
}
