use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Immutable, point-in-time copy of all constraint weights.
///
/// A decomposition or retrieval pass reads one snapshot throughout, so
/// concurrent feedback can never mix old and new weights within a pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstraintSnapshot {
    weights: BTreeMap<String, f64>,
    /// Store generation at which the snapshot was taken.
    generation: u64,
}

impl ConstraintSnapshot {
    pub fn new(weights: BTreeMap<String, f64>, generation: u64) -> Self {
        Self {
            weights,
            generation,
        }
    }

    /// A snapshot with no constraints: decomposition uses the neutral adjustment.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.weights.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.weights.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Entries in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Ordered `(id, weight)` pairs, as consumed by the decomposition engine.
    pub fn as_active(&self) -> Vec<(String, f64)> {
        self.weights
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect()
    }

    /// Sub-snapshot containing only `ids`. Ids absent from this snapshot are skipped.
    pub fn restrict<S: AsRef<str>>(&self, ids: &[S]) -> Self {
        let weights = ids
            .iter()
            .filter_map(|id| {
                let id = id.as_ref();
                self.weights.get(id).map(|w| (id.to_string(), *w))
            })
            .collect();
        Self {
            weights,
            generation: self.generation,
        }
    }

    /// Sub-snapshot containing exactly `ids`. Ids absent from this snapshot
    /// take `default_weight`.
    pub fn restrict_or<S: AsRef<str>>(&self, ids: &[S], default_weight: f64) -> Self {
        let weights = ids
            .iter()
            .map(|id| {
                let id = id.as_ref();
                (id.to_string(), self.get(id).unwrap_or(default_weight))
            })
            .collect();
        Self {
            weights,
            generation: self.generation,
        }
    }

    pub fn into_map(self) -> BTreeMap<String, f64> {
        self.weights
    }
}

impl FromIterator<(String, f64)> for ConstraintSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
            generation: 0,
        }
    }
}
