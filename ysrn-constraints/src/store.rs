//! ConstraintWeightStore: single-writer, multi-reader weight map.
//!
//! Every mutation validates its input before taking the write lock, so a
//! failed call leaves the store untouched. Snapshots are cloned under the
//! read lock and carry the generation they were taken at.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use ysrn_core::config::{ActivationPolicy, ConstraintConfig};
use ysrn_core::errors::{ValidationError, YsrnError, YsrnResult};
use ysrn_core::models::{Constraint, ConstraintSnapshot, ConstraintSource, WeightState, WeightUpdate};
use ysrn_core::traits::IConstraintStore;
use ysrn_observability::events;

use crate::plasticity;

#[derive(Debug, Default)]
struct StoreState {
    constraints: BTreeMap<String, Constraint>,
    /// Bumped on every change to the map.
    generation: u64,
}

impl StoreState {
    fn snapshot(&self) -> ConstraintSnapshot {
        let weights = self
            .constraints
            .iter()
            .map(|(id, c)| (id.clone(), c.weight))
            .collect();
        ConstraintSnapshot::new(weights, self.generation)
    }
}

#[derive(Debug)]
pub struct ConstraintWeightStore {
    state: RwLock<StoreState>,
    config: ConstraintConfig,
}

impl ConstraintWeightStore {
    /// Empty store with default settings.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
            config: ConstraintConfig::default(),
        }
    }

    /// Store seeded with `config.initial`.
    pub fn from_config(config: ConstraintConfig) -> YsrnResult<Self> {
        check_unit("default_weight", config.default_weight)?;
        check_unit("plasticity_rate", config.plasticity_rate)?;
        for (id, rate) in &config.plasticity_overrides {
            check_unit(&format!("plasticity_overrides.{id}"), *rate)?;
        }
        let mut constraints = BTreeMap::new();
        for (id, weight) in &config.initial {
            check_weight(id, *weight)?;
            constraints.insert(
                id.clone(),
                Constraint::new(id.clone(), *weight, config.plasticity_for(id)),
            );
        }
        debug!(seeded = constraints.len(), "constraint store initialized");
        Ok(Self {
            state: RwLock::new(StoreState {
                constraints,
                generation: 0,
            }),
            config,
        })
    }

    pub fn config(&self) -> &ConstraintConfig {
        &self.config
    }

    /// Register `id` at the default weight. No-op for known ids.
    pub fn register(&self, id: &str) -> YsrnResult<bool> {
        self.register_constraint(id, self.config.default_weight)
    }

    /// Full record for one constraint, if registered.
    pub fn constraint(&self, id: &str) -> YsrnResult<Option<Constraint>> {
        Ok(self.read()?.constraints.get(id).cloned())
    }

    pub fn len(&self) -> YsrnResult<usize> {
        Ok(self.read()?.constraints.len())
    }

    pub fn is_empty(&self) -> YsrnResult<bool> {
        Ok(self.len()? == 0)
    }

    pub fn generation(&self) -> YsrnResult<u64> {
        Ok(self.read()?.generation)
    }

    fn new_constraint(&self, id: &str, weight: f64) -> Constraint {
        Constraint::new(id, weight, self.config.plasticity_for(id))
    }

    fn read(&self) -> YsrnResult<RwLockReadGuard<'_, StoreState>> {
        self.state
            .read()
            .map_err(|e| YsrnError::ConcurrencyError(format!("constraint store lock poisoned: {e}")))
    }

    fn write(&self) -> YsrnResult<RwLockWriteGuard<'_, StoreState>> {
        self.state
            .write()
            .map_err(|e| YsrnError::ConcurrencyError(format!("constraint store lock poisoned: {e}")))
    }
}

impl Default for ConstraintWeightStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IConstraintStore for ConstraintWeightStore {
    fn get_snapshot(&self) -> YsrnResult<ConstraintSnapshot> {
        Ok(self.read()?.snapshot())
    }

    fn get_weight(&self, id: &str) -> YsrnResult<f64> {
        if let Some(c) = self.read()?.constraints.get(id) {
            return Ok(c.weight);
        }
        let mut state = self.write()?;
        // Another writer may have registered it between the two locks.
        if let Some(c) = state.constraints.get(id) {
            return Ok(c.weight);
        }
        let constraint = self.new_constraint(id, self.config.default_weight);
        let weight = constraint.weight;
        state.constraints.insert(id.to_string(), constraint);
        state.generation += 1;
        events::constraint_fallback(id, weight);
        Ok(weight)
    }

    fn apply_feedback_from(
        &self,
        id: &str,
        signal: f64,
        source: ConstraintSource,
    ) -> YsrnResult<WeightUpdate> {
        if !(-1.0..=1.0).contains(&signal) {
            return Err(ValidationError::SignalOutOfRange { signal }.into());
        }

        let mut state = self.write()?;
        if !state.constraints.contains_key(id) {
            events::constraint_fallback(id, self.config.default_weight);
            let constraint = self.new_constraint(id, self.config.default_weight);
            state.constraints.insert(id.to_string(), constraint);
        }
        let Some(constraint) = state.constraints.get_mut(id) else {
            return Err(YsrnError::ConcurrencyError(format!(
                "constraint {id} vanished under the write lock"
            )));
        };

        let old_weight = constraint.weight;
        constraint.weight = plasticity::adapt(old_weight, signal, constraint.plasticity_rate);
        constraint.update_count += 1;
        constraint.source = source;
        let update = WeightUpdate {
            constraint_id: id.to_string(),
            old_weight,
            new_weight: constraint.weight,
            update_count: constraint.update_count,
        };
        state.generation += 1;
        drop(state);

        events::constraint_updated(id, update.old_weight, update.new_weight, signal);
        Ok(update)
    }

    fn register_constraint(&self, id: &str, initial_weight: f64) -> YsrnResult<bool> {
        check_weight(id, initial_weight)?;
        let mut state = self.write()?;
        if state.constraints.contains_key(id) {
            return Ok(false);
        }
        let constraint = self.new_constraint(id, initial_weight);
        state.constraints.insert(id.to_string(), constraint);
        state.generation += 1;
        debug!(constraint_id = %id, weight = initial_weight, "constraint registered");
        Ok(true)
    }

    fn activate(&self, ids: &[String]) -> YsrnResult<()> {
        let default_weight = self.config.default_weight;
        let mut state = self.write()?;
        let mut changed = false;
        for id in ids {
            match state.constraints.get_mut(id) {
                None => {
                    let constraint = self.new_constraint(id, default_weight);
                    state.constraints.insert(id.clone(), constraint);
                    changed = true;
                }
                Some(existing) if self.config.activation_policy == ActivationPolicy::Reset => {
                    if existing.weight != default_weight {
                        existing.weight = default_weight;
                        changed = true;
                    }
                }
                Some(_) => {}
            }
        }
        if changed {
            state.generation += 1;
        }
        debug!(
            activated = ids.len(),
            policy = ?self.config.activation_policy,
            changed,
            "constraints activated"
        );
        Ok(())
    }

    fn default_weight(&self) -> f64 {
        self.config.default_weight
    }

    fn export_state(&self) -> YsrnResult<WeightState> {
        let state = self.read()?;
        Ok(WeightState {
            constraints: state.constraints.values().cloned().collect(),
        })
    }

    fn restore(&self, saved: WeightState) -> YsrnResult<()> {
        let mut constraints = BTreeMap::new();
        for constraint in saved.constraints {
            check_weight(&constraint.id, constraint.weight)?;
            check_unit("plasticity_rate", constraint.plasticity_rate)?;
            constraints.insert(constraint.id.clone(), constraint);
        }
        let mut state = self.write()?;
        debug!(restored = constraints.len(), "constraint state restored");
        state.constraints = constraints;
        state.generation += 1;
        Ok(())
    }
}

fn check_weight(id: &str, weight: f64) -> YsrnResult<()> {
    if (0.0..=1.0).contains(&weight) {
        Ok(())
    } else {
        Err(ValidationError::WeightOutOfRange {
            id: id.to_string(),
            weight,
        }
        .into())
    }
}

fn check_unit(name: &str, value: f64) -> YsrnResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidThreshold {
            name: name.to_string(),
            value,
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(policy: ActivationPolicy) -> ConstraintWeightStore {
        let config = ConstraintConfig {
            activation_policy: policy,
            initial: [("basic".to_string(), 0.8)].into_iter().collect(),
            ..ConstraintConfig::default()
        };
        ConstraintWeightStore::from_config(config).unwrap()
    }

    #[test]
    fn feedback_example_from_midpoint() {
        let store = ConstraintWeightStore::new();
        store.register("c1").unwrap();
        let w = store.apply_feedback("c1", 1.0).unwrap();
        assert!((w - 0.55).abs() < 1e-12);
    }

    #[test]
    fn reregistering_keeps_weight() {
        let store = ConstraintWeightStore::new();
        assert!(store.register_constraint("c", 0.9).unwrap());
        assert!(!store.register_constraint("c", 0.1).unwrap());
        assert_eq!(store.get_weight("c").unwrap(), 0.9);
    }

    #[test]
    fn unknown_read_registers_default() {
        let store = ConstraintWeightStore::new();
        assert_eq!(store.get_weight("ghost").unwrap(), 0.5);
        assert!(store.get_snapshot().unwrap().contains("ghost"));
    }

    #[test]
    fn unknown_feedback_starts_from_default() {
        let store = ConstraintWeightStore::new();
        let update = store.apply_feedback_detailed("new", -1.0).unwrap();
        assert_eq!(update.old_weight, 0.5);
        assert!((update.new_weight - 0.45).abs() < 1e-12);
        assert_eq!(update.update_count, 1);
    }

    #[test]
    fn feedback_records_its_source() {
        let store = store_with(ActivationPolicy::Preserve);
        store
            .apply_feedback_from("basic", 0.5, ConstraintSource::Sensor)
            .unwrap();
        assert_eq!(store.constraint("basic").unwrap().unwrap().source, ConstraintSource::Sensor);

        store.apply_feedback_detailed("basic", 0.5).unwrap();
        assert_eq!(store.constraint("basic").unwrap().unwrap().source, ConstraintSource::Manual);

        let err = store
            .apply_feedback_from("basic", 2.0, ConstraintSource::Human)
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.constraint("basic").unwrap().unwrap().source, ConstraintSource::Manual);
    }

    #[test]
    fn rejected_signal_leaves_store_unchanged() {
        let store = store_with(ActivationPolicy::Preserve);
        let before = store.get_snapshot().unwrap();
        for bad in [1.5, -1.01, f64::NAN, f64::INFINITY] {
            let err = store.apply_feedback("basic", bad).unwrap_err();
            assert!(err.is_validation());
        }
        assert_eq!(store.get_snapshot().unwrap(), before);
        assert!(!store.get_snapshot().unwrap().contains("other"));
    }

    #[test]
    fn out_of_range_registration_is_rejected() {
        let store = ConstraintWeightStore::new();
        assert!(store.register_constraint("c", 1.2).is_err());
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn overrides_set_per_constraint_rate() {
        let config = ConstraintConfig {
            plasticity_overrides: [("fast".to_string(), 0.5)].into_iter().collect(),
            ..ConstraintConfig::default()
        };
        let store = ConstraintWeightStore::from_config(config).unwrap();
        let fast = store.apply_feedback("fast", 1.0).unwrap();
        let slow = store.apply_feedback("slow", 1.0).unwrap();
        assert!((fast - 0.75).abs() < 1e-12);
        assert!((slow - 0.55).abs() < 1e-12);
    }

    #[test]
    fn invalid_override_rate_is_rejected() {
        for bad in [f64::NAN, 1.5, -0.1] {
            let config = ConstraintConfig {
                plasticity_overrides: [("c".to_string(), bad)].into_iter().collect(),
                ..ConstraintConfig::default()
            };
            let err = ConstraintWeightStore::from_config(config).unwrap_err();
            assert!(err.is_validation(), "override {bad} accepted");
        }
    }

    #[test]
    fn preserve_policy_keeps_learned_weight() {
        let store = store_with(ActivationPolicy::Preserve);
        store
            .activate(&["basic".to_string(), "moderate".to_string()])
            .unwrap();
        assert_eq!(store.get_weight("basic").unwrap(), 0.8);
        assert_eq!(store.get_weight("moderate").unwrap(), 0.5);
    }

    #[test]
    fn reset_policy_restores_default() {
        let store = store_with(ActivationPolicy::Reset);
        store.activate(&["basic".to_string()]).unwrap();
        assert_eq!(store.get_weight("basic").unwrap(), 0.5);
    }

    #[test]
    fn generation_moves_on_writes_only() {
        let store = ConstraintWeightStore::new();
        let g0 = store.generation().unwrap();
        store.get_snapshot().unwrap();
        assert_eq!(store.generation().unwrap(), g0);
        store.apply_feedback("a", 0.5).unwrap();
        assert!(store.generation().unwrap() > g0);
    }

    #[test]
    fn export_restore_round_trips_exactly() {
        let store = store_with(ActivationPolicy::Preserve);
        store.apply_feedback("basic", 0.3).unwrap();
        store.apply_feedback("x", -0.7).unwrap();
        let saved = store.export_state().unwrap();

        let other = ConstraintWeightStore::new();
        other.restore(saved.clone()).unwrap();
        assert_eq!(other.export_state().unwrap(), saved);
        assert_eq!(
            other.get_snapshot().unwrap().into_map(),
            store.get_snapshot().unwrap().into_map()
        );
    }

    #[test]
    fn restore_rejects_bad_weight_as_a_unit() {
        let store = store_with(ActivationPolicy::Preserve);
        let bad = WeightState {
            constraints: vec![Constraint::new("ok", 0.2, 0.1), {
                let mut c = Constraint::new("bad", 0.2, 0.1);
                c.weight = 2.0;
                c
            }],
        };
        assert!(store.restore(bad).is_err());
        assert_eq!(store.get_weight("basic").unwrap(), 0.8);
        assert!(store.constraint("ok").unwrap().is_none());
    }
}
