use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stage of the curriculum and the constraints it activates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurriculumStage {
    /// 1-based stage number.
    pub number: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub active_constraints: Vec<String>,
    #[serde(default)]
    pub difficulty: f64,
}

impl CurriculumStage {
    pub fn new(
        number: u32,
        name: &str,
        description: &str,
        active_constraints: &[&str],
        difficulty: f64,
    ) -> Self {
        Self {
            number,
            name: name.to_string(),
            description: description.to_string(),
            active_constraints: active_constraints.iter().map(|s| s.to_string()).collect(),
            difficulty,
        }
    }
}

/// Running record of learner outcomes at the current stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningProgress {
    pub current_stage: u32,
    pub accuracy_history: Vec<f64>,
    pub solve_time_history: Vec<f64>,
    pub last_updated: DateTime<Utc>,
}

impl LearningProgress {
    pub fn new(current_stage: u32) -> Self {
        Self {
            current_stage,
            accuracy_history: Vec::new(),
            solve_time_history: Vec::new(),
            last_updated: Utc::now(),
        }
    }

    pub fn add_result(&mut self, accuracy: f64, solve_time: f64) {
        self.accuracy_history.push(accuracy);
        self.solve_time_history.push(solve_time);
        self.last_updated = Utc::now();
    }

    /// True once `window` results exist and the means over the last `window`
    /// meet both thresholds.
    pub fn should_advance(&self, min_accuracy: f64, max_solve_time: f64, window: usize) -> bool {
        if window == 0 || self.accuracy_history.len() < window {
            return false;
        }
        let recent_accuracy = tail_mean(&self.accuracy_history, window);
        let recent_time = tail_mean(&self.solve_time_history, window);
        recent_accuracy >= min_accuracy && recent_time <= max_solve_time
    }
}

fn tail_mean(values: &[f64], window: usize) -> f64 {
    let tail = &values[values.len().saturating_sub(window)..];
    if tail.is_empty() {
        return 0.0;
    }
    tail.iter().sum::<f64>() / tail.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_a_full_window() {
        let mut p = LearningProgress::new(1);
        for _ in 0..9 {
            p.add_result(1.0, 1.0);
        }
        assert!(!p.should_advance(0.9, 5.0, 10));
        p.add_result(1.0, 1.0);
        assert!(p.should_advance(0.9, 5.0, 10));
    }

    #[test]
    fn only_the_recent_window_counts() {
        let mut p = LearningProgress::new(1);
        for _ in 0..10 {
            p.add_result(0.0, 60.0);
        }
        for _ in 0..10 {
            p.add_result(0.95, 2.0);
        }
        assert!(p.should_advance(0.9, 5.0, 10));
    }

    #[test]
    fn slow_solves_block_advancement() {
        let mut p = LearningProgress::new(1);
        for _ in 0..10 {
            p.add_result(1.0, 6.0);
        }
        assert!(!p.should_advance(0.9, 5.0, 10));
    }
}
