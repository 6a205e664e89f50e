use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::CurriculumStage;

/// Curriculum progression configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CurriculumConfig {
    /// Mean accuracy over the window required to advance.
    pub advance_accuracy: f64,
    /// Mean solve time (seconds) over the window allowed to advance.
    pub advance_solve_time: f64,
    /// Number of most recent results considered.
    pub window: usize,
    /// Ordered stages. Stage numbers start at 1.
    pub stages: Vec<CurriculumStage>,
}

impl Default for CurriculumConfig {
    fn default() -> Self {
        Self {
            advance_accuracy: defaults::DEFAULT_ADVANCE_ACCURACY,
            advance_solve_time: defaults::DEFAULT_ADVANCE_SOLVE_TIME,
            window: defaults::DEFAULT_PROGRESS_WINDOW,
            stages: default_stages(),
        }
    }
}

/// Basic → Intermediate → Advanced, each stage adding one constraint.
pub fn default_stages() -> Vec<CurriculumStage> {
    vec![
        CurriculumStage::new(1, "Basic", "Basic constraints only", &["basic"], 0.2),
        CurriculumStage::new(
            2,
            "Intermediate",
            "Add moderate constraints",
            &["basic", "moderate"],
            0.5,
        ),
        CurriculumStage::new(
            3,
            "Advanced",
            "All constraints active",
            &["basic", "moderate", "advanced"],
            0.8,
        ),
    ]
}
