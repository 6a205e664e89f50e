pub mod constraint_config;
pub mod curriculum_config;
pub mod defaults;
pub mod observability_config;
pub mod retrieval_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use constraint_config::{ActivationPolicy, ConstraintConfig};
pub use curriculum_config::CurriculumConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;

use crate::errors::{YsrnError, YsrnResult};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct YsrnConfig {
    pub constraints: ConstraintConfig,
    pub retrieval: RetrievalConfig,
    pub curriculum: CurriculumConfig,
    pub observability: ObservabilityConfig,
}

impl YsrnConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml(input: &str) -> YsrnResult<Self> {
        let config: Self =
            toml::from_str(input).map_err(|e| YsrnError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> YsrnResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Check every numeric setting against its allowed range.
    pub fn validate(&self) -> YsrnResult<()> {
        let c = &self.constraints;
        unit_interval("constraints.default_weight", c.default_weight)?;
        unit_interval("constraints.plasticity_rate", c.plasticity_rate)?;
        for (id, rate) in &c.plasticity_overrides {
            unit_interval(&format!("constraints.plasticity_overrides.{id}"), *rate)?;
        }
        for (id, weight) in &c.initial {
            unit_interval(&format!("constraints.initial.{id}"), *weight)?;
        }

        let r = &self.retrieval;
        if r.default_k == 0 {
            return Err(YsrnError::ConfigError(
                "retrieval.default_k must be positive".into(),
            ));
        }
        unit_interval("retrieval.min_relevance", r.min_relevance)?;
        if !r.diversity_threshold.is_finite() {
            return Err(YsrnError::ConfigError(
                "retrieval.diversity_threshold must be finite".into(),
            ));
        }

        let cu = &self.curriculum;
        unit_interval("curriculum.advance_accuracy", cu.advance_accuracy)?;
        if !cu.advance_solve_time.is_finite() || cu.advance_solve_time < 0.0 {
            return Err(YsrnError::ConfigError(format!(
                "curriculum.advance_solve_time must be a non-negative number, got {}",
                cu.advance_solve_time
            )));
        }
        if cu.window == 0 {
            return Err(YsrnError::ConfigError(
                "curriculum.window must be positive".into(),
            ));
        }
        if cu.stages.is_empty() {
            return Err(YsrnError::ConfigError(
                "curriculum.stages must not be empty".into(),
            ));
        }
        for (i, stage) in cu.stages.iter().enumerate() {
            if stage.number != (i + 1) as u32 {
                return Err(YsrnError::ConfigError(format!(
                    "curriculum stage at position {} has number {}, expected {}",
                    i,
                    stage.number,
                    i + 1
                )));
            }
        }
        Ok(())
    }
}

fn unit_interval(name: &str, value: f64) -> YsrnResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(YsrnError::ConfigError(format!(
            "{name} must be within [0, 1], got {value}"
        )))
    }
}
