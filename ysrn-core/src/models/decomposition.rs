use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::SUM_TOLERANCE;

/// Categorical outcome of a decomposition: the channel holding the most mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsnLabel {
    Relevant,
    Supplementary,
    Noise,
}

impl RsnLabel {
    /// Argmax of the three channels. Ties resolve Relevant > Supplementary > Noise.
    pub fn from_scores(relevant: f64, supplementary: f64, noise: f64) -> Self {
        if relevant >= supplementary && relevant >= noise {
            Self::Relevant
        } else if supplementary >= noise {
            Self::Supplementary
        } else {
            Self::Noise
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Relevant => "relevant",
            Self::Supplementary => "supplementary",
            Self::Noise => "noise",
        }
    }
}

impl fmt::Display for RsnLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-way split of one (query, context) relevance judgment.
///
/// Each share is in [0, 1] and the shares sum to 1 within [`SUM_TOLERANCE`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecompositionResult {
    pub relevant: f64,
    pub supplementary: f64,
    pub noise: f64,
    pub label: RsnLabel,
}

impl DecompositionResult {
    /// Build a result and derive its label.
    pub fn from_scores(relevant: f64, supplementary: f64, noise: f64) -> Self {
        Self {
            relevant,
            supplementary,
            noise,
            label: RsnLabel::from_scores(relevant, supplementary, noise),
        }
    }

    pub fn total(&self) -> f64 {
        self.relevant + self.supplementary + self.noise
    }

    /// Whether the shares are in range and sum to 1.
    pub fn is_normalized(&self) -> bool {
        let in_range = |x: f64| (0.0..=1.0).contains(&x);
        in_range(self.relevant)
            && in_range(self.supplementary)
            && in_range(self.noise)
            && (self.total() - 1.0).abs() <= SUM_TOLERANCE
    }

    /// R / (S + N). Infinite when the context is entirely Relevant.
    pub fn signal_quality(&self) -> f64 {
        let rest = self.supplementary + self.noise;
        if rest <= 0.0 {
            f64::INFINITY
        } else {
            self.relevant / rest
        }
    }
}
