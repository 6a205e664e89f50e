use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A candidate knowledge fragment offered for ranking.
///
/// `metadata` is carried through untouched; the engine never inspects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextCandidate {
    pub id: String,
    pub embedding: Vec<f32>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Similarity reported by the lookup that produced this candidate, if any.
    #[serde(default)]
    pub prior_score: Option<f64>,
}

impl ContextCandidate {
    pub fn new(id: impl Into<String>, embedding: Vec<f32>) -> Self {
        Self {
            id: id.into(),
            embedding,
            metadata: Map::new(),
            prior_score: None,
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    pub fn with_prior_score(mut self, score: f64) -> Self {
        self.prior_score = Some(score);
        self
    }

    pub fn dimensions(&self) -> usize {
        self.embedding.len()
    }
}
