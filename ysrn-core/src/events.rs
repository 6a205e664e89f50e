//! Domain events published through the event bus port.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ConstraintSource;

/// Event type used for subscription routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    ContextRetrieved,
    ContextRanked,
    ConstraintUpdated,
    StageAdvanced,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ContextRetrieved => "context_retrieved",
            Self::ContextRanked => "context_ranked",
            Self::ConstraintUpdated => "constraint_updated",
            Self::StageAdvanced => "stage_advanced",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventPayload {
    /// A query pass returned these contexts.
    ContextRetrieved {
        query_id: String,
        context_ids: Vec<String>,
    },
    /// Final ordering and gated scores of a query pass.
    ContextRanked {
        query_id: String,
        ranked_context_ids: Vec<String>,
        scores: Vec<f64>,
    },
    ConstraintUpdated {
        constraint_id: String,
        old_weight: f64,
        new_weight: f64,
        source: ConstraintSource,
    },
    StageAdvanced {
        old_stage: u32,
        new_stage: u32,
        trigger: String,
    },
}

impl EventPayload {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::ContextRetrieved { .. } => EventKind::ContextRetrieved,
            Self::ContextRanked { .. } => EventKind::ContextRanked,
            Self::ConstraintUpdated { .. } => EventKind::ConstraintUpdated,
            Self::StageAdvanced { .. } => EventKind::StageAdvanced,
        }
    }
}

/// An event with identity and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainEvent {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub payload: EventPayload,
}

impl DomainEvent {
    pub fn new(payload: EventPayload) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            payload,
        }
    }

    pub fn kind(&self) -> EventKind {
        self.payload.kind()
    }
}
