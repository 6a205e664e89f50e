//! Span definitions per operation: retrieval, decomposition, feedback, curriculum.

/// Create a retrieval span.
#[macro_export]
macro_rules! retrieval_span {
    ($query_id:expr, $k:expr) => {
        tracing::info_span!("ysrn.retrieval", query_id = %$query_id, k = $k)
    };
}

/// Create a decomposition span.
#[macro_export]
macro_rules! decomposition_span {
    ($contexts:expr) => {
        tracing::debug_span!("ysrn.decomposition", contexts = $contexts)
    };
}

/// Create a feedback span.
#[macro_export]
macro_rules! feedback_span {
    ($constraint_id:expr) => {
        tracing::info_span!("ysrn.feedback", constraint_id = %$constraint_id)
    };
}

/// Create a curriculum span.
#[macro_export]
macro_rules! curriculum_span {
    ($stage:expr) => {
        tracing::info_span!("ysrn.curriculum", stage = $stage)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RETRIEVAL: &str = "ysrn.retrieval";
    pub const DECOMPOSITION: &str = "ysrn.decomposition";
    pub const FEEDBACK: &str = "ysrn.feedback";
    pub const CURRICULUM: &str = "ysrn.curriculum";
}
