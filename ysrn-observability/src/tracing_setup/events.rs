//! Structured log events for key system operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a completed query pass.
pub fn query_completed(query_id: &str, candidates: usize, returned: usize, elapsed_ms: f64) {
    tracing::info!(
        event = "query_completed",
        query_id = %query_id,
        candidates = candidates,
        returned = returned,
        elapsed_ms = elapsed_ms,
        "query completed"
    );
}

/// Log a constraint weight change.
pub fn constraint_updated(constraint_id: &str, old_weight: f64, new_weight: f64, signal: f64) {
    tracing::info!(
        event = "constraint_updated",
        constraint_id = %constraint_id,
        old_weight = old_weight,
        new_weight = new_weight,
        signal = signal,
        "constraint weight updated"
    );
}

/// Log an unknown constraint being registered at the default weight on read.
pub fn constraint_fallback(constraint_id: &str, default_weight: f64) {
    tracing::warn!(
        event = "constraint_fallback",
        constraint_id = %constraint_id,
        default_weight = default_weight,
        "unknown constraint registered at default weight"
    );
}

/// Log a curriculum stage change.
pub fn stage_advanced(old_stage: u32, new_stage: u32) {
    tracing::info!(
        event = "stage_advanced",
        old_stage = old_stage,
        new_stage = new_stage,
        "curriculum stage advanced"
    );
}

/// Log a failure that was swallowed because the caller does not depend on it.
pub fn side_effect_failed(operation: &str, error: &dyn std::fmt::Display) {
    tracing::warn!(
        event = "side_effect_failed",
        operation = %operation,
        error = %error,
        "non-critical operation failed"
    );
}

/// Log a subscriber that panicked while handling an event.
pub fn handler_panicked(event: &dyn std::fmt::Display, subscription: &dyn std::fmt::Display) {
    tracing::warn!(
        event = "handler_panicked",
        kind = %event,
        subscription = %subscription,
        "event handler panicked"
    );
}
