// Single source of truth for all default values.

// --- Constraints ---
pub const DEFAULT_CONSTRAINT_WEIGHT: f64 = 0.5;
pub const DEFAULT_PLASTICITY_RATE: f64 = 0.1;

// --- Retrieval ---
pub const DEFAULT_TOP_K: usize = 10;
pub const DEFAULT_MIN_RELEVANCE: f64 = 0.0;
pub const DEFAULT_DIVERSITY_THRESHOLD: f64 = 0.95;
pub const DEFAULT_CANDIDATE_POOL_SIZE: usize = 50;

// --- Curriculum ---
pub const DEFAULT_ADVANCE_ACCURACY: f64 = 0.9;
pub const DEFAULT_ADVANCE_SOLVE_TIME: f64 = 5.0;
pub const DEFAULT_PROGRESS_WINDOW: usize = 10;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
