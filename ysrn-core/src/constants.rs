/// YSRN system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tolerance for R + S + N = 1.
pub const SUM_TOLERANCE: f64 = 1e-6;

/// Constraint-adjustment value used when no constraints are active.
pub const NEUTRAL_ADJUSTMENT: f64 = 0.5;

/// Penalty applied to the Noise channel in the gated score `g = R - p * N`.
pub const NOISE_PENALTY: f64 = 0.5;

/// Norms at or below this are treated as zero vectors.
pub const ZERO_NORM_EPSILON: f64 = 1e-12;

/// Metadata key under which ingested context text is stored.
pub const CONTENT_METADATA_KEY: &str = "content";
