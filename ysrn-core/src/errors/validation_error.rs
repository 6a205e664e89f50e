/// Caller-input validation failures. Never retried internally.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("dimension mismatch for {role}: expected {expected}, got {actual}")]
    DimensionMismatch {
        role: String,
        expected: usize,
        actual: usize,
    },

    #[error("empty vector: {role}")]
    EmptyVector { role: String },

    #[error("zero-norm vector: {role}")]
    ZeroVector { role: String },

    #[error("non-finite component in {role}")]
    NonFiniteValue { role: String },

    #[error("k must be a positive integer")]
    NonPositiveK,

    #[error("feedback signal {signal} is outside [-1, 1]")]
    SignalOutOfRange { signal: f64 },

    #[error("weight {weight} for constraint {id} is outside [0, 1]")]
    WeightOutOfRange { id: String, weight: f64 },

    #[error("invalid {name}: {value}")]
    InvalidThreshold { name: String, value: f64 },

    #[error("invalid progress report: {reason}")]
    InvalidProgress { reason: String },
}
