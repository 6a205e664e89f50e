//! # ysrn-core
//!
//! Foundation crate for the YSRN relevance engine.
//! Defines the shared types, ports, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::YsrnConfig;
pub use errors::{ValidationError, YsrnError, YsrnResult};
pub use events::{DomainEvent, EventKind, EventPayload};
pub use models::{
    Constraint, ConstraintSnapshot, ContextCandidate, DecompositionResult, RetrievalResult,
    RsnLabel, WeightUpdate,
};
