pub mod constraint;
pub mod context;
pub mod curriculum;
pub mod decomposition;
pub mod embedding;
pub mod retrieval;
pub mod snapshot;

pub use constraint::{Constraint, ConstraintSource, WeightState, WeightUpdate};
pub use context::ContextCandidate;
pub use curriculum::{CurriculumStage, LearningProgress};
pub use decomposition::{DecompositionResult, RsnLabel};
pub use retrieval::RetrievalResult;
pub use snapshot::ConstraintSnapshot;
