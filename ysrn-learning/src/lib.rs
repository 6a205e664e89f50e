//! # ysrn-learning
//!
//! The two writers of constraint state: a feedback processor that turns
//! human or sensor signals into weight updates, and a curriculum tracker
//! that widens the active constraint set as the learner improves.

pub mod curriculum;
pub mod feedback;

pub use curriculum::{CurriculumTracker, Progression};
pub use feedback::{ConstraintFeedback, FeedbackBatch, FeedbackProcessor, RejectedFeedback};
