//! # ysrn-decomposition
//!
//! Splits the relevance of a context to a query into three shares
//! (Relevant, Supplementary, Noise) that always sum to 1, modulated by
//! the weights of the active constraints.

pub mod engine;
pub mod formula;
pub mod similarity;

pub use engine::DecompositionEngine;
pub use formula::DecompositionBreakdown;
pub use similarity::cosine_similarity;
