//! # ysrn-constraints
//!
//! The only mutable shared state of the engine: one weight in [0, 1] per
//! named constraint, moved by feedback through [`plasticity::adapt`].
//!
//! [`ConstraintWeightStore`] implements [`IConstraintStore`](ysrn_core::traits::IConstraintStore),
//! so decomposition and retrieval only ever see snapshots.

pub mod plasticity;
pub mod store;

pub use plasticity::adapt;
pub use store::ConstraintWeightStore;
