//! # ysrn-adapters
//!
//! Reference implementations of the ports in `ysrn_core::traits`.
//! Good enough for tests, demos, and single-process deployments.

pub mod encoder;
pub mod event_bus;
pub mod memory_store;
pub mod weight_file;

pub use encoder::HashingEncoder;
pub use event_bus::InMemoryEventBus;
pub use memory_store::InMemoryContextStore;
pub use weight_file::JsonWeightFile;
