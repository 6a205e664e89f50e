//! # ysrn-observability
//!
//! Tracing subscriber setup, span macros per operation, and structured
//! log events shared by the other crates.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_with_filter, spans};
