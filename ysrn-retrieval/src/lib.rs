//! # ysrn-retrieval
//!
//! Gated retrieval: every candidate is decomposed against the query, scored
//! `g = R - 0.5 * N`, filtered by minimum relevance, ranked with a stable
//! tie-break, and thinned so no two results are near-duplicates.
//!
//! [`QueryPipeline`] wraps the retriever with the encoder, persistence, and
//! event bus ports for callers that start from query text.

pub mod engine;
pub mod gating;
pub mod ingest;
pub mod pipeline;
pub mod ranking;
pub mod request;

pub use engine::GatedRetriever;
pub use ingest::ContextIngestor;
pub use pipeline::{DecompositionStats, QueryOutcome, QueryPipeline};
pub use request::RetrievalRequest;
