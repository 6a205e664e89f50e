//! QueryPipeline: query text in, ranked contexts and events out.
//!
//! encode → find candidates → snapshot constraints → gated retrieve → publish.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use ysrn_core::config::RetrievalConfig;
use ysrn_core::errors::YsrnResult;
use ysrn_core::events::{DomainEvent, EventPayload};
use ysrn_core::models::RetrievalResult;
use ysrn_core::traits::{IConstraintStore, IContextPersistence, IEncoder, IEventBus};
use ysrn_observability::events;

use crate::engine::GatedRetriever;
use crate::request::RetrievalRequest;

/// Mean channel shares over the returned results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DecompositionStats {
    pub avg_relevance: f64,
    pub avg_noise: f64,
}

impl DecompositionStats {
    /// Zero for an empty result set.
    pub fn from_results(results: &[RetrievalResult]) -> Self {
        if results.is_empty() {
            return Self::default();
        }
        let n = results.len() as f64;
        Self {
            avg_relevance: results.iter().map(|r| r.decomposition.relevant).sum::<f64>() / n,
            avg_noise: results.iter().map(|r| r.decomposition.noise).sum::<f64>() / n,
        }
    }
}

/// Everything a caller learns from one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryOutcome {
    pub query_id: String,
    pub results: Vec<RetrievalResult>,
    /// Candidates returned by persistence before gating.
    pub total_candidates: usize,
    pub stats: DecompositionStats,
    /// Store generation of the snapshot used for the whole pass.
    pub generation: u64,
}

pub struct QueryPipeline<'a> {
    encoder: &'a dyn IEncoder,
    persistence: &'a dyn IContextPersistence,
    store: &'a dyn IConstraintStore,
    event_bus: Option<&'a dyn IEventBus>,
    retriever: GatedRetriever,
    config: RetrievalConfig,
}

impl<'a> QueryPipeline<'a> {
    pub fn new(
        encoder: &'a dyn IEncoder,
        persistence: &'a dyn IContextPersistence,
        store: &'a dyn IConstraintStore,
        config: RetrievalConfig,
    ) -> Self {
        Self {
            encoder,
            persistence,
            store,
            event_bus: None,
            retriever: GatedRetriever::new(),
            config,
        }
    }

    /// Publish `ContextRetrieved` and `ContextRanked` after each query.
    pub fn with_event_bus(mut self, bus: &'a dyn IEventBus) -> Self {
        self.event_bus = Some(bus);
        self
    }

    /// Run a query with the configured request parameters.
    ///
    /// `active` restricts scoring to those constraint ids; unknown ids are
    /// scored at the store's default weight and registered only if the query
    /// succeeds. `None` uses every constraint.
    pub fn query(&self, text: &str, active: Option<&[String]>) -> YsrnResult<QueryOutcome> {
        let request = RetrievalRequest::from_config(&self.config);
        self.query_with_request(text, active, &request)
    }

    pub fn query_with_request(
        &self,
        text: &str,
        active: Option<&[String]>,
        request: &RetrievalRequest,
    ) -> YsrnResult<QueryOutcome> {
        request.validate()?;
        let query_id = uuid::Uuid::new_v4().to_string();
        let span = ysrn_observability::retrieval_span!(query_id, request.k);
        let _guard = span.enter();
        let started = Instant::now();

        let embedding = self.encoder.encode(text)?;
        let candidates = self
            .persistence
            .find_candidates(&embedding, self.config.candidate_pool_size)?;
        debug!(
            encoder = self.encoder.name(),
            candidates = candidates.len(),
            "candidates gathered"
        );

        let stored = self.store.get_snapshot()?;
        let (snapshot, unknown) = match active {
            Some(ids) => {
                let unknown: Vec<&String> = ids.iter().filter(|id| !stored.contains(id)).collect();
                (stored.restrict_or(ids, self.store.default_weight()), unknown)
            }
            None => (stored, Vec::new()),
        };
        let results = self
            .retriever
            .retrieve(&embedding, &candidates, &snapshot, request)?;
        // Only a successful pass registers the active ids the store lacked.
        for id in unknown {
            self.store.get_weight(id)?;
        }

        self.publish(&query_id, &results);
        events::query_completed(
            &query_id,
            candidates.len(),
            results.len(),
            started.elapsed().as_secs_f64() * 1000.0,
        );

        Ok(QueryOutcome {
            stats: DecompositionStats::from_results(&results),
            query_id,
            total_candidates: candidates.len(),
            generation: snapshot.generation(),
            results,
        })
    }

    fn publish(&self, query_id: &str, results: &[RetrievalResult]) {
        let Some(bus) = self.event_bus else {
            return;
        };
        let ids: Vec<String> = results.iter().map(|r| r.context_id.clone()).collect();
        let retrieved = DomainEvent::new(EventPayload::ContextRetrieved {
            query_id: query_id.to_string(),
            context_ids: ids.clone(),
        });
        let ranked = DomainEvent::new(EventPayload::ContextRanked {
            query_id: query_id.to_string(),
            ranked_context_ids: ids,
            scores: results.iter().map(|r| r.gated_score).collect(),
        });
        for event in [retrieved, ranked] {
            if let Err(e) = bus.publish(&event) {
                events::side_effect_failed(event.kind().as_str(), &e);
            }
        }
    }
}
