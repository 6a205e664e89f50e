//! InMemoryContextStore: DashMap-backed context persistence with brute-force
//! cosine lookup.

use std::cmp::Ordering;

use dashmap::DashMap;
use tracing::debug;

use ysrn_core::errors::YsrnResult;
use ysrn_core::models::embedding::validated_norm;
use ysrn_core::models::ContextCandidate;
use ysrn_core::traits::IContextPersistence;
use ysrn_decomposition::similarity::cosine_with_norms;

#[derive(Debug, Default)]
pub struct InMemoryContextStore {
    contexts: DashMap<String, ContextCandidate>,
}

impl InMemoryContextStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remove(&self, id: &str) -> bool {
        self.contexts.remove(id).is_some()
    }
}

impl IContextPersistence for InMemoryContextStore {
    fn save_context(&self, context: &ContextCandidate) -> YsrnResult<()> {
        validated_norm(&context.id, &context.embedding)?;
        self.contexts.insert(context.id.clone(), context.clone());
        Ok(())
    }

    fn load_context(&self, id: &str) -> YsrnResult<Option<ContextCandidate>> {
        Ok(self.contexts.get(id).map(|entry| entry.value().clone()))
    }

    /// Most similar first, ties by id. Contexts of a different
    /// dimensionality than `query` are not candidates. Each returned
    /// candidate carries its raw cosine as `prior_score`.
    fn find_candidates(&self, query: &[f32], limit: usize) -> YsrnResult<Vec<ContextCandidate>> {
        let query_norm = validated_norm("query", query)?;
        if limit == 0 {
            return Ok(Vec::new());
        }

        let mut scored: Vec<(f64, ContextCandidate)> = Vec::new();
        let mut skipped = 0usize;
        for entry in self.contexts.iter() {
            let context = entry.value();
            if context.embedding.len() != query.len() {
                skipped += 1;
                continue;
            }
            let Ok(norm) = validated_norm(&context.id, &context.embedding) else {
                skipped += 1;
                continue;
            };
            let sim = cosine_with_norms(query, &context.embedding, query_norm, norm);
            scored.push((sim, context.clone()));
        }

        scored.sort_by(|(sa, a), (sb, b)| {
            sb.partial_cmp(sa)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });
        scored.truncate(limit);
        debug!(
            stored = self.contexts.len(),
            skipped,
            returned = scored.len(),
            "candidate lookup"
        );
        Ok(scored
            .into_iter()
            .map(|(sim, context)| context.with_prior_score(sim))
            .collect())
    }

    fn count(&self) -> YsrnResult<usize> {
        Ok(self.contexts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_first_with_prior_scores() {
        let store = InMemoryContextStore::new();
        store.save_context(&ContextCandidate::new("far", vec![0.0, 1.0])).unwrap();
        store.save_context(&ContextCandidate::new("near", vec![1.0, 0.1])).unwrap();
        store.save_context(&ContextCandidate::new("wide", vec![1.0, 0.0, 0.0])).unwrap();

        let out = store.find_candidates(&[1.0, 0.0], 10).unwrap();
        let ids: Vec<_> = out.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["near", "far"]);
        assert!(out[0].prior_score.unwrap() > 0.99);
        assert!(out[1].prior_score.unwrap().abs() < 1e-9);
    }

    #[test]
    fn ties_break_by_id_and_limit_applies() {
        let store = InMemoryContextStore::new();
        for id in ["c", "a", "b"] {
            store.save_context(&ContextCandidate::new(id, vec![1.0, 1.0])).unwrap();
        }
        let out = store.find_candidates(&[1.0, 1.0], 2).unwrap();
        let ids: Vec<_> = out.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn zero_vectors_cannot_be_saved() {
        let store = InMemoryContextStore::new();
        assert!(store.save_context(&ContextCandidate::new("z", vec![0.0, 0.0])).is_err());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn save_replaces_and_load_round_trips() {
        let store = InMemoryContextStore::new();
        store.save_context(&ContextCandidate::new("x", vec![1.0])).unwrap();
        store.save_context(&ContextCandidate::new("x", vec![2.0])).unwrap();
        assert_eq!(store.count().unwrap(), 1);
        assert_eq!(store.load_context("x").unwrap().unwrap().embedding, vec![2.0]);
        assert!(store.load_context("y").unwrap().is_none());
        assert!(store.remove("x"));
    }
}
