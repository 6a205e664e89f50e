//! ContextIngestor: turn text into a stored, embeddable context.

use serde_json::{Map, Value};
use tracing::debug;

use ysrn_core::constants::CONTENT_METADATA_KEY;
use ysrn_core::errors::YsrnResult;
use ysrn_core::models::ContextCandidate;
use ysrn_core::traits::{IContextPersistence, IEncoder};

pub struct ContextIngestor<'a> {
    encoder: &'a dyn IEncoder,
    persistence: &'a dyn IContextPersistence,
}

impl<'a> ContextIngestor<'a> {
    pub fn new(encoder: &'a dyn IEncoder, persistence: &'a dyn IContextPersistence) -> Self {
        Self {
            encoder,
            persistence,
        }
    }

    /// Store `content` under a fresh uuid and return the saved candidate.
    pub fn ingest(&self, content: &str, metadata: Map<String, Value>) -> YsrnResult<ContextCandidate> {
        let id = uuid::Uuid::new_v4().to_string();
        self.ingest_with_id(&id, content, metadata)
    }

    /// Store `content` under `id`, replacing any context with the same id.
    ///
    /// The text is kept in metadata under `"content"`, overriding a caller
    /// supplied value for that key.
    pub fn ingest_with_id(
        &self,
        id: &str,
        content: &str,
        mut metadata: Map<String, Value>,
    ) -> YsrnResult<ContextCandidate> {
        let embedding = self.encoder.encode(content)?;
        metadata.insert(CONTENT_METADATA_KEY.to_string(), Value::String(content.to_string()));
        let context = ContextCandidate {
            id: id.to_string(),
            embedding,
            metadata,
            prior_score: None,
        };
        self.persistence.save_context(&context)?;
        debug!(context_id = %id, dims = context.dimensions(), "context ingested");
        Ok(context)
    }
}
