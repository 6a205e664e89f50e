use crate::errors::YsrnResult;

/// Text → embedding. Called by the orchestrating layer, never by the engine itself.
pub trait IEncoder: Send + Sync {
    /// Embed a single text.
    fn encode(&self, text: &str) -> YsrnResult<Vec<f32>>;

    /// Embed a batch of texts, preserving order.
    fn encode_batch(&self, texts: &[String]) -> YsrnResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.encode(t)).collect()
    }

    /// The dimensionality of embeddings produced by this encoder.
    fn dimensions(&self) -> usize;

    /// Human-readable encoder name.
    fn name(&self) -> &str;
}
