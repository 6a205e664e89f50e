//! HashingEncoder: bag-of-words feature hashing with blake3.
//!
//! Each lowercase alphanumeric token adds ±1 to one bucket; the result is
//! L2-normalized. Deterministic across runs and platforms. Text whose tokens
//! cancel to the zero vector has no direction and is rejected like empty text.

use ysrn_core::errors::{YsrnError, YsrnResult};
use ysrn_core::traits::IEncoder;

pub const DEFAULT_DIMENSIONS: usize = 256;

#[derive(Debug, Clone)]
pub struct HashingEncoder {
    dimensions: usize,
}

impl HashingEncoder {
    pub fn new(dimensions: usize) -> YsrnResult<Self> {
        if dimensions == 0 {
            return Err(YsrnError::ConfigError(
                "hashing encoder needs at least one dimension".into(),
            ));
        }
        Ok(Self { dimensions })
    }

    fn bucket(&self, token: &str) -> (usize, f32) {
        let hash = blake3::hash(token.as_bytes());
        let bytes = hash.as_bytes();
        let mut index = [0u8; 8];
        index.copy_from_slice(&bytes[..8]);
        let index = u64::from_le_bytes(index) % self.dimensions as u64;
        let sign = if bytes[8] & 1 == 0 { 1.0 } else { -1.0 };
        (index as usize, sign)
    }
}

impl Default for HashingEncoder {
    fn default() -> Self {
        Self {
            dimensions: DEFAULT_DIMENSIONS,
        }
    }
}

impl IEncoder for HashingEncoder {
    fn encode(&self, text: &str) -> YsrnResult<Vec<f32>> {
        let mut vector = vec![0.0f32; self.dimensions];
        let mut tokens = 0usize;
        for token in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            let (index, sign) = self.bucket(&token.to_lowercase());
            vector[index] += sign;
            tokens += 1;
        }
        if tokens == 0 {
            return Err(YsrnError::port("encoder", "text has no tokens"));
        }

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm == 0.0 {
            return Err(YsrnError::port(
                "encoder",
                format!("all {tokens} tokens cancelled out"),
            ));
        }
        for x in &mut vector {
            *x /= norm;
        }
        Ok(vector)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "blake3-hashing"
    }
}
