//! Deterministic local embedding provider.

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::traits::Embedder;

/// Feature-hashed bag-of-words embedder.
///
/// Each lowercased alphanumeric token is hashed into one of `dim`
/// buckets with a hash-derived sign; the accumulated vector is L2
/// normalized. Identical texts always embed identically (cosine 1.0),
/// and texts sharing words land near each other, which is enough
/// signal for corpus lookup without a model server. Texts with no
/// tokens embed to the zero vector.
pub struct HashedEmbedder {
    dim: usize,
}

impl HashedEmbedder {
    /// Create an embedder with the given dimensionality.
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }

    /// Embedding dimensionality.
    pub fn dim(&self) -> usize {
        self.dim
    }

    fn embed_sync(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dim];

        let lowered = text.to_lowercase();
        for token in lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|s| !s.is_empty())
        {
            let mut hasher = Sha256::new();
            hasher.update(token.as_bytes());
            let hash = hasher.finalize();

            let bucket = u64::from_le_bytes(hash[..8].try_into().expect("8 hash bytes"))
                as usize
                % self.dim;
            let sign = if hash[8] & 1 == 0 { 1.0 } else { -1.0 };
            vector[bucket] += sign;
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in &mut vector {
                *x /= norm;
            }
        }

        vector
    }
}

impl Default for HashedEmbedder {
    fn default() -> Self {
        Self::new(256)
    }
}

#[async_trait]
impl Embedder for HashedEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self.embed_sync(text))
    }
}
