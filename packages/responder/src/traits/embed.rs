//! Embedding provider boundary.

use async_trait::async_trait;

use crate::error::Result;

/// Converts text into a fixed-dimension vector.
///
/// All vectors from one provider share a single dimensionality. The
/// boundary is async because a provider may be backed by a model
/// server; the reference implementations are purely local.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Generate an embedding for text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embeddings for multiple texts.
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        // Default implementation calls embed sequentially
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.embed(text).await?);
        }
        Ok(results)
    }
}
